//! Mode dispatch
//!
//!     The dispatcher is the per-line entry point the host editor calls. Each call
//!     first refreshes the addressing state through the resolver, then decides which
//!     grammar owns the line, then delegates character tokenization to that grammar.
//!
//!     The decision is a three-state machine keyed on semantic classification of the
//!     freshly computed address. From the host grammar, a line whose address names a
//!     shader block (or whose value classifies as a function literal through the
//!     document model) switches to the matching embedded grammar, provided the line
//!     is not a bare block-string marker and its value starts strictly after the key.
//!     On the switching line itself the host grammar still owns the key and
//!     separator; the embedded grammar takes over from the value onward, and owns
//!     whole lines from there. The embedded state ends the moment the address stops
//!     classifying, and that line is already tokenized by the host grammar again.
//!
//!     Every decision is a pure function of the line text and the incoming state, so
//!     re-tokenizing an unmodified line from a cloned state reproduces identical
//!     output. The host editor relies on that for incremental re-highlighting.

use serde::{Deserialize, Serialize};

use super::classify;
use super::document::ContentLookup;
use super::grammars::{host, script, shader, HostToken, ScriptToken, ShaderToken};
use super::resolver::{self, LineProfile};
use super::state::{EmbeddedState, GrammarMode, ParserState};

/// A token from whichever grammar owned its span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token {
    Host(HostToken),
    Shader(ShaderToken),
    Script(ScriptToken),
}

/// Tokenizer settings. The indent unit is the number of columns that make one
/// indentation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub indent_unit: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig { indent_unit: 4 }
    }
}

/// The per-document tokenizer: configuration plus the document-model collaborator
/// used for script classification.
pub struct Tokenizer<'m, L: ContentLookup + ?Sized> {
    lookup: &'m L,
    config: TokenizerConfig,
}

impl<'m, L: ContentLookup + ?Sized> Tokenizer<'m, L> {
    pub fn new(lookup: &'m L) -> Self {
        Tokenizer {
            lookup,
            config: TokenizerConfig::default(),
        }
    }

    pub fn with_config(lookup: &'m L, config: TokenizerConfig) -> Self {
        Tokenizer { lookup, config }
    }

    /// Fresh state for the start of a document.
    pub fn start_state(&self) -> ParserState {
        ParserState::new()
    }

    /// Tokenize one line, advancing `state`. Returns the line's tokens with byte
    /// spans; the line's addressed nodes are left in `state.nodes`.
    pub fn tokenize_line(
        &self,
        raw_line: &str,
        state: &mut ParserState,
    ) -> Vec<(Token, std::ops::Range<usize>)> {
        let line = raw_line.trim_end_matches(|c| c == '\n' || c == '\r');
        let line_no = state.line;
        let profile = resolver::resolve_line(line, state, self.config.indent_unit);
        let address = state.address();
        let bare_marker = is_bare_block_marker(line);

        match state.mode {
            GrammarMode::Host => {
                let enterable = !bare_marker && value_after_key(line, &profile);
                if enterable && classify::is_shader_block(address.as_str()) {
                    state.mode = GrammarMode::Shader(EmbeddedState {
                        base_indent: profile.indent_width,
                        line: line_no,
                    });
                    split_tokens(line, &profile, embed_shader)
                } else if enterable && classify::is_script_value(address.as_str(), self.lookup) {
                    state.mode = GrammarMode::Script(EmbeddedState {
                        base_indent: profile.indent_width,
                        line: line_no,
                    });
                    split_tokens(line, &profile, embed_script)
                } else {
                    host_tokens(line)
                }
            }
            GrammarMode::Shader(embedded) => {
                if classify::is_shader_block(address.as_str()) && !bare_marker {
                    state.mode = GrammarMode::Shader(EmbeddedState { line: line_no, ..embedded });
                    embed_shader(line, 0)
                } else {
                    state.mode = GrammarMode::Host;
                    host_tokens(line)
                }
            }
            GrammarMode::Script(embedded) => {
                if classify::is_script_value(address.as_str(), self.lookup) && !bare_marker {
                    state.mode = GrammarMode::Script(EmbeddedState { line: line_no, ..embedded });
                    embed_script(line, 0)
                } else {
                    state.mode = GrammarMode::Host;
                    host_tokens(line)
                }
            }
        }
    }

    /// Drive a whole source text through the tokenizer, line by line. Returns the
    /// per-line token lists and the final state.
    pub fn tokenize_document(
        &self,
        source: &str,
    ) -> (Vec<Vec<(Token, std::ops::Range<usize>)>>, ParserState) {
        let mut state = self.start_state();
        let mut lines = Vec::new();
        for line in source.lines() {
            lines.push(self.tokenize_line(line, &mut state));
        }
        (lines, state)
    }
}

/// A line whose whole content is the block-string marker.
fn is_bare_block_marker(line: &str) -> bool {
    line.trim() == "|"
}

/// Whether the line's value starts strictly after a key token. Lines with no key
/// qualify when their content is indented off column zero, so re-highlighting
/// that starts inside an embedded span can re-enter it.
fn value_after_key(line: &str, profile: &LineProfile) -> bool {
    match profile.value_start {
        Some(_) => true,
        None => !profile.blank && line.starts_with([' ', '\t']),
    }
}

fn host_tokens(line: &str) -> Vec<(Token, std::ops::Range<usize>)> {
    host::tokenize(line)
        .into_iter()
        .map(|(token, span)| (Token::Host(token), span))
        .collect()
}

fn embed_shader(line: &str, from: usize) -> Vec<(Token, std::ops::Range<usize>)> {
    shader::tokenize(&line[from..])
        .into_iter()
        .map(|(token, span)| (Token::Shader(token), span.start + from..span.end + from))
        .collect()
}

fn embed_script(line: &str, from: usize) -> Vec<(Token, std::ops::Range<usize>)> {
    script::tokenize(&line[from..])
        .into_iter()
        .map(|(token, span)| (Token::Script(token), span.start + from..span.end + from))
        .collect()
}

/// On the line that enters an embedded grammar, the host grammar keeps the key
/// and separator and the embedded grammar takes the value remainder.
fn split_tokens(
    line: &str,
    profile: &LineProfile,
    embed: fn(&str, usize) -> Vec<(Token, std::ops::Range<usize>)>,
) -> Vec<(Token, std::ops::Range<usize>)> {
    match profile.value_start {
        Some(from) => {
            let mut tokens = host_tokens(&line[..from]);
            tokens.extend(embed(line, from));
            tokens
        }
        None => embed(line, 0),
    }
}
