//! Parser state
//!
//!     The tokenizer is incremental: the host editor persists one state instance per
//!     document, clones it wherever it needs to fork for partial re-highlighting, and
//!     feeds it back one line at a time. Everything the engine needs to resume at an
//!     arbitrary line therefore lives here: the key stack accumulated from
//!     indentation, the line counter, the nodes of the most recent line, and the
//!     grammar mode tag.
//!
//!     The mode is a tagged union rather than a pair of loose fields. A state is
//!     either in the host grammar or inside exactly one embedded grammar, and the
//!     embedded bookkeeping only exists in the embedded cases, so the variant carries
//!     it.

use super::address::Address;
use super::node::Node;

/// Bookkeeping for an active embedded grammar.
///
/// Embedded grammars are line-oblivious by themselves; the dispatcher refreshes
/// `line` on every call so the embedded span can be reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedState {
    /// Indentation width (in columns) of the line that opened the embedded span.
    pub base_indent: usize,
    /// Line counter at the most recent tokenize call inside the span.
    pub line: usize,
}

/// Which grammar currently tokenizes lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrammarMode {
    /// The scene-file grammar itself.
    Host,
    /// A shader-source block value.
    Shader(EmbeddedState),
    /// A scripting function-literal value.
    Script(EmbeddedState),
}

/// Per-document incremental state, cloned by the host editor when it forks.
#[derive(Debug, Clone, PartialEq)]
pub struct ParserState {
    /// `key_stack[level]` is the key introduced at that indentation level.
    pub key_stack: Vec<String>,
    /// Indentation level of the most recent key line.
    pub key_level: usize,
    /// Monotonic line counter, incremented once per tokenize call.
    pub line: usize,
    /// Addressed nodes emitted for the most recent line.
    pub nodes: Vec<Node>,
    /// Active grammar and its embedded bookkeeping.
    pub mode: GrammarMode,
}

impl ParserState {
    pub fn new() -> Self {
        ParserState {
            key_stack: Vec::new(),
            key_level: 0,
            line: 0,
            nodes: Vec::new(),
            mode: GrammarMode::Host,
        }
    }

    /// The address of the currently open key chain.
    pub fn address(&self) -> Address {
        Address::from_keys(&self.key_stack)
    }
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}
