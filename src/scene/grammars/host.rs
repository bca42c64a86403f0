//! Host grammar for scene-file lines
//!
//! Tokenizes the declarative format itself: keys and separators, comments, anchors
//! and alias references (the minimal subset the format uses), quoted strings,
//! numbers, booleans, block-string markers and flow punctuation. Characters that
//! fit no token are dropped, which leaves them unstyled rather than breaking the
//! line.

use logos::Logos;
use serde::Serialize;

/// All tokens of the scene-file grammar.
#[derive(Logos, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HostToken {
    #[regex(r"#[^\n]*")]
    Comment,

    #[token(":")]
    Separator,

    // Sequence-entry marker; longer scalars and negative numbers win over it
    #[token("-", priority = 4)]
    Dash,

    #[regex(r"&[^ \t\n]+")]
    Anchor,

    #[regex(r"\*[^ \t\n]+")]
    Alias,

    #[token("|")]
    BlockMarker,

    #[token("{")]
    FlowOpen,

    #[token("}")]
    FlowClose,

    #[token("[")]
    SeqOpen,

    #[token("]")]
    SeqClose,

    #[token(",")]
    Comma,

    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleQuoted,

    #[regex(r"'[^']*'")]
    SingleQuoted,

    #[regex(r"-?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", priority = 5)]
    Number,

    #[regex(r"true|false", priority = 5)]
    Boolean,

    // Plain scalars share the key character set plus nothing else; keys are just
    // scalars in front of a separator
    #[regex(r"[A-Za-z0-9_\-/.]+", priority = 2)]
    Scalar,

    #[regex(r"[ \t]+")]
    Whitespace,
}

/// Tokenize one line with location information.
///
/// Spans are byte offsets into the line. Characters no token covers are skipped.
pub fn tokenize(line: &str) -> Vec<(HostToken, std::ops::Range<usize>)> {
    let mut lexer = HostToken::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
