//! Scripting grammar
//!
//! Tokenizes lines of function-literal values: keywords, strings, numbers,
//! comments, identifiers, operators and punctuation. Like the shader grammar this
//! is line-oblivious; multi-line constructs are tokenized one line at a time.

use logos::Logos;
use serde::Serialize;

/// All tokens of the scripting grammar.
#[derive(Logos, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScriptToken {
    #[regex(r"//[^\n]*", priority = 5)]
    LineComment,

    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", priority = 5)]
    BlockComment,

    #[regex(
        r"function|return|var|let|const|if|else|for|while|do|switch|case|default|break|continue|new|delete|typeof|instanceof|in|of|this|null|undefined|true|false|try|catch|finally|throw",
        priority = 5
    )]
    Keyword,

    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleQuoted,

    #[regex(r"'([^'\\]|\\.)*'")]
    SingleQuoted,

    #[regex(r"`[^`]*`")]
    TemplateString,

    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?|\.[0-9]+")]
    Number,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*", priority = 2)]
    Identifier,

    #[regex(r"[+\-*/%=<>!&|^?:~.]+", priority = 3)]
    Operator,

    #[regex(r"[(){}\[\];,]")]
    Punctuation,

    #[regex(r"[ \t]+")]
    Whitespace,
}

/// Tokenize one line with location information. Spans are byte offsets.
pub fn tokenize(line: &str) -> Vec<(ScriptToken, std::ops::Range<usize>)> {
    let mut lexer = ScriptToken::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<ScriptToken> {
        tokenize(line).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_function_opening_line() {
        assert_eq!(
            kinds("function (feature) {"),
            vec![
                ScriptToken::Keyword,
                ScriptToken::Whitespace,
                ScriptToken::Punctuation,
                ScriptToken::Identifier,
                ScriptToken::Punctuation,
                ScriptToken::Whitespace,
                ScriptToken::Punctuation,
            ]
        );
    }

    #[test]
    fn test_member_access_and_strings() {
        assert_eq!(
            kinds("return feature.kind === 'river';"),
            vec![
                ScriptToken::Keyword,
                ScriptToken::Whitespace,
                ScriptToken::Identifier,
                ScriptToken::Operator,
                ScriptToken::Identifier,
                ScriptToken::Whitespace,
                ScriptToken::Operator,
                ScriptToken::Whitespace,
                ScriptToken::SingleQuoted,
                ScriptToken::Punctuation,
            ]
        );
    }

    #[test]
    fn test_comments_and_numbers() {
        assert_eq!(kinds("// note"), vec![ScriptToken::LineComment]);
        assert_eq!(kinds("1e3"), vec![ScriptToken::Number]);
        assert_eq!(kinds(".25"), vec![ScriptToken::Number]);
        assert_eq!(kinds("$zoom"), vec![ScriptToken::Identifier]);
    }
}
