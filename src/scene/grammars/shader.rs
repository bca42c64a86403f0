//! Shader-source grammar
//!
//! Tokenizes lines of shader block values: preprocessor directives, comments,
//! storage and type keywords, numbers, identifiers, operators and punctuation.
//! Block comments are recognized only when they close on the same line; an
//! unterminated opener is dropped with the rest of the unmatched characters.

use logos::Logos;
use serde::Serialize;

/// All tokens of the shader-source grammar.
#[derive(Logos, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ShaderToken {
    #[regex(r"#[^\n]*")]
    Preprocessor,

    #[regex(r"//[^\n]*", priority = 5)]
    LineComment,

    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", priority = 5)]
    BlockComment,

    #[regex(
        r"uniform|varying|attribute|const|precision|highp|mediump|lowp|void|float|int|bool|vec2|vec3|vec4|mat2|mat3|mat4|sampler2D|samplerCube|if|else|for|while|return|break|continue|discard|struct|in|out|inout|true|false",
        priority = 5
    )]
    Keyword,

    #[regex(r"[0-9]+\.?[0-9]*|\.[0-9]+")]
    Number,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", priority = 2)]
    Identifier,

    #[regex(r"[+\-*/%=<>!&|^?:~]+", priority = 3)]
    Operator,

    #[regex(r"[(){}\[\];,.]")]
    Punctuation,

    #[regex(r"[ \t]+")]
    Whitespace,
}

/// Tokenize one line with location information. Spans are byte offsets.
pub fn tokenize(line: &str) -> Vec<(ShaderToken, std::ops::Range<usize>)> {
    let mut lexer = ShaderToken::lexer(line);
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

    fn kinds(line: &str) -> Vec<ShaderToken> {
        tokenize(line).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_assignment_line() {
        assert_eq!(
            kinds("color.rgb = vec3(0.5);"),
            vec![
                ShaderToken::Identifier,
                ShaderToken::Punctuation,
                ShaderToken::Identifier,
                ShaderToken::Whitespace,
                ShaderToken::Operator,
                ShaderToken::Whitespace,
                ShaderToken::Keyword,
                ShaderToken::Punctuation,
                ShaderToken::Number,
                ShaderToken::Punctuation,
                ShaderToken::Punctuation,
            ]
        );
    }

    #[test]
    fn test_declaration_and_preprocessor() {
        assert_eq!(
            kinds("uniform float u_time;"),
            vec![
                ShaderToken::Keyword,
                ShaderToken::Whitespace,
                ShaderToken::Keyword,
                ShaderToken::Whitespace,
                ShaderToken::Identifier,
                ShaderToken::Punctuation,
            ]
        );
        assert_eq!(kinds("#ifdef GL_ES"), vec![ShaderToken::Preprocessor]);
    }

    #[test]
    fn test_comments_win_over_operators() {
        assert_eq!(kinds("// trailing note"), vec![ShaderToken::LineComment]);
        assert_eq!(
            kinds("x /* mid */ y"),
            vec![
                ShaderToken::Identifier,
                ShaderToken::Whitespace,
                ShaderToken::BlockComment,
                ShaderToken::Whitespace,
                ShaderToken::Identifier,
            ]
        );
    }

    #[test]
    fn test_float_shapes() {
        assert_eq!(kinds(".5"), vec![ShaderToken::Number]);
        assert_eq!(kinds("1."), vec![ShaderToken::Number]);
        assert_eq!(kinds("10.25"), vec![ShaderToken::Number]);
    }

    #[test]
    fn test_keyword_is_not_an_identifier_prefix_match() {
        assert_eq!(kinds("floating"), vec![ShaderToken::Identifier]);
        assert_eq!(kinds("float"), vec![ShaderToken::Keyword]);
    }
}
