//! Tokenizes a raw access path into an ordered token stream.
use crate::error::AccessError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::map,
    sequence::delimited,
};

/// The token kinds the path grammar distinguishes, in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier segment (`[A-Za-z0-9_]+`).
    Path,
    /// The `.` segment separator.
    Dot,
    /// A bracketed index/slice; the term is the interior only, brackets
    /// stripped.
    Definitive,
}

/// A single lexed token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub term: String,
}

impl Token {
    fn new(kind: TokenKind, term: &str) -> Self {
        Self {
            kind,
            term: term.to_string(),
        }
    }
}

fn path_token(input: &str) -> IResult<&str, Token> {
    map(
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        |term| Token::new(TokenKind::Path, term),
    )
    .parse(input)
}

fn dot_token(input: &str) -> IResult<&str, Token> {
    map(char('.'), |_| Token::new(TokenKind::Dot, ".")).parse(input)
}

fn definitive_token(input: &str) -> IResult<&str, Token> {
    map(
        delimited(char('['), take_while(|c: char| c != ']'), char(']')),
        |term| Token::new(TokenKind::Definitive, term),
    )
    .parse(input)
}

/// Splits `source` into tokens, left to right; the first matching pattern
/// wins at each position.
///
/// Whitespace is not part of the grammar and fails like any other
/// unrecognized input, with the unconsumed remainder in the error.
pub fn lex(source: &str) -> Result<Vec<Token>, AccessError> {
    let mut rest = source;
    let mut tokens = Vec::new();

    while !rest.is_empty() {
        match alt((path_token, dot_token, definitive_token)).parse(rest) {
            Ok((remaining, token)) => {
                rest = remaining;
                tokens.push(token);
            }
            Err(_) => return Err(AccessError::Lexical(rest.to_string())),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind, t.term.as_str())).collect()
    }

    #[test]
    fn test_lex_dotted_path() {
        let tokens = lex("aaa.bbb").unwrap();
        assert_eq!(
            terms(&tokens),
            vec![
                (TokenKind::Path, "aaa"),
                (TokenKind::Dot, "."),
                (TokenKind::Path, "bbb"),
            ]
        );
    }

    #[test]
    fn test_lex_brackets_keep_interior_only() {
        let tokens = lex("a[2:4][0]").unwrap();
        assert_eq!(
            terms(&tokens),
            vec![
                (TokenKind::Path, "a"),
                (TokenKind::Definitive, "2:4"),
                (TokenKind::Definitive, "0"),
            ]
        );
    }

    #[test]
    fn test_lex_empty_interior() {
        let tokens = lex("a[]").unwrap();
        assert_eq!(
            terms(&tokens),
            vec![(TokenKind::Path, "a"), (TokenKind::Definitive, "")]
        );
    }

    #[test]
    fn test_lex_underscores_and_digits_are_path_chars() {
        let tokens = lex("_data_source2").unwrap();
        assert_eq!(terms(&tokens), vec![(TokenKind::Path, "_data_source2")]);
    }

    #[test]
    fn test_lex_rejects_whitespace() {
        let err = lex("a .b").unwrap_err();
        assert!(matches!(err, AccessError::Lexical(rest) if rest == " .b"));
    }

    #[test]
    fn test_lex_rejects_unterminated_bracket() {
        let err = lex("a[2").unwrap_err();
        assert!(matches!(err, AccessError::Lexical(rest) if rest == "[2"));
    }

    #[test]
    fn test_lex_empty_input_yields_no_tokens() {
        assert_eq!(lex("").unwrap(), vec![]);
    }
}
