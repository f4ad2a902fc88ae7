//! Turns the token stream into a flat, ordered list of path expressions.
use crate::ast::Expression;
use crate::error::AccessError;
use crate::lexer::{TokenKind, lex};
use nom::{
    IResult, Parser,
    character::complete::{char, digit1},
    combinator::{map_res, opt, recognize},
    sequence::pair,
};

/// Parses a full access path (e.g. `orders[1:].lines[0].sku`) into its
/// expression list.
///
/// Dots are pure separators and produce no expression of their own. A path
/// that yields no expressions at all (such as the empty string) is a
/// syntax error.
pub fn parse_path(path: &str) -> Result<Vec<Expression>, AccessError> {
    let tokens = lex(path)?;
    let mut expressions = Vec::with_capacity(tokens.len());

    for token in &tokens {
        match token.kind {
            TokenKind::Dot => continue,
            TokenKind::Path => expressions.push(Expression::Path(token.term.clone())),
            TokenKind::Definitive => expressions.push(resolve_definitive(&token.term)?),
        }
    }

    if expressions.is_empty() {
        return Err(AccessError::syntax(path, "path contains no expressions"));
    }

    log::trace!("parsed '{}' into {} expressions", path, expressions.len());
    Ok(expressions)
}

/// A signed integer literal (`-?[0-9]+`); an explicit `+` sign is not part
/// of the grammar.
fn signed_int(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse).parse(input)
}

fn interior_parts(input: &str) -> IResult<&str, (Option<i64>, bool, Option<i64>)> {
    let (input, start) = opt(signed_int).parse(input)?;
    let (input, colon) = opt(char(':')).parse(input)?;
    let (input, end) = opt(signed_int).parse(input)?;
    Ok((input, (start, colon.is_some(), end)))
}

/// Resolves a bracket interior into an index or slice expression.
///
/// The interior must be wholly empty or one of `n`, `:`, `n:`, `:m`,
/// `n:m`.
fn resolve_definitive(interior: &str) -> Result<Expression, AccessError> {
    let parts = match interior_parts(interior) {
        Ok(("", parts)) => parts,
        _ => return Err(AccessError::syntax(interior, "expected an index or slice")),
    };

    match parts {
        // `[]` selects the whole range.
        (None, false, None) => Ok(Expression::Slice(None, None)),
        (Some(index), false, None) => Ok(Expression::Index(index)),
        (start, true, end) => Ok(Expression::Slice(start, end)),
        // An end bound cannot appear without the colon that introduces it.
        (_, false, Some(_)) => Err(AccessError::syntax(interior, "expected an index or slice")),
    }
}
