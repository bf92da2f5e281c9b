use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::parser::{
        core::{Fragment, ParseResult},
        statement::parse_statement,
    },
    util::source::{STATEMENT_SEPARATOR, find_matching, split_top_level},
};

/// Parses the statements between a pair of braces.
///
/// The inside is split on `;` at brace depth zero. Blank pieces are skipped,
/// so `{ a = 1; ; b = 2; }` holds two statements.
///
/// Grammar: `block := "{" statement (";" statement)* "}"`
///
/// # Parameters
/// - `inner`: Text between the braces.
/// - `position`: Offset of the opening brace.
///
/// # Returns
/// A `Statement::Block` with every parsed statement.
pub fn parse_block(inner: Fragment<'_>, position: usize) -> ParseResult<Statement> {
    let statements = split_top_level(inner.text, STATEMENT_SEPARATOR)
        .into_iter()
        .map(|(start, text)| Fragment::at(text, inner.position(start)))
        .filter(|piece| !piece.is_blank())
        .map(parse_statement)
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(Statement::Block { statements,
                          position })
}

/// Parses a braced block at the start of `fragment`.
///
/// # Returns
/// The block and whatever follows its closing brace.
///
/// # Errors
/// [`ParseError::MismatchedBraces`] at the opening brace when it is never
/// closed, plus anything raised by the statements inside.
pub fn parse_braced<'a>(fragment: Fragment<'a>) -> ParseResult<(Statement, Fragment<'a>)> {
    let close = find_matching(fragment.text, 0, '{', '}')
        .ok_or(ParseError::MismatchedBraces { position: fragment.offset })?;
    let block = parse_block(fragment.between(1, close), fragment.offset)?;

    Ok((block, fragment.tail(close + 1)))
}

/// Parses `fragment` as a block if it is one brace pair and nothing else.
///
/// Returns `Ok(None)` when the fragment does not start with `{` or when text
/// follows the matching `}`, as in `{1 + 2} * 3`; such fragments are
/// expressions.
pub fn parse_bare_block(fragment: Fragment<'_>) -> ParseResult<Option<Statement>> {
    if !fragment.text.starts_with('{') {
        return Ok(None);
    }

    match find_matching(fragment.text, 0, '{', '}') {
        Some(close) if close + 1 == fragment.text.len() => {
            Ok(Some(parse_block(fragment.between(1, close), fragment.offset)?))
        },
        _ => Ok(None),
    }
}
