use crate::{
    ast::{Expression, Function, Keyword, Statement},
    error::{AssignmentError, ConditionalError, Error, LoopError, ParseError},
    interpreter::parser::{
        block::{parse_bare_block, parse_braced},
        core::{Fragment, ParseResult, compile_expression},
    },
    util::source::{find_assignment, find_else, find_matching},
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - an `if` conditional, with a braced or plain then-branch and an optional
///   `else` branch.
/// - a `while` loop.
/// - a bare braced block.
/// - an assignment `name = statement`.
/// - an expression.
///
/// Classification is attempted in that order. A keyword directly followed by
/// `=` is treated as an assignment target, which is then rejected.
///
/// # Parameters
/// - `fragment`: The statement text, blank pieces already removed.
///
/// # Returns
/// A parsed [`Statement`] tree in which every expression is compiled to
/// postfix order.
///
/// # Example
/// ```
/// use rpncalc::{
///     ast::Statement,
///     interpreter::parser::{core::Fragment, statement::parse_statement},
/// };
///
/// let statement = parse_statement(Fragment::new("if (x > 3) x = 10 else x = 0")).unwrap();
///
/// assert!(matches!(statement, Statement::If { else_branch: Some(_), .. }));
/// ```
pub fn parse_statement(fragment: Fragment<'_>) -> ParseResult<Statement> {
    let fragment = fragment.trim();

    if let Some(rest) = keyword_clause(fragment, Keyword::If) {
        return parse_if(fragment.offset, rest);
    }
    if let Some(rest) = keyword_clause(fragment, Keyword::While) {
        return parse_while(fragment.offset, rest);
    }
    if keyword_clause(fragment, Keyword::Else).is_some() {
        return Err(ConditionalError::UnexpectedElse { position: fragment.offset }.into());
    }
    if let Some(block) = parse_bare_block(fragment)? {
        return Ok(block);
    }
    if let Some(equals) = find_assignment(fragment.text) {
        return parse_assignment(fragment, equals);
    }

    Ok(Statement::Expression(compile_expression(fragment)?))
}

/// Returns the text after `keyword` if it introduces the statement.
fn keyword_clause(fragment: Fragment<'_>, keyword: Keyword) -> Option<Fragment<'_>> {
    let rest = fragment.strip_keyword(keyword)?;
    (!rest.text.trim_start().starts_with('=')).then_some(rest)
}

/// Parses `name = statement`, where `equals` is the offset of the `=`.
///
/// The right-hand side is a full statement, so `x = y = 2` and
/// `x = if (a) 1 else 2` are both accepted.
fn parse_assignment(fragment: Fragment<'_>, equals: usize) -> ParseResult<Statement> {
    let target = fragment.head(equals).trim();
    let value = fragment.tail(equals + 1);

    let name = assignment_target(target.text)?;
    if value.is_blank() {
        let position = fragment.position(equals);
        return Err(AssignmentError::InvalidAssignment { position }.into());
    }

    Ok(Statement::Assignment { name,
                               value: Box::new(parse_statement(value)?),
                               position: target.offset })
}

/// Validates an assignment target and returns it lower-cased.
///
/// # Errors
/// - [`AssignmentError::InvalidVariableName`] unless the target is one or more
///   ASCII letters.
/// - [`AssignmentError::CannotAssignToFunction`] for `sin`, `cos` and `exp`.
/// - [`AssignmentError::ReservedName`] for `if`, `else` and `while`.
fn assignment_target(target: &str) -> Result<String, AssignmentError> {
    if target.is_empty() || !target.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(AssignmentError::InvalidVariableName { name: target.to_string() });
    }

    let name = target.to_ascii_lowercase();
    if Function::from_name(&name).is_some() {
        return Err(AssignmentError::CannotAssignToFunction { name });
    }
    if Keyword::from_name(&name).is_some() {
        return Err(AssignmentError::ReservedName { name });
    }

    Ok(name)
}

/// Parses the parenthesized condition at the start of `rest`.
///
/// # Returns
/// The compiled condition and the text after its closing parenthesis.
///
/// # Errors
/// `invalid` when there is no `(` or the condition is blank, and
/// [`ParseError::MismatchedParentheses`] when the `(` is never closed.
fn parse_condition<'a>(rest: Fragment<'a>,
                       invalid: Error)
                       -> ParseResult<(Expression, Fragment<'a>)> {
    let rest = rest.trim();
    if !rest.text.starts_with('(') {
        return Err(invalid);
    }

    let close = find_matching(rest.text, 0, '(', ')')
        .ok_or(ParseError::MismatchedParentheses { position: rest.offset })?;
    let inner = rest.between(1, close);
    if inner.is_blank() {
        return Err(invalid);
    }

    Ok((compile_expression(inner)?, rest.tail(close + 1)))
}

/// Parses the branch of a conditional or the body of a loop.
///
/// A branch starting with `{` must be a single block; anything else is a
/// plain statement.
fn parse_branch(fragment: Fragment<'_>, missing: impl Fn() -> Error) -> ParseResult<Statement> {
    let fragment = fragment.trim();
    if fragment.is_blank() {
        return Err(missing());
    }

    if fragment.text.starts_with('{') {
        let (block, after) = parse_braced(fragment)?;
        let after = after.trim();
        if !after.is_blank() {
            return Err(ParseError::TrailingText { position: after.offset }.into());
        }
        return Ok(block);
    }

    parse_statement(fragment)
}

/// Parses an `if` statement from the text after the keyword.
///
/// Syntax:
/// ```text
///     if (condition) { block } [else { block } | else statement]
///     if (condition) statement [else statement]
/// ```
///
/// In the plain form, each nested `if` claims the nearest following `else`.
fn parse_if(position: usize, rest: Fragment<'_>) -> ParseResult<Statement> {
    let missing = || Error::from(ConditionalError::MissingBranch { position });
    let (condition, body) =
        parse_condition(rest, ConditionalError::InvalidConditional { position }.into())?;
    let body = body.trim();

    let (then_branch, else_text) = if body.text.starts_with('{') {
        let (block, after) = parse_braced(body)?;
        let after = after.trim();
        if after.is_blank() {
            (block, None)
        } else {
            let else_text =
                after.strip_keyword(Keyword::Else)
                     .ok_or(ParseError::TrailingText { position: after.offset })?;
            (block, Some(else_text))
        }
    } else {
        let (then_text, else_text) = match find_else(body.text) {
            Some(at) => (body.head(at), Some(body.tail(at + Keyword::Else.name().len()))),
            None => (body, None),
        };
        (parse_branch(then_text, missing)?, else_text)
    };

    let else_branch = match else_text {
        Some(text) => Some(Box::new(parse_branch(text, missing)?)),
        None => None,
    };

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch,
                       position })
}

/// Parses a `while` statement from the text after the keyword.
///
/// Syntax: `while (condition) { block }` or `while (condition) statement`.
fn parse_while(position: usize, rest: Fragment<'_>) -> ParseResult<Statement> {
    let (condition, body) = parse_condition(rest, LoopError::InvalidLoop { position }.into())?;
    let body = parse_branch(body, || LoopError::MissingBody { position }.into())?;

    Ok(Statement::While { condition,
                          body: Box::new(body),
                          position })
}
