use crate::{
    ast::Operator,
    error::ParseError,
    interpreter::lexer::{Token, TokenKind},
};

/// Result type used by the translator.
pub type TranslateResult<T> = Result<T, ParseError>;

/// Converts an infix token sequence to postfix (reverse Polish) order.
///
/// Operands go straight to the output. Binary operators wait on a stack until
/// an operator of lower precedence arrives, and are left associative. A `-`
/// in prefix position (start of input, or after an operator, `(`, `{` or a
/// keyword) becomes [`Operator::Negate`]; a prefix `+` is dropped. Function
/// tokens are emitted when their closing `)` is reached.
///
/// An empty input produces an empty output; evaluating it then fails.
///
/// # Errors
/// - [`ParseError::InvalidOperatorSequence`] for a prefix `-` right after a
///   binary `-`, as in `2--3`.
/// - [`ParseError::UnexpectedOperator`] for `*`, `/` or a comparison with no
///   value on its left.
/// - [`ParseError::MismatchedParentheses`] and
///   [`ParseError::MismatchedBraces`] for unbalanced grouping.
///
/// # Example
/// ```
/// use rpncalc::interpreter::{lexer::tokenize, shunting_yard::to_postfix};
///
/// let rpn = to_postfix(tokenize("3 + 4 * 2").unwrap()).unwrap();
/// let text: Vec<String> = rpn.iter().map(|token| token.text()).collect();
///
/// assert_eq!(text, ["3", "4", "2", "*", "+"]);
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> TranslateResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();
    let mut previous: Option<TokenKind> = None;

    for mut token in tokens {
        let current = token.kind.clone();

        match token.kind {
            TokenKind::Number(_) | TokenKind::Variable(_) | TokenKind::Keyword(_) => {
                output.push(token);
            },
            TokenKind::Function(_) | TokenKind::LeftParen | TokenKind::LeftBrace => {
                stack.push(token);
            },
            TokenKind::Operator(operator) => {
                let resolved = resolve_operator(operator, previous.as_ref(), token.position)?;
                if let Some(resolved) = resolved {
                    token.kind = TokenKind::Operator(resolved);
                    push_operator(token, resolved, &mut stack, &mut output);
                }
            },
            TokenKind::RightParen => close_parenthesis(token.position, &mut stack, &mut output)?,
            TokenKind::RightBrace => close_brace(token.position, &mut stack, &mut output)?,
        }

        previous = Some(current);
    }

    while let Some(token) = stack.pop() {
        match token.kind {
            TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(ParseError::MismatchedParentheses { position: token.position });
            },
            TokenKind::LeftBrace | TokenKind::RightBrace => {
                return Err(ParseError::MismatchedBraces { position: token.position });
            },
            _ => output.push(token),
        }
    }

    Ok(output)
}

/// Returns `true` if an operator following `previous` must be read as a
/// prefix (unary) operator.
const fn is_prefix_position(previous: Option<&TokenKind>) -> bool {
    matches!(previous,
             None
             | Some(TokenKind::Operator(_)
                    | TokenKind::LeftParen
                    | TokenKind::LeftBrace
                    | TokenKind::Keyword(_)))
}

/// Decides what an operator token means in its position.
///
/// Returns `Ok(None)` for a prefix `+`, which has no effect.
fn resolve_operator(operator: Operator,
                    previous: Option<&TokenKind>,
                    position: usize)
                    -> TranslateResult<Option<Operator>> {
    if is_prefix_position(previous) {
        return match operator {
            Operator::Subtract => {
                if matches!(previous, Some(TokenKind::Operator(Operator::Subtract))) {
                    return Err(ParseError::InvalidOperatorSequence { position });
                }
                Ok(Some(Operator::Negate))
            },
            Operator::Add => Ok(None),
            _ => Err(ParseError::UnexpectedOperator { position }),
        };
    }

    match previous {
        Some(kind) if kind.ends_value() => Ok(Some(operator)),
        _ => Err(ParseError::UnexpectedOperator { position }),
    }
}

/// Pushes an operator after emitting every stacked operator that binds at
/// least as tightly. Prefix operators have nothing on their left to bind to,
/// so they are pushed without popping.
fn push_operator(token: Token,
                 operator: Operator,
                 stack: &mut Vec<Token>,
                 output: &mut Vec<Token>) {
    if !operator.is_unary() {
        while let Some(top) = stack.last() {
            match top.kind {
                TokenKind::Operator(stacked) if stacked.precedence() >= operator.precedence() => {
                    if let Some(popped) = stack.pop() {
                        output.push(popped);
                    }
                },
                _ => break,
            }
        }
    }

    stack.push(token);
}

/// Handles `)`: emits operators down to the matching `(` and then the
/// function applied to the group, if any.
fn close_parenthesis(position: usize,
                     stack: &mut Vec<Token>,
                     output: &mut Vec<Token>)
                     -> TranslateResult<()> {
    loop {
        match stack.pop() {
            Some(Token { kind: TokenKind::LeftParen,
                         .. }) => break,
            Some(Token { kind: TokenKind::LeftBrace,
                         .. })
            | None => return Err(ParseError::MismatchedParentheses { position }),
            Some(token) => output.push(token),
        }
    }

    if stack.last().is_some_and(|top| matches!(top.kind, TokenKind::Function(_)))
       && let Some(function) = stack.pop()
    {
        output.push(function);
    }

    Ok(())
}

/// Handles `}`: emits operators down to the matching `{`.
fn close_brace(position: usize,
               stack: &mut Vec<Token>,
               output: &mut Vec<Token>)
               -> TranslateResult<()> {
    loop {
        match stack.pop() {
            Some(Token { kind: TokenKind::LeftBrace,
                         .. }) => return Ok(()),
            Some(Token { kind: TokenKind::LeftParen,
                         .. })
            | None => return Err(ParseError::MismatchedBraces { position }),
            Some(token) => output.push(token),
        }
    }
}
