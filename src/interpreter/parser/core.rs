use tracing::trace;

use crate::{
    ast::{Expression, Keyword},
    error::Error,
    interpreter::{lexer::tokenize_at, shunting_yard::to_postfix},
};

/// Result type used by the statement parser. Any error family can surface
/// while parsing, since every nested expression is compiled on the way.
pub type ParseResult<T> = Result<T, Error>;

/// A slice of statement text that remembers where it starts.
///
/// Offsets are byte offsets relative to the top-level statement, so tokens
/// and errors produced from a nested fragment point at the right column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// The text itself.
    pub text:   &'a str,
    /// Offset of `text` within the statement.
    pub offset: usize,
}

impl<'a> Fragment<'a> {
    /// A fragment covering a whole statement.
    #[must_use]
    pub const fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    #[must_use]
    pub const fn at(text: &'a str, offset: usize) -> Self {
        Self { text, offset }
    }

    /// Removes surrounding whitespace, keeping the offset accurate.
    #[must_use]
    pub fn trim(self) -> Self {
        let leading = self.text.len() - self.text.trim_start().len();
        Self { text:   self.text.trim(),
               offset: self.offset + leading, }
    }

    #[must_use]
    pub fn is_blank(self) -> bool {
        self.text.trim().is_empty()
    }

    /// The part of the fragment starting at byte `start`.
    #[must_use]
    pub fn tail(self, start: usize) -> Self {
        Self { text:   &self.text[start..],
               offset: self.offset + start, }
    }

    /// The part of the fragment before byte `end`.
    #[must_use]
    pub fn head(self, end: usize) -> Self {
        Self { text:   &self.text[..end],
               offset: self.offset, }
    }

    /// The part of the fragment between bytes `start` and `end`.
    #[must_use]
    pub fn between(self, start: usize, end: usize) -> Self {
        self.head(end).tail(start)
    }

    /// Offset in the statement of local byte `index`.
    #[must_use]
    pub const fn position(self, index: usize) -> usize {
        self.offset + index
    }

    /// The run of ASCII letters the fragment starts with.
    #[must_use]
    pub fn leading_word(self) -> &'a str {
        let end = self.text
                      .find(|ch: char| !ch.is_ascii_alphabetic())
                      .unwrap_or(self.text.len());
        &self.text[..end]
    }

    /// If the fragment starts with `keyword` as a whole word, in any case,
    /// returns what follows it.
    #[must_use]
    pub fn strip_keyword(self, keyword: Keyword) -> Option<Self> {
        let word = self.leading_word();
        word.eq_ignore_ascii_case(keyword.name())
            .then(|| self.tail(word.len()))
    }
}

/// Compiles an expression fragment to postfix order.
///
/// Runs the lexer and the shunting-yard translator once; the resulting
/// [`Expression`] can be evaluated repeatedly.
///
/// # Errors
/// Propagates lexing and translation errors.
///
/// # Example
/// ```
/// use rpncalc::interpreter::parser::core::{Fragment, compile_expression};
///
/// let expression = compile_expression(Fragment::at("  1 + x", 4)).unwrap();
///
/// assert_eq!(expression.position, 6);
/// assert_eq!(expression.rpn.len(), 3);
/// assert_eq!(expression.rpn[1].position, 10);
/// ```
pub fn compile_expression(fragment: Fragment<'_>) -> ParseResult<Expression> {
    let fragment = fragment.trim();
    let tokens = tokenize_at(fragment.text, fragment.offset)?;
    let rpn = to_postfix(tokens)?;

    trace!(expression = fragment.text, tokens = rpn.len(), "compiled expression");

    Ok(Expression { rpn,
                    position: fragment.offset })
}
