use std::fmt;

use logos::Logos;

use crate::{
    ast::{Function, Keyword, Operator},
    error::LexError,
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Raw lexemes recognized by the scanner.
///
/// These carry no payload; [`tokenize`] classifies each one, validates
/// numbers and identifiers, and inserts implicit multiplications.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    /// Digits, dots, exponent markers and a sign right after an exponent
    /// marker. Validated after scanning, so `2.1e5.3` is one bad lexeme.
    #[regex(r"[0-9.]([0-9.]|[eE][+-]?)*")]
    Number,
    /// Letters only; digits and underscores end a word.
    #[regex(r"[a-zA-Z]+")]
    Word,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    /// Statement separator. Statements are split before lexing, so any
    /// separator seen here is dropped.
    #[token(";")]
    Separator,
}

/// The classification of a token together with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A finite numeric literal.
    Number(f64),
    /// A lower-cased variable name.
    Variable(String),
    /// A built-in function, always directly followed by `(` in the source.
    Function(Function),
    /// An arithmetic or comparison operator.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `if`, `else` or `while`.
    Keyword(Keyword),
}

impl TokenKind {
    /// Returns `true` for tokens after which a value has just been completed:
    /// numbers, variables and closing brackets.
    #[must_use]
    pub const fn ends_value(&self) -> bool {
        matches!(self,
                 Self::Number(_) | Self::Variable(_) | Self::RightParen | Self::RightBrace)
    }
}

/// A lexical token and the offset of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// 0-based offset into the statement text, for diagnostics.
    pub position: usize,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// The token's lexeme as it would be written in source.
    #[must_use]
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Number(value) => write!(f, "{value}"),
            TokenKind::Variable(name) => f.write_str(name),
            TokenKind::Function(function) => write!(f, "{function}"),
            TokenKind::Operator(operator) => write!(f, "{operator}"),
            TokenKind::LeftParen => f.write_str("("),
            TokenKind::RightParen => f.write_str(")"),
            TokenKind::LeftBrace => f.write_str("{"),
            TokenKind::RightBrace => f.write_str("}"),
            TokenKind::Keyword(keyword) => write!(f, "{keyword}"),
        }
    }
}

/// Converts expression text into tokens.
///
/// Positions are offsets into `source`. Implicit multiplication tokens are
/// inserted for forms such as `2x`, `(1)(2)`, `2(3 + 4)` and `3sin(0)`.
///
/// # Errors
/// Returns a [`LexError`] for an unparseable number, an unknown function
/// call, a bare function name, or a character outside the language.
///
/// # Example
/// ```
/// use rpncalc::{
///     ast::Operator,
///     interpreter::lexer::{TokenKind, tokenize},
/// };
///
/// let tokens = tokenize("2x").unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind, TokenKind::Operator(Operator::Multiply));
/// assert_eq!(tokens[2].kind, TokenKind::Variable("x".to_string()));
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    tokenize_at(source, 0)
}

/// Like [`tokenize`], but shifts every position by `offset` so that tokens
/// of a sub-expression point into the enclosing statement.
pub(crate) fn tokenize_at(source: &str, offset: usize) -> LexResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexer = Lexeme::lexer(source);
    let mut previous_end = None;

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let position = offset + span.start;

        let Ok(lexeme) = lexeme else {
            let ch = lexer.slice().chars().next().unwrap_or_default();
            return Err(LexError::InvalidCharacter { ch, position });
        };

        let kind = match lexeme {
            Lexeme::Number => {
                let value = parse_number(lexer.slice());
                TokenKind::Number(value.ok_or(LexError::InvalidNumber { position })?)
            },
            Lexeme::Word => {
                classify_word(lexer.slice(), lexer.remainder().starts_with('('), position)?
            },
            Lexeme::Plus => TokenKind::Operator(Operator::Add),
            Lexeme::Minus => TokenKind::Operator(Operator::Subtract),
            Lexeme::Star => TokenKind::Operator(Operator::Multiply),
            Lexeme::Slash => TokenKind::Operator(Operator::Divide),
            Lexeme::Less => TokenKind::Operator(Operator::Less),
            Lexeme::Greater => TokenKind::Operator(Operator::Greater),
            Lexeme::LessEqual => TokenKind::Operator(Operator::LessEqual),
            Lexeme::GreaterEqual => TokenKind::Operator(Operator::GreaterEqual),
            Lexeme::EqualEqual => TokenKind::Operator(Operator::Equal),
            Lexeme::BangEqual => TokenKind::Operator(Operator::NotEqual),
            Lexeme::LParen => TokenKind::LeftParen,
            Lexeme::RParen => TokenKind::RightParen,
            Lexeme::LBrace => TokenKind::LeftBrace,
            Lexeme::RBrace => TokenKind::RightBrace,
            Lexeme::Separator => {
                previous_end = None;
                continue;
            },
        };

        let adjacent = previous_end == Some(span.start);
        if let Some(last) = tokens.last()
           && needs_implicit_multiplication(&last.kind, &kind, adjacent)
        {
            tokens.push(Token::new(TokenKind::Operator(Operator::Multiply), position));
        }

        tokens.push(Token::new(kind, position));
        previous_end = Some(span.end);
    }

    Ok(tokens)
}

/// Decides whether a `*` belongs between `previous` and `next`.
///
/// A letter, `(` or `{` written directly after a number or `)` multiplies.
/// An opening bracket also multiplies after any completed value, even across
/// whitespace.
fn needs_implicit_multiplication(previous: &TokenKind, next: &TokenKind, adjacent: bool) -> bool {
    let opens_group = matches!(next, TokenKind::LeftParen | TokenKind::LeftBrace);
    let starts_with_letter = matches!(next,
                                      TokenKind::Variable(_)
                                      | TokenKind::Function(_)
                                      | TokenKind::Keyword(_));

    if opens_group && previous.ends_value() {
        return true;
    }

    adjacent
    && starts_with_letter
    && matches!(previous, TokenKind::Number(_) | TokenKind::RightParen)
}

/// Parses a scanned numeric run, rejecting anything that is not a finite
/// float.
fn parse_number(slice: &str) -> Option<f64> {
    slice.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Classifies a run of letters as a function, keyword or variable.
///
/// `is_call` is `true` when the word is immediately followed by `(`.
fn classify_word(word: &str, is_call: bool, position: usize) -> LexResult<TokenKind> {
    let name = word.to_ascii_lowercase();

    if is_call {
        return Function::from_name(&name).map(TokenKind::Function)
                                         .ok_or(LexError::UnknownFunction { name, position });
    }

    if let Some(keyword) = Keyword::from_name(&name) {
        return Ok(TokenKind::Keyword(keyword));
    }

    if Function::from_name(&name).is_some() {
        return Err(LexError::FunctionUsedAsVariable { name, position });
    }

    Ok(TokenKind::Variable(name))
}
