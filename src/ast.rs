use std::fmt;

use crate::interpreter::lexer::Token;

/// An arithmetic, comparison or sign operator.
///
/// `Negate` never comes out of the lexer: the shunting-yard translator
/// rewrites a `-` found in prefix position into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// Binary `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// Unary minus.
    Negate,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`, tolerance based.
    Equal,
    /// `!=`, tolerance based.
    NotEqual,
}

impl Operator {
    /// Binding strength used by the translator when popping the operator
    /// stack.
    ///
    /// Comparisons bind loosest so that `a < b + c` reads as `a < (b + c)`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::ast::Operator;
    ///
    /// assert!(Operator::Multiply.precedence() > Operator::Add.precedence());
    /// assert!(Operator::Negate.precedence() > Operator::Divide.precedence());
    /// assert_eq!(Operator::Less.precedence(), 0);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Less
            | Self::Greater
            | Self::LessEqual
            | Self::GreaterEqual
            | Self::Equal
            | Self::NotEqual => 0,
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide => 2,
            Self::Negate => 3,
        }
    }

    /// Returns `true` for operators that consume a single operand.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Negate)
    }

    /// The source spelling of the operator. Unary minus renders as `neg`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Negate => "neg",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The fixed set of single-argument built-in functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// `sin(x)`, radians.
    Sin,
    /// `cos(x)`, radians.
    Cos,
    /// `exp(x)`
    Exp,
}

impl Function {
    /// Every built-in, in declaration order.
    pub const ALL: [Self; 3] = [Self::Sin, Self::Cos, Self::Exp];

    /// Looks up a built-in by its lower-case name.
    ///
    /// # Example
    /// ```
    /// use rpncalc::ast::Function;
    ///
    /// assert_eq!(Function::from_name("cos"), Some(Function::Cos));
    /// assert_eq!(Function::from_name("tan"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.name() == name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Exp => "exp",
        }
    }

    /// Applies the function. Overflow to infinity and NaN propagation are
    /// left to the underlying float operations.
    #[must_use]
    pub fn apply(self, argument: f64) -> f64 {
        match self {
            Self::Sin => argument.sin(),
            Self::Cos => argument.cos(),
            Self::Exp => argument.exp(),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Control-flow words. They can never be used as variable names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Self; 3] = [Self::If, Self::Else, Self::While];

    /// Looks up a keyword by its lower-case spelling.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|keyword| keyword.name() == name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns `true` if `name` (already lower-cased) belongs to the function or
/// keyword vocabulary and therefore cannot name a variable.
///
/// # Example
/// ```
/// use rpncalc::ast::is_reserved_name;
///
/// assert!(is_reserved_name("exp"));
/// assert!(is_reserved_name("while"));
/// assert!(!is_reserved_name("total"));
/// ```
#[must_use]
pub fn is_reserved_name(name: &str) -> bool {
    Function::from_name(name).is_some() || Keyword::from_name(name).is_some()
}

/// An infix expression already translated to postfix order.
///
/// Expressions are compiled once, when their enclosing statement is parsed,
/// and may then be evaluated any number of times (a loop condition is
/// evaluated once per iteration).
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// Tokens in reverse Polish order.
    pub rpn:      Vec<Token>,
    /// Offset of the expression text within its statement.
    pub position: usize,
}

/// A node of the statement tree built by the statement parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A plain expression, evaluated for its value.
    Expression(Expression),
    /// `name = statement`. Yields the stored value.
    Assignment {
        /// Lower-cased target variable.
        name:     String,
        /// Right-hand side, itself a full statement.
        value:    Box<Self>,
        /// Offset of the target name.
        position: usize,
    },
    /// `if (condition) branch [else branch]`.
    If {
        /// Taken when it evaluates to anything but `0.0`.
        condition:   Expression,
        /// Executed when the condition holds.
        then_branch: Box<Self>,
        /// Executed otherwise, if present.
        else_branch: Option<Box<Self>>,
        /// Offset of the `if` keyword.
        position:    usize,
    },
    /// `while (condition) body`.
    While {
        /// Re-evaluated before every iteration.
        condition: Expression,
        /// Loop body.
        body:      Box<Self>,
        /// Offset of the `while` keyword.
        position:  usize,
    },
    /// `{ statement; statement; ... }`, sharing the enclosing environment.
    Block {
        /// Statements in source order, blanks removed.
        statements: Vec<Self>,
        /// Offset of the opening brace.
        position:   usize,
    },
}

impl Statement {
    /// Offset of the first character of the statement.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Expression(expression) => expression.position,
            Self::Assignment { position, .. }
            | Self::If { position, .. }
            | Self::While { position, .. }
            | Self::Block { position, .. } => *position,
        }
    }
}
