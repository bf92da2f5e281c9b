/// Core parsing types and expression compilation.
///
/// Defines the [`core::Fragment`] view over statement text and turns
/// expression fragments into postfix token sequences via the lexer and the
/// shunting-yard translator.
pub mod core;

/// Braced block parsing.
///
/// Splits the inside of `{ ... }` into statements at brace depth zero and
/// parses each of them.
pub mod block;

/// Statement parsing.
///
/// Classifies a statement as a conditional, loop, block, assignment or plain
/// expression and builds the matching [`crate::ast::Statement`] node.
pub mod statement;
