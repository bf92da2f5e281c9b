/// The evaluator module executes postfix token sequences.
///
/// It owns the variable environment type and the single-pass, stack-based
/// evaluation of reverse Polish sequences, including tolerance-based
/// equality and the built-in functions.
///
/// # Responsibilities
/// - Evaluates postfix sequences against a variable environment.
/// - Reports undefined variables, division by zero and malformed stacks.
pub mod evaluator;
/// The executor module runs whole programs.
///
/// It splits a program into statements, parses each into a statement tree,
/// and walks the tree, threading one mutable environment through every
/// assignment, conditional, loop and block.
///
/// # Responsibilities
/// - Drives the lexer, translator and evaluator per statement.
/// - Enforces the loop iteration cap.
/// - Annotates failures with the index and text of the failing statement.
pub mod executor;
/// The lexer module tokenizes expression text.
///
/// The lexer reads raw text and produces tokens for numbers, variables,
/// functions, keywords, operators and grouping symbols, inserting implicit
/// multiplications where two values are written side by side.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Validates numeric literals and function names.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds statement trees.
///
/// The parser recognizes assignments, conditionals, loops and blocks
/// structurally, directly on the statement text, and compiles every embedded
/// expression to postfix order exactly once.
///
/// # Responsibilities
/// - Classifies statements and validates their syntax.
/// - Matches parentheses and braces, reporting their positions on failure.
pub mod parser;
/// The shunting-yard module converts infix tokens to postfix order.
///
/// # Responsibilities
/// - Applies operator precedence and left associativity.
/// - Disambiguates unary minus and drops unary plus.
/// - Balances parentheses and braces and places function applications.
pub mod shunting_yard;
