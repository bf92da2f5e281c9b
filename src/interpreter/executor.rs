use tracing::{debug, trace, warn};

use crate::{
    ast::{Expression, Statement},
    error::Error,
    interpreter::{
        evaluator::{
            core::{EQUALITY_TOLERANCE, Environment, evaluate_with_tolerance},
            operator::is_truthy,
        },
        parser::{core::Fragment, statement::parse_statement},
    },
    util::source::{STATEMENT_SEPARATOR, split_top_level, strip_comments},
};

/// Default cap on the iterations of a single `while` loop.
pub const MAX_LOOP_ITERATIONS: usize = 10_000;

/// Tunables for a program run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Iterations a single `while` loop may run before it is aborted with
    /// [`Error::LoopIterationLimitExceeded`].
    pub max_loop_iterations: usize,
    /// Absolute tolerance used by `==` and `!=`.
    pub equality_tolerance:  f64,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_loop_iterations: MAX_LOOP_ITERATIONS,
               equality_tolerance:  EQUALITY_TOLERANCE, }
    }
}

/// Runs programs against a single variable environment.
///
/// ## Usage
///
/// An `Interpreter` owns the environment for as long as it lives. The crate's
/// `evaluate*` functions create a fresh one per call; keeping an interpreter
/// around lets later programs see variables assigned by earlier ones.
///
/// ```
/// use rpncalc::interpreter::executor::{Interpreter, Options};
///
/// let mut interpreter = Interpreter::new(Options::default());
///
/// assert_eq!(interpreter.run("x = 2; y = x * 3").unwrap(), [2.0, 6.0]);
/// assert_eq!(interpreter.run("x + y").unwrap(), [8.0]);
/// assert_eq!(interpreter.environment().get("y"), Some(6.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    environment: Environment,
    options:     Options,
}

impl Interpreter {
    /// Creates an interpreter with an empty environment.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { environment: Environment::new(),
               options }
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Runs a program and returns one value per non-blank top-level
    /// statement.
    ///
    /// Comments are stripped first, then the program is split on `;` outside
    /// of braces. Each statement is parsed and executed before the next one
    /// is looked at, so assignments made by earlier statements persist even
    /// when a later one fails.
    ///
    /// # Errors
    /// The first failure, wrapped in [`Error::Statement`] with the 1-based
    /// index and trimmed text of the statement that raised it.
    pub fn run(&mut self, program: &str) -> Result<Vec<f64>, Error> {
        let program = strip_comments(program);
        let statements = split_top_level(&program, STATEMENT_SEPARATOR)
            .into_iter()
            .map(|(_, text)| text.trim())
            .filter(|text| !text.is_empty());

        let mut values = Vec::new();
        for (index, text) in (1..).zip(statements) {
            let value = self.run_statement(text)
                            .map_err(|source| Error::Statement { index,
                                                                 text: text.to_string(),
                                                                 source: Box::new(source) })?;

            debug!(index, statement = text, value, "statement executed");
            values.push(value);
        }

        Ok(values)
    }

    /// Parses and executes one top-level statement.
    fn run_statement(&mut self, text: &str) -> Result<f64, Error> {
        let statement = parse_statement(Fragment::new(text))?;
        self.execute(&statement)
    }

    /// Executes a parsed statement and returns its value.
    ///
    /// - An expression yields its value.
    /// - An assignment yields the value it stored.
    /// - A conditional yields the value of the branch it took. When the
    ///   condition is false and there is no `else`, it yields the condition's
    ///   value, `0.0`.
    /// - A loop yields the value of its last body execution, or the final
    ///   condition value, `0.0`, when the body never ran.
    /// - A block yields the value of its last statement, or `0.0` when empty.
    ///
    /// # Errors
    /// Anything raised by evaluation, plus
    /// [`Error::LoopIterationLimitExceeded`] for a runaway loop.
    pub fn execute(&mut self, statement: &Statement) -> Result<f64, Error> {
        match statement {
            Statement::Expression(expression) => self.eval_expression(expression),
            Statement::Assignment { name, value, .. } => {
                let value = self.execute(value)?;
                self.environment.set(name.as_str(), value);
                Ok(value)
            },
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => {
                let condition = self.eval_expression(condition)?;
                if is_truthy(condition) {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(condition)
                }
            },
            Statement::While { condition, body, .. } => {
                self.execute_while(condition, body, statement.position())
            },
            Statement::Block { statements, .. } => {
                let mut last = 0.0;
                for statement in statements {
                    last = self.execute(statement)?;
                }
                Ok(last)
            },
        }
    }

    /// Runs a `while` loop, re-evaluating the condition before every
    /// iteration.
    ///
    /// `position` is the offset of the `while` keyword, used for diagnostics.
    fn execute_while(&mut self,
                     condition: &Expression,
                     body: &Statement,
                     position: usize)
                     -> Result<f64, Error> {
        let limit = self.options.max_loop_iterations;
        let mut iterations = 0;
        let mut last = None;

        loop {
            let value = self.eval_expression(condition)?;
            if !is_truthy(value) {
                return Ok(last.unwrap_or(value));
            }

            if iterations == limit {
                warn!(limit, position, "loop iteration limit exceeded");
                return Err(Error::LoopIterationLimitExceeded { limit });
            }
            iterations += 1;

            trace!(iteration = iterations, "loop iteration");
            last = Some(self.execute(body)?);
        }
    }

    fn eval_expression(&self, expression: &Expression) -> Result<f64, Error> {
        Ok(evaluate_with_tolerance(&expression.rpn,
                                   &self.environment,
                                   self.options.equality_tolerance)?)
    }
}
