use std::fs;

use clap::Parser;
use rpncalc::{
    Options, evaluate_all_with,
    interpreter::{evaluator::core::EQUALITY_TOLERANCE, executor::MAX_LOOP_ITERATIONS},
};
use tracing_subscriber::EnvFilter;

/// rpncalc evaluates arithmetic programs with variables, comparisons and
/// bounded `if`/`while` control flow.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as a path and evaluate the file it names.
    #[arg(short, long)]
    file: bool,

    /// Print the value of every top-level statement instead of only the last.
    #[arg(short, long)]
    all: bool,

    /// Iterations a single `while` loop may run before it is aborted.
    #[arg(long, default_value_t = MAX_LOOP_ITERATIONS)]
    max_iterations: usize,

    /// Absolute tolerance used by `==` and `!=`.
    #[arg(long, default_value_t = EQUALITY_TOLERANCE)]
    tolerance: f64,

    contents: String,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let program = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let options = Options { max_loop_iterations: args.max_iterations,
                            equality_tolerance:  args.tolerance, };

    match evaluate_all_with(&program, &options) {
        Ok(values) if args.all => {
            for (index, value) in values.iter().enumerate() {
                println!("Expression {}: {value}", index + 1);
            }
        },
        Ok(values) => {
            if let Some(value) = values.last() {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        },
    }
}
