mod repl;

use crate::repl::{Diagnostics, Repl};
use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use shunt_calc::interpreter::{evaluate_expression, format_value};
use std::io;

/// Calculates arithmetic expressions.
/// Starts an interactive prompt when no expression is given.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to calculate, e.g. "(3 + 4) * 2"
    expression: Option<String>,

    /// Print the tokens of each expression
    #[clap(long)]
    tokens: bool,

    /// Print each expression in reverse polish notation
    #[clap(long)]
    rpn: bool,

    #[clap(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let diagnostics = Diagnostics {
        tokens: args.tokens,
        postfix: args.rpn,
    };

    match args.expression {
        Some(expression) => {
            let mut stdout = io::stdout();
            diagnostics.write(&expression, &mut stdout)?;
            let value = evaluate_expression(&expression)
                .with_context(|| format!("Could not calculate '{}'", expression))?;
            println!("{}", format_value(value));
            Ok(())
        }
        None => {
            let stdin = io::stdin();
            let mut repl = Repl::new(stdin.lock(), io::stdout(), diagnostics);
            repl.run()
        }
    }
}
