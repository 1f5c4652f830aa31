use anyhow::{Context, Result};
use log::{debug, info};
use shunt_calc::interpreter::lexer::tokenize;
use shunt_calc::interpreter::parser::parse;
use shunt_calc::interpreter::{evaluate_expression, format_value, tokens_to_string};
use std::io::{BufRead, Write};

const PROMPT: &str = "> ";
const EXIT_COMMAND: &str = "exit";

/// What to print besides the value of each expression.
#[derive(Debug, Default, Copy, Clone)]
pub struct Diagnostics {
    pub tokens: bool,
    pub postfix: bool,
}

impl Diagnostics {
    /// Writes the requested intermediate forms of the expression.
    /// Nothing is written for a form that fails to build; the error is
    /// reported when the expression is calculated.
    pub fn write(&self, expression: &str, output: &mut impl Write) -> Result<()> {
        if self.tokens {
            if let Ok(tokens) = tokenize(expression) {
                writeln!(output, "tokens: {}", tokens_to_string(&tokens)?)?;
            }
        }
        if self.postfix {
            if let Ok(postfix_tokens) = parse(expression) {
                writeln!(output, "rpn: {}", tokens_to_string(&postfix_tokens)?)?;
            }
        }
        Ok(())
    }
}

/// Reads expressions line by line and writes their values,
/// until `exit` or the end of the input.
pub struct Repl<R, W> {
    input: R,
    output: W,
    diagnostics: Diagnostics,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, diagnostics: Diagnostics) -> Repl<R, W> {
        Repl {
            input,
            output,
            diagnostics,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        while let Some(line) = self.prompt()? {
            if line == EXIT_COMMAND {
                info!("Exit requested");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            self.calculate(&line)?;
        }
        Ok(())
    }

    /// Prints the prompt and reads one line, without its line terminator.
    ///
    /// returns: `None` at the end of the input.
    fn prompt(&mut self) -> Result<Option<String>> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input line")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let line = line.trim_end_matches(|character: char| character == '\n' || character == '\r');
        Ok(Some(line.to_string()))
    }

    fn calculate(&mut self, expression: &str) -> Result<()> {
        self.diagnostics.write(expression, &mut self.output)?;
        match evaluate_expression(expression) {
            Ok(value) => writeln!(self.output, "{}", format_value(value))?,
            Err(error) => {
                debug!("Calculation of {:?} failed", expression);
                writeln!(self.output, "Error - {}", error)?
            }
        }
        Ok(())
    }
}
