use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};

use lotus::{Interpreter, LotusError, Repl};

#[derive(Parser)]
#[command(author, version, about = "Lotus language interpreter")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a Lotus script file, one expression per line
    Run { script: PathBuf },
    /// Start an interactive REPL session
    Repl,
    /// Evaluate a snippet of Lotus code and print the result
    Eval { source: String },
}

fn main() -> Result<(), LotusError> {
    let args = Args::parse();
    match args.command.unwrap_or(Command::Repl) {
        Command::Run { script } => run_script(script),
        Command::Repl => {
            let mut repl = Repl::new();
            repl.run()
        }
        Command::Eval { source } => {
            let mut interpreter = Interpreter::new();
            let value = interpreter.eval_source(&source)?;
            println!("{value}");
            Ok(())
        }
    }
}

/// Feeds the script to the interpreter line by line, like a batch REPL
/// session: values go to stdout, grammar diagnostics to stderr, and a bad
/// line never stops the rest of the script.
fn run_script(path: PathBuf) -> Result<(), LotusError> {
    let source = fs::read_to_string(&path)?;
    let mut interpreter = Interpreter::new();
    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match interpreter.eval_source(trimmed) {
            Ok(value) => println!("{value}"),
            Err(LotusError::Diagnostic(diag)) => eprintln!("{diag}"),
            Err(other) => return Err(other),
        }
    }
    Ok(())
}
