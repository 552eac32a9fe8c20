use std::{
    fs,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use runic::Interpreter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// runic evaluates tiny single-character expression programs.
///
/// With no expressions and no file, runic starts an interactive session on
/// standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate every non-empty line of this file, in order.
    #[arg(short, long, conflicts_with = "expressions")]
    file: Option<PathBuf>,

    /// Expressions to evaluate, in order, on one shared interpreter.
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut interpreter = Interpreter::new();

    if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        let lines = script.lines().filter(|line| !line.trim().is_empty());
        return run_batch(&mut interpreter, lines);
    }

    if args.expressions.is_empty() {
        return repl(&mut interpreter);
    }

    run_batch(&mut interpreter, args.expressions.iter().map(String::as_str))
}

/// Logging stays off unless `RUST_LOG` is set, e.g. `RUST_LOG=runic=trace`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn run_batch<'a>(interpreter: &mut Interpreter, sources: impl Iterator<Item = &'a str>) -> ExitCode {
    for source in sources {
        match interpreter.evaluate(source) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            },
        }
    }
    ExitCode::SUCCESS
}

fn repl(interpreter: &mut Interpreter) -> ExitCode {
    println!("Welcome to the runic interpreter");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!(">>> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            },
            None => return ExitCode::SUCCESS,
        };

        match interpreter.evaluate(&line) {
            Ok(value) => println!("--> {value}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }
}
