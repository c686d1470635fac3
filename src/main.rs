use std::io::{self, BufRead, Write};

use clap::Parser;
use reckon::{
    engine::{evaluator::Evaluator, format::Formatted, stack::DEFAULT_CAPACITY},
    session::Session,
};
use tracing_subscriber::EnvFilter;

/// reckon evaluates infix arithmetic expressions with `+ - * / ^ %` and
/// parentheses.
///
/// Without an expression it starts an interactive session where `ans` refers
/// to the last result and `mem` to the memory register.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum number of pending operands or operators during evaluation.
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// Prints debug logs to stderr. `RUST_LOG` takes precedence when set.
    #[arg(short, long)]
    verbose: bool,

    /// Expression to evaluate once instead of starting a session.
    expression: Option<String>,
}

/// A line typed into the interactive session.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    History,
    ClearHistory,
    StoreMemory,
    RecallMemory,
    ClearMemory,
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" => Self::Quit,
            "history" => Self::History,
            "clear" => Self::ClearHistory,
            "ms" => Self::StoreMemory,
            "mr" => Self::RecallMemory,
            "mc" => Self::ClearMemory,
            _ => Self::Evaluate(line),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut session = Session::with_evaluator(Evaluator::with_capacity(args.capacity));

    if let Some(expression) = args.expression {
        match session.evaluate(&expression) {
            Ok(value) => println!("{}", Formatted(value)),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return Ok(());
    }

    run_interactive(&mut session)
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();
}

fn run_interactive(session: &mut Session) -> anyhow::Result<()> {
    println!("Enter expressions such as '(3 + 4) * 5' or 'ans ^ 2'.");
    println!("Commands: history, clear, ms, mr, mc, quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("=> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Command::parse(line) {
            Command::Quit => break,
            Command::History => {
                if session.history().len() == 0 {
                    println!("(no history)");
                }
                for (index, entry) in session.history().enumerate() {
                    println!("{:>3}: {entry}", index + 1);
                }
            },
            Command::ClearHistory => session.clear_history(),
            Command::StoreMemory => {
                session.store_memory(session.last_result());
                println!("M = {}", Formatted(session.recall_memory()));
            },
            Command::RecallMemory => println!("M = {}", Formatted(session.recall_memory())),
            Command::ClearMemory => session.clear_memory(),
            Command::Evaluate(expression) => match session.evaluate(expression) {
                Ok(value) => println!("{}", Formatted(value)),
                Err(e) => println!("ERROR: {e}"),
            },
        }
    }

    Ok(())
}
