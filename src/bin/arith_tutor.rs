//! arith-tutor command-line front-end.
//!
//! Collects operands and an operator, asks the tutor for feedback, and
//! prints it. Logs go to stderr so stdout carries only tutoring output.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use arith_tutor::config::DEFAULT_LOG_FILTER;
use arith_tutor::{FactStore, Feedback, InMemoryFactStore, OutputFormat, Tutor, TutorConfig};

/// Arithmetic tutoring helper
#[derive(Parser)]
#[command(name = "arith-tutor", version, about, long_about = None)]
struct Cli {
    /// Knowledge base JSON file (default: built-in dataset)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `arith_tutor=trace` (overrides $ARITH_TUTOR_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Subcommand (if not provided, starts an interactive session)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Compute an answer and explain the rule
    Ask {
        /// First number
        #[arg(allow_hyphen_values = true)]
        n1: String,
        /// Second number
        #[arg(allow_hyphen_values = true)]
        n2: String,
        /// Operator: + - * /
        #[arg(allow_hyphen_values = true)]
        op: String,
    },

    /// Show the rule for an operator
    Rule {
        #[arg(allow_hyphen_values = true)]
        op: String,
    },

    /// Show the hint for a named error under an operator
    Hint {
        #[arg(allow_hyphen_values = true)]
        op: String,
        /// Error name, e.g. DivideByZero or WrongOperation
        error: String,
    },

    /// Describe the loaded dataset
    Dataset,

    /// Prompt for problems until end of input
    Interactive,
}

#[derive(Serialize)]
struct HintReport<'a> {
    operator: &'a str,
    error: &'a str,
    hint: &'a str,
}

fn resolve_config(cli: &Cli) -> TutorConfig {
    let mut config = TutorConfig::from_env();
    if let Some(path) = &cli.dataset {
        config = config.dataset(path);
    }
    if let Some(filter) = &cli.log_level {
        config = config.log_filter(filter);
    }
    if cli.json {
        config = config.output(OutputFormat::Json);
    }
    config
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("warning: invalid log filter '{filter}': {e}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("serialize output: {e}"))?;
    println!("{json}");
    Ok(())
}

fn print_feedback(feedback: &Feedback, output: OutputFormat) -> Result<(), String> {
    match output {
        OutputFormat::Json => print_json(feedback),
        OutputFormat::Text => {
            println!("[{}]", feedback.title());
            println!("{}", feedback.render());
            Ok(())
        }
    }
}

fn ask(
    tutor: Tutor<'_, InMemoryFactStore>,
    n1: &str,
    n2: &str,
    op: &str,
    output: OutputFormat,
) -> Result<ExitCode, String> {
    let feedback = tutor.tutor_raw(n1, n2, op);
    print_feedback(&feedback, output)?;
    Ok(if feedback.is_blocked() {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn rule(store: &InMemoryFactStore, op: &str, output: OutputFormat) -> Result<ExitCode, String> {
    let op = op.trim();
    let id = store.operation_by_symbol(op).map_err(|e| e.to_string())?;
    let text = arith_tutor::explain_rule(store, id);
    match output {
        OutputFormat::Json => {
            print_json(&serde_json::json!({ "operator": op, "rule": text }))?;
        }
        OutputFormat::Text => println!("{text}"),
    }
    Ok(ExitCode::SUCCESS)
}

fn hint(
    store: &InMemoryFactStore,
    op: &str,
    error_name: &str,
    output: OutputFormat,
) -> Result<ExitCode, String> {
    let op = op.trim();
    let id = store.operation_by_symbol(op).map_err(|e| e.to_string())?;
    let hint = arith_tutor::hint_for(store, id, error_name);
    match output {
        OutputFormat::Json => print_json(&HintReport {
            operator: op,
            error: error_name,
            hint,
        })?,
        OutputFormat::Text if hint.is_empty() => {
            eprintln!("no '{error_name}' hint for operator '{op}'");
            return Ok(ExitCode::from(1));
        }
        OutputFormat::Text => println!("{hint}"),
    }
    Ok(ExitCode::SUCCESS)
}

fn describe(store: &InMemoryFactStore, output: OutputFormat) -> Result<ExitCode, String> {
    let summary = store.summary();
    match output {
        OutputFormat::Json => print_json(summary)?,
        OutputFormat::Text => {
            println!("dataset:     {} (v{})", summary.name, summary.version);
            println!("triples:     {}", summary.triples);
            println!("operations:  {}", summary.operations);
            println!("rules:       {}", summary.rules);
            println!("error types: {}", summary.error_types);
            println!("fingerprint: {}", summary.fingerprint);
            for (_, op) in store.operations() {
                println!("  {} {} ({})", op.kind().symbol(), op.key(), op.kind());
            }
            for (_, error) in store.error_types() {
                println!("  ! {} ({})", error.key(), error.name().unwrap_or("unnamed"));
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> Result<Option<String>, String> {
    print!("{label}");
    io::stdout().flush().map_err(|e| format!("flush stdout: {e}"))?;
    match lines.next() {
        Some(Ok(line)) => Ok(Some(line)),
        Some(Err(e)) => Err(format!("read stdin: {e}")),
        None => Ok(None),
    }
}

fn interactive(
    tutor: Tutor<'_, InMemoryFactStore>,
    output: OutputFormat,
) -> Result<ExitCode, String> {
    println!("Arithmetic Intelligent Tutoring System");
    println!("Enter two numbers + an operation. End input (Ctrl-D) to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let Some(n1) = prompt(&mut lines, "\nNumber 1: ")? else { break };
        let Some(n2) = prompt(&mut lines, "Number 2: ")? else { break };
        let Some(op) = prompt(&mut lines, "Operation (+ - * /): ")? else { break };
        println!();
        print_feedback(&tutor.tutor_raw(&n1, &n2, &op), output)?;
    }
    println!();
    Ok(ExitCode::SUCCESS)
}

fn run(cli: Cli, config: &TutorConfig) -> Result<ExitCode, String> {
    let store = config.open_store().map_err(|e| e.to_string())?;
    debug!(fingerprint = %store.summary().fingerprint, "fact store ready");
    let tutor = Tutor::new(&store);
    let output = config.output;

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Ask { n1, n2, op } => ask(tutor, &n1, &n2, &op, output),
        Command::Rule { op } => rule(&store, &op, output),
        Command::Hint { op, error } => hint(&store, &op, &error, output),
        Command::Dataset => describe(&store, output),
        Command::Interactive => interactive(tutor, output),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = resolve_config(&cli);
    init_logging(&config.log_filter);

    match run(cli, &config) {
        Ok(code) => code,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::from(2)
        }
    }
}
