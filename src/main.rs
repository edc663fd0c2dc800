use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use zcalc::calculator::{NumericMode, copy_to_clipboard};
use zcalc::{Config, Session, repl};

/// Scientific calculator. Multiplication is written `x`, trig functions take degrees.
#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about)]
struct Cli {
    /// Expressions to evaluate. Starts an interactive prompt when omitted.
    expressions: Vec<String>,

    /// Path to a config file (defaults to $XDG_CONFIG_HOME/zcalc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fail on division by zero and other non-finite results
    #[arg(long)]
    strict: bool,

    /// Print results as JSON objects
    #[arg(long)]
    json: bool,

    /// Copy the last successful result to the clipboard
    #[arg(long)]
    copy: bool,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.strict {
        config.numeric_mode = NumericMode::Strict;
    }
    info!(?config, "starting");

    let mut session = Session::new(&config);

    if cli.expressions.is_empty() {
        println!("zcalc v{}", env!("CARGO_PKG_VERSION"));
        println!("Type 'help' for help, 'exit' to quit");
        repl::run(&mut session, io::stdin().lock(), io::stdout())?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut stdout = io::stdout().lock();
    let mut failed = false;
    let mut last_success = None;

    for expression in &cli.expressions {
        session.append(expression);
        let result = session.evaluate();

        if cli.json {
            let line = serde_json::to_string(&result).context("Failed to serialize result")?;
            writeln!(stdout, "{}", line)?;
        } else if result.is_success() {
            writeln!(stdout, "{} = {}", result.expression(), result.display())?;
        } else {
            writeln!(stdout, "{} = {}", result.expression(), session.display())?;
            eprintln!("{}", result.display());
        }

        match result.clipboard() {
            Some(text) => last_success = Some(text.to_string()),
            None => failed = true,
        }
    }

    if cli.copy
        && let Some(text) = last_success
    {
        copy_to_clipboard(&text)?;
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
