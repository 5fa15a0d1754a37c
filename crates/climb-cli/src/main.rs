//! climb: evaluate whitespace-separated arithmetic expressions
//!
//! Each positional argument is one expression; with none, expressions are
//! read from stdin one per line.

mod config;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use config::{CliConfig, Overrides};
use report::Report;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Evaluate arithmetic expressions such as `- 2 ^ 2 + ( 1 + 2 ) * 3`.
/// Every token must be separated by whitespace.
#[derive(Parser, Debug)]
#[command(name = "climb", version, about, long_about = None)]
struct Args {
    /// Print one JSON object per expression
    #[arg(long)]
    json: bool,

    /// Print the fully parenthesized tree before the value
    #[arg(long)]
    tree: bool,

    /// Accept `+` as a prefix operator
    #[arg(long)]
    unary_plus: bool,

    /// Maximum nesting depth
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Expressions to evaluate (reads stdin when omitted)
    expressions: Vec<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            json: self.json,
            tree: self.tree,
            unary_plus: self.unary_plus,
            max_depth: self.max_depth,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let outcome = run(Args::parse());
    if let Err(e) = &outcome {
        tracing::error!("{:#}", e);
        eprintln!("climb: {:#}", e);
    }
    ExitCode::from(exit_status(&outcome))
}

/// 0 when every expression succeeded, 1 when any failed, 2 on a fatal error
fn exit_status(outcome: &Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn run(args: Args) -> Result<bool> {
    let config = CliConfig::load(args.config.as_deref(), &args.overrides())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    process(&args.expressions, stdin.lock(), stdout.lock(), &config)
}

/// Evaluate `expressions`, or each non-blank line of `input` when there are none
///
/// Returns whether every expression succeeded
fn process(
    expressions: &[String],
    input: impl BufRead,
    mut out: impl Write,
    config: &CliConfig,
) -> Result<bool> {
    let mut all_ok = true;
    if expressions.is_empty() {
        for line in input.lines() {
            let line = line.context("Failed to read stdin")?;
            if line.trim().is_empty() {
                continue;
            }
            all_ok &= emit(&mut out, &line, config)?;
        }
    } else {
        for source in expressions {
            all_ok &= emit(&mut out, source, config)?;
        }
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(all_ok)
}

fn emit(out: &mut impl Write, source: &str, config: &CliConfig) -> Result<bool> {
    let report = Report::run(source, &config.parser);
    let line = if config.json {
        report.to_json()?
    } else {
        report.to_text(config.tree)
    };
    writeln!(out, "{}", line).context("Failed to write output")?;
    Ok(report.is_success())
}
