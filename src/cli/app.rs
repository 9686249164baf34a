//! Main CLI application structure

use std::fs;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;

use super::output::{Output, OutputFormat};
use crate::domain;

#[derive(Parser)]
#[command(name = "depline")]
#[command(author, version, about = "Resolve task dependency lists into execution order")]
pub struct Cli {
    /// Input file with dependency blocks ("-" reads standard input)
    #[arg(default_value = "-")]
    pub input: String,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("depline starting");

    let source = read_source(&cli.input)?;

    // Split on '\n' without further normalization: a trailing newline
    // yields one final empty line, which closes the last block.
    let lines: Vec<&str> = source.split('\n').collect();
    output.verbose_ctx("input", &format!("read {} lines", lines.len()));

    let resolved = domain::resolve_lines(lines)?;
    output.verbose_ctx("resolve", &format!("resolved {} blocks", resolved.len()));

    if output.is_json() {
        output.data(&resolved);
    } else {
        for line in &resolved {
            println!("{}", line);
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Reads the whole input source; `-` means standard input.
fn read_source(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read standard input")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read input file: {}", input))
    }
}
