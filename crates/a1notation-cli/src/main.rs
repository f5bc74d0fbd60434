//! a1 CLI - inspect and check A1 notation references

use a1notation::prelude::*;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "a1")]
#[command(author, version, about = "Spreadsheet A1 notation inspection tool")]
struct Cli {
    /// Log classifier decisions (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse references and show their shape and dimensions
    Parse {
        /// References such as A1, 'My Sheet'!A1:D5, A:C, 5:9
        #[arg(required = true)]
        notations: Vec<String>,

        /// Print one JSON object per reference
        #[arg(long)]
        json: bool,
    },

    /// Convert column letters to indices, or 0-based indices to letters
    Column {
        /// Letters (AA) or a 0-based index (26)
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Check that each reference renders back to the exact input
    Check {
        /// References to check
        #[arg(required = true)]
        notations: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Parse { notations, json } => parse_notations(&notations, json),
        Commands::Column { values } => convert_columns(&values),
        Commands::Check { notations } => check_notations(&notations),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_notations(notations: &[String], json: bool) -> Result<()> {
    for text in notations {
        let notation =
            Notation::parse(text).with_context(|| format!("Failed to parse '{text}'"))?;
        tracing::debug!("Parsed '{}' as {}", text, notation.kind());

        if json {
            let value = serde_json::json!({
                "notation": notation,
                "kind": notation.kind().as_str(),
                "sheet": notation.sheet(),
                "short": notation.to_short_string(),
                "width": notation.width().ok(),
                "height": notation.height().ok(),
            });
            println!("{value}");
        } else {
            print_notation(&notation);
        }
    }
    Ok(())
}

fn print_notation(notation: &Notation) {
    println!("{notation}");
    println!("  Kind:   {}", notation.kind());
    if let Some(sheet) = notation.sheet() {
        println!("  Sheet:  {}", sheet);
    }
    println!("  Short:  {}", notation.to_short_string());
    println!("  Width:  {}", dimension(notation.width()));
    println!("  Height: {}", dimension(notation.height()));
}

fn dimension(size: a1notation::Result<u32>) -> String {
    match size {
        Ok(n) => n.to_string(),
        Err(_) => "unbounded".to_string(),
    }
}

fn convert_columns(values: &[String]) -> Result<()> {
    for value in values {
        let column = match value.parse::<u32>() {
            Ok(index) => Column::from_index0(index)?,
            Err(_) => Column::new(value).with_context(|| format!("Invalid column '{value}'"))?,
        };
        println!(
            "{}\tindex0={}\tindex1={}",
            column,
            column.index0(),
            column.index1()
        );
    }
    Ok(())
}

fn check_notations(notations: &[String]) -> Result<()> {
    let mut failures = 0;

    for text in notations {
        match Notation::parse(text) {
            Ok(notation) => {
                let rendered = notation.to_a1_string();
                if rendered == *text {
                    println!("ok      {text}");
                } else {
                    println!("changed {text} -> {rendered}");
                    failures += 1;
                }
            }
            Err(e) => {
                println!("error   {text}: {e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} references did not round-trip", failures, notations.len());
    }
    Ok(())
}
