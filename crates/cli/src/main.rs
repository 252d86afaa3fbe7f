//! Command-line front end: read one OCR transcript, print the parsed
//! line-item table.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use slip_core::KeywordSet;

mod render;

/// Parse a receipt OCR transcript into a structured line-item table.
#[derive(Parser)]
#[command(name = "slip", version, about)]
struct Cli {
    /// Transcript file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: Format,

    /// TOML file overriding the reserved keyword set (`words = [...]`)
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let transcript = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let keywords = match &cli.keywords {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            KeywordSet::from_toml_str(&raw)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => KeywordSet::default(),
    };

    let table = slip_parse::Parser::with_keywords(keywords).parse(&transcript);

    match cli.format {
        Format::Json => println!("{}", render::to_json(&table)?),
        Format::Csv => print!("{}", render::to_csv(&table)?),
    }
    Ok(())
}
