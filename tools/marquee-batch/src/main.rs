//! Reads release names from stdin, one per line, and prints one JSON
//! object per line with the parsed fields and the canonical label.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use marquee_core::{
    generate_label, LabelFields, LanguageSeparator, ParsedMetadata, ParserConfig, Quality,
    ReleaseParser,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "marquee-parse")]
#[command(about = "Parse release names from stdin into JSON lines")]
#[command(version)]
struct Cli {
    /// Language separator used in labels (plus or comma)
    #[arg(short, long, default_value_t = LanguageSeparator::Plus)]
    separator: LanguageSeparator,

    /// Pretty-print each JSON object
    #[arg(short, long)]
    pretty: bool,

    /// Reference year for the year window (defaults to the current year)
    #[arg(long)]
    current_year: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParseOutput {
    pub input: String,
    pub title: Option<String>,
    pub year: Option<u16>,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub quality: Option<Quality>,
    pub languages: Vec<String>,
    pub size: Option<String>,
    pub label: Option<String>,
    pub error: Option<String>,
}

impl ParseOutput {
    fn parsed(input: &str, parsed: ParsedMetadata, separator: LanguageSeparator) -> Self {
        let label = generate_label(&LabelFields::from(&parsed), separator);
        Self {
            input: input.to_string(),
            title: Some(parsed.title),
            year: parsed.year,
            season: parsed.season,
            episode: parsed.episode,
            quality: parsed.quality,
            languages: parsed.languages,
            size: parsed.size,
            label: Some(label),
            error: None,
        }
    }

    fn failed(input: &str, error: String) -> Self {
        Self {
            input: input.to_string(),
            title: None,
            year: None,
            season: None,
            episode: None,
            quality: None,
            languages: Vec::new(),
            size: None,
            label: None,
            error: Some(error),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = ParserConfig::new();
    if let Some(year) = cli.current_year {
        config = config.with_current_year(year);
    }
    let parser = ReleaseParser::new(config).context("failed to build release parser")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let output = match parser.parse(line) {
            Ok(parsed) => ParseOutput::parsed(line, parsed, cli.separator),
            Err(e) => {
                debug!(input = line, error = %e, "parse failed");
                ParseOutput::failed(line, e.to_string())
            }
        };

        let json = if cli.pretty {
            serde_json::to_string_pretty(&output)
        } else {
            serde_json::to_string(&output)
        }
        .context("failed to serialize output")?;
        writeln!(out, "{json}").context("failed to write stdout")?;
    }

    Ok(())
}
