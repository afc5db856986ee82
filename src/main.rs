use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use kwic_core::document::DEFAULT_DELIMITER;
use kwic_core::ordering::CaseInsensitiveOrder;
use kwic_core::{IndexConfig, InputSource, KwicIndexer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One rendered line per entry
    Text,
    /// The full index, including the summary
    Json,
}

/// Build a Key-Word-In-Context index from titles and stop words.
#[derive(Parser, Debug)]
#[command(name = "kwic", version, about)]
struct Cli {
    /// Raw index text: `[stop words <delimiter>] titles`
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    text: Option<String>,

    /// Read the raw index text from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Separates the stop-word block from the titles block
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Cli {
    fn source(&self) -> Option<InputSource> {
        match (&self.text, &self.file) {
            (Some(text), _) => Some(InputSource::InlineText(text.clone())),
            (None, Some(path)) => Some(InputSource::NamedFile(path.clone())),
            (None, None) => None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the index
    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(io::stderr)
            .init();
    }

    let source = cli.source().context("either TEXT or --file is required")?;
    let raw = source.resolve()?;

    let indexer = KwicIndexer::new(
        IndexConfig::with_delimiter(cli.delimiter),
        CaseInsensitiveOrder,
    );
    let index = indexer.build(&raw).context("failed to build index")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => {
            for line in index.lines() {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &index)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
