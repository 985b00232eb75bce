use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{info, warn};

use event_mapper::config::Config;
use event_mapper::logging;
use event_mapper::types::parse_records;
use event_mapper::MapperRegistry;

#[derive(Parser)]
#[command(name = "event_mapper")]
#[command(about = "Maps raw ticketing event records into the uniform event schema")]
#[command(version)]
struct Cli {
    /// Path to a config.toml (defaults to $EVENT_MAPPER_CONFIG or ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a JSON array of raw records and print the events as JSON
    Map {
        /// Input file, or `-` for stdin
        #[arg(long, default_value = "-")]
        input: String,
        /// Source id of the records (defaults to mapping.default_source)
        #[arg(long)]
        source: Option<String>,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// List registered sources
    Sources,
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read records from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read input file '{}'", input))
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Keep the guard in scope so file logs are flushed on exit
    let _guard = logging::init_logging(&config.logging);

    let registry = MapperRegistry::new();

    match cli.command {
        Commands::Map { input, source, pretty } => {
            let source = source.unwrap_or_else(|| config.mapping.default_source.clone());
            let records = parse_records(&read_input(&input)?)
                .with_context(|| format!("Input '{}' is not a JSON record batch", input))?;

            let report = registry.map_batch_with_report(&source, &records)?;
            if !report.failures.is_empty() {
                warn!(source = %source, skipped = report.failures.len(), "Some records were skipped");
            }
            info!(source = %source, mapped = report.events.len(), "Mapping complete");

            let output = if pretty || config.mapping.pretty {
                serde_json::to_string_pretty(&report.events)?
            } else {
                serde_json::to_string(&report.events)?
            };
            println!("{}", output);
        }
        Commands::Sources => {
            for source in registry.list_sources() {
                println!("{}", source);
            }
        }
    }

    Ok(())
}
