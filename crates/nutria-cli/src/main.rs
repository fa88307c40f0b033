use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use nutria_cli::{config, load_record};
use nutria_metrics::{AssessmentSummary, DerivedMetrics};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "nutria")]
#[command(about = "Parse a nutritional assessment record and derive clinical indices")]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full assessment summary
    Summary {
        /// Record file
        file: PathBuf,
        /// Vocabulary JSON file (optional)
        #[arg(long)]
        vocabulary: Option<PathBuf>,
        /// Reference date for ages (YYYY-MM-DD), defaults to today
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Print derived metrics only
    Metrics {
        /// Record file
        file: PathBuf,
        /// Vocabulary JSON file (optional)
        #[arg(long)]
        vocabulary: Option<PathBuf>,
    },
    /// Print the parsed record
    Record {
        /// Record file
        file: PathBuf,
    },
    /// Print the vocabulary in effect, or write it out
    Vocabulary {
        /// Vocabulary JSON file to read (optional)
        #[arg(long)]
        vocabulary: Option<PathBuf>,
        /// Write the vocabulary to the config directory
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match cli.command {
        Commands::Summary {
            file,
            vocabulary,
            as_of,
        } => {
            let vocabulary = config::resolve_vocabulary(vocabulary.as_deref())?;
            let as_of = match as_of {
                Some(s) => s
                    .parse::<jiff::civil::Date>()
                    .map_err(|e| eyre::eyre!("invalid --as-of date {s:?}: {e}"))?,
                None => jiff::Zoned::now().date(),
            };
            let record = load_record(&file)?;
            print_json(&AssessmentSummary::build(&record, &vocabulary, as_of))?;
        }
        Commands::Metrics { file, vocabulary } => {
            let vocabulary = config::resolve_vocabulary(vocabulary.as_deref())?;
            let record = load_record(&file)?;
            print_json(&DerivedMetrics::compute(&record, &vocabulary))?;
        }
        Commands::Record { file } => {
            print_json(&load_record(&file)?)?;
        }
        Commands::Vocabulary { vocabulary, save } => {
            let vocabulary = config::resolve_vocabulary(vocabulary.as_deref())?;
            if save {
                config::save_vocabulary(&config::default_vocabulary_path()?, &vocabulary)?;
            } else {
                print_json(&vocabulary)?;
            }
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    // Logs go to stderr; stdout carries the JSON output.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
