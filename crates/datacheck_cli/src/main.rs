mod commands;
mod loader;
mod output;
mod tags;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "datacheck")]
#[command(version, about = "Data contract validation for tabular datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a dataset against a contract and write the report artifacts
    Validate {
        /// Path to the contract file (YAML or TOML)
        contract: String,

        /// Path to the dataset file (CSV)
        data: String,

        /// Output directory for lineage and report artifacts
        #[arg(short, long, default_value = "artifacts")]
        out: String,

        /// Feature table name for the lineage edge
        /// (defaults to features_<contract name>)
        #[arg(long)]
        feature_table: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a contract definition without validating data
    Check {
        /// Path to the contract file (YAML or TOML)
        contract: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    match cli.command {
        Commands::Validate {
            contract,
            data,
            out,
            feature_table,
            format,
        } => commands::validate::execute(&contract, &data, &out, feature_table.as_deref(), &format),

        Commands::Check { contract } => commands::check::execute(&contract),
    }
}
