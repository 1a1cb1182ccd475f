//! Salesboard CLI - sales dashboard aggregations from CSV, JSON and spreadsheets.

mod colors;
mod config;
mod dataset;
mod export;
mod facets;
mod load;
mod render;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::dataset::FilterArgs;

#[derive(Parser)]
#[command(name = "salesboard")]
#[command(about = "Sales dashboard aggregations from CSV, JSON and spreadsheet exports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the loaded record set
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a file, replacing the stored record set
    Load {
        /// Path to a .csv, .json, .jsonl or spreadsheet file
        file: PathBuf,
    },

    /// Replace the stored record set with the bundled sample
    Sample,

    /// Remove the stored record set
    Clear,

    /// Print the dashboard views for the current filters
    Report {
        /// Read records from this file instead of the store
        #[arg(long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,

        /// Shape the views for a small display
        #[arg(long)]
        compact: bool,

        /// Print the views as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the categories and regions available for filtering
    Facets {
        /// Read records from this file instead of the store
        #[arg(long)]
        input: Option<PathBuf>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the filtered records as CSV
    Export {
        /// Output path for the CSV file
        #[arg(short, long)]
        output: PathBuf,

        /// Read records from this file instead of the store
        #[arg(long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(store) = cli.store {
        config.store_dir = Some(store);
    }

    match cli.command {
        Commands::Load { file } => load::execute(&config, &file)?,

        Commands::Sample => load::execute_sample(&config)?,

        Commands::Clear => load::execute_clear(&config)?,

        Commands::Report {
            input,
            filters,
            compact,
            json,
        } => report::execute(&config, input.as_deref(), &filters, compact, json)?,

        Commands::Facets { input, json } => facets::execute(&config, input.as_deref(), json)?,

        Commands::Export {
            output,
            input,
            filters,
        } => export::execute(&config, input.as_deref(), &filters, &output)?,
    }

    Ok(())
}
