//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "demanda")]
#[command(
    author,
    version,
    about = "Chat advisor routing questions between demand forecasting, document QA and general knowledge"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a single question and print the labeled answer
    Ask {
        /// Question text
        question: Vec<String>,
    },

    /// Interactive chat session with history
    Chat,

    /// Batch demand forecast from a CSV with 'material' and 'fecha' columns
    Batch {
        /// Path to the CSV file
        file: PathBuf,
    },

    /// Show resolved configuration (api keys masked)
    Config,
}
