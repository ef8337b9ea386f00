use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `brandloom` - Guided brand strategy wizard for solo businesses.
#[derive(Parser, Debug)]
#[command(name = "brandloom")]
#[command(version = "0.1.0")]
#[command(about = "Turn a short intake interview into a content strategy.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the intake wizard and generate a strategy (default)
    Run {
        /// Override the strategy database path
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Print the most recently saved strategy
    Show {
        /// Override the strategy database path
        #[arg(long)]
        db: Option<PathBuf>,
    },
}
