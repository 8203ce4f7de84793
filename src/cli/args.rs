// src/cli/args.rs
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mutuals", version, about = "Follow-graph connection recommender")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend a new connection for a user
    Suggest {
        /// Network file to load
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// User to recommend a connection for
        #[arg(value_name = "USER")]
        user: String,
    },
    /// Render the follow graph
    Render {
        /// Network file to load
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Dot)]
        format: OutputFormat,
    },
    /// Summarize users and edges
    Stats {
        /// Network file to load
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Dot,
    Json,
}
