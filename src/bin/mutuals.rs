// src/bin/mutuals.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use mutuals_core::cli::{self, Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = dispatch(&cli)?;
    println!("{output}");
    Ok(())
}

fn dispatch(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Suggest { file, user } => cli::handle_suggest(file, user),
        Commands::Render { file, format } => cli::handle_render(file, *format),
        Commands::Stats { file } => cli::handle_stats(file),
    }
}
