//! Pathpipe - dot-path lookup and composed clock pipelines.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use pathpipe::cli::{self, Cli, Commands};
use pathpipe::config::Config;
use pathpipe::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);
    let config = Config::load(&cli)?;

    match &cli.command {
        Commands::Pick { args } => cli::pick::run_pick(args, &config),
        Commands::Clock { args } => cli::clock::run_clock(args, &config),
    }
}
