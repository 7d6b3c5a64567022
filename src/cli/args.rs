//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::InputFormat;

/// Dot-path lookup and composed clock pipelines
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search upward for pathpipe.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Look up dot-separated paths in a JSON or TOML document
    #[command(visible_alias = "p")]
    Pick {
        #[command(flatten)]
        args: PickArgs,
    },

    /// Print the current civilian time on an interval
    #[command(visible_alias = "c")]
    Clock {
        #[command(flatten)]
        args: ClockArgs,
    },
}

/// Pick command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PickArgs {
    /// Dot-separated paths, e.g. `data.info.fullname.first` or `toppings.0`
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Input document. Use `-` (default) to read stdin.
    #[arg(short, long, default_value = "-", value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Input format (default: from config, then file extension)
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Leave absent paths out of multi-path output instead of printing null
    #[arg(short = 'E', long)]
    pub filter_absent: bool,

    /// Fail when any path is absent
    #[arg(short, long)]
    pub strict: bool,
}

impl PickArgs {
    /// Input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&std::path::Path> {
        (self.input.as_os_str() != "-").then_some(self.input.as_path())
    }
}

/// Clock command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ClockArgs {
    /// Output template; `hh`, `mm`, `ss` and `tt` are replaced
    #[arg(short, long)]
    pub template: Option<String>,

    /// Tick interval in milliseconds
    #[arg(short, long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Stop after this many ticks (default: run until Ctrl+C)
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// Append each reading instead of overwriting the previous one
    #[arg(long)]
    pub no_clear: bool,
}
