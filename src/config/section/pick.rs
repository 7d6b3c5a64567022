//! `[pick]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [pick]
//! pretty = false      # Pretty-print JSON output
//! format = "auto"     # Input format: auto | json | toml
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Input document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Decide from the file extension (`.toml` → TOML, otherwise JSON)
    #[default]
    Auto,
    Json,
    Toml,
}

impl InputFormat {
    /// Resolve `Auto` against an input path. Stdin (`None`) is JSON.
    pub fn resolve(self, path: Option<&Path>) -> Self {
        match self {
            Self::Auto => match path.and_then(Path::extension) {
                Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
                _ => Self::Json,
            },
            other => other,
        }
    }
}

/// `pick` command defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,

    /// Input format.
    pub format: InputFormat,
}
