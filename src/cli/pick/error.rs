//! Pick command errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("IO error when reading stdin")]
    Stdin(#[source] std::io::Error),

    #[error("input is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("input is not valid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("absent: {}", .0.join(", "))]
    Absent(Vec<String>),
}
