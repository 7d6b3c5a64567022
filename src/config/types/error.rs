//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file is not valid TOML")]
    Toml(#[from] toml::de::Error),

    // Rendered in full by Display, so it carries no source
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One invalid config value and how to fix it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: String,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hint = Style::new().yellow();
        write!(
            f,
            "  {}: {}\n    {} {}",
            self.field,
            self.message,
            "hint:".if_supports_color(Stream::Stderr, |s| s.style(hint)),
            self.hint
        )
    }
}

/// Validation errors collected across all sections, reported together.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an invalid `field`.
    pub fn error(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: hint.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Err(self)` when anything was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = Style::new().red().bold();
        let noun = if self.len() == 1 { "error" } else { "errors" };
        write!(
            f,
            "{}",
            format!("invalid config ({} {noun}):", self.len())
                .if_supports_color(Stream::Stderr, |s| s.style(header))
        )?;
        for err in &self.errors {
            write!(f, "\n{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("pathpipe.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(io_err.to_string(), "cannot read config `pathpipe.toml`");
    }

    #[test]
    fn test_diagnostics_render_plain_without_color() {
        owo_colors::set_override(false);

        let mut diag = ConfigDiagnostics::new();
        diag.error(
            FieldPath::new("clock.template"),
            "must not be empty",
            "the default is \"hh:mm:ss tt\"",
        );
        diag.error(
            FieldPath::new("clock.interval_ms"),
            "must be greater than 0",
            "use 1000 for one tick per second",
        );

        assert_eq!(diag.len(), 2);
        assert_eq!(
            diag.to_string(),
            "invalid config (2 errors):\n\
             \x20 `clock.template`: must not be empty\n\
             \x20   hint: the default is \"hh:mm:ss tt\"\n\
             \x20 `clock.interval_ms`: must be greater than 0\n\
             \x20   hint: use 1000 for one tick per second"
        );
        assert!(diag.into_result().is_err());
    }

    #[test]
    fn test_single_diagnostic_header() {
        owo_colors::set_override(false);

        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("clock.interval_ms"), "must be > 0", "use 1000");
        assert!(diag.to_string().starts_with("invalid config (1 error):"));
    }

    #[test]
    fn test_empty_diagnostics_into_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
