//! `[clock]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [clock]
//! template = "hh:mm:ss tt"    # hh, mm, ss, tt are replaced once each
//! interval_ms = 1000          # Tick interval
//! clear = true                # Overwrite the previous reading
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_TEMPLATE;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Clock display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Output template.
    pub template: String,

    /// Tick interval in milliseconds.
    pub interval_ms: u64,

    /// Overwrite the previous reading instead of appending lines.
    pub clear: bool,
}

impl ClockConfig {
    pub const TEMPLATE: FieldPath = FieldPath::new("clock.template");
    pub const INTERVAL_MS: FieldPath = FieldPath::new("clock.interval_ms");

    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.template.is_empty() {
            diag.error(
                Self::TEMPLATE,
                "must not be empty",
                format!("the default is \"{DEFAULT_TEMPLATE}\""),
            );
        }
        if self.interval_ms == 0 {
            diag.error(
                Self::INTERVAL_MS,
                "must be greater than 0",
                "use 1000 for one tick per second",
            );
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            interval_ms: 1000,
            clear: true,
        }
    }
}
