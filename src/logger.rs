//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` / `debug_do!` for output gated on `--verbose`
//! - `ClockLine` for a single display line that overwrites itself
//!
//! Log lines go to stderr so stdout stays clean for `pick` results.
//!
//! # Example
//!
//! ```ignore
//! log!("pick"; "reading {}", path.display());
//! debug!("clock"; "tick {}", n);
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Execute code only when --verbose is enabled
///
/// # Usage
/// ```ignore
/// debug_do! {
///     let summary = expensive_computation();
///     debug!("module"; "result: {:?}", summary);
/// }
/// ```
#[macro_export]
macro_rules! debug_do {
    ($($body:tt)*) => {{
        if $crate::logger::is_verbose() {
            $($body)*
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
///
/// Honors `--color` through `owo_colors::set_override`.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let style = match module_lower {
        "pick" => Style::new().bright_blue().bold(),
        "clock" => Style::new().bright_green().bold(),
        "error" => Style::new().bright_red().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    format!("[{module}]")
        .if_supports_color(Stream::Stderr, |prefix| prefix.style(style))
        .to_string()
}

// ============================================================================
// Clock Line (single-line display with overwrite)
// ============================================================================

/// Display for periodic output on stdout.
///
/// With `clear` set, each message replaces the previous one in place
/// (cursor moved up and the old lines cleared). Without it, messages are
/// appended like ordinary lines.
///
/// # Example
///
/// ```ignore
/// let mut line = ClockLine::new(true);
/// line.show("03:33:33 PM");
/// line.show("03:33:34 PM"); // overwrites
/// ```
pub struct ClockLine {
    clear: bool,
    /// Lines of previous output to clear
    last_lines: usize,
}

impl ClockLine {
    pub const fn new(clear: bool) -> Self {
        Self {
            clear,
            last_lines: 0,
        }
    }

    pub fn show(&mut self, message: &str) {
        let mut stdout = stdout().lock();

        if self.clear && self.last_lines > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let lines = self.last_lines as u16;
            execute!(stdout, cursor::MoveUp(lines)).ok();
            execute!(stdout, Clear(ClearType::FromCursorDown)).ok();
        }

        writeln!(stdout, "{message}").ok();
        stdout.flush().ok();

        self.last_lines = line_count(message);
    }
}

/// Terminal lines taken by a message (trailing newline added on print).
#[inline]
fn line_count(message: &str) -> usize {
    message.matches('\n').count() + 1
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_line_new() {
        let line = ClockLine::new(true);
        assert_eq!(line.last_lines, 0);
        assert!(line.clear);
    }

    #[test]
    fn test_line_count_single() {
        assert_eq!(line_count("03:33:33 PM"), 1);
    }

    #[test]
    fn test_line_count_multiline() {
        assert_eq!(line_count("03:33:33 PM\nnext\nlast"), 3);
    }

    #[test]
    fn test_clock_line_tracks_lines() {
        let mut line = ClockLine::new(false);
        line.show("a\nb");
        assert_eq!(line.last_lines, 2);
        line.show("c");
        assert_eq!(line.last_lines, 1);
    }

    #[test]
    fn test_colorize_prefix_respects_color_never() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("pick", "pick"), "[pick]");
        assert_eq!(colorize_prefix("Clock", "clock"), "[Clock]");
        assert_eq!(colorize_prefix("warning", "warning"), "[warning]");
    }

    #[test]
    fn test_verbose_flag() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
