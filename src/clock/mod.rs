//! Civilian clock built from composed steps.
//!
//! ```text
//! current_time → serialize → AM/PM → civilian hours → zero-pad → template → display
//! ```
//!
//! | Module   | Purpose                                   |
//! |----------|-------------------------------------------|
//! | `time`   | Clock records and conversion steps        |
//! | `format` | Template filling and the full pipeline    |
//! | `ticker` | Interval loop and Ctrl+C shutdown         |

mod format;
mod ticker;
mod time;

pub use format::{DEFAULT_TEMPLATE, FormatClock, clock_pipeline, display, format_clock};
pub use ticker::{Ticker, shutdown_channel};
pub use time::{
    CivilianTime, ClockField, ClockTime, DisplayTime, Meridiem, PrependZero, append_ampm,
    civilian_hours, convert_to_civilian_time, current_time, double_digits, prepend_zero,
    serialize_clock_time,
};
