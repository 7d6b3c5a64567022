//! Clock time records and the steps that convert between them.
//!
//! ```text
//! NaiveTime ─serialize─> ClockTime ─civilian─> CivilianTime ─double_digits─> DisplayTime
//! ```

use std::fmt;

use chrono::{Local, NaiveTime, Timelike};

use crate::compose;
use crate::pipeline::Transform;

/// 24-hour clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockTime {
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

/// AM/PM marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 12-hour clock reading with its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilianTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub ampm: Meridiem,
}

/// Clock reading with every field rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTime {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub ampm: Meridiem,
}

impl From<CivilianTime> for DisplayTime {
    fn from(time: CivilianTime) -> Self {
        Self {
            hours: time.hours.to_string(),
            minutes: time.minutes.to_string(),
            seconds: time.seconds.to_string(),
            ampm: time.ampm,
        }
    }
}

/// Numeric field of a [`DisplayTime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockField {
    Hours,
    Minutes,
    Seconds,
}

impl DisplayTime {
    pub fn field_mut(&mut self, field: ClockField) -> &mut String {
        match field {
            ClockField::Hours => &mut self.hours,
            ClockField::Minutes => &mut self.minutes,
            ClockField::Seconds => &mut self.seconds,
        }
    }
}

// ============================================================================
// Steps
// ============================================================================

/// Local wall-clock time.
pub fn current_time() -> NaiveTime {
    Local::now().time()
}

pub fn serialize_clock_time(time: NaiveTime) -> ClockTime {
    ClockTime::new(time.hour(), time.minute(), time.second())
}

/// Mark PM from noon on. Runs on 24-hour hours.
pub fn append_ampm(time: ClockTime) -> CivilianTime {
    CivilianTime {
        hours: time.hours,
        minutes: time.minutes,
        seconds: time.seconds,
        ampm: if time.hours >= 12 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        },
    }
}

/// Fold afternoon hours onto 1..=12. Hours up to 12 are kept, so midnight stays 0.
pub fn civilian_hours(time: CivilianTime) -> CivilianTime {
    CivilianTime {
        hours: if time.hours > 12 {
            time.hours - 12
        } else {
            time.hours
        },
        ..time
    }
}

pub fn convert_to_civilian_time(time: ClockTime) -> CivilianTime {
    compose!(append_ampm, civilian_hours)(time)
}

/// Left-pad a single-digit field with `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrependZero(pub ClockField);

impl Transform<DisplayTime> for PrependZero {
    type To = DisplayTime;

    fn transform(&self, mut time: DisplayTime) -> DisplayTime {
        let value = time.field_mut(self.0);
        if value.len() < 2 {
            value.insert(0, '0');
        }
        time
    }
}

#[inline]
pub const fn prepend_zero(field: ClockField) -> PrependZero {
    PrependZero(field)
}

pub fn double_digits(time: CivilianTime) -> DisplayTime {
    compose!(
        DisplayTime::from,
        prepend_zero(ClockField::Hours),
        prepend_zero(ClockField::Minutes),
        prepend_zero(ClockField::Seconds),
    )(time)
}
