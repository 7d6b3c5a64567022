//! Clock template formatting and display.

use chrono::NaiveTime;

use super::time::{DisplayTime, convert_to_civilian_time, double_digits, serialize_clock_time};
use crate::compose;
use crate::pipeline::Transform;

/// Template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "hh:mm:ss tt";

/// Placeholders, substituted in this order.
const PLACEHOLDERS: [&str; 4] = ["hh", "mm", "ss", "tt"];

/// Fills a template from a [`DisplayTime`].
///
/// Each placeholder is replaced once (first occurrence), in the order
/// `hh`, `mm`, `ss`, `tt`. Missing placeholders are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatClock {
    template: String,
}

impl FormatClock {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl Default for FormatClock {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl Transform<DisplayTime> for FormatClock {
    type To = String;

    fn transform(&self, time: DisplayTime) -> String {
        let values = [
            time.hours.as_str(),
            time.minutes.as_str(),
            time.seconds.as_str(),
            time.ampm.as_str(),
        ];
        PLACEHOLDERS
            .iter()
            .zip(values)
            .fold(self.template.clone(), |out, (placeholder, value)| {
                out.replacen(placeholder, value, 1)
            })
    }
}

#[inline]
pub fn format_clock(template: impl Into<String>) -> FormatClock {
    FormatClock::new(template)
}

/// Hand a rendered clock string to `target`.
pub fn display<F: FnMut(&str)>(mut target: F) -> impl FnMut(String) {
    move |time| target(&time)
}

/// Time-to-text pipeline: serialize, civilian hours, AM/PM, padding, template.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use pathpipe::clock::clock_pipeline;
///
/// let render = clock_pipeline("hh:mm:ss tt");
/// let time = NaiveTime::from_hms_opt(15, 33, 33).unwrap();
/// assert_eq!(render(time), "03:33:33 PM");
/// ```
pub fn clock_pipeline(template: &str) -> impl Fn(NaiveTime) -> String {
    let format = format_clock(template);
    compose!(
        serialize_clock_time,
        convert_to_civilian_time,
        double_digits,
        format,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::time::Meridiem;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_format_clock() {
        let format = format_clock(DEFAULT_TEMPLATE);
        let time = DisplayTime {
            hours: "03".into(),
            minutes: "33".into(),
            seconds: "33".into(),
            ampm: Meridiem::Pm,
        };
        assert_eq!(format.transform(time), "03:33:33 PM");
    }

    #[test]
    fn test_format_clock_first_occurrence_only() {
        let format = format_clock("hh hh");
        let time = DisplayTime {
            hours: "07".into(),
            minutes: "00".into(),
            seconds: "00".into(),
            ampm: Meridiem::Am,
        };
        assert_eq!(format.transform(time), "07 hh");
    }

    #[test]
    fn test_format_clock_without_placeholders() {
        let format = format_clock("tick");
        let time = double_digits(convert_to_civilian_time(serialize_clock_time(hms(1, 2, 3))));
        assert_eq!(format.transform(time), "tick");
    }

    #[test]
    fn test_format_clock_default() {
        assert_eq!(FormatClock::default().template(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_pipeline_afternoon() {
        let render = clock_pipeline(DEFAULT_TEMPLATE);
        assert_eq!(render(hms(15, 4, 5)), "03:04:05 PM");
    }

    #[test]
    fn test_pipeline_noon() {
        let render = clock_pipeline(DEFAULT_TEMPLATE);
        assert_eq!(render(hms(12, 0, 0)), "12:00:00 PM");
    }

    #[test]
    fn test_pipeline_morning() {
        let render = clock_pipeline(DEFAULT_TEMPLATE);
        assert_eq!(render(hms(9, 30, 7)), "09:30:07 AM");
    }

    #[test]
    fn test_pipeline_midnight() {
        let render = clock_pipeline(DEFAULT_TEMPLATE);
        assert_eq!(render(hms(0, 0, 9)), "00:00:09 AM");
    }

    #[test]
    fn test_pipeline_custom_template() {
        let render = clock_pipeline("hh-mm tt");
        assert_eq!(render(hms(15, 4, 5)), "03-04 PM");
    }

    #[test]
    fn test_display_forwards() {
        let mut seen = Vec::new();
        {
            let mut show = display(|s: &str| seen.push(s.to_owned()));
            show("03:04:05 PM".to_string());
        }
        assert_eq!(seen, ["03:04:05 PM"]);
    }
}
