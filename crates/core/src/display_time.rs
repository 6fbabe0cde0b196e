//! Human-readable receipt timestamps.
//!
//! Action records carry their receipt time pre-rendered for display, e.g.
//! `1st April 2021 - 09:30 PM UTC`.

use chrono::Datelike;

use crate::types::Timestamp;

/// English ordinal suffix for a day of the month.
///
/// 11, 12 and 13 always take `th`; otherwise the last digit decides.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Render a UTC instant as `<day><suffix> <Month> <Year> - <hh>:<mm> <AM|PM> UTC`.
///
/// # Examples
///
/// ```
/// use actionfeed_core::display_time::format_display_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2021, 4, 1, 21, 30, 0).unwrap();
/// assert_eq!(format_display_timestamp(at), "1st April 2021 - 09:30 PM UTC");
/// ```
pub fn format_display_timestamp(at: Timestamp) -> String {
    let day = at.day();
    format!(
        "{day}{} {}",
        ordinal_suffix(day),
        at.format("%B %Y - %I:%M %p UTC")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn suffixes() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (10, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, expected) in cases {
            assert_eq!(ordinal_suffix(day), expected, "day {day}");
        }
    }

    #[test]
    fn evening_time() {
        let at = Utc.with_ymd_and_hms(2021, 4, 1, 21, 30, 0).unwrap();
        assert_eq!(format_display_timestamp(at), "1st April 2021 - 09:30 PM UTC");
    }

    #[test]
    fn morning_time_pads_hour_and_minute() {
        let at = Utc.with_ymd_and_hms(2023, 12, 12, 7, 5, 59).unwrap();
        assert_eq!(format_display_timestamp(at), "12th December 2023 - 07:05 AM UTC");
    }

    #[test]
    fn midnight_and_noon_use_twelve() {
        let midnight = Utc.with_ymd_and_hms(2024, 2, 22, 0, 0, 0).unwrap();
        assert_eq!(
            format_display_timestamp(midnight),
            "22nd February 2024 - 12:00 AM UTC"
        );

        let noon = Utc.with_ymd_and_hms(2024, 3, 23, 12, 0, 0).unwrap();
        assert_eq!(format_display_timestamp(noon), "23rd March 2024 - 12:00 PM UTC");
    }
}
