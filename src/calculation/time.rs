//! Clock-time arithmetic.
//!
//! This module parses `HH:MM` values, computes durations with midnight
//! roll-over, and converts minutes to decimal hours. Malformed input never
//! raises an error: payroll calculation must produce a best-effort figure
//! rather than crash a caller, so a bad time string degrades to zero
//! minutes.

use rust_decimal::Decimal;

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses an `HH:MM` value into minutes since midnight.
///
/// Accepts exactly two colon-separated fields with hours 0–23 and minutes
/// 0–59. Anything else returns `None`.
///
/// # Example
///
/// ```
/// use ccnl_engine::calculation::time::parse_hhmm;
///
/// assert_eq!(parse_hhmm("06:30"), Some(390));
/// assert_eq!(parse_hhmm("24:00"), None);
/// assert_eq!(parse_hhmm("6.30"), None);
/// ```
pub fn parse_hhmm(value: &str) -> Option<i64> {
    let (hours, minutes) = value.trim().split_once(':')?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Minutes between two `HH:MM` values.
///
/// If the end is at or before the start, the interval is interpreted as
/// crossing midnight and 24 hours are added. Missing or malformed
/// endpoints contribute a zero duration.
///
/// # Example
///
/// ```
/// use ccnl_engine::calculation::time::duration_minutes;
///
/// assert_eq!(duration_minutes(Some("08:00"), Some("17:00")), 540);
/// assert_eq!(duration_minutes(Some("22:00"), Some("06:00")), 480);
/// assert_eq!(duration_minutes(Some("nonsense"), Some("06:00")), 0);
/// assert_eq!(duration_minutes(None, Some("06:00")), 0);
/// ```
pub fn duration_minutes(start: Option<&str>, end: Option<&str>) -> i64 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };
    let (Some(start), Some(end)) = (parse_hhmm(start), parse_hhmm(end)) else {
        return 0;
    };
    if end <= start {
        end + MINUTES_PER_DAY - start
    } else {
        end - start
    }
}

/// Converts minutes to hours as an exact [`Decimal`].
///
/// No rounding is applied; rounding is a presentation concern.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_valid_times() {
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("06:00"), Some(360));
        assert_eq!(parse_hhmm("20:00"), Some(1200));
        assert_eq!(parse_hhmm("23:59"), Some(1439));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("12:60"), None);
        assert_eq!(parse_hhmm("-1:30"), None);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_hhmm(""), None);
        assert_eq!(parse_hhmm("12"), None);
        assert_eq!(parse_hhmm("12:3a"), None);
        assert_eq!(parse_hhmm("morning"), None);
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(parse_hhmm(" 08:15 "), Some(495));
    }

    #[test]
    fn test_duration_same_day() {
        assert_eq!(duration_minutes(Some("09:00"), Some("17:30")), 510);
    }

    #[test]
    fn test_duration_crosses_midnight() {
        assert_eq!(duration_minutes(Some("22:00"), Some("06:00")), 480);
        assert_eq!(duration_minutes(Some("23:30"), Some("00:15")), 45);
    }

    #[test]
    fn test_duration_equal_endpoints_rolls_over() {
        // end <= start means roll-over, so equal endpoints span a full day
        assert_eq!(duration_minutes(Some("08:00"), Some("08:00")), 1440);
    }

    #[test]
    fn test_duration_missing_inputs() {
        assert_eq!(duration_minutes(None, None), 0);
        assert_eq!(duration_minutes(Some("08:00"), None), 0);
        assert_eq!(duration_minutes(None, Some("17:00")), 0);
    }

    #[test]
    fn test_duration_malformed_degrades_to_zero() {
        assert_eq!(duration_minutes(Some("8h"), Some("17:00")), 0);
        assert_eq!(duration_minutes(Some("08:00"), Some("25:00")), 0);
    }

    #[test]
    fn test_minutes_to_hours_exact() {
        assert_eq!(minutes_to_hours(480), dec("8"));
        assert_eq!(minutes_to_hours(90), dec("1.5"));
        assert_eq!(minutes_to_hours(0), Decimal::ZERO);
    }

    #[test]
    fn test_minutes_to_hours_no_rounding() {
        // 384 minutes is exactly 6.4 hours
        assert_eq!(minutes_to_hours(384), dec("6.4"));
        // 100 minutes keeps its full precision
        assert_eq!(minutes_to_hours(100) * dec("60"), dec("100"));
    }
}
