//! Day-type detection.
//!
//! This module determines, for any calendar date, whether it is a
//! Saturday, a Sunday or a public holiday. The holiday calendar is the
//! Italian national one referenced by the agreement: the fixed national
//! holidays plus Easter Monday, computed with the anonymous Gregorian
//! computus.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Day-type flags for one calendar date.
///
/// The flags are independent: a holiday falling on a Sunday sets both.
/// Downstream rules pick the multiplier by precedence (holiday, then
/// Sunday, then Saturday).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFlags {
    /// The date is a Saturday.
    pub is_saturday: bool,
    /// The date is a Sunday.
    pub is_sunday: bool,
    /// The date is a public holiday.
    pub is_holiday: bool,
}

impl DayFlags {
    /// True when any special-day flag is set.
    pub fn is_special(&self) -> bool {
        self.is_saturday || self.is_sunday || self.is_holiday
    }

    /// True for Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.is_saturday || self.is_sunday
    }
}

/// Computes the day-type flags for a date.
///
/// # Example
///
/// ```
/// use ccnl_engine::calculation::day_detection::day_flags;
/// use chrono::NaiveDate;
///
/// // 2026-04-25 (Liberation Day) falls on a Saturday
/// let flags = day_flags(NaiveDate::from_ymd_opt(2026, 4, 25).unwrap());
/// assert!(flags.is_saturday);
/// assert!(flags.is_holiday);
/// assert!(!flags.is_sunday);
/// ```
pub fn day_flags(date: NaiveDate) -> DayFlags {
    DayFlags {
        is_saturday: date.weekday() == Weekday::Sat,
        is_sunday: date.weekday() == Weekday::Sun,
        is_holiday: is_public_holiday(date),
    }
}

/// Returns true if the date is an Italian national public holiday.
///
/// Fixed dates: Jan 1, Jan 6, Apr 25, May 1, Jun 2, Aug 15, Nov 1, Dec 8,
/// Dec 25, Dec 26. Moveable: Easter Monday.
pub fn is_public_holiday(date: NaiveDate) -> bool {
    let fixed = matches!(
        (date.month(), date.day()),
        (1, 1)      // Capodanno
            | (1, 6)    // Epifania
            | (4, 25)   // Liberazione
            | (5, 1)    // Festa del Lavoro
            | (6, 2)    // Festa della Repubblica
            | (8, 15)   // Ferragosto
            | (11, 1)   // Ognissanti
            | (12, 8)   // Immacolata
            | (12, 25)  // Natale
            | (12, 26) // Santo Stefano
    );
    fixed || date == easter_monday(date.year())
}

/// Easter Monday for a year, via the anonymous Gregorian computus.
pub fn easter_monday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    let easter_sunday = NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 4, 1).unwrap());
    easter_sunday.succ_opt().unwrap_or(easter_sunday)
}
