//! Time-of-day band splitting.
//!
//! The agreement prices each minute of work by the band it falls in:
//! day 06:00–20:00, evening 20:00–22:00, night 22:00–06:00. The boundaries
//! are contractual and not configurable. A work interval is split at these
//! boundaries (and again at midnight when it spans two calendar slot-sets)
//! so that every minute is attributed to exactly one band; this split is
//! the mechanism by which a single interval crossing bands yields multiple
//! breakdown line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::time::{minutes_to_hours, MINUTES_PER_DAY};

/// Start of the day band, in minutes since midnight (06:00).
pub const DAY_BAND_START: i64 = 6 * 60;
/// Start of the evening band (20:00).
pub const EVENING_BAND_START: i64 = 20 * 60;
/// Start of the night band (22:00). Night wraps through midnight to 06:00.
pub const NIGHT_BAND_START: i64 = 22 * 60;

/// A time-of-day rate band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBand {
    /// 06:00–20:00.
    Day,
    /// 20:00–22:00.
    Evening,
    /// 22:00–06:00.
    Night,
}

impl std::fmt::Display for TimeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeBand::Day => write!(f, "day"),
            TimeBand::Evening => write!(f, "evening"),
            TimeBand::Night => write!(f, "night"),
        }
    }
}

/// Returns the band a minute-of-day falls in.
///
/// # Example
///
/// ```
/// use ccnl_engine::calculation::bands::{band_of_minute, TimeBand};
///
/// assert_eq!(band_of_minute(9 * 60), TimeBand::Day);
/// assert_eq!(band_of_minute(20 * 60), TimeBand::Evening);
/// assert_eq!(band_of_minute(23 * 60), TimeBand::Night);
/// assert_eq!(band_of_minute(3 * 60), TimeBand::Night);
/// ```
pub fn band_of_minute(minute_of_day: i64) -> TimeBand {
    debug_assert!((0..MINUTES_PER_DAY).contains(&minute_of_day));
    if (DAY_BAND_START..EVENING_BAND_START).contains(&minute_of_day) {
        TimeBand::Day
    } else if (EVENING_BAND_START..NIGHT_BAND_START).contains(&minute_of_day) {
        TimeBand::Evening
    } else {
        TimeBand::Night
    }
}

/// Per-band minute counts for one interval or one accumulation of
/// intervals.
///
/// The counts always satisfy `day + evening + night == total duration` for
/// the interval they were split from: no minute is lost or double-assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandMinutes {
    /// Minutes in the 06:00–20:00 band.
    pub day: i64,
    /// Minutes in the 20:00–22:00 band.
    pub evening: i64,
    /// Minutes in the 22:00–06:00 band.
    pub night: i64,
}

impl BandMinutes {
    /// The zero split.
    pub const ZERO: BandMinutes = BandMinutes {
        day: 0,
        evening: 0,
        night: 0,
    };

    /// Total minutes across all bands.
    pub fn total(&self) -> i64 {
        self.day + self.evening + self.night
    }

    /// Minutes attributed to one band.
    pub fn get(&self, band: TimeBand) -> i64 {
        match band {
            TimeBand::Day => self.day,
            TimeBand::Evening => self.evening,
            TimeBand::Night => self.night,
        }
    }

    /// Adds another split to this one.
    pub fn add(&mut self, other: BandMinutes) {
        self.day += other.day;
        self.evening += other.evening;
        self.night += other.night;
    }

    /// Hours in one band as an exact [`Decimal`].
    pub fn hours(&self, band: TimeBand) -> Decimal {
        minutes_to_hours(self.get(band))
    }
}

/// Splits an interval into per-band minutes.
///
/// `start_minute` is the minute-of-day the interval begins at; `duration`
/// is its length in minutes (at most 24 hours). The interval is walked
/// boundary to boundary — 06:00, 20:00, 22:00 and midnight — attributing
/// each sub-segment to the band it starts in, so the per-band sums equal
/// the duration exactly, including for intervals crossing midnight.
///
/// # Example
///
/// ```
/// use ccnl_engine::calculation::bands::split_into_bands;
///
/// // 18:00 to 23:00: 2h day, 2h evening, 1h night
/// let split = split_into_bands(18 * 60, 300);
/// assert_eq!(split.day, 120);
/// assert_eq!(split.evening, 120);
/// assert_eq!(split.night, 60);
/// assert_eq!(split.total(), 300);
/// ```
pub fn split_into_bands(start_minute: i64, duration: i64) -> BandMinutes {
    debug_assert!((0..MINUTES_PER_DAY).contains(&start_minute));
    debug_assert!((0..=MINUTES_PER_DAY).contains(&duration));

    let mut split = BandMinutes::ZERO;
    let mut cursor = start_minute;
    let end = start_minute + duration;

    while cursor < end {
        let minute_of_day = cursor % MINUTES_PER_DAY;
        let next_boundary = [
            DAY_BAND_START,
            EVENING_BAND_START,
            NIGHT_BAND_START,
            MINUTES_PER_DAY,
        ]
        .into_iter()
        .find(|b| *b > minute_of_day)
        .unwrap_or(MINUTES_PER_DAY);

        let segment_end = (cursor + (next_boundary - minute_of_day)).min(end);
        let segment_len = segment_end - cursor;

        match band_of_minute(minute_of_day) {
            TimeBand::Day => split.day += segment_len,
            TimeBand::Evening => split.evening += segment_len,
            TimeBand::Night => split.night += segment_len,
        }

        cursor = segment_end;
    }

    split
}
