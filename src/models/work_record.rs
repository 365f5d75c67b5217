//! Work record model and related types.
//!
//! This module defines the [`WorkRecord`], [`TimePair`], [`DayKind`] and
//! [`Intervention`] types representing one calendar day of work as it
//! arrives from the record store.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::time::{duration_minutes, minutes_to_hours};

/// A clock-time interval expressed as optional `HH:MM` strings.
///
/// Times arrive from the record store as raw strings; the engine parses
/// them lazily and degrades malformed or missing values to a zero
/// duration. An end time at or before the start time signals a midnight
/// roll-over, never a negative duration.
///
/// # Example
///
/// ```
/// use ccnl_engine::models::TimePair;
///
/// let shift = TimePair::new("08:00", "12:30");
/// assert_eq!(shift.duration_minutes(), 270);
///
/// let night = TimePair::new("22:00", "06:00");
/// assert_eq!(night.duration_minutes(), 480); // crosses midnight
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePair {
    /// The start time as `HH:MM`, if recorded.
    #[serde(default)]
    pub start: Option<String>,
    /// The end time as `HH:MM`, if recorded.
    #[serde(default)]
    pub end: Option<String>,
}

impl TimePair {
    /// Creates a pair from two `HH:MM` string slices.
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
        }
    }

    /// An empty pair contributing zero minutes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if both endpoints are recorded.
    pub fn is_set(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Duration in minutes, with overnight roll-over.
    ///
    /// Missing or malformed endpoints contribute 0.
    pub fn duration_minutes(&self) -> i64 {
        duration_minutes(self.start.as_deref(), self.end.as_deref())
    }

    /// Duration in hours as an exact [`Decimal`].
    pub fn duration_hours(&self) -> Decimal {
        minutes_to_hours(self.duration_minutes())
    }
}

/// The kind of a calendar day in a work record.
///
/// Only [`DayKind::Ordinary`] computes earnings from the time fields;
/// every other kind short-circuits to the configured fixed daily rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A regular worked day, computed from the recorded intervals.
    #[default]
    Ordinary,
    /// Paid vacation day.
    Vacation,
    /// Paid sick day.
    Sick,
    /// Compensatory rest day.
    CompensatoryRest,
    /// A paid public holiday not worked.
    PaidHoliday,
    /// Any other day paid at the fixed daily rate.
    FixedPay,
}

impl DayKind {
    /// Returns true for every kind that pays the fixed daily rate and
    /// ignores all time fields.
    pub fn is_fixed_pay(&self) -> bool {
        !matches!(self, DayKind::Ordinary)
    }
}

/// A discrete work-and-travel episode occurring during an on-call period.
///
/// Each intervention carries up to two work intervals and up to two travel
/// intervals (outbound and return), each independently overnight-capable.
/// Intervention work is always paid at ordinary rates, regardless of hours
/// already worked that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intervention {
    /// First work interval of the episode.
    #[serde(default)]
    pub work_first: TimePair,
    /// Second work interval, for an episode interrupted and resumed.
    #[serde(default)]
    pub work_second: TimePair,
    /// Outbound travel interval.
    #[serde(default)]
    pub travel_out: TimePair,
    /// Return travel interval.
    #[serde(default)]
    pub travel_back: TimePair,
}

impl Intervention {
    /// Total worked minutes across both work intervals.
    pub fn work_minutes(&self) -> i64 {
        self.work_first.duration_minutes() + self.work_second.duration_minutes()
    }

    /// Total traveled minutes across both travel intervals.
    pub fn travel_minutes(&self) -> i64 {
        self.travel_out.duration_minutes() + self.travel_back.duration_minutes()
    }
}

/// One calendar day of recorded work time.
///
/// This is the engine's sole time input: two optional work intervals
/// (supporting a split shift), two optional travel intervals (outbound and
/// return), the day kind, the on-call flag with its interventions, meal
/// flags, and the manual travel-allowance override.
///
/// # Example
///
/// ```
/// use ccnl_engine::models::{WorkRecord, TimePair};
/// use chrono::NaiveDate;
///
/// let record = WorkRecord {
///     date: NaiveDate::from_ymd_opt(2026, 3, 11).unwrap(),
///     shift_first: TimePair::new("08:00", "12:00"),
///     shift_second: TimePair::new("13:00", "17:00"),
///     ..WorkRecord::for_date(NaiveDate::from_ymd_opt(2026, 3, 11).unwrap())
/// };
/// assert_eq!(record.worked_minutes(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// First work interval of the day.
    #[serde(default)]
    pub shift_first: TimePair,
    /// Second work interval, for a split shift.
    #[serde(default)]
    pub shift_second: TimePair,
    /// Travel from company to site.
    #[serde(default)]
    pub travel_out: TimePair,
    /// Travel from site back to company.
    #[serde(default)]
    pub travel_back: TimePair,
    /// The kind of day; non-ordinary kinds ignore all time fields.
    #[serde(default)]
    pub day_kind: DayKind,
    /// Whether the day is covered by an on-call period.
    #[serde(default)]
    pub on_call: bool,
    /// Interventions performed during the on-call period.
    #[serde(default)]
    pub interventions: Vec<Intervention>,
    /// Meal voucher claimed for lunch.
    #[serde(default)]
    pub lunch_voucher: bool,
    /// Cash meal reimbursement claimed for lunch.
    #[serde(default)]
    pub lunch_cash: bool,
    /// Meal voucher claimed for dinner.
    #[serde(default)]
    pub dinner_voucher: bool,
    /// Cash meal reimbursement claimed for dinner.
    #[serde(default)]
    pub dinner_cash: bool,
    /// Manual travel-allowance override percentage (1.0 = 100%).
    ///
    /// Presence of a value is the override flag: it forces the allowance
    /// active and scales it, except under the proportional policy where
    /// the scale is forced back to 1.0.
    #[serde(default)]
    pub travel_override: Option<Decimal>,
}

impl WorkRecord {
    /// Creates an empty ordinary record for a date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            shift_first: TimePair::empty(),
            shift_second: TimePair::empty(),
            travel_out: TimePair::empty(),
            travel_back: TimePair::empty(),
            day_kind: DayKind::Ordinary,
            on_call: false,
            interventions: Vec::new(),
            lunch_voucher: false,
            lunch_cash: false,
            dinner_voucher: false,
            dinner_cash: false,
            travel_override: None,
        }
    }

    /// Total worked minutes across both shift intervals.
    pub fn worked_minutes(&self) -> i64 {
        self.shift_first.duration_minutes() + self.shift_second.duration_minutes()
    }

    /// Total traveled minutes across both travel intervals.
    pub fn travel_minutes(&self) -> i64 {
        self.travel_out.duration_minutes() + self.travel_back.duration_minutes()
    }
}
