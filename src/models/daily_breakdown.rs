//! Daily breakdown output model.
//!
//! The [`DailyBreakdown`] is the engine's per-day output: an itemized
//! monetary breakdown computed on demand from a work record and the
//! configuration. It holds no identity and persists no state — it is a
//! pure projection, recomputed whenever its inputs change.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DayKind;

/// Hours and earnings for one rate line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandEarnings {
    /// Hours attributed to the line.
    pub hours: Decimal,
    /// Earnings for the line.
    pub earnings: Decimal,
}

impl BandEarnings {
    /// A zero line.
    pub const ZERO: BandEarnings = BandEarnings {
        hours: Decimal::ZERO,
        earnings: Decimal::ZERO,
    };

    /// Builds a line from hours, a rate and an effective multiplier.
    pub fn from_rate(hours: Decimal, rate: Decimal, multiplier: Decimal) -> Self {
        Self {
            hours,
            earnings: hours * rate * multiplier,
        }
    }
}

/// Earnings from worked and traveled time, itemized per band.
///
/// Ordinary lines cover minutes within the daily overtime threshold,
/// overtime lines the minutes beyond it; traveled time is paid at the
/// bare hourly rate. Together these lines are the "work" term of the
/// breakdown total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkEarnings {
    /// Ordinary minutes in the day band.
    pub ordinary_day: BandEarnings,
    /// Ordinary minutes in the evening band, at the evening differential.
    pub ordinary_evening: BandEarnings,
    /// Ordinary minutes in the night band, at the night differential.
    pub ordinary_night: BandEarnings,
    /// Overtime minutes in the day band.
    pub overtime_day: BandEarnings,
    /// Overtime minutes in the evening band.
    pub overtime_evening: BandEarnings,
    /// Overtime minutes in the night band.
    pub overtime_night: BandEarnings,
    /// Traveled time paid at the bare hourly rate.
    pub travel_time: BandEarnings,
}

impl WorkEarnings {
    /// Total ordinary hours across all bands.
    pub fn ordinary_hours(&self) -> Decimal {
        self.ordinary_day.hours + self.ordinary_evening.hours + self.ordinary_night.hours
    }

    /// Total ordinary earnings across all bands.
    pub fn ordinary_total(&self) -> Decimal {
        self.ordinary_day.earnings + self.ordinary_evening.earnings + self.ordinary_night.earnings
    }

    /// Total overtime hours across all bands.
    pub fn overtime_hours(&self) -> Decimal {
        self.overtime_day.hours + self.overtime_evening.hours + self.overtime_night.hours
    }

    /// Total overtime earnings across all bands.
    pub fn overtime_total(&self) -> Decimal {
        self.overtime_day.earnings + self.overtime_evening.earnings + self.overtime_night.earnings
    }

    /// Night hours, ordinary and overtime.
    pub fn night_hours(&self) -> Decimal {
        self.ordinary_night.hours + self.overtime_night.hours
    }

    /// Total work earnings: ordinary + overtime + traveled time.
    pub fn total(&self) -> Decimal {
        self.ordinary_total() + self.overtime_total() + self.travel_time.earnings
    }
}

/// On-call earnings for one day.
///
/// The indemnity and the intervention earnings are independent outputs:
/// the indemnity is a distinct line item and is never also folded into
/// the intervention earnings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandbyEarnings {
    /// Flat indemnity for being on call, paid whether or not an
    /// intervention occurred.
    pub indemnity: Decimal,
    /// Earnings for work and travel performed during interventions.
    pub intervention_earnings: Decimal,
    /// Hours worked during interventions.
    pub intervention_work_hours: Decimal,
    /// Hours traveled during interventions.
    pub intervention_travel_hours: Decimal,
}

impl StandbyEarnings {
    /// The zero result.
    pub const ZERO: StandbyEarnings = StandbyEarnings {
        indemnity: Decimal::ZERO,
        intervention_earnings: Decimal::ZERO,
        intervention_work_hours: Decimal::ZERO,
        intervention_travel_hours: Decimal::ZERO,
    };

    /// Indemnity plus intervention earnings.
    pub fn total(&self) -> Decimal {
        self.indemnity + self.intervention_earnings
    }
}

/// The itemized earnings breakdown for one calendar day.
///
/// Invariant: `total` equals the sum of the work total, the travel
/// allowance, the standby indemnity, the standby intervention earnings,
/// the meal allowance and the fixed-day earnings — each counted exactly
/// once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBreakdown {
    /// The date the breakdown is for.
    pub date: NaiveDate,
    /// The kind of day that was computed.
    pub day_kind: DayKind,
    /// The date was a Saturday.
    pub is_saturday: bool,
    /// The date was a Sunday.
    pub is_sunday: bool,
    /// The date was a public holiday.
    pub is_holiday: bool,
    /// Worked and traveled time earnings, per band.
    pub work: WorkEarnings,
    /// The daily travel allowance.
    pub travel_allowance: Decimal,
    /// On-call indemnity and intervention earnings.
    pub standby: StandbyEarnings,
    /// Meal vouchers and cash reimbursements.
    pub meal_allowance: Decimal,
    /// Fixed daily rate paid for non-ordinary day kinds.
    pub fixed_day_earnings: Decimal,
    /// Grand total for the day.
    pub total: Decimal,
}

impl DailyBreakdown {
    /// Recomputes the grand total from the component terms.
    ///
    /// Callers constructing a breakdown by hand can use this to keep the
    /// single-count invariant.
    pub fn component_sum(&self) -> Decimal {
        self.work.total()
            + self.travel_allowance
            + self.standby.total()
            + self.meal_allowance
            + self.fixed_day_earnings
    }
}
