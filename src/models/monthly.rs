//! Monthly aggregate output model.
//!
//! The [`MonthlyAggregate`] sums a period's daily breakdowns into
//! per-category totals and derives simple analytics from them. Like the
//! daily breakdown it is a pure projection: no identity, no persisted
//! state.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Percentage shares of each earnings category over the grand total.
///
/// Every ratio guards its denominator: a zero total yields zero shares,
/// never `NaN` or infinity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyShares {
    /// Ordinary work earnings as a percentage of the total.
    pub ordinary_pct: Decimal,
    /// Overtime earnings as a percentage of the total.
    pub overtime_pct: Decimal,
    /// Travel earnings (allowance plus traveled time) as a percentage.
    pub travel_pct: Decimal,
    /// Standby earnings (indemnities plus interventions) as a percentage.
    pub standby_pct: Decimal,
}

/// Earnings and analytics for one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// Grand total: the sum of every daily total plus bare indemnities.
    pub total: Decimal,
    /// Ordinary work earnings across the period.
    pub ordinary_earnings: Decimal,
    /// Overtime earnings across the period.
    pub overtime_earnings: Decimal,
    /// Travel allowance plus traveled-time earnings.
    pub travel_earnings: Decimal,
    /// Standby indemnities plus intervention earnings, including bare
    /// on-call days with no work record.
    pub standby_earnings: Decimal,
    /// Meal allowances across the period.
    pub meal_earnings: Decimal,
    /// Fixed daily amounts for vacation, sick and similar days.
    pub fixed_day_earnings: Decimal,
    /// Ordinary hours worked.
    pub ordinary_hours: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Night hours worked, ordinary and overtime.
    pub night_hours: Decimal,
    /// Hours worked during on-call interventions.
    pub intervention_hours: Decimal,
    /// Days with any worked time.
    pub days_worked: u32,
    /// Saturdays/Sundays with any worked time.
    pub weekend_work_days: u32,
    /// Weekend work days over days worked, zero-guarded.
    pub weekend_work_ratio: Decimal,
    /// Category shares over the grand total.
    pub shares: MonthlyShares,
}
