//! Monthly aggregation.
//!
//! Folds a period's daily breakdowns — plus any bare on-call dates with
//! no work record at all — into a [`MonthlyAggregate`]. Summation is
//! commutative, so the fold is order-independent; the only requirement is
//! that every day of the period is visited exactly once. Analytics are
//! derived from the category totals and the flags already present in each
//! breakdown, never re-derived from raw times.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::Configuration;
use crate::models::{DailyBreakdown, MonthlyAggregate, MonthlyShares};

use super::day_detection::day_flags;
use super::standby::standby_indemnity;

/// Aggregates a month of daily breakdowns.
///
/// `bare_on_call_dates` lists calendar dates marked on-call that have no
/// work record; each contributes its indemnity (selected from the standby
/// settings and the date's day kind) as a standby line and nothing else.
///
/// # Example
///
/// ```
/// use ccnl_engine::calculation::{aggregate_month, calculate_daily_breakdown};
/// use ccnl_engine::config::Configuration;
/// use ccnl_engine::models::{TimePair, WorkRecord};
/// use chrono::NaiveDate;
///
/// let config = Configuration::default();
/// let mut record = WorkRecord::for_date(NaiveDate::from_ymd_opt(2026, 3, 11).unwrap());
/// record.shift_first = TimePair::new("08:00", "17:00");
///
/// let breakdown = calculate_daily_breakdown(&record, &config);
/// let aggregate = aggregate_month(&[breakdown.clone()], &[], &config);
/// assert_eq!(aggregate.total, breakdown.total);
/// assert_eq!(aggregate.days_worked, 1);
/// ```
pub fn aggregate_month(
    breakdowns: &[DailyBreakdown],
    bare_on_call_dates: &[NaiveDate],
    config: &Configuration,
) -> MonthlyAggregate {
    let mut aggregate = MonthlyAggregate::default();

    for breakdown in breakdowns {
        aggregate.ordinary_earnings += breakdown.work.ordinary_total();
        aggregate.overtime_earnings += breakdown.work.overtime_total();
        aggregate.travel_earnings +=
            breakdown.travel_allowance + breakdown.work.travel_time.earnings;
        aggregate.standby_earnings += breakdown.standby.total();
        aggregate.meal_earnings += breakdown.meal_allowance;
        aggregate.fixed_day_earnings += breakdown.fixed_day_earnings;
        aggregate.total += breakdown.total;

        aggregate.ordinary_hours += breakdown.work.ordinary_hours();
        aggregate.overtime_hours += breakdown.work.overtime_hours();
        aggregate.night_hours += breakdown.work.night_hours();
        aggregate.intervention_hours += breakdown.standby.intervention_work_hours;

        let worked = breakdown.work.total() > Decimal::ZERO;
        if worked {
            aggregate.days_worked += 1;
            if breakdown.is_saturday || breakdown.is_sunday {
                aggregate.weekend_work_days += 1;
            }
        }
    }

    // Days that are only an on-call calendar entry: the indemnity is the
    // sole line item.
    for date in bare_on_call_dates {
        let indemnity = standby_indemnity(day_flags(*date), config);
        aggregate.standby_earnings += indemnity;
        aggregate.total += indemnity;
    }

    aggregate.shares = MonthlyShares {
        ordinary_pct: percentage(aggregate.ordinary_earnings, aggregate.total),
        overtime_pct: percentage(aggregate.overtime_earnings, aggregate.total),
        travel_pct: percentage(aggregate.travel_earnings, aggregate.total),
        standby_pct: percentage(aggregate.standby_earnings, aggregate.total),
    };
    aggregate.weekend_work_ratio = ratio(
        Decimal::from(aggregate.weekend_work_days),
        Decimal::from(aggregate.days_worked),
    );

    debug!(
        days = breakdowns.len(),
        bare_on_call = bare_on_call_dates.len(),
        total = %aggregate.total,
        "monthly aggregate computed"
    );
    aggregate
}

/// `part / whole × 100`, zero when the denominator is zero.
fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        (part / whole * Decimal::ONE_HUNDRED).round_dp(2)
    }
}

/// `part / whole`, zero when the denominator is zero.
fn ratio(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        (part / whole).round_dp(4)
    }
}
