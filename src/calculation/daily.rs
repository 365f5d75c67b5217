//! Daily earnings orchestration.
//!
//! This module turns one [`WorkRecord`] plus the [`Configuration`] into
//! one itemized [`DailyBreakdown`]. It is a state machine over the day
//! kind: ordinary days are computed from the recorded intervals; every
//! other kind short-circuits to the configured fixed daily rate with all
//! other components zeroed. Every component call is a pure function of
//! its explicit arguments — nothing here mutates shared state, so the
//! same record and configuration always produce the same breakdown.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::Configuration;
use crate::models::{
    BandEarnings, DailyBreakdown, StandbyEarnings, WorkEarnings, WorkRecord,
};

use super::bands::{split_into_bands, BandMinutes, TimeBand};
use super::day_detection::{day_flags, DayFlags};
use super::meal_allowance::calculate_meal_allowance;
use super::rates::effective_multiplier;
use super::standby::calculate_standby;
use super::time::{minutes_to_hours, parse_hhmm, MINUTES_PER_DAY};
use super::travel_allowance::calculate_travel_allowance;

/// Calculates the itemized earnings breakdown for one work record.
///
/// For an ordinary day the worked minutes are walked chronologically
/// across both shift intervals, split at the daily overtime threshold and
/// at the band boundaries, and priced per band; traveled minutes are paid
/// at the bare hourly rate; the travel allowance, standby result (only on
/// on-call days) and meal allowance are merged in, each exactly once.
///
/// # Example
///
/// ```
/// use ccnl_engine::calculation::calculate_daily_breakdown;
/// use ccnl_engine::config::Configuration;
/// use ccnl_engine::models::{TimePair, WorkRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = Configuration::default();
/// let mut record = WorkRecord::for_date(NaiveDate::from_ymd_opt(2026, 3, 11).unwrap());
/// record.shift_first = TimePair::new("08:00", "12:00");
/// record.shift_second = TimePair::new("13:00", "17:00");
///
/// let breakdown = calculate_daily_breakdown(&record, &config);
/// assert_eq!(breakdown.work.ordinary_hours(), Decimal::from_str("8").unwrap());
/// // 8h × 10.62 plus the default fixed-rate travel allowance
/// assert_eq!(breakdown.work.total(), Decimal::from_str("84.96").unwrap());
/// assert_eq!(breakdown.total, Decimal::from_str("101.37").unwrap());
/// ```
pub fn calculate_daily_breakdown(record: &WorkRecord, config: &Configuration) -> DailyBreakdown {
    let flags = day_flags(record.date);

    if record.day_kind.is_fixed_pay() {
        // Vacation, sick, compensatory rest, paid holiday, fixed pay:
        // the daily rate, nothing else.
        let mut breakdown = empty_breakdown(record, flags);
        breakdown.fixed_day_earnings = config.daily_rate;
        breakdown.total = breakdown.component_sum();
        return breakdown;
    }

    let work = calculate_work_earnings(record, flags, config);

    // The half-day and proportional travel policies scale on ordinary
    // worked hours plus traveled hours.
    let allowance_hours = work.ordinary_hours() + work.travel_time.hours;
    let travel = calculate_travel_allowance(
        allowance_hours,
        work.travel_time.hours,
        record.travel_override,
        flags,
        config,
    );

    let standby = if record.on_call {
        calculate_standby(&record.interventions, flags, config)
    } else {
        StandbyEarnings::ZERO
    };

    let meal_allowance = calculate_meal_allowance(record, config);

    let mut breakdown = DailyBreakdown {
        date: record.date,
        day_kind: record.day_kind,
        is_saturday: flags.is_saturday,
        is_sunday: flags.is_sunday,
        is_holiday: flags.is_holiday,
        work,
        travel_allowance: travel.amount,
        standby,
        meal_allowance,
        fixed_day_earnings: Decimal::ZERO,
        total: Decimal::ZERO,
    };
    breakdown.total = breakdown.component_sum();

    debug!(date = %record.date, total = %breakdown.total, "daily breakdown computed");
    breakdown
}

fn empty_breakdown(record: &WorkRecord, flags: DayFlags) -> DailyBreakdown {
    DailyBreakdown {
        date: record.date,
        day_kind: record.day_kind,
        is_saturday: flags.is_saturday,
        is_sunday: flags.is_sunday,
        is_holiday: flags.is_holiday,
        ..DailyBreakdown::default()
    }
}

fn calculate_work_earnings(
    record: &WorkRecord,
    flags: DayFlags,
    config: &Configuration,
) -> WorkEarnings {
    let threshold_minutes = (config.overtime.daily_threshold_hours * Decimal::from(60))
        .to_i64()
        .unwrap_or(8 * 60)
        .max(0);

    // Walk the shift intervals chronologically, splitting each at the
    // point the cumulative worked minutes cross the threshold, then
    // splitting the pieces into bands.
    let mut ordinary_split = BandMinutes::ZERO;
    let mut overtime_split = BandMinutes::ZERO;
    let mut worked_so_far = 0i64;

    for pair in [&record.shift_first, &record.shift_second] {
        let duration = pair.duration_minutes();
        if duration == 0 {
            continue;
        }
        let start = pair
            .start
            .as_deref()
            .and_then(parse_hhmm)
            .unwrap_or_default();

        let ordinary_len = (threshold_minutes - worked_so_far).clamp(0, duration);
        let overtime_len = duration - ordinary_len;

        if ordinary_len > 0 {
            ordinary_split.add(split_into_bands(start, ordinary_len));
        }
        if overtime_len > 0 {
            let overtime_start = (start + ordinary_len) % MINUTES_PER_DAY;
            overtime_split.add(split_into_bands(overtime_start, overtime_len));
        }
        worked_so_far += duration;
    }

    let line = |split: &BandMinutes, band: TimeBand, overtime: bool| {
        BandEarnings::from_rate(
            split.hours(band),
            config.hourly_rate,
            effective_multiplier(band, overtime, flags, config),
        )
    };

    let travel_hours = minutes_to_hours(record.travel_minutes());

    WorkEarnings {
        ordinary_day: line(&ordinary_split, TimeBand::Day, false),
        ordinary_evening: line(&ordinary_split, TimeBand::Evening, false),
        ordinary_night: line(&ordinary_split, TimeBand::Night, false),
        overtime_day: line(&overtime_split, TimeBand::Day, true),
        overtime_evening: line(&overtime_split, TimeBand::Evening, true),
        overtime_night: line(&overtime_split, TimeBand::Night, true),
        travel_time: BandEarnings::from_rate(travel_hours, config.hourly_rate, Decimal::ONE),
    }
}
