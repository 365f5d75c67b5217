//! On-call ("standby") calculation.
//!
//! Two independent outputs, each computed exactly once:
//!
//! 1. The **indemnity**: a flat daily amount for being available, paid
//!    whether or not an intervention occurred, selected from the coverage
//!    tier and the day kind (with optional custom amounts).
//! 2. The **intervention earnings**: work performed during interventions,
//!    paid at ordinary band rates with the day-type multiplier — never at
//!    overtime rates, regardless of hours already worked that day, by
//!    contractual definition. Intervention travel is paid at the bare
//!    hourly rate.
//!
//! The indemnity is reported as its own line item and enters the daily
//! total exactly once.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{
    Configuration, StandbyTier, DEFAULT_STANDBY_REST_DAY, DEFAULT_STANDBY_WEEKDAY_16H,
    DEFAULT_STANDBY_WEEKDAY_24H,
};
use crate::models::{Intervention, StandbyEarnings, TimePair};

use super::bands::{split_into_bands, BandMinutes, TimeBand};
use super::day_detection::DayFlags;
use super::rates::effective_multiplier;
use super::time::{minutes_to_hours, parse_hhmm};

/// The daily on-call indemnity for a day's flags.
///
/// The day-kind bucket is weekday vs. rest day: Sundays and holidays are
/// rest days, Saturdays only when the dedicated Saturday-as-rest flag is
/// set (independent of any travel-allowance Saturday rule). Custom
/// configured amounts override the contractual defaults.
///
/// # Example
///
/// ```
/// use ccnl_engine::calculation::standby::standby_indemnity;
/// use ccnl_engine::calculation::day_detection::DayFlags;
/// use ccnl_engine::config::Configuration;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = Configuration::default();
/// // A Saturday with saturday_as_rest unset pays the weekday 24h amount.
/// let saturday = DayFlags { is_saturday: true, ..DayFlags::default() };
/// assert_eq!(
///     standby_indemnity(saturday, &config),
///     Decimal::from_str("7.03").unwrap()
/// );
/// ```
pub fn standby_indemnity(flags: DayFlags, config: &Configuration) -> Decimal {
    let rest_day = flags.is_sunday
        || flags.is_holiday
        || (flags.is_saturday && config.standby.saturday_as_rest);

    if rest_day {
        config
            .standby
            .custom_rest_day_amount
            .unwrap_or(DEFAULT_STANDBY_REST_DAY)
    } else {
        config.standby.custom_weekday_amount.unwrap_or(match config.standby.tier {
            StandbyTier::Sixteen => DEFAULT_STANDBY_WEEKDAY_16H,
            StandbyTier::TwentyFour => DEFAULT_STANDBY_WEEKDAY_24H,
        })
    }
}

/// Calculates the full on-call result for one day: the indemnity plus
/// the earnings of every intervention.
pub fn calculate_standby(
    interventions: &[Intervention],
    flags: DayFlags,
    config: &Configuration,
) -> StandbyEarnings {
    let indemnity = standby_indemnity(flags, config);

    let mut work_split = BandMinutes::ZERO;
    let mut travel_minutes = 0i64;
    for intervention in interventions {
        work_split.add(interval_bands(&intervention.work_first));
        work_split.add(interval_bands(&intervention.work_second));
        travel_minutes += intervention.travel_minutes();
    }

    let work_earnings: Decimal = [TimeBand::Day, TimeBand::Evening, TimeBand::Night]
        .into_iter()
        .map(|band| {
            // Ordinary rates by contract: overtime is never a candidate.
            let multiplier = effective_multiplier(band, false, flags, config);
            work_split.hours(band) * config.hourly_rate * multiplier
        })
        .sum();

    let travel_hours = minutes_to_hours(travel_minutes);
    let travel_earnings = travel_hours * config.hourly_rate;

    debug!(
        %indemnity,
        interventions = interventions.len(),
        "standby computed"
    );

    StandbyEarnings {
        indemnity,
        intervention_earnings: work_earnings + travel_earnings,
        intervention_work_hours: minutes_to_hours(work_split.total()),
        intervention_travel_hours: travel_hours,
    }
}

fn interval_bands(pair: &TimePair) -> BandMinutes {
    let duration = pair.duration_minutes();
    if duration == 0 {
        return BandMinutes::ZERO;
    }
    let start = pair
        .start
        .as_deref()
        .and_then(parse_hhmm)
        .unwrap_or_default();
    split_into_bands(start, duration)
}
