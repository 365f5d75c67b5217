//! Travel allowance calculation.
//!
//! The daily travel indemnity is computed under exactly one policy at a
//! time. Weekday policies work from the configured daily amount and the
//! day's ordinary worked-plus-traveled hours; Saturday, Sunday and holiday
//! each select their own special-day policy. The per-record manual
//! override percentage scales every policy's result except the
//! proportional one, where it is forced to 1.0 — the proportional figure
//! is already hour-scaled and must never be scaled twice.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{Configuration, SpecialDayTravelPolicy, TravelAllowancePolicy};

use super::day_detection::DayFlags;
use super::rates::day_type_multiplier;

/// Hours of a full allowance day.
pub const FULL_DAY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The result of a travel-allowance calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelAllowanceResult {
    /// The allowance amount, zero when not activated.
    pub amount: Decimal,
    /// Whether the activation precondition was met.
    pub activated: bool,
}

impl TravelAllowanceResult {
    const INACTIVE: TravelAllowanceResult = TravelAllowanceResult {
        amount: Decimal::ZERO,
        activated: false,
    };
}

/// Calculates the daily travel allowance.
///
/// # Arguments
///
/// * `allowance_hours` - Ordinary worked hours plus traveled hours, the
///   figure the half-day and proportional policies scale on
/// * `travel_hours` - Traveled hours alone, used by the activation check
///   and the work-rate policy
/// * `manual_override` - The record's override percentage, if present
/// * `flags` - The day-type flags for the record's date
/// * `config` - The active configuration
///
/// # Activation
///
/// The allowance is computed only if there are allowance hours — time at
/// the travel site counts, whether recorded as work or as travel — or the
/// override forces activation, and the day is not a Sunday/holiday —
/// unless the apply-on-special-days setting or an override opens those
/// days up. Saturday is always evaluated as an ordinary weekday for this
/// check, even though it has its own special-day amount policy.
///
/// # Example
///
/// ```
/// use ccnl_engine::calculation::travel_allowance::calculate_travel_allowance;
/// use ccnl_engine::calculation::day_detection::DayFlags;
/// use ccnl_engine::config::{Configuration, TravelAllowancePolicy};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut config = Configuration::default();
/// config.travel.policy = TravelAllowancePolicy::ProportionalCcnl;
///
/// let result = calculate_travel_allowance(
///     Decimal::from_str("8").unwrap(),
///     Decimal::from_str("1").unwrap(),
///     None,
///     DayFlags::default(),
///     &config,
/// );
/// assert_eq!(result.amount, Decimal::from_str("16.41").unwrap());
/// ```
pub fn calculate_travel_allowance(
    allowance_hours: Decimal,
    travel_hours: Decimal,
    manual_override: Option<Decimal>,
    flags: DayFlags,
    config: &Configuration,
) -> TravelAllowanceResult {
    let has_override = manual_override.is_some();

    if allowance_hours <= Decimal::ZERO && !has_override {
        return TravelAllowanceResult::INACTIVE;
    }

    // Sunday/holiday activation gate. Saturday is deliberately absent:
    // it is an ordinary weekday for this check.
    if (flags.is_sunday || flags.is_holiday)
        && !config.travel.apply_on_special_days
        && !has_override
    {
        return TravelAllowanceResult::INACTIVE;
    }

    let scale = manual_override.unwrap_or(Decimal::ONE);
    let daily_amount = config.travel.daily_amount;

    let amount = if flags.is_holiday {
        special_day_amount(
            config.travel.holiday_policy,
            travel_hours,
            scale,
            flags,
            config,
        )
    } else if flags.is_sunday {
        special_day_amount(
            config.travel.sunday_policy,
            travel_hours,
            scale,
            flags,
            config,
        )
    } else if flags.is_saturday {
        special_day_amount(
            config.travel.saturday_policy,
            travel_hours,
            scale,
            flags,
            config,
        )
    } else {
        match config.travel.policy {
            TravelAllowancePolicy::FixedRate | TravelAllowancePolicy::FullAllowanceHalfDay => {
                daily_amount * scale
            }
            TravelAllowancePolicy::HalfAllowanceHalfDay => {
                let base = if allowance_hours < FULL_DAY_HOURS {
                    daily_amount / Decimal::TWO
                } else {
                    daily_amount
                };
                base * scale
            }
            TravelAllowancePolicy::ProportionalCcnl => {
                // Already proportional to hours: the override percentage
                // is forced back to 1.0 and must not rescale the result.
                let fraction = (allowance_hours / FULL_DAY_HOURS).min(Decimal::ONE);
                daily_amount * fraction
            }
        }
    };

    debug!(%amount, "travel allowance computed");
    TravelAllowanceResult {
        amount,
        activated: true,
    }
}

fn special_day_amount(
    policy: SpecialDayTravelPolicy,
    travel_hours: Decimal,
    scale: Decimal,
    flags: DayFlags,
    config: &Configuration,
) -> Decimal {
    let multiplier = day_type_multiplier(flags, config);
    match policy {
        SpecialDayTravelPolicy::WorkRate => {
            travel_hours * config.hourly_rate * multiplier * scale
        }
        SpecialDayTravelPolicy::PercentageBonus => {
            config.travel.daily_amount * multiplier * scale
        }
    }
}
