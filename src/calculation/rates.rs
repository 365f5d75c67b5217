//! Rate multiplier lookup.
//!
//! Every worked minute is priced as `hourly rate × effective multiplier`.
//! The effective multiplier is resolved from three candidate sources —
//! the band's ordinary differential, the band's overtime multiplier, and
//! the day-type multiplier — by an explicit MAX-of-candidates rule.
//! Candidates are compared and the larger wins; they are never multiplied
//! together, so multipliers cannot compound.

use rust_decimal::Decimal;

use crate::config::Configuration;

use super::bands::TimeBand;
use super::day_detection::DayFlags;

/// Ordinary-time differential for the evening band (contractual, fixed).
pub const EVENING_DIFFERENTIAL: Decimal = Decimal::from_parts(125, 0, 0, false, 2); // 1.25
/// Ordinary-time differential for the night band (contractual, fixed).
pub const NIGHT_DIFFERENTIAL: Decimal = Decimal::from_parts(135, 0, 0, false, 2); // 1.35

/// The ordinary-time multiplier for a band.
///
/// The evening/night differential applies to every minute in its band
/// regardless of overtime status; the day band pays the plain rate.
pub fn ordinary_band_multiplier(band: TimeBand) -> Decimal {
    match band {
        TimeBand::Day => Decimal::ONE,
        TimeBand::Evening => EVENING_DIFFERENTIAL,
        TimeBand::Night => NIGHT_DIFFERENTIAL,
    }
}

/// The overtime multiplier for a band.
///
/// Applied *instead of* the ordinary differential, never on top of it:
/// the result is the MAX of the configured overtime multiplier and the
/// band's own differential.
pub fn overtime_band_multiplier(band: TimeBand, config: &Configuration) -> Decimal {
    let configured = match band {
        TimeBand::Day => config.overtime.day,
        TimeBand::Evening => config.overtime.evening,
        TimeBand::Night => config.overtime.night,
    };
    configured.max(ordinary_band_multiplier(band))
}

/// The day-type multiplier for a date's flags.
///
/// Precedence: holiday, then Sunday, then Saturday; an ordinary weekday
/// pays the plain rate.
pub fn day_type_multiplier(flags: DayFlags, config: &Configuration) -> Decimal {
    if flags.is_holiday {
        config.day_multipliers.holiday
    } else if flags.is_sunday {
        config.day_multipliers.sunday
    } else if flags.is_saturday {
        config.day_multipliers.saturday
    } else {
        Decimal::ONE
    }
}

/// The effective multiplier for a minute: MAX of the band candidate and
/// the day-type candidate.
///
/// # Example
///
/// ```
/// use ccnl_engine::calculation::rates::effective_multiplier;
/// use ccnl_engine::calculation::bands::TimeBand;
/// use ccnl_engine::calculation::day_detection::DayFlags;
/// use ccnl_engine::config::Configuration;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = Configuration::default();
/// let sunday = DayFlags { is_sunday: true, ..DayFlags::default() };
///
/// // In the night band the 1.35 differential beats the Sunday 1.30.
/// let m = effective_multiplier(TimeBand::Night, false, sunday, &config);
/// assert_eq!(m, Decimal::from_str("1.35").unwrap());
///
/// // In the day band the Sunday multiplier wins.
/// let m = effective_multiplier(TimeBand::Day, false, sunday, &config);
/// assert_eq!(m, Decimal::from_str("1.30").unwrap());
/// ```
pub fn effective_multiplier(
    band: TimeBand,
    overtime: bool,
    flags: DayFlags,
    config: &Configuration,
) -> Decimal {
    let band_multiplier = if overtime {
        overtime_band_multiplier(band, config)
    } else {
        ordinary_band_multiplier(band)
    };
    band_multiplier.max(day_type_multiplier(flags, config))
}
