//! Calculation logic for the earnings engine.
//!
//! This module contains all the calculation functions: clock-time
//! arithmetic, time-of-day band splitting, rate multiplier resolution,
//! day-type detection, the travel, standby and meal allowance
//! calculators, the daily orchestrator, the gross-to-net estimator and
//! the monthly aggregator.

pub mod bands;
pub mod daily;
pub mod day_detection;
pub mod meal_allowance;
pub mod monthly;
pub mod net_income;
pub mod rates;
pub mod standby;
pub mod time;
pub mod travel_allowance;

pub use bands::{band_of_minute, split_into_bands, BandMinutes, TimeBand};
pub use daily::calculate_daily_breakdown;
pub use day_detection::{day_flags, easter_monday, is_public_holiday, DayFlags};
pub use meal_allowance::calculate_meal_allowance;
pub use monthly::aggregate_month;
pub use net_income::{estimate_net, NetIncomeResult};
pub use rates::{day_type_multiplier, effective_multiplier, ordinary_band_multiplier, overtime_band_multiplier};
pub use standby::{calculate_standby, standby_indemnity};
pub use time::{duration_minutes, minutes_to_hours, parse_hhmm};
pub use travel_allowance::{calculate_travel_allowance, TravelAllowanceResult};
