//! Configuration for the earnings engine.
//!
//! The configuration object is supplied by an external collaborator
//! (typically deserialized from a stored YAML or JSON document) and passed
//! by reference into every calculation. Missing fields take documented
//! defaults; only a structurally unreadable document is an error.

mod types;

pub use types::{
    Configuration, DayMultipliers, MealSettings, NetMethod, NetSettings, OvertimeSettings,
    SpecialDayTravelPolicy, StandbySettings, StandbyTier, TravelAllowancePolicy, TravelSettings,
    DEFAULT_BASE_MONTHLY_GROSS, DEFAULT_DAILY_RATE, DEFAULT_FLAT_NET_RATE,
    DEFAULT_HOLIDAY_MULTIPLIER, DEFAULT_HOURLY_RATE, DEFAULT_MEAL_CASH_AMOUNT,
    DEFAULT_MEAL_VOUCHER_AMOUNT, DEFAULT_OVERTIME_DAY, DEFAULT_OVERTIME_EVENING,
    DEFAULT_OVERTIME_NIGHT, DEFAULT_OVERTIME_THRESHOLD_HOURS, DEFAULT_SATURDAY_MULTIPLIER,
    DEFAULT_STANDBY_REST_DAY, DEFAULT_STANDBY_WEEKDAY_16H, DEFAULT_STANDBY_WEEKDAY_24H,
    DEFAULT_SUNDAY_MULTIPLIER, DEFAULT_TRAVEL_DAILY_AMOUNT,
};

use crate::error::{EngineError, EngineResult};

impl Configuration {
    /// Parses a configuration from a YAML document.
    ///
    /// Missing fields take their defaults; an unreadable document is an
    /// [`EngineError::ConfigParse`].
    pub fn from_yaml_str(document: &str) -> EngineResult<Self> {
        serde_yaml::from_str(document).map_err(|e| EngineError::ConfigParse {
            message: e.to_string(),
        })
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json_str(document: &str) -> EngineResult<Self> {
        serde_json::from_str(document).map_err(|e| EngineError::ConfigParse {
            message: e.to_string(),
        })
    }
}
