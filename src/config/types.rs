//! Configuration types for the earnings engine.
//!
//! The [`Configuration`] struct is read-only, shared by reference across
//! every calculation in a pass, and never mutated by the engine. Every
//! field carries a documented default so that a configuration document
//! missing any field — or all of them — still deserializes; the engine
//! substitutes the default rather than failing.
//!
//! Policy and tier selectors deserialize leniently: an unrecognized value
//! degrades to the documented fallback variant instead of rejecting the
//! whole document.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// Default base hourly rate.
pub const DEFAULT_HOURLY_RATE: Decimal = Decimal::from_parts(1062, 0, 0, false, 2); // 10.62
/// Default fixed daily rate paid for vacation, sick and similar days.
pub const DEFAULT_DAILY_RATE: Decimal = Decimal::from_parts(8496, 0, 0, false, 2); // 84.96
/// Default daily overtime threshold in hours.
pub const DEFAULT_OVERTIME_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);
/// Default overtime multiplier for the day band.
pub const DEFAULT_OVERTIME_DAY: Decimal = Decimal::from_parts(120, 0, 0, false, 2); // 1.20
/// Default overtime multiplier for the evening band.
pub const DEFAULT_OVERTIME_EVENING: Decimal = Decimal::from_parts(125, 0, 0, false, 2); // 1.25
/// Default overtime multiplier for the night band.
pub const DEFAULT_OVERTIME_NIGHT: Decimal = Decimal::from_parts(135, 0, 0, false, 2); // 1.35
/// Default Saturday day-type multiplier.
pub const DEFAULT_SATURDAY_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2); // 1.25
/// Default Sunday day-type multiplier.
pub const DEFAULT_SUNDAY_MULTIPLIER: Decimal = Decimal::from_parts(130, 0, 0, false, 2); // 1.30
/// Default holiday day-type multiplier.
pub const DEFAULT_HOLIDAY_MULTIPLIER: Decimal = Decimal::from_parts(130, 0, 0, false, 2); // 1.30
/// Default daily travel-allowance amount.
pub const DEFAULT_TRAVEL_DAILY_AMOUNT: Decimal = Decimal::from_parts(1641, 0, 0, false, 2); // 16.41
/// Default on-call indemnity, 16h tier on a weekday.
pub const DEFAULT_STANDBY_WEEKDAY_16H: Decimal = Decimal::from_parts(448, 0, 0, false, 2); // 4.48
/// Default on-call indemnity, 24h tier on a weekday.
pub const DEFAULT_STANDBY_WEEKDAY_24H: Decimal = Decimal::from_parts(703, 0, 0, false, 2); // 7.03
/// Default on-call indemnity on a rest day, either tier.
pub const DEFAULT_STANDBY_REST_DAY: Decimal = Decimal::from_parts(1063, 0, 0, false, 2); // 10.63
/// Default meal voucher amount.
pub const DEFAULT_MEAL_VOUCHER_AMOUNT: Decimal = Decimal::from_parts(800, 0, 0, false, 2); // 8.00
/// Default cash meal reimbursement amount.
pub const DEFAULT_MEAL_CASH_AMOUNT: Decimal = Decimal::from_parts(1350, 0, 0, false, 2); // 13.50
/// Default flat net-income deduction percentage.
pub const DEFAULT_FLAT_NET_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 0); // 25%
/// Default contractual base monthly gross, used by the stable-percentage
/// net estimate.
pub const DEFAULT_BASE_MONTHLY_GROSS: Decimal = Decimal::from_parts(183000, 0, 0, false, 2); // 1830.00

/// Travel-allowance policy for ordinary weekdays.
///
/// Exactly one policy is active at a time; the closed set makes the
/// historical "combined flags" double calculation impossible by
/// construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelAllowancePolicy {
    /// Full daily amount regardless of hours.
    #[default]
    FixedRate,
    /// Half the daily amount below 8 hours, full amount otherwise.
    HalfAllowanceHalfDay,
    /// Full daily amount regardless of hours. Alias retained for
    /// backward compatibility with stored settings.
    FullAllowanceHalfDay,
    /// `amount × min(hours / 8, 1)`. The per-record manual override
    /// percentage is inert under this policy.
    ProportionalCcnl,
}

impl TravelAllowancePolicy {
    /// Parses a stored selector value, falling back to [`Self::FixedRate`]
    /// for anything unrecognized.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "fixed_rate" => Self::FixedRate,
            "half_allowance_half_day" => Self::HalfAllowanceHalfDay,
            "full_allowance_half_day" => Self::FullAllowanceHalfDay,
            "proportional_ccnl" => Self::ProportionalCcnl,
            other => {
                warn!(value = other, "unrecognized travel policy, using fixed_rate");
                Self::FixedRate
            }
        }
    }
}

impl<'de> Deserialize<'de> for TravelAllowancePolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

/// Travel-allowance policy for a special day type (Saturday, Sunday or
/// holiday). Selected independently per day type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialDayTravelPolicy {
    /// Flat daily amount × the day-type multiplier.
    #[default]
    PercentageBonus,
    /// Travel hours paid at the ordinary work rate including the
    /// day-type multiplier, instead of the flat amount.
    WorkRate,
}

impl SpecialDayTravelPolicy {
    /// Parses a stored selector value, falling back to
    /// [`Self::PercentageBonus`] for anything unrecognized.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "percentage_bonus" => Self::PercentageBonus,
            "work_rate" => Self::WorkRate,
            other => {
                warn!(
                    value = other,
                    "unrecognized special-day travel policy, using percentage_bonus"
                );
                Self::PercentageBonus
            }
        }
    }
}

impl<'de> Deserialize<'de> for SpecialDayTravelPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

/// On-call coverage tier: how many hours of each day the availability
/// window spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum StandbyTier {
    /// 16-hour coverage (outside the ordinary shift).
    #[serde(rename = "16h")]
    Sixteen,
    /// Round-the-clock coverage.
    #[default]
    #[serde(rename = "24h")]
    TwentyFour,
}

impl StandbyTier {
    /// Parses a stored tier value, falling back to [`Self::TwentyFour`]
    /// for anything unrecognized.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "16h" => Self::Sixteen,
            "24h" => Self::TwentyFour,
            other => {
                warn!(value = other, "unrecognized standby tier, using 24h");
                Self::TwentyFour
            }
        }
    }
}

impl<'de> Deserialize<'de> for StandbyTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

/// Net-income estimation method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NetMethod {
    /// Graduated national-tax brackets plus flat contribution and
    /// surcharge percentages.
    #[default]
    Progressive,
    /// `gross × (1 − rate / 100)` with the configured flat rate.
    Flat,
}

impl NetMethod {
    /// Parses a stored method value, falling back to
    /// [`Self::Progressive`] for anything unrecognized.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "progressive" => Self::Progressive,
            "flat" => Self::Flat,
            other => {
                warn!(value = other, "unrecognized net method, using progressive");
                Self::Progressive
            }
        }
    }
}

impl<'de> Deserialize<'de> for NetMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&raw))
    }
}

/// Overtime settings: the daily threshold and the per-band multipliers
/// applied to minutes beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeSettings {
    /// Hours of work after which further minutes are overtime.
    pub daily_threshold_hours: Decimal,
    /// Overtime multiplier in the day band.
    pub day: Decimal,
    /// Overtime multiplier in the evening band.
    pub evening: Decimal,
    /// Overtime multiplier in the night band.
    pub night: Decimal,
}

impl Default for OvertimeSettings {
    fn default() -> Self {
        Self {
            daily_threshold_hours: DEFAULT_OVERTIME_THRESHOLD_HOURS,
            day: DEFAULT_OVERTIME_DAY,
            evening: DEFAULT_OVERTIME_EVENING,
            night: DEFAULT_OVERTIME_NIGHT,
        }
    }
}

/// Day-type pay multipliers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayMultipliers {
    /// Multiplier for Saturday work.
    pub saturday: Decimal,
    /// Multiplier for Sunday work.
    pub sunday: Decimal,
    /// Multiplier for public-holiday work.
    pub holiday: Decimal,
}

impl Default for DayMultipliers {
    fn default() -> Self {
        Self {
            saturday: DEFAULT_SATURDAY_MULTIPLIER,
            sunday: DEFAULT_SUNDAY_MULTIPLIER,
            holiday: DEFAULT_HOLIDAY_MULTIPLIER,
        }
    }
}

/// Travel-allowance settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelSettings {
    /// Policy applied on ordinary weekdays.
    pub policy: TravelAllowancePolicy,
    /// The daily allowance amount the policies start from.
    pub daily_amount: Decimal,
    /// Whether the allowance may activate on Sundays and holidays.
    pub apply_on_special_days: bool,
    /// Policy applied when the day is a Saturday.
    pub saturday_policy: SpecialDayTravelPolicy,
    /// Policy applied when the day is a Sunday.
    pub sunday_policy: SpecialDayTravelPolicy,
    /// Policy applied when the day is a public holiday.
    pub holiday_policy: SpecialDayTravelPolicy,
}

impl Default for TravelSettings {
    fn default() -> Self {
        Self {
            policy: TravelAllowancePolicy::default(),
            daily_amount: DEFAULT_TRAVEL_DAILY_AMOUNT,
            apply_on_special_days: false,
            saturday_policy: SpecialDayTravelPolicy::default(),
            sunday_policy: SpecialDayTravelPolicy::default(),
            holiday_policy: SpecialDayTravelPolicy::default(),
        }
    }
}

/// On-call settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandbySettings {
    /// Coverage tier of the availability window.
    pub tier: StandbyTier,
    /// Whether Saturday counts as a rest day for the indemnity.
    ///
    /// Independent of any travel-allowance Saturday rule.
    pub saturday_as_rest: bool,
    /// Custom weekday indemnity, overriding the tier default.
    pub custom_weekday_amount: Option<Decimal>,
    /// Custom rest-day indemnity, overriding the default.
    pub custom_rest_day_amount: Option<Decimal>,
}

/// Meal allowance amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MealSettings {
    /// Amount added per claimed meal voucher.
    pub voucher_amount: Decimal,
    /// Amount added per claimed cash reimbursement.
    pub cash_amount: Decimal,
}

impl Default for MealSettings {
    fn default() -> Self {
        Self {
            voucher_amount: DEFAULT_MEAL_VOUCHER_AMOUNT,
            cash_amount: DEFAULT_MEAL_CASH_AMOUNT,
        }
    }
}

/// Net-income estimation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetSettings {
    /// The estimation method.
    pub method: NetMethod,
    /// Flat deduction percentage, used by [`NetMethod::Flat`].
    pub flat_rate_percent: Decimal,
    /// The contractually expected monthly gross, substituted for the
    /// literal figure when the stable-percentage estimate is requested.
    pub base_monthly_gross: Decimal,
}

impl Default for NetSettings {
    fn default() -> Self {
        Self {
            method: NetMethod::default(),
            flat_rate_percent: DEFAULT_FLAT_NET_RATE,
            base_monthly_gross: DEFAULT_BASE_MONTHLY_GROSS,
        }
    }
}

/// The complete engine configuration.
///
/// Shared by reference across every calculation of an aggregation pass and
/// treated as immutable for its duration.
///
/// # Example
///
/// ```
/// use ccnl_engine::config::Configuration;
///
/// // An empty document yields the documented defaults.
/// let config = Configuration::from_yaml_str("{}").unwrap();
/// assert_eq!(config, Configuration::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Fixed daily rate for vacation, sick and similar days.
    pub daily_rate: Decimal,
    /// Overtime threshold and multipliers.
    pub overtime: OvertimeSettings,
    /// Saturday/Sunday/holiday multipliers.
    pub day_multipliers: DayMultipliers,
    /// Travel-allowance settings.
    pub travel: TravelSettings,
    /// On-call settings.
    pub standby: StandbySettings,
    /// Meal allowance amounts.
    pub meals: MealSettings,
    /// Net-income estimation settings.
    pub net: NetSettings,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            hourly_rate: DEFAULT_HOURLY_RATE,
            daily_rate: DEFAULT_DAILY_RATE,
            overtime: OvertimeSettings::default(),
            day_multipliers: DayMultipliers::default(),
            travel: TravelSettings::default(),
            standby: StandbySettings::default(),
            meals: MealSettings::default(),
            net: NetSettings::default(),
        }
    }
}
