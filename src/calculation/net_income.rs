//! Gross-to-net income estimation.
//!
//! Converts a gross monthly figure into a net estimate using either the
//! progressive national-tax schedule (IRPEF brackets plus flat
//! social-contribution and local-surcharge percentages) or a flat
//! configurable rate.
//!
//! When the caller requests the stable estimate, the contractually
//! expected monthly base is substituted for the literal figure before
//! taxation and the resulting deduction *rate* is applied to the literal
//! gross. This keeps the deduction percentage constant across months of
//! varying actual hours instead of re-deriving an hours-dependent annual
//! figure every month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{Configuration, NetMethod};

/// Employee social-contribution rate (fraction of gross).
pub const SOCIAL_CONTRIBUTION_RATE: Decimal = Decimal::from_parts(919, 0, 0, false, 4); // 9.19%
/// Regional surcharge rate (fraction of taxable income).
pub const REGIONAL_SURCHARGE_RATE: Decimal = Decimal::from_parts(173, 0, 0, false, 4); // 1.73%
/// Municipal surcharge rate (fraction of taxable income).
pub const MUNICIPAL_SURCHARGE_RATE: Decimal = Decimal::from_parts(60, 0, 0, false, 4); // 0.60%

/// Upper bound of the first IRPEF bracket (annual).
pub const IRPEF_FIRST_LIMIT: Decimal = Decimal::from_parts(28_000, 0, 0, false, 0);
/// Upper bound of the second IRPEF bracket (annual).
pub const IRPEF_SECOND_LIMIT: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);
/// Rate of the first IRPEF bracket.
pub const IRPEF_FIRST_RATE: Decimal = Decimal::from_parts(23, 0, 0, false, 2); // 23%
/// Rate of the second IRPEF bracket.
pub const IRPEF_SECOND_RATE: Decimal = Decimal::from_parts(35, 0, 0, false, 2); // 35%
/// Rate of the top IRPEF bracket.
pub const IRPEF_TOP_RATE: Decimal = Decimal::from_parts(43, 0, 0, false, 2); // 43%

/// The result of a gross-to-net estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetIncomeResult {
    /// The gross figure the estimate was requested for.
    pub gross: Decimal,
    /// The estimated net figure.
    pub net: Decimal,
    /// Total deductions: `gross − net`.
    pub total_deductions: Decimal,
    /// Deduction rate as a percentage of gross, zero when gross is zero.
    pub deduction_rate: Decimal,
}

/// Estimates the net income for a gross monthly figure.
///
/// `use_contract_base` selects the stable estimate: the deduction rate is
/// derived from the configured base monthly gross instead of the literal
/// figure, then applied to the literal figure.
///
/// # Example
///
/// ```
/// use ccnl_engine::calculation::net_income::estimate_net;
/// use ccnl_engine::config::{Configuration, NetMethod};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut config = Configuration::default();
/// config.net.method = NetMethod::Flat;
/// config.net.flat_rate_percent = Decimal::from_str("25").unwrap();
///
/// let result = estimate_net(Decimal::from_str("2000").unwrap(), false, &config);
/// assert_eq!(result.net, Decimal::from_str("1500.00").unwrap());
/// assert_eq!(result.deduction_rate, Decimal::from_str("25.00").unwrap());
/// ```
pub fn estimate_net(gross: Decimal, use_contract_base: bool, config: &Configuration) -> NetIncomeResult {
    let rate_fraction = match config.net.method {
        NetMethod::Flat => config.net.flat_rate_percent / Decimal::ONE_HUNDRED,
        NetMethod::Progressive => {
            let basis = if use_contract_base {
                config.net.base_monthly_gross
            } else {
                gross
            };
            if basis <= Decimal::ZERO {
                Decimal::ZERO
            } else {
                monthly_deductions(basis) / basis
            }
        }
    };

    let total_deductions = (gross * rate_fraction).round_dp(2);
    let net = gross - total_deductions;
    NetIncomeResult {
        gross,
        net,
        total_deductions,
        deduction_rate: (rate_fraction * Decimal::ONE_HUNDRED).round_dp(2),
    }
}

/// Deductions for one month of the given gross under the progressive
/// schedule.
///
/// Social contributions come off the gross first; the remainder is
/// annualized (× 12) for the bracket walk and the resulting tax divided
/// back, so partial-period figures see the same marginal structure a full
/// year would.
fn monthly_deductions(monthly_gross: Decimal) -> Decimal {
    let contributions = monthly_gross * SOCIAL_CONTRIBUTION_RATE;
    let taxable = monthly_gross - contributions;

    let annual_taxable = taxable * Decimal::from(12);
    let irpef = annual_irpef(annual_taxable) / Decimal::from(12);

    let surcharges = taxable * (REGIONAL_SURCHARGE_RATE + MUNICIPAL_SURCHARGE_RATE);

    contributions + irpef + surcharges
}

/// Annual IRPEF over the graduated brackets.
fn annual_irpef(annual_taxable: Decimal) -> Decimal {
    if annual_taxable <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;

    let first = annual_taxable.min(IRPEF_FIRST_LIMIT);
    tax += first * IRPEF_FIRST_RATE;

    if annual_taxable > IRPEF_FIRST_LIMIT {
        let second = (annual_taxable.min(IRPEF_SECOND_LIMIT)) - IRPEF_FIRST_LIMIT;
        tax += second * IRPEF_SECOND_RATE;
    }

    if annual_taxable > IRPEF_SECOND_LIMIT {
        tax += (annual_taxable - IRPEF_SECOND_LIMIT) * IRPEF_TOP_RATE;
    }

    tax
}
