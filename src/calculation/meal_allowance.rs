//! Meal allowance calculation.
//!
//! A pure table lookup: for each of lunch and dinner, the record's voucher
//! and cash flags add the corresponding configured amount. No proration
//! and no day-type dependency.

use rust_decimal::Decimal;

use crate::config::Configuration;
use crate::models::WorkRecord;

/// Calculates the meal allowance for a record.
///
/// # Example
///
/// ```
/// use ccnl_engine::calculation::meal_allowance::calculate_meal_allowance;
/// use ccnl_engine::config::Configuration;
/// use ccnl_engine::models::WorkRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = Configuration::default();
/// let mut record = WorkRecord::for_date(NaiveDate::from_ymd_opt(2026, 3, 11).unwrap());
/// record.lunch_voucher = true;
/// record.dinner_cash = true;
///
/// // 8.00 voucher + 13.50 cash
/// assert_eq!(
///     calculate_meal_allowance(&record, &config),
///     Decimal::from_str("21.50").unwrap()
/// );
/// ```
pub fn calculate_meal_allowance(record: &WorkRecord, config: &Configuration) -> Decimal {
    let mut amount = Decimal::ZERO;
    if record.lunch_voucher {
        amount += config.meals.voucher_amount;
    }
    if record.lunch_cash {
        amount += config.meals.cash_amount;
    }
    if record.dinner_voucher {
        amount += config.meals.voucher_amount;
    }
    if record.dinner_cash {
        amount += config.meals.cash_amount;
    }
    amount
}
