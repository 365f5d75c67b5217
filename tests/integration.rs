//! Integration tests for the CCNL earnings engine.
//!
//! This suite exercises full calculation scenarios end to end:
//! - Ordinary weekday work with band differentials
//! - Overtime splitting across bands and midnight
//! - Saturday/Sunday/holiday multipliers
//! - Travel allowance policies and the manual override
//! - On-call indemnities and intervention earnings
//! - Fixed-pay day kinds
//! - Boundary decoding of raw record payloads
//! - Monthly aggregation with bare on-call days
//! - Gross-to-net estimation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use ccnl_engine::calculation::{
    aggregate_month, calculate_daily_breakdown, estimate_net,
};
use ccnl_engine::config::{Configuration, NetMethod, StandbyTier, TravelAllowancePolicy};
use ccnl_engine::error::EngineError;
use ccnl_engine::models::{decode_work_records, DayKind, Intervention, TimePair, WorkRecord};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// An 08:00–12:00 / 13:00–17:00 split shift on the given date.
fn eight_hour_record(date_str: &str) -> WorkRecord {
    WorkRecord {
        shift_first: TimePair::new("08:00", "12:00"),
        shift_second: TimePair::new("13:00", "17:00"),
        ..WorkRecord::for_date(date(date_str))
    }
}

// =============================================================================
// Daily scenarios
// =============================================================================

/// Eight ordinary weekday hours with the proportional travel policy and
/// no separately recorded travel: the allowance pays in full.
#[test]
fn test_proportional_full_day_pays_full_allowance() {
    let mut config = Configuration::default();
    config.travel.policy = TravelAllowancePolicy::ProportionalCcnl;

    // 2026-03-11 is a Wednesday
    let breakdown = calculate_daily_breakdown(&eight_hour_record("2026-03-11"), &config);

    assert_eq!(breakdown.work.ordinary_hours(), dec("8"));
    assert_eq!(breakdown.travel_allowance, dec("16.41"));
}

/// A 6.4-hour day under the proportional policy with a 0.5 manual
/// override: the allowance is the proportional figure, not half of it.
#[test]
fn test_proportional_ignores_override_percentage() {
    let mut config = Configuration::default();
    config.travel.policy = TravelAllowancePolicy::ProportionalCcnl;

    let record = WorkRecord {
        // 6.4 hours = 384 minutes: 08:00 to 14:24
        shift_first: TimePair::new("08:00", "14:24"),
        shift_second: TimePair::empty(),
        travel_override: Some(dec("0.5")),
        ..WorkRecord::for_date(date("2026-03-11"))
    };
    let breakdown = calculate_daily_breakdown(&record, &config);

    assert_eq!(breakdown.work.ordinary_hours(), dec("6.4"));
    assert_eq!(breakdown.travel_allowance, dec("16.41") * dec("6.4") / dec("8"));
    assert_eq!(breakdown.travel_allowance, dec("13.128"));
}

/// Saturday on call, 24h tier, Saturday-as-rest off: the indemnity is the
/// weekday constant, not the rest-day one.
#[test]
fn test_saturday_on_call_with_rest_flag_off() {
    let mut config = Configuration::default();
    config.standby.tier = StandbyTier::TwentyFour;
    config.standby.saturday_as_rest = false;

    // 2026-03-14 is a Saturday
    let record = WorkRecord {
        on_call: true,
        ..WorkRecord::for_date(date("2026-03-14"))
    };
    let breakdown = calculate_daily_breakdown(&record, &config);

    assert!(breakdown.is_saturday);
    assert_eq!(breakdown.standby.indemnity, dec("7.03"));
    assert_eq!(breakdown.total, dec("7.03"));
}

/// A vacation record pays exactly the configured daily rate with every
/// time-based component zero.
#[test]
fn test_vacation_day_pays_fixed_daily_rate() {
    let config = Configuration::default();
    let record = WorkRecord {
        day_kind: DayKind::Vacation,
        // Stray time fields must be ignored.
        shift_first: TimePair::new("08:00", "17:00"),
        travel_out: TimePair::new("07:00", "08:00"),
        ..WorkRecord::for_date(date("2026-03-11"))
    };
    let breakdown = calculate_daily_breakdown(&record, &config);

    assert_eq!(breakdown.total, dec("84.96"));
    assert_eq!(breakdown.fixed_day_earnings, dec("84.96"));
    assert_eq!(breakdown.work.ordinary_hours(), Decimal::ZERO);
    assert_eq!(breakdown.work.overtime_hours(), Decimal::ZERO);
    assert_eq!(breakdown.travel_allowance, Decimal::ZERO);
    assert_eq!(breakdown.standby.indemnity, Decimal::ZERO);
}

/// Ten hours split around the evening boundary: the overtime portion
/// lands in evening and night bands at their multipliers.
#[test]
fn test_overtime_across_bands() {
    let config = Configuration::default();
    let record = WorkRecord {
        shift_first: TimePair::new("12:00", "23:00"),
        shift_second: TimePair::empty(),
        ..WorkRecord::for_date(date("2026-03-11"))
    };
    let breakdown = calculate_daily_breakdown(&record, &config);

    assert_eq!(breakdown.work.ordinary_hours(), dec("8"));
    assert_eq!(breakdown.work.overtime_hours(), dec("3"));
    assert_eq!(breakdown.work.overtime_evening.hours, dec("2"));
    assert_eq!(breakdown.work.overtime_night.hours, dec("1"));
    assert_eq!(
        breakdown.work.overtime_evening.earnings,
        dec("2") * dec("10.62") * dec("1.25")
    );
    assert_eq!(
        breakdown.work.overtime_night.earnings,
        dec("10.62") * dec("1.35")
    );
}

/// A night shift crossing midnight keeps every minute in the night band.
#[test]
fn test_night_shift_crossing_midnight() {
    let config = Configuration::default();
    let record = WorkRecord {
        shift_first: TimePair::new("22:00", "06:00"),
        shift_second: TimePair::empty(),
        ..WorkRecord::for_date(date("2026-03-11"))
    };
    let breakdown = calculate_daily_breakdown(&record, &config);

    assert_eq!(breakdown.work.ordinary_night.hours, dec("8"));
    assert_eq!(
        breakdown.work.ordinary_night.earnings,
        dec("8") * dec("10.62") * dec("1.35")
    );
}

/// Sunday work takes the Sunday multiplier in the day band but the night
/// differential where it is larger.
#[test]
fn test_sunday_work_max_resolution() {
    let config = Configuration::default();
    // 2026-03-15 is a Sunday; 00:00 as the end time rolls over midnight
    let record = WorkRecord {
        shift_first: TimePair::new("16:00", "00:00"),
        ..WorkRecord::for_date(date("2026-03-15"))
    };
    let breakdown = calculate_daily_breakdown(&record, &config);

    assert!(breakdown.is_sunday);
    // 16:00–20:00 day band at Sunday 1.30
    assert_eq!(
        breakdown.work.ordinary_day.earnings,
        dec("4") * dec("10.62") * dec("1.30")
    );
    // 20:00–22:00 evening: Sunday 1.30 beats evening 1.25
    assert_eq!(
        breakdown.work.ordinary_evening.earnings,
        dec("2") * dec("10.62") * dec("1.30")
    );
    // 22:00–00:00 night: night 1.35 beats Sunday 1.30
    assert_eq!(
        breakdown.work.ordinary_night.earnings,
        dec("2") * dec("10.62") * dec("1.35")
    );
}

/// On-call day with an intervention: indemnity and intervention earnings
/// are distinct line items and the total counts each exactly once.
#[test]
fn test_on_call_no_double_counting() {
    let config = Configuration::default();
    let record = WorkRecord {
        on_call: true,
        interventions: vec![Intervention {
            work_first: TimePair::new("21:00", "23:00"),
            travel_out: TimePair::new("20:30", "21:00"),
            travel_back: TimePair::new("23:00", "23:30"),
            ..Intervention::default()
        }],
        ..eight_hour_record("2026-03-11")
    };
    let breakdown = calculate_daily_breakdown(&record, &config);

    assert_eq!(breakdown.standby.indemnity, dec("7.03"));
    assert!(breakdown.standby.intervention_earnings > Decimal::ZERO);
    assert_eq!(
        breakdown.total,
        breakdown.work.total()
            + breakdown.travel_allowance
            + breakdown.standby.indemnity
            + breakdown.standby.intervention_earnings
            + breakdown.meal_allowance
    );
}

/// Intervention work after a full shift stays at ordinary rates even
/// though the worked-hours threshold was already reached.
#[test]
fn test_intervention_after_full_day_is_not_overtime() {
    let config = Configuration::default();
    let record = WorkRecord {
        on_call: true,
        interventions: vec![Intervention {
            work_first: TimePair::new("18:00", "19:00"),
            ..Intervention::default()
        }],
        ..eight_hour_record("2026-03-11")
    };
    let breakdown = calculate_daily_breakdown(&record, &config);

    // 1h in the day band at the plain rate, not the 1.20 overtime rate.
    assert_eq!(breakdown.standby.intervention_earnings, dec("10.62"));
}

/// A holiday falling on a weekday takes the holiday multiplier.
#[test]
fn test_holiday_weekday_work() {
    let config = Configuration::default();
    // 2026-06-02 (Festa della Repubblica) is a Tuesday
    let record = WorkRecord {
        shift_first: TimePair::new("08:00", "12:00"),
        shift_second: TimePair::empty(),
        ..WorkRecord::for_date(date("2026-06-02"))
    };
    let breakdown = calculate_daily_breakdown(&record, &config);

    assert!(breakdown.is_holiday);
    assert_eq!(
        breakdown.work.ordinary_day.earnings,
        dec("4") * dec("10.62") * dec("1.30")
    );
}

// =============================================================================
// Boundary decoding
// =============================================================================

#[test]
fn test_decode_and_calculate_round_trip() {
    let config = Configuration::default();
    let payload = r#"[
        {
            "date": "2026-03-11",
            "shift_first": {"start": "08:00", "end": "12:00"},
            "shift_second": {"start": "13:00", "end": "17:00"},
            "lunch_voucher": true
        }
    ]"#;
    let records = decode_work_records(payload).unwrap();
    let breakdown = calculate_daily_breakdown(&records[0], &config);

    assert_eq!(breakdown.work.ordinary_hours(), dec("8"));
    assert_eq!(breakdown.meal_allowance, dec("8.00"));
}

#[test]
fn test_decode_rejects_dateless_record() {
    let payload = r#"[{"shift_first": {"start": "08:00", "end": "12:00"}}]"#;
    let result = decode_work_records(payload);
    assert!(matches!(result, Err(EngineError::MissingDate { index: 0 })));
}

#[test]
fn test_decode_degrades_malformed_interventions() {
    let config = Configuration::default();
    let payload = r#"[
        {"date": "2026-03-11", "on_call": true, "interventions": "garbage"}
    ]"#;
    let records = decode_work_records(payload).unwrap();
    let breakdown = calculate_daily_breakdown(&records[0], &config);

    // Intervention earnings degrade to zero, the indemnity survives.
    assert_eq!(breakdown.standby.intervention_earnings, Decimal::ZERO);
    assert_eq!(breakdown.standby.indemnity, dec("7.03"));
}

// =============================================================================
// Monthly aggregation
// =============================================================================

#[test]
fn test_month_total_matches_daily_sum() {
    let config = Configuration::default();
    let breakdowns: Vec<_> = [
        "2026-03-09",
        "2026-03-10",
        "2026-03-11",
        "2026-03-12",
        "2026-03-13",
        "2026-03-14", // Saturday
    ]
    .iter()
    .map(|d| calculate_daily_breakdown(&eight_hour_record(d), &config))
    .collect();

    let expected: Decimal = breakdowns.iter().map(|b| b.total).sum();
    let aggregate = aggregate_month(&breakdowns, &[], &config);

    assert_eq!(aggregate.total, expected);
    assert_eq!(aggregate.days_worked, 6);
    assert_eq!(aggregate.weekend_work_days, 1);
}

#[test]
fn test_month_with_bare_on_call_days() {
    let config = Configuration::default();
    let worked = calculate_daily_breakdown(&eight_hour_record("2026-03-11"), &config);
    let worked_total = worked.total;

    // A bare weekday (7.03) and a bare Sunday (10.63).
    let aggregate = aggregate_month(
        &[worked],
        &[date("2026-03-12"), date("2026-03-15")],
        &config,
    );

    assert_eq!(aggregate.standby_earnings, dec("17.66"));
    assert_eq!(aggregate.total, worked_total + dec("17.66"));
}

#[test]
fn test_month_mixed_kinds() {
    let config = Configuration::default();
    let worked = calculate_daily_breakdown(&eight_hour_record("2026-03-11"), &config);
    let vacation = calculate_daily_breakdown(
        &WorkRecord {
            day_kind: DayKind::Vacation,
            ..WorkRecord::for_date(date("2026-03-12"))
        },
        &config,
    );
    let aggregate = aggregate_month(&[worked.clone(), vacation], &[], &config);

    assert_eq!(aggregate.days_worked, 1);
    assert_eq!(aggregate.fixed_day_earnings, dec("84.96"));
    assert_eq!(aggregate.total, worked.total + dec("84.96"));
}

// =============================================================================
// Net income
// =============================================================================

#[test]
fn test_flat_net_estimation() {
    let mut config = Configuration::default();
    config.net.method = NetMethod::Flat;
    config.net.flat_rate_percent = dec("23");

    let result = estimate_net(dec("1600"), false, &config);
    assert_eq!(result.net, dec("1232.00"));
    assert_eq!(result.total_deductions, dec("368.00"));
    assert_eq!(result.deduction_rate, dec("23.00"));
}

#[test]
fn test_stable_estimate_from_monthly_total() {
    let config = Configuration::default();
    let breakdowns: Vec<_> = ["2026-03-11", "2026-03-12"]
        .iter()
        .map(|d| calculate_daily_breakdown(&eight_hour_record(d), &config))
        .collect();
    let aggregate = aggregate_month(&breakdowns, &[], &config);

    let stable = estimate_net(aggregate.total, true, &config);
    let on_base = estimate_net(config.net.base_monthly_gross, false, &config);

    // The stable estimate taxes the contractual base, so the rate matches
    // a month that earned exactly the base.
    assert_eq!(stable.deduction_rate, on_base.deduction_rate);
    assert_eq!(stable.gross, aggregate.total);
    assert_eq!(stable.net + stable.total_deductions, stable.gross);
}
