//! Core data models for the earnings engine.
//!
//! This module contains the input records, the configuration-independent
//! output types, and the boundary decoding that turns raw store payloads
//! into typed records.

mod boundary;
mod daily_breakdown;
mod monthly;
mod work_record;

pub use boundary::{decode_interventions, decode_work_records};
pub use daily_breakdown::{BandEarnings, DailyBreakdown, StandbyEarnings, WorkEarnings};
pub use monthly::{MonthlyAggregate, MonthlyShares};
pub use work_record::{DayKind, Intervention, TimePair, WorkRecord};
