//! Decoding of raw store payloads into typed records.
//!
//! Records cross from the storage collaborator into the engine exactly
//! once, here. A record with no date is the one hard failure — aggregation
//! cannot place it in a period. Everything else degrades: a malformed or
//! absent intervention list becomes an empty list, unknown day kinds fall
//! back to ordinary, and missing fields take their defaults.

use serde_json::Value;
use tracing::warn;

use crate::error::{EngineError, EngineResult};

use super::{Intervention, WorkRecord};

/// Decodes a JSON array of work records.
///
/// Each element must carry a `date`; a dateless element aborts the decode
/// with [`EngineError::MissingDate`]. An element's `interventions` field
/// may be a structured array or a JSON-encoded string (older stores
/// persisted it as text); either form is accepted, and a malformed value
/// degrades to an empty list.
///
/// # Example
///
/// ```
/// use ccnl_engine::models::decode_work_records;
///
/// let records = decode_work_records(
///     r#"[{"date": "2026-03-11", "shift_first": {"start": "08:00", "end": "17:00"}}]"#,
/// )
/// .unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].worked_minutes(), 540);
/// ```
pub fn decode_work_records(payload: &str) -> EngineResult<Vec<WorkRecord>> {
    let raw: Vec<Value> = serde_json::from_str(payload).map_err(|e| {
        warn!(error = %e, "work record payload is not a JSON array");
        EngineError::MissingDate { index: 0 }
    })?;

    raw.iter()
        .enumerate()
        .map(|(index, value)| decode_one_record(index, value))
        .collect()
}

fn decode_one_record(index: usize, value: &Value) -> EngineResult<WorkRecord> {
    if value.get("date").map_or(true, Value::is_null) {
        return Err(EngineError::MissingDate { index });
    }

    // Interventions are decoded separately so a malformed list cannot
    // poison the rest of the record.
    let interventions = value
        .get("interventions")
        .map(decode_interventions)
        .unwrap_or_default();

    let mut trimmed = value.clone();
    if let Value::Object(map) = &mut trimmed {
        map.remove("interventions");
    }

    let mut record: WorkRecord =
        serde_json::from_value(trimmed).map_err(|e| {
            warn!(index, error = %e, "work record failed to decode");
            EngineError::MissingDate { index }
        })?;
    record.interventions = interventions;
    Ok(record)
}

/// Decodes an intervention list from a structured array or an encoded
/// string, degrading any malformed input to an empty list.
pub fn decode_interventions(value: &Value) -> Vec<Intervention> {
    let decoded = match value {
        Value::Array(_) => serde_json::from_value(value.clone()).ok(),
        Value::String(encoded) => serde_json::from_str(encoded).ok(),
        Value::Null => Some(Vec::new()),
        _ => None,
    };
    decoded.unwrap_or_else(|| {
        warn!("malformed intervention list, degrading to empty");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayKind;
    use serde_json::json;

    #[test]
    fn test_decode_minimal_record() {
        let records = decode_work_records(r#"[{"date": "2026-03-11"}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].day_kind, DayKind::Ordinary);
        assert!(records[0].interventions.is_empty());
    }

    #[test]
    fn test_missing_date_is_a_hard_error() {
        let result = decode_work_records(r#"[{"date": "2026-03-11"}, {"on_call": true}]"#);
        match result {
            Err(EngineError::MissingDate { index }) => assert_eq!(index, 1),
            other => panic!("expected MissingDate, got {other:?}"),
        }
    }

    #[test]
    fn test_null_date_is_a_hard_error() {
        let result = decode_work_records(r#"[{"date": null}]"#);
        assert!(matches!(result, Err(EngineError::MissingDate { index: 0 })));
    }

    #[test]
    fn test_structured_intervention_list() {
        let records = decode_work_records(
            r#"[{
                "date": "2026-03-11",
                "on_call": true,
                "interventions": [
                    {"work_first": {"start": "21:00", "end": "22:30"}}
                ]
            }]"#,
        )
        .unwrap();
        assert_eq!(records[0].interventions.len(), 1);
        assert_eq!(records[0].interventions[0].work_minutes(), 90);
    }

    #[test]
    fn test_string_encoded_intervention_list() {
        // Older stores persisted the list as a JSON-encoded string.
        let payload = json!([{
            "date": "2026-03-11",
            "on_call": true,
            "interventions":
                "[{\"work_first\": {\"start\": \"21:00\", \"end\": \"22:30\"}}]"
        }])
        .to_string();
        let records = decode_work_records(&payload).unwrap();
        assert_eq!(records[0].interventions.len(), 1);
        assert_eq!(records[0].interventions[0].work_minutes(), 90);
    }

    #[test]
    fn test_malformed_intervention_list_degrades_to_empty() {
        let records = decode_work_records(
            r#"[{"date": "2026-03-11", "on_call": true, "interventions": "not json"}]"#,
        )
        .unwrap();
        assert!(records[0].interventions.is_empty());
        assert!(records[0].on_call);
    }

    #[test]
    fn test_numeric_intervention_field_degrades_to_empty() {
        let records =
            decode_work_records(r#"[{"date": "2026-03-11", "interventions": 42}]"#).unwrap();
        assert!(records[0].interventions.is_empty());
    }

    #[test]
    fn test_decode_interventions_null_is_empty() {
        assert!(decode_interventions(&Value::Null).is_empty());
    }
}
