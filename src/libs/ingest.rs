//! Coerces raw log rows pushed by the external client into [`LogEvent`]s.
//!
//! The payload is untrusted: fields may be missing, null, numbers or objects.
//! Each row is accepted either as `[timestamp, action, status]` or as
//! `{"timestamp": .., "action": .., "status": ..}`. Only a payload that is not
//! a JSON array of rows is refused, and then nothing is returned at all so the
//! caller can keep its previous rows untouched.

use crate::libs::error::{PunchError, PunchResult};
use crate::libs::event::{LogEvent, Stamp, ACTION_MISSING, CORRUPT_TIMESTAMP};
use serde_json::Value;

pub fn parse_payload(payload: &str) -> PunchResult<Vec<LogEvent>> {
    let value: Value = serde_json::from_str(payload).map_err(|e| PunchError::MalformedPayload(e.to_string()))?;
    let Value::Array(rows) = value else {
        return Err(PunchError::MalformedPayload("expected an array of rows".to_string()));
    };

    Ok(rows.iter().map(coerce_row).collect())
}

fn coerce_row(row: &Value) -> LogEvent {
    let (timestamp, action, status) = match row {
        Value::Array(cells) => (cells.first(), cells.get(1), cells.get(2)),
        Value::Object(map) => (map.get("timestamp"), map.get("action"), map.get("status")),
        other => (Some(other), None, None),
    };

    let timestamp = text(timestamp).unwrap_or_else(|| CORRUPT_TIMESTAMP.to_string());
    LogEvent {
        timestamp: Stamp::parse(&timestamp),
        action: text(action).unwrap_or_else(|| ACTION_MISSING.to_string()),
        status: text(status).unwrap_or_default(),
    }
}

fn text(cell: Option<&Value>) -> Option<String> {
    match cell? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_array_rows() {
        let events = parse_payload(r#"[["2024-06-01T09:00:00Z", "CLOCK_IN", ""], ["2024-06-01T17:00:00Z", "CLOCK_OUT", "done"]]"#).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].instant(), Some(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()));
        assert_eq!(events[1].action, "CLOCK_OUT");
        assert_eq!(events[1].status, "done");
    }

    #[test]
    fn test_object_rows() {
        let events = parse_payload(r#"[{"timestamp": "2024-06-01 09:00:00", "action": "CLOCK_IN"}]"#).unwrap();
        assert_eq!(events[0].instant(), Some(Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()));
        assert_eq!(events[0].status, "");
    }

    #[test]
    fn test_missing_fields_get_placeholders() {
        let events = parse_payload(r#"[[null], [], ["2024-06-01T09:00:00Z"]]"#).unwrap();
        assert_eq!(events[0].timestamp, Stamp::Raw(CORRUPT_TIMESTAMP.to_string()));
        assert_eq!(events[0].action, ACTION_MISSING);
        assert_eq!(events[1].timestamp, Stamp::Raw(CORRUPT_TIMESTAMP.to_string()));
        assert_eq!(events[2].action, ACTION_MISSING);
    }

    #[test]
    fn test_unparsable_timestamp_kept_verbatim() {
        let events = parse_payload(r#"[["yesterday-ish", "CLOCK_IN", 42]]"#).unwrap();
        assert_eq!(events[0].timestamp, Stamp::Raw("yesterday-ish".to_string()));
        assert_eq!(events[0].status, "42");
    }

    #[test]
    fn test_non_string_scalars_are_coerced() {
        let events = parse_payload(r#"[[1717232400, true, null]]"#).unwrap();
        assert_eq!(events[0].timestamp, Stamp::Raw("1717232400".to_string()));
        assert_eq!(events[0].action, "true");
    }

    #[test]
    fn test_invalid_json_is_refused() {
        assert!(matches!(parse_payload("[[\"2024"), Err(PunchError::MalformedPayload(_))));
        assert!(matches!(parse_payload("{\"rows\": []}"), Err(PunchError::MalformedPayload(_))));
    }
}
