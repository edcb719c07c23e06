// Defensive decoding of raw store documents into Records.
//
// Rules
// - pricePerNight: JSON number or numeric string, finite and >= 0, otherwise 0.
// - status: "Available" or "Booked" in any case, otherwise Available.
// - createdAt: epoch millis, RFC 3339 string, or a {seconds, nanoseconds} timestamp object.
// - name: trimmed; blank or missing becomes UNNAMED_RECORD.
//
// Never fails. A document that decodes badly still yields a well-formed Record.

use crate::modules::properties::core::ports::RawDocument;
use crate::modules::properties::core::record::{PropertyStatus, Record};
use chrono::DateTime;
use serde_json::Value;

pub const UNNAMED_RECORD: &str = "Untitled";

pub fn decode_document(document: RawDocument) -> Record {
    let RawDocument { id, fields } = document;
    Record {
        id,
        name: decode_name(fields.get("name")),
        price_per_night: decode_price(fields.get("pricePerNight")),
        status: decode_status(fields.get("status")),
        created_at: decode_created_at(fields.get("createdAt")),
    }
}

fn decode_name(value: Option<&Value>) -> String {
    match value.and_then(Value::as_str).map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => UNNAMED_RECORD.to_string(),
    }
}

pub fn coerce_price(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn decode_price(value: Option<&Value>) -> f64 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    raw.map(coerce_price).unwrap_or(0.0)
}

fn decode_status(value: Option<&Value>) -> PropertyStatus {
    value
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

fn decode_created_at(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.timestamp_millis()),
        Value::Object(map) => {
            let seconds = map.get("seconds").and_then(Value::as_i64)?;
            let nanos = map
                .get("nanoseconds")
                .and_then(Value::as_i64)
                .unwrap_or(0);
            // Out of range timestamps decode as missing.
            seconds
                .checked_mul(1_000)
                .and_then(|ms| ms.checked_add(nanos / 1_000_000))
        }
        _ => None,
    }
}

#[cfg(test)]
mod decode_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn decode(fields: Value) -> Record {
        decode_document(RawDocument::new("doc-1", fields))
    }

    #[rstest]
    fn it_should_decode_a_well_formed_document() {
        let record = decode(json!({
            "name": "  Lakeview Villa ",
            "pricePerNight": 120.5,
            "status": "Booked",
            "createdAt": 1_700_000_000_000i64
        }));
        assert_eq!(
            record,
            Record {
                id: "doc-1".into(),
                name: "Lakeview Villa".into(),
                price_per_night: 120.5,
                status: PropertyStatus::Booked,
                created_at: Some(1_700_000_000_000),
            }
        );
    }

    #[rstest]
    fn it_should_default_missing_price_and_status() {
        let record = decode(json!({ "name": "Downtown Loft" }));
        assert_eq!(record.price_per_night, 0.0);
        assert_eq!(record.status, PropertyStatus::Available);
        assert_eq!(record.created_at, None);
    }

    #[rstest]
    #[case(json!(-5), 0.0)]
    #[case(json!("85"), 85.0)]
    #[case(json!("eighty"), 0.0)]
    #[case(json!(null), 0.0)]
    #[case(json!([1, 2]), 0.0)]
    #[case(json!(99), 99.0)]
    fn it_should_coerce_the_price(#[case] raw: Value, #[case] expected: f64) {
        let record = decode(json!({ "name": "A", "pricePerNight": raw }));
        assert_eq!(record.price_per_night, expected);
    }

    #[rstest]
    #[case(json!("booked"), PropertyStatus::Booked)]
    #[case(json!("Sold"), PropertyStatus::Available)]
    #[case(json!(1), PropertyStatus::Available)]
    fn it_should_decode_the_status_defensively(#[case] raw: Value, #[case] expected: PropertyStatus) {
        let record = decode(json!({ "name": "A", "status": raw }));
        assert_eq!(record.status, expected);
    }

    #[rstest]
    #[case(json!("2023-11-14T22:13:20Z"), Some(1_700_000_000_000))]
    #[case(json!({ "seconds": 1_700_000_000i64, "nanoseconds": 500_000_000 }), Some(1_700_000_000_500))]
    #[case(json!({ "seconds": i64::MAX }), None)]
    #[case(json!({ "seconds": i64::MIN, "nanoseconds": -999_999_999 }), None)]
    #[case(json!("yesterday"), None)]
    #[case(json!(true), None)]
    fn it_should_decode_the_created_at_shapes(#[case] raw: Value, #[case] expected: Option<i64>) {
        let record = decode(json!({ "name": "A", "createdAt": raw }));
        assert_eq!(record.created_at, expected);
    }

    #[rstest]
    fn it_should_name_blank_documents() {
        assert_eq!(decode(json!({ "name": "   " })).name, UNNAMED_RECORD);
        assert_eq!(decode(json!({})).name, UNNAMED_RECORD);
    }
}
