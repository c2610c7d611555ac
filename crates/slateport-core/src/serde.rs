//! Custom serde helpers for loosely typed backend payloads.
//!
//! Several backend collections predate consistent typing: identifiers
//! arrive as numbers or strings depending on the route, and numeric
//! fields are sometimes serialized as strings. These helpers normalize
//! those variants during deserialization so the rest of the client only
//! sees one representation.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

/// Deserializes an identifier that may arrive as a string or a number.
///
/// Empty strings and `null` are treated as absent.
pub fn deserialize_flexible_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    let opt: Option<Raw> = Option::deserialize(deserializer)?;
    Ok(match opt {
        Some(Raw::Text(s)) if s.is_empty() => None,
        Some(Raw::Text(s)) => Some(s),
        Some(Raw::Int(n)) => Some(n.to_string()),
        Some(Raw::Float(f)) => Some(f.to_string()),
        None => None,
    })
}

/// Deserializes an optional unsigned integer that may arrive as a
/// number or a numeric string.
pub fn deserialize_flexible_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u32),
        Text(String),
    }

    let opt: Option<Raw> = Option::deserialize(deserializer)?;
    match opt {
        Some(Raw::Num(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Deserializes an optional float that may arrive as a number or a
/// numeric string.
pub fn deserialize_flexible_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
    }

    let opt: Option<Raw> = Option::deserialize(deserializer)?;
    match opt {
        Some(Raw::Num(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Deserializes an optional calendar date that may arrive as
/// `YYYY-MM-DD` or as a full RFC 3339 timestamp.
pub fn deserialize_flexible_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => {
            let s = s.trim();
            if let Ok(date) = s.parse::<NaiveDate>() {
                return Ok(Some(date));
            }
            DateTime::parse_from_rfc3339(s)
                .map(|dt| Some(dt.date_naive()))
                .map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Record {
        #[serde(deserialize_with = "deserialize_flexible_id")]
        id: Option<String>,
        #[serde(deserialize_with = "deserialize_flexible_u32")]
        semester: Option<u32>,
        #[serde(deserialize_with = "deserialize_flexible_f64")]
        amount: Option<f64>,
        #[serde(deserialize_with = "deserialize_flexible_date")]
        due_date: Option<NaiveDate>,
    }

    #[test]
    fn test_id_from_string() {
        let r: Record = serde_json::from_str(r#"{"id":"665f1c"}"#).unwrap();
        assert_eq!(r.id.as_deref(), Some("665f1c"));
    }

    #[test]
    fn test_id_from_number() {
        let r: Record = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(r.id.as_deref(), Some("42"));
    }

    #[test]
    fn test_id_empty_string_is_none() {
        let r: Record = serde_json::from_str(r#"{"id":""}"#).unwrap();
        assert_eq!(r.id, None);
    }

    #[test]
    fn test_id_null_is_none() {
        let r: Record = serde_json::from_str(r#"{"id":null}"#).unwrap();
        assert_eq!(r.id, None);
    }

    #[test]
    fn test_u32_from_number_and_string() {
        let r: Record = serde_json::from_str(r#"{"semester":3}"#).unwrap();
        assert_eq!(r.semester, Some(3));

        let r: Record = serde_json::from_str(r#"{"semester":"5"}"#).unwrap();
        assert_eq!(r.semester, Some(5));
    }

    #[test]
    fn test_u32_blank_string_is_none() {
        let r: Record = serde_json::from_str(r#"{"semester":"  "}"#).unwrap();
        assert_eq!(r.semester, None);
    }

    #[test]
    fn test_u32_garbage_string_is_an_error() {
        assert!(serde_json::from_str::<Record>(r#"{"semester":"third"}"#).is_err());
    }

    #[test]
    fn test_f64_from_number_and_string() {
        let r: Record = serde_json::from_str(r#"{"amount":1250.5}"#).unwrap();
        assert_eq!(r.amount, Some(1250.5));

        let r: Record = serde_json::from_str(r#"{"amount":"1250.5"}"#).unwrap();
        assert_eq!(r.amount, Some(1250.5));
    }

    #[test]
    fn test_date_from_plain_date() {
        let r: Record = serde_json::from_str(r#"{"due_date":"2026-08-01"}"#).unwrap();
        assert_eq!(r.due_date, Some(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()));
    }

    #[test]
    fn test_date_from_rfc3339_timestamp() {
        let r: Record = serde_json::from_str(r#"{"due_date":"2026-08-01T00:00:00.000Z"}"#).unwrap();
        assert_eq!(r.due_date, Some(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()));
    }

    #[test]
    fn test_date_blank_is_none_and_garbage_is_error() {
        let r: Record = serde_json::from_str(r#"{"due_date":""}"#).unwrap();
        assert_eq!(r.due_date, None);

        assert!(serde_json::from_str::<Record>(r#"{"due_date":"next week"}"#).is_err());
    }

    #[test]
    fn test_missing_fields_default_to_none() {
        let r: Record = serde_json::from_str("{}").unwrap();
        assert_eq!(r.id, None);
        assert_eq!(r.semester, None);
        assert_eq!(r.amount, None);
        assert_eq!(r.due_date, None);
    }
}
