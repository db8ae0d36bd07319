//! Loose decoding for numeric and date attributes. Clients send `""`,
//! `false` or `null` for "no value", numbers as strings, and dates either as
//! `YYYY-MM-DD` or as full RFC 3339 timestamps.

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::{Deserializer, Error};
use serde::Deserialize;
use serde_json::Value;

pub trait Loose: Sized {
    const EXPECTED: &'static str;

    fn from_json(value: &Value) -> Option<Self>;
}

impl Loose for i32 {
    const EXPECTED: &'static str = "an integer";

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl Loose for f64 {
    const EXPECTED: &'static str = "a number";

    fn from_json(value: &Value) -> Option<Self> {
        let n = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }?;
        n.is_finite().then_some(n)
    }
}

impl Loose for NaiveDate {
    const EXPECTED: &'static str = "a date (YYYY-MM-DD or RFC 3339)";

    fn from_json(value: &Value) -> Option<Self> {
        let s = value.as_str()?.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
            DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
    }
}

/// `""`, `false` and `null` decode to `None`; anything else must parse.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Loose,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        other => T::from_json(other)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid value {other}, expected {}", T::EXPECTED))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::deserialize")]
        age: Option<i32>,
        #[serde(default, deserialize_with = "super::deserialize")]
        height: Option<f64>,
        #[serde(default, deserialize_with = "super::deserialize")]
        birthdate: Option<NaiveDate>,
    }

    fn parse(json: &str) -> Result<Sample, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn falsy_values_are_absent() {
        for json in [
            r#"{}"#,
            r#"{"age": "", "height": "", "birthdate": ""}"#,
            r#"{"age": false, "height": false, "birthdate": false}"#,
            r#"{"age": null, "height": null, "birthdate": null}"#,
        ] {
            let sample = parse(json).unwrap();
            assert_eq!(sample.age, None, "{json}");
            assert_eq!(sample.height, None, "{json}");
            assert_eq!(sample.birthdate, None, "{json}");
        }
    }

    #[test]
    fn numbers_accept_numeric_strings() {
        let sample = parse(r#"{"age": "31", "height": "172.5"}"#).unwrap();
        assert_eq!(sample.age, Some(31));
        assert_eq!(sample.height, Some(172.5));

        let sample = parse(r#"{"age": 0, "height": 160}"#).unwrap();
        assert_eq!(sample.age, Some(0));
        assert_eq!(sample.height, Some(160.0));
    }

    #[test]
    fn dates_accept_plain_and_rfc3339() {
        let expected = NaiveDate::from_ymd_opt(1995, 5, 10);
        for json in [
            r#"{"birthdate": "1995-05-10"}"#,
            r#"{"birthdate": "1995-05-10T00:00:00.000Z"}"#,
            r#"{"birthdate": "1995-05-10T12:00:00+05:30"}"#,
        ] {
            assert_eq!(parse(json).unwrap().birthdate, expected, "{json}");
        }
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse(r#"{"age": "thirty"}"#).is_err());
        assert!(parse(r#"{"age": 1.5}"#).is_err());
        assert!(parse(r#"{"height": true}"#).is_err());
        assert!(parse(r#"{"birthdate": "10/05/1995"}"#).is_err());
    }
}
