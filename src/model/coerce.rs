//! Lenient field deserializers. Form posts send ids and numbers as strings and older
//! rows carry nulls, so coercion is the only validation applied to payloads.

use chrono::NaiveDate;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Client-supplied id for upserts. `null`, `false`, the number `0` and `""` mean
/// "no id". Any numeric string, `"0"` included, is an id.
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_i64() == Some(0) => None,
        Value::Number(n) => Some(
            n.as_i64()
                .ok_or_else(|| D::Error::custom(format!("invalid id: {}", n)))?,
        ),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(
            s.trim()
                .parse::<i64>()
                .map_err(|_| D::Error::custom(format!("invalid id: '{}'", s)))?,
        ),
        other => return Err(D::Error::custom(format!("invalid id: {}", other))),
    };
    Ok(id)
}

fn as_f64<E: Error>(field: &str, value: &Value) -> Result<f64, E> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| E::custom(format!("invalid {}: {}", field, n))),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("invalid {}: '{}'", field, s))),
        other => Err(E::custom(format!("invalid {}: {}", field, other))),
    }
}

/// Decimal amount given as a JSON number or a numeric string (`450`, `"450.00"`).
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    as_f64("number", &value)
}

/// Nearest cent, half away from zero, as a `NUMERIC(10, 2)` column stores it.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Like [`number`], rounded to cents.
pub fn price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    number(deserializer).map(round_cents)
}

/// Whole number given as a JSON number or a numeric string. Fractions are truncated.
pub fn integer<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if let Some(n) = value.as_i64() {
        return i32::try_from(n).map_err(|_| D::Error::custom(format!("integer out of range: {}", n)));
    }
    let f = as_f64::<D::Error>("integer", &value)?;
    if !f.is_finite() || f < i32::MIN as f64 || f > i32::MAX as f64 {
        return Err(D::Error::custom(format!("integer out of range: {}", f)));
    }
    Ok(f.trunc() as i32)
}

/// Like [`integer`], but `null` and `""` read as 0.
pub fn integer_or_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(0),
        Value::String(s) if s.trim().is_empty() => Ok(0),
        other => integer(other).map_err(D::Error::custom),
    }
}

/// Free text. Numbers and booleans are rendered as text, `null` reads as empty.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!("expected text, got {}", other))),
    }
}

/// Calendar date `YYYY-MM-DD`. A full timestamp is accepted and truncated to its date part.
pub fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let trimmed = s.trim();
    let day = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|_| D::Error::custom(format!("invalid date: '{}'", s)))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct FormFields {
        #[serde(default, deserialize_with = "super::optional_id")]
        id: Option<i64>,
        #[serde(default, deserialize_with = "super::number")]
        price: f64,
        #[serde(default, deserialize_with = "super::integer_or_zero")]
        hue: i32,
        #[serde(default, deserialize_with = "super::text")]
        guests: String,
    }

    fn fields(v: serde_json::Value) -> FormFields {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn falsy_ids_mean_insert() {
        assert_eq!(fields(json!({})).id, None);
        assert_eq!(fields(json!({ "id": null })).id, None);
        assert_eq!(fields(json!({ "id": 0 })).id, None);
        assert_eq!(fields(json!({ "id": "" })).id, None);
        assert_eq!(fields(json!({ "id": false })).id, None);
        assert_eq!(fields(json!({ "id": 7 })).id, Some(7));
        assert_eq!(fields(json!({ "id": "12" })).id, Some(12));
    }

    #[test]
    fn zero_string_is_an_id() {
        assert_eq!(fields(json!({ "id": "0" })).id, Some(0));
    }

    #[test]
    fn prices_round_to_cents() {
        #[derive(Deserialize)]
        struct P {
            #[serde(deserialize_with = "super::price")]
            price: f64,
        }
        let p = |v| serde_json::from_value::<P>(v).unwrap().price;
        assert_eq!(p(json!({ "price": 19.999 })), 20.0);
        assert_eq!(p(json!({ "price": "280.006" })), 280.01);
        assert_eq!(p(json!({ "price": 450 })), 450.0);
        assert_eq!(super::round_cents(99.994), 99.99);
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert!(serde_json::from_value::<FormFields>(json!({ "id": "abc" })).is_err());
    }

    #[test]
    fn numbers_accept_strings() {
        assert_eq!(fields(json!({ "price": "450.00" })).price, 450.0);
        assert_eq!(fields(json!({ "price": 280 })).price, 280.0);
        assert_eq!(fields(json!({ "hue": "-15" })).hue, -15);
        assert_eq!(fields(json!({ "hue": null })).hue, 0);
        assert_eq!(fields(json!({ "guests": 2 })).guests, "2");
    }

    #[test]
    fn dates_truncate_timestamps() {
        #[derive(Deserialize)]
        struct D {
            #[serde(deserialize_with = "super::date")]
            day: chrono::NaiveDate,
        }
        let d: D = serde_json::from_value(json!({ "day": "2025-03-04T00:00:00.000Z" })).unwrap();
        assert_eq!(d.day.to_string(), "2025-03-04");
        assert!(serde_json::from_value::<D>(json!({ "day": "next tuesday" })).is_err());
    }
}
