//! Forgiving readers for numeric snapshot fields
//!
//! Upstream numbers arrive as plain JSON numbers, so an integer field can show
//! up as `2.0` and occasionally as a quoted `"2"`. Optional fields that cannot
//! be read as a number become `None` so only their own row disappears.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

/// Whole number of `value`, rounding fractional input
fn integer_of(value: &Value) -> Option<i128> {
    if let Value::Number(number) = value {
        if let Some(n) = number.as_i64() {
            return Some(i128::from(n));
        }
        if let Some(n) = number.as_u64() {
            return Some(i128::from(n));
        }
    }
    number_of(value).map(|n| n.round() as i128)
}

pub fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value))
}

pub fn optional_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_of(&value).and_then(|n| u32::try_from(n).ok()))
}

pub fn optional_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_of(&value).and_then(|n| u64::try_from(n).ok()))
}

pub fn optional_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_of(&value).and_then(|n| i32::try_from(n).ok()))
}

/// A number, with `null` or anything unreadable counting as zero
pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_of(&value).unwrap_or(0.0))
}

/// Epoch milliseconds; required, but fractional or quoted numbers are accepted
pub fn epoch_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    integer_of(&value)
        .and_then(|n| i64::try_from(n).ok())
        .ok_or_else(|| D::Error::custom(format!("expected epoch milliseconds, found {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "optional_u32")]
        count: Option<u32>,
        #[serde(default, deserialize_with = "optional_i32")]
        bonus: Option<i32>,
        #[serde(default, deserialize_with = "optional_f64")]
        weight: Option<f64>,
        #[serde(default, deserialize_with = "f64_or_zero")]
        hp: f64,
    }

    fn sample(value: Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    mod integer_tests {
        use super::*;

        #[test]
        fn integral_float_is_accepted() {
            assert_eq!(sample(json!({"count": 2.0})).count, Some(2));
        }

        #[test]
        fn fraction_is_rounded() {
            assert_eq!(sample(json!({"bonus": 1.5})).bonus, Some(2));
            assert_eq!(sample(json!({"bonus": -1.4})).bonus, Some(-1));
        }

        #[test]
        fn quoted_number_is_accepted() {
            assert_eq!(sample(json!({"count": "2"})).count, Some(2));
        }

        #[test]
        fn wrong_type_or_range_is_none() {
            assert_eq!(sample(json!({"count": "lots"})).count, None);
            assert_eq!(sample(json!({"count": -3})).count, None);
            assert_eq!(sample(json!({"count": [1]})).count, None);
            assert_eq!(sample(json!({"count": null})).count, None);
        }
    }

    mod float_tests {
        use super::*;

        #[test]
        fn missing_hp_and_null_hp_are_zero() {
            assert_eq!(sample(json!({})).hp, 0.0);
            assert_eq!(sample(json!({"hp": null})).hp, 0.0);
            assert_eq!(sample(json!({"hp": "full"})).hp, 0.0);
        }

        #[test]
        fn weight_reads_numbers_and_drops_the_rest() {
            assert_eq!(sample(json!({"weight": 2.5})).weight, Some(2.5));
            assert_eq!(sample(json!({"weight": "3"})).weight, Some(3.0));
            assert_eq!(sample(json!({"weight": true})).weight, None);
        }
    }

    mod epoch_millis_tests {
        use super::*;

        #[derive(Debug, Deserialize)]
        struct Stamp {
            #[serde(deserialize_with = "epoch_millis")]
            at: i64,
        }

        #[test]
        fn accepts_integer_and_float_millis() {
            let stamp: Stamp = serde_json::from_value(json!({"at": 1_700_000_000_000_i64})).unwrap();
            assert_eq!(stamp.at, 1_700_000_000_000);
            let stamp: Stamp = serde_json::from_value(json!({"at": 1_700_000_000_000.0})).unwrap();
            assert_eq!(stamp.at, 1_700_000_000_000);
        }

        #[test]
        fn rejects_non_numbers() {
            assert!(serde_json::from_value::<Stamp>(json!({"at": "noon"})).is_err());
            assert!(serde_json::from_value::<Stamp>(json!({"at": null})).is_err());
        }
    }
}
