//! Serde helpers for form-shaped input.
//!
//! Select boxes and object keys arrive as `"3"` rather than `3`; both forms
//! are accepted, anything else is a deserialization error. Cleared text
//! inputs arrive as `""`, which [`clearable_text`] reads as an explicit null.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

impl<T> NumberOrText<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn into_value<E: de::Error>(self) -> Result<T, E> {
        match self {
            NumberOrText::Number(n) => Ok(n),
            NumberOrText::Text(s) => s
                .trim()
                .parse()
                .map_err(|e| E::custom(format!("invalid number `{s}`: {e}"))),
        }
    }
}

/// Deserialize a number given either as a JSON number or a numeric string.
pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    NumberOrText::<T>::deserialize(deserializer)?.into_value()
}

/// Optional variant of [`number`]; `null` stays `None`.
pub fn optional_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    Option::<NumberOrText<T>>::deserialize(deserializer)?
        .map(NumberOrText::into_value)
        .transpose()
}

/// Three-state text field for partial updates.
///
/// Use with `#[serde(default, deserialize_with = "clearable_text")]`:
/// - missing: `None` (keep the stored value)
/// - `null` or blank: `Some(None)` (clear it)
/// - text: `Some(Some(text))`
pub fn clearable_text<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(Some(value.filter(|s| !s.trim().is_empty())))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "number")]
        id: i64,
        #[serde(default, deserialize_with = "optional_number")]
        difficulty: Option<i32>,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let a: Probe = serde_json::from_value(json!({"id": 4, "difficulty": 2})).unwrap();
        let b: Probe = serde_json::from_value(json!({"id": "4", "difficulty": " 2 "})).unwrap();
        assert_eq!((a.id, a.difficulty), (4, Some(2)));
        assert_eq!((b.id, b.difficulty), (4, Some(2)));
    }

    #[test]
    fn missing_or_null_optional_is_none() {
        let a: Probe = serde_json::from_value(json!({"id": 1})).unwrap();
        let b: Probe = serde_json::from_value(json!({"id": 1, "difficulty": null})).unwrap();
        assert_eq!(a.difficulty, None);
        assert_eq!(b.difficulty, None);
    }

    #[test]
    fn rejects_non_numeric_text() {
        let result: Result<Probe, _> = serde_json::from_value(json!({"id": "science"}));
        assert!(result.is_err());
    }

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "clearable_text")]
        website: Option<Option<String>>,
    }

    #[test]
    fn clearable_text_distinguishes_missing_cleared_and_set() {
        let missing: Patch = serde_json::from_value(json!({})).unwrap();
        let null: Patch = serde_json::from_value(json!({"website": null})).unwrap();
        let blank: Patch = serde_json::from_value(json!({"website": "  "})).unwrap();
        let set: Patch = serde_json::from_value(json!({"website": "https://hop.example"})).unwrap();

        assert_eq!(missing.website, None);
        assert_eq!(null.website, Some(None));
        assert_eq!(blank.website, Some(None));
        assert_eq!(set.website, Some(Some("https://hop.example".to_string())));
    }
}
