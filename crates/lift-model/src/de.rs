//! Field deserializers shared by the entity schemas.
//!
//! Identifiers and amounts are the two places where the backend is known to
//! send either a JSON number or a JSON string for the same field.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Int(i64),
    Float(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::String(s) => s,
            Self::Int(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
        }
    }
}

/// Identifier that may be sent as `"42"` or `42`.
pub(crate) fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(StringOrNumber::deserialize(deserializer)?.into_string())
}

/// Optional identifier that may be sent as a string, a number or `null`.
pub(crate) fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?
        .map(StringOrNumber::into_string)
        .filter(|s| !s.is_empty()))
}

/// Value whose `null` reads the same as a missing key.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Monetary amount sent as `1200.5` or `"1200.50"`; blank strings and `null`
/// read as zero.
pub(crate) fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(StringOrNumber::Int(n)) => Ok(n as f64),
        Some(StringOrNumber::Float(n)) => Ok(n),
        Some(StringOrNumber::String(s)) => {
            let cleaned: String = s.chars().filter(|c| *c != ',').collect();
            let cleaned = cleaned.trim();
            if cleaned.is_empty() {
                return Ok(0.0);
            }
            cleaned.parse().map_err(serde::de::Error::custom)
        }
    }
}

/// Count sent as a number or numeric string.
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(0),
        Some(StringOrNumber::Int(n)) => u32::try_from(n).map_err(serde::de::Error::custom),
        Some(StringOrNumber::Float(n)) => Err(serde::de::Error::custom(format!(
            "expected a whole number, got {n}"
        ))),
        Some(StringOrNumber::String(s)) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "super::id")]
        id: String,
        #[serde(default, deserialize_with = "super::amount")]
        amount: f64,
        #[serde(default, deserialize_with = "super::opt_id")]
        parent: Option<String>,
        #[serde(default, deserialize_with = "super::count")]
        count: u32,
        #[serde(default, deserialize_with = "super::or_default")]
        label: String,
    }

    #[test]
    fn test_numeric_and_string_ids() {
        let a: Probe = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let b: Probe = serde_json::from_str(r#"{"id": "42"}"#).unwrap();
        assert_eq!(a.id, "42");
        assert_eq!(b.id, "42");
    }

    #[test]
    fn test_amount_variants() {
        let p: Probe = serde_json::from_str(r#"{"id": 1, "amount": "12,500.75"}"#).unwrap();
        assert!((p.amount - 12500.75).abs() < f64::EPSILON);
        let p: Probe = serde_json::from_str(r#"{"id": 1, "amount": null}"#).unwrap();
        assert_eq!(p.amount, 0.0);
        let p: Probe = serde_json::from_str(r#"{"id": 1, "amount": ""}"#).unwrap();
        assert_eq!(p.amount, 0.0);
        assert!(serde_json::from_str::<Probe>(r#"{"id": 1, "amount": "abc"}"#).is_err());
    }

    #[test]
    fn test_optional_id_blank_is_none() {
        let p: Probe = serde_json::from_str(r#"{"id": 1, "parent": ""}"#).unwrap();
        assert_eq!(p.parent, None);
        let p: Probe = serde_json::from_str(r#"{"id": 1, "parent": 7}"#).unwrap();
        assert_eq!(p.parent.as_deref(), Some("7"));
    }

    #[test]
    fn test_null_text_reads_as_empty() {
        let p: Probe = serde_json::from_str(r#"{"id": 1, "label": null}"#).unwrap();
        assert_eq!(p.label, "");
        let p: Probe = serde_json::from_str(r#"{"id": 1, "label": "Lobby"}"#).unwrap();
        assert_eq!(p.label, "Lobby");
    }

    #[test]
    fn test_count_variants() {
        let p: Probe = serde_json::from_str(r#"{"id": 1, "count": "3"}"#).unwrap();
        assert_eq!(p.count, 3);
        assert!(serde_json::from_str::<Probe>(r#"{"id": 1, "count": -1}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"id": 1, "count": 2.5}"#).is_err());
    }
}
