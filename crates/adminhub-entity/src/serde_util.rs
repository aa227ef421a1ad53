//! Serde helpers shared by the patch types.

use serde::{Deserialize, Deserializer};

/// Deserializer for `Option<Option<T>>` patch fields.
///
/// Plain serde collapses an explicit `null` into the outer `None`,
/// making "clear this field" inexpressible. With this helper a missing
/// key stays `None` (leave unchanged) while `null` becomes `Some(None)`
/// (clear the field).
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "double_option")]
        value: Option<Option<i32>>,
    }

    #[test]
    fn test_missing_key_leaves_field_unset() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.value, None);
    }

    #[test]
    fn test_null_clears_field() {
        let patch: Patch = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(patch.value, Some(None));
    }

    #[test]
    fn test_value_sets_field() {
        let patch: Patch = serde_json::from_str(r#"{"value": 7}"#).unwrap();
        assert_eq!(patch.value, Some(Some(7)));
    }
}
