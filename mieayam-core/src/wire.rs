//! Serde helpers for the nullable columns storage rows carry.

use serde::{Deserialize, Deserializer};

/// Decode a field, reading an explicit `null` as the type's default.
///
/// Pair with `#[serde(default)]` so absent keys default too.
///
/// # Errors
/// Propagates the error from decoding a non-null value as `T`.
///
/// # Examples
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Row {
///     #[serde(default, deserialize_with = "mieayam_core::wire::null_as_default")]
///     flag: bool,
/// }
///
/// let row: Row = serde_json::from_str(r#"{"flag": null}"#)?;
/// assert!(!row.flag);
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "null_as_default")]
        label: String,
        #[serde(default, deserialize_with = "null_as_default")]
        flag: bool,
    }

    #[rstest]
    #[case(r#"{"label": null, "flag": null}"#, "", false)]
    #[case(r#"{}"#, "", false)]
    #[case(r#"{"label": "pak min", "flag": true}"#, "pak min", true)]
    fn nulls_and_absent_keys_read_as_default(
        #[case] payload: &str,
        #[case] label: &str,
        #[case] flag: bool,
    ) {
        let row: Row = serde_json::from_str(payload).expect("decode row");
        assert_eq!(row.label, label);
        assert_eq!(row.flag, flag);
    }

    #[rstest]
    fn wrong_types_still_fail() {
        assert!(serde_json::from_str::<Row>(r#"{"flag": "yes"}"#).is_err());
    }
}
