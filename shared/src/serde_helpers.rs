//! Serde helpers for patch payloads

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable patch field
///
/// | JSON | Result |
/// |------|--------|
/// | field absent | `None` (with `#[serde(default)]`) |
/// | `null` | `Some(None)` |
/// | value | `Some(Some(value))` |
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Treat blank strings as absent
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
