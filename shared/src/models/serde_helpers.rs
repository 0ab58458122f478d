//! Serde helpers for tolerant reads
//!
//! Rows coming back from the API may carry `null` where a number is
//! expected. Those fields read as their default instead of failing the
//! whole response.

use serde::{Deserialize, Deserializer};

/// Deserialize `T`, treating `null` as `T::default()`
///
/// Pair with `#[serde(default)]` so a missing field reads the same way.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `bool` that reads `null` as `true`
pub fn bool_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(true))
}
