use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
///
/// Payloads produced by other tooling routinely encode empty maps and lists as `null`.
pub(crate) fn nullable<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}
