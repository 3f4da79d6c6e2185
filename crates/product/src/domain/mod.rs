pub mod requests;
pub mod response;
pub mod validation;

use serde::{Deserialize, Deserializer};

/// Reads an optional JSON string, mapping `null` to `""`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
