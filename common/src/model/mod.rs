pub mod candidate;
pub mod reference;
pub mod session;
pub mod survey;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Optional text the backend may send as `null` or leave out.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
