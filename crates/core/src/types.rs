//! Shared primitive types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Milliseconds on the host's monotonic clock.
///
/// Feed operations take the current time as an argument instead of reading a
/// clock, so callers decide where time comes from (a render loop, a test).
pub type Millis = u64;

/// Length of a store identifier in hexadecimal characters (12 bytes).
pub const RESOURCE_ID_LEN: usize = 24;

/// Identifier of a look or product in the store.
///
/// Always 24 lowercase hexadecimal characters. Construct through
/// [`ResourceId::parse`] or [`ResourceId::generate`]; deserialization runs the
/// same check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceId(String);

impl ResourceId {
    /// Parse an identifier, normalizing hex digits to lowercase.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.len() != RESOURCE_ID_LEN || !raw.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::Validation(format!(
                "Invalid identifier '{raw}'. Must be {RESOURCE_ID_LEN} hexadecimal characters"
            )));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// Generate a fresh identifier from the leading 12 bytes of a UUIDv7,
    /// so identifiers sort roughly by creation time.
    pub fn generate() -> Self {
        let uuid = uuid::Uuid::now_v7();
        let hex = uuid.as_bytes()[..RESOURCE_ID_LEN / 2]
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect();
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

impl FromStr for ResourceId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
