use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Steam application id. Stored as PostgreSQL BIGINT.
pub type AppId = i64;

/// Number of decimal digits in a 64-bit Steam account id.
pub const STEAM_ID_LEN: usize = 17;

/// A validated 64-bit Steam account id in its 17-digit decimal form.
///
/// Construct with [`SteamId::parse`]; every service entry point that takes a
/// player id from the outside goes through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SteamId(String);

impl SteamId {
    /// Parse and validate a raw player id.
    ///
    /// Accepts exactly [`STEAM_ID_LEN`] ASCII digits, nothing else (no sign,
    /// no whitespace).
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.len() != STEAM_ID_LEN || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::Validation(format!(
                "steam id must be {STEAM_ID_LEN} digits, got '{raw}'"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SteamId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SteamId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SteamId> for String {
    fn from(id: SteamId) -> Self {
        id.0
    }
}

impl AsRef<str> for SteamId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
