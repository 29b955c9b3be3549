//! Identifier types shared across crates.

use std::fmt;

use serde::Serialize;

use crate::error::CoreError;

/// A Steam catalog key (`appid`): a non-empty string of ASCII digits.
///
/// Kept as a string rather than an integer so it round-trips to the
/// upstream endpoints and JSON responses exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Validate and wrap a raw app id. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::Validation(format!(
                "App id must be a string of digits, got '{trimmed}'"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
