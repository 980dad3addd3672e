//! Content Hash Value Object
//!
//! A fingerprint of a lesson document's exact bytes.
//! Used by the front-end to decide whether cached lesson content is stale.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps a lowercase hex SHA-256 digest (64 characters, no prefix).
/// Values built with [`ContentHash::from_bytes`] are always well formed;
/// values read back from disk may not be, see [`ContentHash::is_well_formed`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Length of a hex-encoded SHA-256 digest
    pub const HEX_LEN: usize = 64;

    /// Wrap an existing hex string without validating it
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Compute SHA-256 over raw bytes
    ///
    /// No line-ending or whitespace normalization is applied.
    pub fn from_bytes(content: &[u8]) -> Self {
        let digest = Sha256::digest(content);
        Self(format!("{:x}", digest))
    }

    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `n` characters, for log lines
    pub fn short(&self, n: usize) -> &str {
        let end = self.0.len().min(n);
        self.0.get(..end).unwrap_or(&self.0)
    }

    /// True when the value matches `^[a-f0-9]{64}$`
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == Self::HEX_LEN
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ContentHash {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
