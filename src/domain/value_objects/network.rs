//! Network value object - which replica the remote store lives on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Deployment network
///
/// - `Local`: a replica started on this machine (`dfx start`)
/// - `Remote`: the public network (`ic` to the `dfx` agent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Local,
    #[serde(alias = "ic")]
    Remote,
}

impl Network {
    /// Accepted spellings, for help text and typo suggestions
    pub const VALID_VALUES: &'static [&'static str] = &["local", "remote", "ic"];

    /// Name passed to `dfx --network`
    pub fn dfx_name(&self) -> &'static str {
        match self {
            Network::Local => "local",
            Network::Remote => "ic",
        }
    }

    /// Parse a user supplied value, case-insensitive
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "local" => Some(Network::Local),
            "remote" | "ic" | "mainnet" => Some(Network::Remote),
            _ => None,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Local => f.write_str("local"),
            Network::Remote => f.write_str("remote"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "unknown network '{}' (expected one of: {})",
                s,
                Self::VALID_VALUES.join(", ")
            )
        })
    }
}
