//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod ignore_patterns;
mod network;
mod slug;

pub use hash::ContentHash;
pub use ignore_patterns::{IgnorePatterns, IGNORE_FILE_NAME};
pub use network::Network;
pub use slug::Slug;
