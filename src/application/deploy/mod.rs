//! Deploy Module
//!
//! Pushes generated lesson metadata to the remote store.
//!
//! ## Structure
//!
//! - `options` - `DeployOptions`, `DeployStrategy`, default method names
//! - `result` - `DeployResult`, `RemoteCall`, `VerifyReport`
//! - `retry` - `RetryPolicy` and `Backoff`
//! - `use_case` - `DeployUseCase`

mod options;
mod result;
mod retry;
mod use_case;

pub use options::{
    DeployOptions, DeployStrategy, DEFAULT_BULK_METHOD, DEFAULT_UPSERT_METHOD,
    DEFAULT_VERIFY_METHOD,
};
pub use result::{DeployResult, RemoteCall, VerifyReport};
pub use retry::{Backoff, RetryPolicy};
pub use use_case::DeployUseCase;

#[cfg(test)]
mod tests;
