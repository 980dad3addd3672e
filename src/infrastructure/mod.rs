//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system access and home directory resolution
//! - `repositories/` - Document scanning and artifact persistence
//! - `dfx/` - Remote lesson store reached through the `dfx` agent

pub mod dfx;
pub mod fs;
pub mod repositories;

pub use dfx::DfxStore;
pub use fs::LocalFs;
pub use repositories::{FsArtifactRepository, FsDocumentRepository};
