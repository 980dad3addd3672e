//! Domain Layer
//!
//! Lesson fingerprints, registry and metadata records, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Lesson, ContentRegistry, DeploymentMetadataFile
//! - `value_objects/` - Slug, ContentHash, Network, IgnorePatterns
//! - `services/` - Integrity check and staleness comparison
//! - `ports/` - Interfaces for document storage, artifacts and the remote store
//!
//! Everything that touches the disk or a process goes through a port.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
