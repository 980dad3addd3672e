//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod artifacts;
mod documents;

pub use artifacts::{
    render_metadata_json, render_registry_module, FsArtifactRepository, GENERATED_HEADER,
};
pub use documents::FsDocumentRepository;
