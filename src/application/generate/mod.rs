//! Generate Module
//!
//! Fingerprints lesson documents and writes the content registry and the
//! deployment metadata file.
//!
//! ## Structure
//!
//! - `options` - `GenerateOptions` and default output paths
//! - `result` - `GenerateResult`
//! - `use_case` - `GenerateUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! use lessonpack::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(documents, artifacts, ParserKind::Lines.parser());
//! let result = use_case.execute(&GenerateOptions::default())?;
//! use_case.validate(&result.registry, &options.content_dir)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{
    GenerateOptions, DEFAULT_CONTENT_DIR, DEFAULT_METADATA_PATH, DEFAULT_REGISTRY_PATH,
};
pub use result::GenerateResult;
pub use use_case::GenerateUseCase;
