//! Terminal, CI and NDJSON output for the CLI

pub mod ci;
pub mod error;
pub mod json;
pub mod terminal;
