//! Common test utilities for lessonpack CLI tests.
//!
//! - `TestEnv`: isolated project and home directories, plus a fake `dfx`
//! - Fixtures: reusable lesson documents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
