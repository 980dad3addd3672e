//! Lesson documents shared by the CLI tests

pub const FOR_LOOPS: &str = "---
title: For Loops
description: Iterate over ranges and collections
code: PY-101
version: 1.2.0
premium: false
---
# For loops

Loop over things.
";

pub const FUNCTIONS: &str = "---
title: Functions
description: Define and call functions
code: PY-102
premium: true
---
# Functions

Call things.
";

pub const NO_HEADER: &str = "# Broken

This lesson forgot its header.
";

/// Default content directory, relative to the project root
pub const CONTENT_DIR: &str = "src/content/lessons";
pub const REGISTRY_PATH: &str = "src/generated/content-registry.ts";
pub const METADATA_PATH: &str = "deployment/lesson-metadata.json";
