// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures that let tests (in this crate and downstream) capture the title escape
//! sequences that are written to an [`crate::OutputDevice`].

// Attach.
pub mod output_device_fixtures;

// Re-export.
pub use output_device_fixtures::*;
