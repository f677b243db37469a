// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Tracing setup for apps that use the spinner. The spinner itself only emits
//! [`tracing`] events (`debug` on start / stop, `trace` per tick, `error` when an
//! automatic update can't be written). Use [`TracingConfig`] to see them.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
