// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The [`TitleSpinner`] and its parts:
//! - [`FrameSequencer`]: the frames and the cursor that walks through them.
//! - [`TitleSpinnerOptions`] / [`TitleSpinnerConfig`]: configuration, in code or JSON.
//! - [`TitleSpinnerError`]: everything that can go wrong.

// Private modules (hide internal structure).
mod frame_sequencer;
mod spinner_config;
mod spinner_error;
mod spinner_options;
mod title_spinner;

// Re-exports for flat public API.
pub use frame_sequencer::*;
pub use spinner_config::*;
pub use spinner_error::*;
pub use spinner_options::*;
pub use title_spinner::*;
