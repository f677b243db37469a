// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_title_spinner
//!
//! Render an animated spinner into the terminal's window / tab **title**, instead of into
//! the content stream. This is useful for long running CLI processes that want to signal
//! liveness without taking up any rows in the terminal.
//!
//! The title is rewritten using the OSC 0 escape sequence (`ESC ] 0 ; <title> BEL`), one
//! frame at a time. Frames are advanced either manually via
//! [`TitleSpinner::update()`], or automatically by a [tokio] interval task started with
//! [`TitleSpinner::start()`] and cancelled with [`TitleSpinner::stop()`].
//!
//! ```no_run
//! # use r3bl_title_spinner::{TitleSpinner, TitleSpinnerOptions};
//! # async fn example() -> miette::Result<()> {
//! let mut spinner = TitleSpinner::try_new(TitleSpinnerOptions::default())?;
//! spinner.start()?;
//!
//! // Some long running work happens here...
//! tokio::time::sleep(std::time::Duration::from_secs(2)).await;
//!
//! spinner.stop();
//! # Ok(())
//! # }
//! ```
//!
//! # Styles
//!
//! A style is a named `(frames, interval)` pair. Only `"dots"` ships with the crate (see
//! [`StyleTable::default()`]). Other styles are supplied by the caller via any
//! [`StyleLookup`] implementation, for example a [`StyleTable`] loaded from the
//! `cli-spinners` JSON document using [`StyleTable::try_from_json_str()`].
//!
//! # Output
//!
//! Titles are written to an [`OutputDevice`], which defaults to stderr. In tests, use
//! [`OutputDeviceExt::new_mock()`] to capture the bytes that are written.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod log;
pub mod osc;
pub mod spinner;
pub mod style;
pub mod terminal_io;
pub mod test_fixtures;

// Re-export for a flat public API.
pub use log::*;
pub use osc::*;
pub use spinner::*;
pub use style::*;
pub use terminal_io::*;
pub use test_fixtures::*;
