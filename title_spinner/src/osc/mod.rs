// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! OSC (Operating System Command) sequences used to set the terminal window / tab title.
//!
//! A title update has the shape `open + title + close`, where `open` and `close` are the
//! [`TitleMarkers`]. The defaults produce `ESC ] 0 ; <title> BEL`.

pub mod osc_codes;
pub mod title_markers;

// Re-export main types for convenience.
pub use title_markers::*;
