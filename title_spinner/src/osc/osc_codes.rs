// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Operating System Command (OSC) codes for setting the terminal title.
//!
//! ## Structure
//! OSC sequences follow the pattern: `ESC ] code ; parameters ST`
//! - Start with ESC (0x1B) followed by `]`
//! - Numeric code identifying the command type
//! - End with String Terminator (ESC \\) or BEL (0x07)
//!
//! ## Examples
//! - `ESC]0;My Title BEL` - Set both window title and tab name
//! - `ESC]2;Window Title ESC\\` - Set window title only

/// OSC 0 sequence: Set both window title and tab name (ESC ] 0 ;). This is the most
/// widely supported title sequence, and is the default open marker.
pub const OSC0_SET_TITLE_AND_TAB: &str = "\x1b]0;";

/// OSC 2 sequence: Set window title only (ESC ] 2 ;).
pub const OSC2_SET_TITLE: &str = "\x1b]2;";

/// BEL character (0x07). Older terminals only understand this terminator, so it is the
/// default close marker.
pub const BELL_TERMINATOR: &str = "\x07";

/// String Terminator: ESC \\
pub const STRING_TERMINATOR: &str = "\x1b\\";
