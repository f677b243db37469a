// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::osc_codes::{BELL_TERMINATOR, OSC0_SET_TITLE_AND_TAB, OSC2_SET_TITLE};

/// The open / close strings that bracket the title payload. Any strings are accepted, so
/// a sink that isn't a terminal can use something readable like `[` and `]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMarkers {
    pub open: String,
    pub close: String,
}

/// OSC 0 (title and tab) terminated by BEL.
impl Default for TitleMarkers {
    fn default() -> Self { Self::new(OSC0_SET_TITLE_AND_TAB, BELL_TERMINATOR) }
}

impl TitleMarkers {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// OSC 2, which leaves the tab / icon name alone.
    #[must_use]
    pub fn title_only() -> Self { Self::new(OSC2_SET_TITLE, BELL_TERMINATOR) }

    /// Produce the exact bytes of one title update: `open + title + close`, with no
    /// additional separators.
    #[must_use]
    pub fn format(&self, title: &str) -> String {
        let mut acc =
            String::with_capacity(self.open.len() + title.len() + self.close.len());
        acc.push_str(&self.open);
        acc.push_str(title);
        acc.push_str(&self.close);
        acc
    }
}
