// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Name of the style that is used when none is given.
pub const DEFAULT_STYLE_NAME: &str = "dots";

/// Interval of the `"dots"` style from `cli-spinners`.
pub const DOTS_INTERVAL_MS: u64 = 80;

/// Frames of the `"dots"` style from `cli-spinners`.
pub const DOTS_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A `(frames, interval)` pair. In JSON the interval is a number of milliseconds, which
/// is the layout used by the `cli-spinners` `spinners.json` document:
///
/// ```json
/// { "interval": 80, "frames": ["⠋", "⠙", "⠹"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedStyle {
    #[serde(with = "duration_as_millis")]
    pub interval: Duration,
    pub frames: Vec<String>,
}

impl NamedStyle {
    pub fn new(
        frames: impl IntoIterator<Item = impl Into<String>>,
        interval: Duration,
    ) -> Self {
        Self {
            interval,
            frames: frames.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn dots() -> Self {
        Self::new(DOTS_FRAMES, Duration::from_millis(DOTS_INTERVAL_MS))
    }
}

mod duration_as_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        duration: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
