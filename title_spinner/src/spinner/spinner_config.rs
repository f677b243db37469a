// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{TitleMarkers, TitleSpinnerError, TitleSpinnerOptions};

/// The serializable subset of [`TitleSpinnerOptions`], for apps that keep their spinner
/// settings in a JSON config file. The output device and title producer can only be set
/// in code.
///
/// ```json
/// { "style": "dots", "interval_ms": 100, "open_marker": "\u001b]2;" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitleSpinnerConfig {
    pub style: Option<String>,
    pub interval_ms: Option<u64>,
    pub frames: Option<Vec<String>>,
    pub open_marker: Option<String>,
    pub close_marker: Option<String>,
}

impl TitleSpinnerConfig {
    /// # Errors
    ///
    /// Returns [`TitleSpinnerError::InvalidConfig`] if the JSON is malformed or has
    /// unknown fields.
    pub fn try_from_json_str(json: &str) -> Result<Self, TitleSpinnerError> {
        serde_json::from_str(json).map_err(TitleSpinnerError::InvalidConfig)
    }
}

impl From<TitleSpinnerConfig> for TitleSpinnerOptions {
    fn from(config: TitleSpinnerConfig) -> Self {
        let mut options = TitleSpinnerOptions::default();
        if let Some(style) = config.style {
            options.style = style;
        }
        options.interval = config.interval_ms.map(Duration::from_millis);
        options.frames = config.frames;

        let TitleMarkers { open, close } = TitleMarkers::default();
        options.markers = TitleMarkers::new(
            config.open_marker.unwrap_or(open),
            config.close_marker.unwrap_or(close),
        );

        options
    }
}
