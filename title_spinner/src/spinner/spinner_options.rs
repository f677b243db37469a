// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{DEFAULT_STYLE_NAME, FrameSequencer, OutputDevice, TitleMarkers};

/// Custom title function. It is given the spinner's [`FrameSequencer`] so it can call
/// [`FrameSequencer::spin()`] and decorate the frame, eg:
///
/// ```
/// # use r3bl_title_spinner::{FrameSequencer, TitleProducer};
/// let producer: TitleProducer =
///     Box::new(|sequencer: &mut FrameSequencer| format!("{} building", sequencer.spin()));
/// ```
pub type TitleProducer = Box<dyn FnMut(&mut FrameSequencer) -> String + Send>;

/// Options for [`crate::TitleSpinner::try_new()`].
///
/// | Field            | Default                     | Effect                                     |
/// | :--------------- | :-------------------------- | :----------------------------------------- |
/// | `style`          | [`DEFAULT_STYLE_NAME`]      | Key used to look up frames and interval     |
/// | `interval`       | from `style`                | Time between automatic updates             |
/// | `frames`         | from `style`                | Frames to cycle through                    |
/// | `output_device`  | [`OutputDevice::new_stderr`] | Where titles are written                   |
/// | `title_producer` | [None]                      | Replaces "next frame" as the title         |
/// | `markers`        | OSC 0 + BEL                 | Brackets the title                         |
///
/// When both `frames` and `interval` are given, the style is not looked up at all.
pub struct TitleSpinnerOptions {
    pub style: String,
    pub interval: Option<Duration>,
    pub frames: Option<Vec<String>>,
    pub output_device: OutputDevice,
    pub title_producer: Option<TitleProducer>,
    pub markers: TitleMarkers,
}

impl std::fmt::Debug for TitleSpinnerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleSpinnerOptions")
            .field("style", &self.style)
            .field("interval", &self.interval)
            .field("frames", &self.frames)
            .field("output_device", &self.output_device)
            .field(
                "title_producer",
                &self.title_producer.as_ref().map(|_| "<FnMut>"),
            )
            .field("markers", &self.markers)
            .finish()
    }
}

impl Default for TitleSpinnerOptions {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE_NAME.to_string(),
            interval: None,
            frames: None,
            output_device: OutputDevice::default(),
            title_producer: None,
            markers: TitleMarkers::default(),
        }
    }
}

impl TitleSpinnerOptions {
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    #[must_use]
    pub fn with_frames(
        mut self,
        frames: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.frames = Some(frames.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_output_device(mut self, output_device: OutputDevice) -> Self {
        self.output_device = output_device;
        self
    }

    #[must_use]
    pub fn with_title_producer(
        mut self,
        producer: impl FnMut(&mut FrameSequencer) -> String + Send + 'static,
    ) -> Self {
        self.title_producer = Some(Box::new(producer));
        self
    }

    #[must_use]
    pub fn with_markers(mut self, markers: TitleMarkers) -> Self {
        self.markers = markers;
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let options = TitleSpinnerOptions::default();
        assert_eq!(options.style, "dots");
        assert_eq!(options.interval, None);
        assert_eq!(options.frames, None);
        assert!(options.title_producer.is_none());
        assert!(!options.output_device.is_mock);
        assert_eq!(options.markers, TitleMarkers::default());
    }

    #[test]
    fn test_chained_setters() {
        let options = TitleSpinnerOptions::default()
            .with_style("monkey")
            .with_interval(Duration::from_millis(5))
            .with_frames(["a", "b"])
            .with_markers(TitleMarkers::new("[", "]"))
            .with_title_producer(|sequencer| sequencer.spin());

        assert_eq!(options.style, "monkey");
        assert_eq!(options.interval, Some(Duration::from_millis(5)));
        assert_eq!(options.frames, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(options.markers.open, "[");
        assert!(options.title_producer.is_some());

        let debug = format!("{options:?}");
        assert!(debug.contains("<FnMut>"));
    }
}
