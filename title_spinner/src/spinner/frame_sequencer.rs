// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::TitleSpinnerError;

/// An ordered, non-empty list of frames, plus a cursor that walks through them and wraps
/// around. The frames can't be changed after construction.
///
/// A [`crate::TitleProducer`] is handed a `&mut FrameSequencer`, so that it can call
/// [`Self::spin()`] and decorate the frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequencer {
    frames: Vec<String>,
    /// Index of the next frame. It may run one past the end, [`Self::spin()`]
    /// re-normalizes it to 0 before reading.
    cursor: usize,
}

impl FrameSequencer {
    /// # Errors
    ///
    /// Returns [`TitleSpinnerError::EmptyFrames`] if `frames` is empty.
    pub fn try_new(
        frames: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self, TitleSpinnerError> {
        let frames: Vec<String> = frames.into_iter().map(Into::into).collect();
        if frames.is_empty() {
            return Err(TitleSpinnerError::EmptyFrames);
        }
        Ok(Self { frames, cursor: 0 })
    }

    /// Returns the frame at the cursor, then advances the cursor. When the cursor has
    /// run off the end it is reset to 0 first, so this wraps around forever.
    pub fn spin(&mut self) -> String {
        let frame = match self.frames.get(self.cursor) {
            Some(frame) => frame,
            None => {
                self.cursor = 0;
                match self.frames.first() {
                    Some(frame) => frame,
                    None => return String::new(),
                }
            }
        };
        let frame = frame.clone();
        self.cursor += 1;
        frame
    }

    /// Index of the frame that the next [`Self::spin()`] will return.
    #[must_use]
    pub fn cursor(&self) -> usize {
        if self.cursor < self.frames.len() {
            self.cursor
        } else {
            0
        }
    }

    #[must_use]
    pub fn frames(&self) -> &[String] { &self.frames }

    #[must_use]
    pub fn len(&self) -> usize { self.frames.len() }

    /// Always false, construction rejects an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.frames.is_empty() }
}
