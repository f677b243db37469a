// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_STYLE_NAME, NamedStyle, StyleLookup, TitleSpinnerError};

/// A [`StyleLookup`] backed by a [`HashMap`].
///
/// [`StyleTable::default()`] only contains [`DEFAULT_STYLE_NAME`], which is what is
/// needed to construct a [`crate::TitleSpinner`] with default options. Use
/// [`StyleTable::try_from_json_str()`] to load a whole catalog, eg: the `spinners.json`
/// document from `cli-spinners`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleTable {
    pub styles: HashMap<String, NamedStyle>,
}

impl Default for StyleTable {
    fn default() -> Self {
        let mut it = Self::empty();
        it.insert(DEFAULT_STYLE_NAME, NamedStyle::dots());
        it
    }
}

impl StyleTable {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Add or replace a style. Returns the style that was previously registered under
    /// this name, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        style: NamedStyle,
    ) -> Option<NamedStyle> {
        self.styles.insert(name.into(), style)
    }

    /// Chained variant of [`Self::insert()`].
    #[must_use]
    pub fn with_style(mut self, name: impl Into<String>, style: NamedStyle) -> Self {
        self.insert(name, style);
        self
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool { self.styles.contains_key(name) }

    #[must_use]
    pub fn len(&self) -> usize { self.styles.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.styles.is_empty() }

    /// Parse a JSON object mapping style names to `{ "interval": <ms>, "frames": [..] }`.
    ///
    /// # Errors
    ///
    /// Returns [`TitleSpinnerError::InvalidConfig`] if the JSON is malformed or doesn't
    /// have this shape.
    pub fn try_from_json_str(json: &str) -> Result<Self, TitleSpinnerError> {
        serde_json::from_str(json).map_err(TitleSpinnerError::InvalidConfig)
    }
}

impl StyleLookup for StyleTable {
    fn resolve(&self, name: &str) -> Option<NamedStyle> { self.styles.get(name).cloned() }
}
