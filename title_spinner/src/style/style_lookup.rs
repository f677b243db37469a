// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::NamedStyle;

/// Resolve a style name into a [`NamedStyle`]. This is the only thing
/// [`crate::TitleSpinner`] needs from a style catalog, so it has no dependency on any
/// particular set of bundled styles.
pub trait StyleLookup {
    /// Returns [None] if there is no style with this name.
    fn resolve(&self, name: &str) -> Option<NamedStyle>;
}

/// Closures work as ad hoc catalogs, which is handy in tests.
impl<F> StyleLookup for F
where
    F: Fn(&str) -> Option<NamedStyle>,
{
    fn resolve(&self, name: &str) -> Option<NamedStyle> { self(name) }
}
