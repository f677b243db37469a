// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Named styles, and the lookup capability that resolves a style name into its frames
//! and interval. The crate only knows about the `"dots"` style, every other style is
//! supplied by the caller.

// Private modules (hide internal structure).
mod named_style;
mod style_lookup;
mod style_table;

// Re-exports for flat public API.
pub use named_style::*;
pub use style_lookup::*;
pub use style_table::*;
