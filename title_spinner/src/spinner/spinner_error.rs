// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors from constructing and driving a [`crate::TitleSpinner`].

/// Errors from [`crate::TitleSpinner`] and its configuration.
///
/// | Variant            | Raised by                            | Configuration error? |
/// | :----------------- | :----------------------------------- | :------------------- |
/// | [`UnknownStyle`]   | construction                         | Yes                  |
/// | [`EmptyFrames`]    | construction                         | Yes                  |
/// | [`ZeroInterval`]   | construction                         | Yes                  |
/// | [`InvalidConfig`]  | loading JSON config or style tables  | Yes                  |
/// | [`NoAsyncRuntime`] | [`start()`]                          | No                   |
/// | [`SinkWrite`]      | [`update()`]                         | No                   |
///
/// [`UnknownStyle`]: Self::UnknownStyle
/// [`EmptyFrames`]: Self::EmptyFrames
/// [`ZeroInterval`]: Self::ZeroInterval
/// [`InvalidConfig`]: Self::InvalidConfig
/// [`NoAsyncRuntime`]: Self::NoAsyncRuntime
/// [`SinkWrite`]: Self::SinkWrite
/// [`start()`]: crate::TitleSpinner::start
/// [`update()`]: crate::TitleSpinner::update
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum TitleSpinnerError {
    /// The style name isn't in the lookup, and `frames` or `interval` was not given.
    #[error("Unknown spinner style '{style}'")]
    #[diagnostic(
        code(r3bl_title_spinner::config::unknown_style),
        help(
            "Register the style in the StyleTable that is passed to \
             TitleSpinner::try_new_with_lookup(), or provide both `frames` and `interval`"
        )
    )]
    UnknownStyle { style: String },

    /// Spinning needs at least one frame.
    #[error("Spinner has no frames")]
    #[diagnostic(
        code(r3bl_title_spinner::config::empty_frames),
        help("Provide at least one frame")
    )]
    EmptyFrames,

    /// The timer needs a positive period.
    #[error("Spinner interval must be greater than zero")]
    #[diagnostic(
        code(r3bl_title_spinner::config::zero_interval),
        help("Provide an interval of at least 1ms")
    )]
    ZeroInterval,

    /// A JSON config or style table could not be parsed.
    #[error("Invalid spinner configuration")]
    #[diagnostic(code(r3bl_title_spinner::config::invalid))]
    InvalidConfig(#[source] serde_json::Error),

    /// [`crate::TitleSpinner::start()`] was called outside of a tokio runtime.
    #[error("No tokio runtime is available to drive the spinner timer")]
    #[diagnostic(
        code(r3bl_title_spinner::timer::no_async_runtime),
        help("Call start() from within a tokio runtime, eg: in a #[tokio::main] fn")
    )]
    NoAsyncRuntime,

    /// Writing the title to the output device failed. This is never retried.
    #[error("Failed to write the title to the output device")]
    #[diagnostic(code(r3bl_title_spinner::io::sink_write))]
    SinkWrite(#[source] std::io::Error),
}

impl TitleSpinnerError {
    /// True for the errors that mean the spinner could not be configured.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownStyle { .. }
                | Self::EmptyFrames
                | Self::ZeroInterval
                | Self::InvalidConfig(_)
        )
    }
}
