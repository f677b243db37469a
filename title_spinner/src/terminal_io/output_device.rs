// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, MutexGuard, PoisonError};

use crate::{SafeRawTerminal, SendRawTerminal, StdMutex};

pub type LockedOutputDevice<'a> = &'a mut dyn std::io::Write;

/// Macro to simplify locking and getting a mutable reference to the output device.
/// Don't call this again in the same scope, it will deadlock! A safe approach is to use
/// this macro in a separate block scope.
///
/// ```
/// use r3bl_title_spinner::{lock_output_device_as_mut, LockedOutputDevice, OutputDevice};
/// let device = OutputDevice::new_stderr();
/// {
///     let mut_ref: LockedOutputDevice<'_> = lock_output_device_as_mut!(device);
///     let _ = mut_ref.write_all(b"\x1b]0;hello\x07");
/// } // The lock is released here.
/// ```
#[macro_export]
macro_rules! lock_output_device_as_mut {
    ($device:expr) => {
        &mut *$device.lock()
    };
}

/// The sink that title escape sequences are written to.
///
/// - It is cheap to clone, all the clones share the same underlying resource. The caller
///   keeps its own clone, so the lifecycle of the resource is not owned by the spinner.
/// - Other writers may share the resource. Each title is written with a single
///   `write_all` while the lock is held, so titles never interleave with other writes.
#[derive(Clone)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl std::fmt::Debug for OutputDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDevice")
            .field("resource", &"<dyn Write + Send>")
            .field("is_mock", &self.is_mock)
            .finish()
    }
}

/// Titles go to stderr by default, so that piping stdout does not capture them.
impl Default for OutputDevice {
    fn default() -> Self { Self::new_stderr() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    #[must_use]
    pub fn new_stderr() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stderr())),
            is_mock: false,
        }
    }

    /// Wrap any `Write + Send` resource, eg: a file or an in memory buffer.
    pub fn new_from(resource: impl std::io::Write + Send + 'static) -> Self {
        Self {
            resource: Arc::new(StdMutex::new(resource)),
            is_mock: false,
        }
    }

    /// Locks the output device for writing.
    ///
    /// A poisoned lock is recovered rather than propagated: the resource is a plain byte
    /// sink and holds no invariant that a panicking writer could have broken.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns true if both handles point to the same underlying resource.
    #[must_use]
    pub fn is_same_resource(&self, other: &OutputDevice) -> bool {
        Arc::ptr_eq(&self.resource, &other.resource)
    }
}
