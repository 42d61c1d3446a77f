//! Error types for the driver
//!
//! This module defines error types for configuration building
//! ([`BuilderError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//! - [`StoreError`](crate::storage::StoreError) - Shadow-store backing failures
//!
//! ## Example
//!
//! ```
//! use depg0266bn::{Builder, BuilderError};
//!
//! // A zero cadence would force a modulo-by-zero on the refresh counter
//! let result = Builder::new().full_update_every(0).build();
//! assert!(matches!(result, Err(BuilderError::InvalidFullUpdateEvery)));
//! ```

use crate::interface::DisplayInterface;
use crate::storage::StoreError;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO), including the fatal busy-wait timeout
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`]
    /// implementation.
    Interface(I::Error),
    /// Frame buffer is too small for the panel
    ///
    /// The provided buffer must be at least [`BUFFER_SIZE`](crate::BUFFER_SIZE) bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// The shadow store could not provide its backing memory
    ///
    /// Raised from the constructor; the driver is not usable without a
    /// shadow buffer.
    Storage(StoreError),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
            Self::Storage(e) => write!(f, "Shadow store error: {e}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

impl<I: DisplayInterface> From<StoreError> for Error<I> {
    fn from(value: StoreError) -> Self {
        Self::Storage(value)
    }
}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuilderError {
    /// `full_update_every` was zero
    ///
    /// The refresh counter advances modulo this value; at least one refresh
    /// per cycle must exist.
    InvalidFullUpdateEvery,
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidFullUpdateEvery => {
                write!(f, "full_update_every must be at least 1")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
