//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level bus errors
//!
//! Drawing never fails: coordinates outside the panel are clipped. The only
//! runtime failure is a transport error reported by the [`DisplayInterface`].
//!
//! ## Example
//!
//! ```
//! use sh1106_oled::{Builder, BuilderError, Dimensions};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Wider than the controller RAM
//! let result = Dimensions::new(140, 64);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Number of columns in the controller's display RAM
///
/// The SH1106 has 132 columns of RAM even though most panels only show 128,
/// which is why a column offset is needed.
pub const MAX_COLUMNS: u16 = 132;

/// Maximum number of visible rows (multiplex ratio limit)
pub const MAX_ROWS: u16 = 64;

/// Number of 8-row pages in the controller's display RAM
pub const MAX_PAGES: u8 = 8;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C/SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    /// The operation that hit it was aborted; the driver itself stays usable.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is created.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Panel width requested
        width: u16,
        /// Panel height requested
        height: u16,
    },
    /// Rotation outside 0..=3 quarter turns
    InvalidRotation(u8),
    /// Column offset pushes the panel past the end of the RAM
    ColumnOffsetOutOfRange {
        /// Requested offset
        offset: u8,
        /// Panel width
        width: u16,
    },
    /// Page offset pushes the panel past the last RAM page
    PageOffsetOutOfRange {
        /// Requested offset
        offset: u8,
        /// Pages occupied by the panel
        pages: u8,
    },
    /// Display offset register only holds 0..=63
    DisplayOffsetOutOfRange(u8),
    /// Start line register only holds 0..=63
    StartLineOutOfRange(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS})"
            ),
            Self::InvalidRotation(value) => {
                write!(f, "Invalid rotation {value} (expected 0..=3)")
            }
            Self::ColumnOffsetOutOfRange { offset, width } => write!(
                f,
                "Column offset {offset} with width {width} exceeds {MAX_COLUMNS} RAM columns"
            ),
            Self::PageOffsetOutOfRange { offset, pages } => write!(
                f,
                "Page offset {offset} with {pages} pages exceeds {MAX_PAGES} RAM pages"
            ),
            Self::DisplayOffsetOutOfRange(value) => {
                write!(f, "Display offset {value} out of range (0..=63)")
            }
            Self::StartLineOutOfRange(value) => {
                write!(f, "Start line {value} out of range (0..=63)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
