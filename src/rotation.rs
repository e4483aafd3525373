//! Coordinate rotation utilities
//!
//! This module maps logical coordinates (what the caller draws in) to
//! physical coordinates (framebuffer columns and rows) for each of the four
//! rotations.
//!
//! All arithmetic is done before clipping, widened to `i64` so that any `i32`
//! input maps without overflow. Callers pass the result to the span writer,
//! which clips against the physical panel. Transforming first and clipping
//! last keeps the dirty window equal to what was actually written, whatever
//! the rotation.
//!
//! ## Rotation Modes
//!
//! - **Rotate0**: identity
//! - **Rotate90**: swap axes, then mirror x
//! - **Rotate180**: mirror both axes
//! - **Rotate270**: swap axes, then mirror y
//!
//! ## Example
//!
//! ```
//! use sh1106_oled::{rotation::apply_rotation, Rotation};
//!
//! // On a 128x64 panel, logical origin at 90 degrees is the top-right corner
//! assert_eq!(apply_rotation(0, 0, 128, 64, Rotation::Rotate90), (127, 0));
//!
//! // At 180 degrees it is the bottom-right corner
//! assert_eq!(apply_rotation(0, 0, 128, 64, Rotation::Rotate180), (127, 63));
//! ```

use crate::config::Rotation;

/// Direction of a run of pixels in the framebuffer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Axis {
    /// Along a page (one bit in consecutive bytes)
    Horizontal,
    /// Across pages (consecutive bits in one column)
    Vertical,
}

/// A span expressed in physical coordinates, not yet clipped
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalSpan {
    /// Direction in the framebuffer
    pub axis: Axis,
    /// Start column
    pub x: i64,
    /// Start row
    pub y: i64,
    /// Number of pixels
    pub len: i64,
}

/// Map a logical point to physical coordinates
///
/// `width` and `height` are the physical panel dimensions. The result may lie
/// far outside the panel; it is only clipped by the framebuffer.
pub fn apply_rotation(x: i32, y: i32, width: i32, height: i32, rotation: Rotation) -> (i64, i64) {
    let (x, y) = (i64::from(x), i64::from(y));
    let (width, height) = (i64::from(width), i64::from(height));
    match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (width - y - 1, x),
        Rotation::Rotate180 => (width - x - 1, height - y - 1),
        Rotation::Rotate270 => (y, height - x - 1),
    }
}

/// Map a logical horizontal span starting at `(x, y)` to physical coordinates
///
/// At 90 and 270 degrees the span becomes vertical. Whenever the mirrored axis
/// is the one the span runs along, the start moves back by `len - 1` so the
/// span still begins at its lowest physical coordinate.
pub fn map_hspan(
    x: i32,
    y: i32,
    len: i32,
    width: i32,
    height: i32,
    rotation: Rotation,
) -> PhysicalSpan {
    let (px, py) = apply_rotation(x, y, width, height, rotation);
    let len = i64::from(len);
    match rotation {
        Rotation::Rotate0 => PhysicalSpan {
            axis: Axis::Horizontal,
            x: px,
            y: py,
            len,
        },
        Rotation::Rotate90 => PhysicalSpan {
            axis: Axis::Vertical,
            x: px,
            y: py,
            len,
        },
        Rotation::Rotate180 => PhysicalSpan {
            axis: Axis::Horizontal,
            x: px - (len - 1),
            y: py,
            len,
        },
        Rotation::Rotate270 => PhysicalSpan {
            axis: Axis::Vertical,
            x: px,
            y: py - (len - 1),
            len,
        },
    }
}

/// Map a logical vertical span starting at `(x, y)` to physical coordinates
///
/// Mirror image of [`map_hspan`]: at 90 and 270 degrees the span becomes
/// horizontal.
pub fn map_vspan(
    x: i32,
    y: i32,
    len: i32,
    width: i32,
    height: i32,
    rotation: Rotation,
) -> PhysicalSpan {
    let (px, py) = apply_rotation(x, y, width, height, rotation);
    let len = i64::from(len);
    match rotation {
        Rotation::Rotate0 => PhysicalSpan {
            axis: Axis::Vertical,
            x: px,
            y: py,
            len,
        },
        Rotation::Rotate90 => PhysicalSpan {
            axis: Axis::Horizontal,
            x: px - (len - 1),
            y: py,
            len,
        },
        Rotation::Rotate180 => PhysicalSpan {
            axis: Axis::Vertical,
            x: px,
            y: py - (len - 1),
            len,
        },
        Rotation::Rotate270 => PhysicalSpan {
            axis: Axis::Horizontal,
            x: px,
            y: py,
            len,
        },
    }
}
