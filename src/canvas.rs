//! Drawing capability shared by graphics layers
//!
//! Text renderers and shape rasterisers only need a handful of primitives:
//! plot a pixel, write horizontal and vertical runs, and push the result to
//! the panel. [`Canvas`] names exactly that, in logical (rotated)
//! coordinates, so such layers can be written once and composed with
//! [`Display`] or with a test double.

use crate::config::Dimensions;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::mode::PixelMode;

/// A 1-bit drawing surface in logical coordinates
///
/// Drawing never fails; anything outside
/// [`logical_dimensions`](Canvas::logical_dimensions) is clipped.
pub trait Canvas {
    /// Error returned by [`flush`](Canvas::flush)
    type Error;

    /// Size seen by drawing calls
    fn logical_dimensions(&self) -> Dimensions;

    /// Write one pixel
    fn set_pixel(&mut self, x: i32, y: i32, mode: PixelMode);

    /// Write `len` pixels to the right of `(x, y)`
    fn write_hspan(&mut self, x: i32, y: i32, len: i32, mode: PixelMode);

    /// Write `len` pixels downwards from `(x, y)`
    fn write_vspan(&mut self, x: i32, y: i32, len: i32, mode: PixelMode);

    /// Send pending changes to the panel
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Fill a `width` x `height` rectangle with its top-left corner at `(x, y)`
    ///
    /// Picks whichever span direction needs fewer calls. Only rows or
    /// columns inside the logical area are visited.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, mode: PixelMode) {
        if width <= 0 || height <= 0 {
            return;
        }
        let size = self.logical_dimensions();
        if width >= height {
            for row in visible(y, height, size.height) {
                self.write_hspan(x, row, width, mode);
            }
        } else {
            for column in visible(x, width, size.width) {
                self.write_vspan(column, y, height, mode);
            }
        }
    }
}

/// Part of `start..start + len` inside `0..limit`
fn visible(start: i32, len: i32, limit: u16) -> core::ops::Range<i32> {
    let end = (i64::from(start) + i64::from(len)).min(i64::from(limit));
    start.max(0)..end as i32
}

impl<I> Canvas for Display<I>
where
    I: DisplayInterface,
{
    type Error = Error<I>;

    fn logical_dimensions(&self) -> Dimensions {
        Display::logical_dimensions(self)
    }

    fn set_pixel(&mut self, x: i32, y: i32, mode: PixelMode) {
        Display::set_pixel(self, x, y, mode);
    }

    fn write_hspan(&mut self, x: i32, y: i32, len: i32, mode: PixelMode) {
        Display::write_hspan(self, x, y, len, mode);
    }

    fn write_vspan(&mut self, x: i32, y: i32, len: i32, mode: PixelMode) {
        Display::write_vspan(self, x, y, len, mode);
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Display::flush(self)
    }
}
