//! Bit-packed framebuffer
//!
//! The buffer mirrors the controller's page layout: byte `x + page * width`
//! holds column `x` of page `page`, and bit `n` of that byte (0 = top) is row
//! `page * 8 + n`.
//!
//! Storage is a fixed array sized for the whole controller RAM
//! ([`RAM_SIZE`] bytes), so no allocator is needed. Only the first
//! `width * pages` bytes are used.
//!
//! All coordinates here are physical. Rotation is handled by
//! [`Display`](crate::display::Display) before calling in.

use crate::config::Dimensions;
use crate::dirty::DirtyWindow;
use crate::error::{MAX_COLUMNS, MAX_PAGES};
use crate::mode::PixelMode;

/// Bytes in the controller's display RAM (132 columns x 8 pages)
pub const RAM_SIZE: usize = MAX_COLUMNS as usize * MAX_PAGES as usize;

/// Packed 1-bit framebuffer with dirty tracking
#[derive(Clone, Debug)]
pub struct Framebuffer {
    buffer: [u8; RAM_SIZE],
    width: u16,
    height: u16,
    pub(crate) dirty: DirtyWindow,
}

impl Framebuffer {
    /// Create a cleared framebuffer for a panel of `dimensions`
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            buffer: [0; RAM_SIZE],
            width: dimensions.width,
            height: dimensions.height,
            dirty: DirtyWindow::new(),
        }
    }

    /// Physical width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Physical height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of pages in use
    pub fn pages(&self) -> u8 {
        self.height.div_ceil(8) as u8
    }

    /// Read-only view of the active bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len()]
    }

    /// Bytes of one page between columns `x1..=x2`
    pub fn page_slice(&self, page: u8, x1: u16, x2: u16) -> &[u8] {
        let start = page as usize * self.width as usize;
        &self.buffer[start + x1 as usize..=start + x2 as usize]
    }

    /// Number of active bytes (`width * pages`)
    pub fn len(&self) -> usize {
        self.width as usize * self.pages() as usize
    }

    /// Always false: a framebuffer covers at least one pixel
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dirty-window tracker
    pub fn dirty(&self) -> &DirtyWindow {
        &self.dirty
    }

    /// Buffer index and bit mask of an in-bounds pixel
    fn locate(&self, x: u16, y: u16) -> (usize, u8) {
        let index = x as usize + (y / 8) as usize * self.width as usize;
        (index, 1 << (y & 7))
    }

    /// Write one physical pixel; out-of-bounds coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, mode: PixelMode) {
        let Some((x, y)) = self.clip_point(x, y) else {
            return;
        };
        let (index, mask) = self.locate(x, y);
        self.buffer[index] = mode.apply(self.buffer[index], mask);
        self.dirty.expand(x, y, x, y);
    }

    /// Read one physical pixel; false when out of bounds
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.clip_point(x, y).is_some_and(|(x, y)| {
            let (index, mask) = self.locate(x, y);
            self.buffer[index] & mask != 0
        })
    }

    /// Fill the whole panel
    ///
    /// [`PixelMode::Invert`] is not supported at this granularity and leaves
    /// the buffer untouched.
    pub fn fill(&mut self, mode: PixelMode) {
        let Some(value) = mode.fill_byte() else {
            return;
        };
        let len = self.len();
        self.buffer[..len].fill(value);
        self.dirty.expand(0, 0, self.width - 1, self.height - 1);
    }

    pub(crate) fn byte_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.buffer[index]
    }

    fn clip_point(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let x = u16::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = u16::try_from(y).ok().filter(|y| *y < self.height)?;
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dirty::Window;

    fn framebuffer(width: u16, height: u16) -> Framebuffer {
        Framebuffer::new(Dimensions::new(width, height).unwrap())
    }

    #[test]
    fn test_pixel_layout_is_column_major_pages() {
        let mut fb = framebuffer(128, 64);
        fb.set_pixel(3, 10, PixelMode::Set);
        // page 1, column 3, bit 2
        assert_eq!(fb.as_bytes()[128 + 3], 0b0000_0100);
        assert!(fb.get_pixel(3, 10));
        assert!(!fb.get_pixel(3, 11));
    }

    #[test]
    fn test_clear_and_invert() {
        let mut fb = framebuffer(16, 8);
        fb.set_pixel(0, 0, PixelMode::Set);
        fb.set_pixel(0, 0, PixelMode::Invert);
        assert!(!fb.get_pixel(0, 0));
        fb.set_pixel(0, 0, PixelMode::Invert);
        assert!(fb.get_pixel(0, 0));
        fb.set_pixel(0, 0, PixelMode::Clear);
        assert!(!fb.get_pixel(0, 0));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut fb = framebuffer(128, 64);
        fb.set_pixel(-1, 0, PixelMode::Set);
        fb.set_pixel(128, 0, PixelMode::Set);
        fb.set_pixel(0, 64, PixelMode::Set);
        fb.set_pixel(0, -5, PixelMode::Set);
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
        assert!(fb.dirty().is_empty());
        assert!(!fb.get_pixel(-1, -1));
        assert!(!fb.get_pixel(500, 2));
    }

    #[test]
    fn test_buffer_length_rounds_up_partial_page() {
        let fb = framebuffer(20, 12);
        assert_eq!(fb.len(), 40);
        assert_eq!(fb.as_bytes().len(), 40);
    }

    #[test]
    fn test_fill_set_and_clear() {
        let mut fb = framebuffer(128, 64);
        fb.fill(PixelMode::Set);
        for y in 0..64 {
            for x in 0..128 {
                assert!(fb.get_pixel(x, y));
            }
        }
        assert_eq!(
            fb.dirty().bounds(),
            Some(Window {
                x1: 0,
                y1: 0,
                x2: 127,
                y2: 63
            })
        );
        fb.fill(PixelMode::Clear);
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_fill_invert_is_unsupported() {
        let mut fb = framebuffer(8, 8);
        fb.fill(PixelMode::Invert);
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
        assert!(fb.dirty().is_empty());
    }

    #[test]
    fn test_set_pixel_marks_single_pixel_dirty() {
        let mut fb = framebuffer(128, 64);
        fb.set_pixel(40, 17, PixelMode::Set);
        assert_eq!(
            fb.dirty().bounds(),
            Some(Window {
                x1: 40,
                y1: 17,
                x2: 40,
                y2: 17
            })
        );
    }

    #[test]
    fn test_page_slice() {
        let mut fb = framebuffer(16, 16);
        fb.set_pixel(4, 9, PixelMode::Set);
        assert_eq!(fb.page_slice(1, 3, 5), &[0x00, 0x02, 0x00]);
    }
}
