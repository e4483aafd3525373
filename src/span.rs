//! Span writer
//!
//! Bulk pixel writes on the framebuffer in physical coordinates.
//!
//! A horizontal span touches one bit in a run of consecutive bytes. A vertical
//! span touches consecutive bits of one column, which is split into:
//!
//! 1. a leading partial byte masked with [`UPPER_MASK`],
//! 2. whole bytes written eight rows at a time,
//! 3. a trailing partial byte masked with [`LOWER_MASK`].
//!
//! Both writers clip against the panel first and only mark the clipped
//! rectangle dirty.

use crate::framebuffer::Framebuffer;
use crate::mode::PixelMode;
use crate::rotation::{Axis, PhysicalSpan};

/// `UPPER_MASK[n]`: the top `n` bits of a byte (rows `8 - n..8` of a page)
pub const UPPER_MASK: [u8; 8] = [0x00, 0x80, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC, 0xFE];

/// `LOWER_MASK[n]`: the low `n` bits of a byte, `(1 << n) - 1`
pub const LOWER_MASK: [u8; 8] = [0x00, 0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F];

/// Clip a run starting at `start` of `len` pixels to `0..limit`
///
/// Returns the clipped start and length, or `None` when nothing is left.
fn clip_run(start: i64, len: i64, limit: u16) -> Option<(u16, u16)> {
    let limit = i64::from(limit);
    if len <= 0 || start >= limit {
        return None;
    }
    let end = start.saturating_add(len).min(limit);
    let start = start.max(0);
    if end <= start {
        return None;
    }
    Some((start as u16, (end - start) as u16))
}

impl Framebuffer {
    /// Write `len` pixels to the right of `(x, y)`
    pub fn write_hspan(&mut self, x: i32, y: i32, len: i32, mode: PixelMode) {
        self.hspan(i64::from(x), i64::from(y), i64::from(len), mode);
    }

    /// Write `len` pixels downwards from `(x, y)`
    pub fn write_vspan(&mut self, x: i32, y: i32, len: i32, mode: PixelMode) {
        self.vspan(i64::from(x), i64::from(y), i64::from(len), mode);
    }

    /// Write a span produced by the rotation transform
    pub fn write_span(&mut self, span: PhysicalSpan, mode: PixelMode) {
        match span.axis {
            Axis::Horizontal => self.hspan(span.x, span.y, span.len, mode),
            Axis::Vertical => self.vspan(span.x, span.y, span.len, mode),
        }
    }

    fn hspan(&mut self, x: i64, y: i64, len: i64, mode: PixelMode) {
        if y < 0 || y >= i64::from(self.height()) {
            return;
        }
        let Some((x, len)) = clip_run(x, len, self.width()) else {
            return;
        };
        let y = y as u16;
        let mask = 1u8 << (y & 7);
        let row = (y / 8) as usize * self.width() as usize;
        for index in row + x as usize..row + (x + len) as usize {
            let byte = self.byte_mut(index);
            *byte = mode.apply(*byte, mask);
        }
        self.dirty.expand(x, y, x + len - 1, y);
    }

    fn vspan(&mut self, x: i64, y: i64, len: i64, mode: PixelMode) {
        if x < 0 || x >= i64::from(self.width()) {
            return;
        }
        let Some((y, len)) = clip_run(y, len, self.height()) else {
            return;
        };
        let x = x as u16;
        let width = self.width() as usize;
        let mut index = x as usize + (y / 8) as usize * width;
        let mut remaining = len;

        let offset = y & 7;
        if offset != 0 {
            let upper = 8 - offset;
            let mut mask = UPPER_MASK[upper as usize];
            if remaining < upper {
                mask &= 0xFF >> (upper - remaining);
            }
            let byte = self.byte_mut(index);
            *byte = mode.apply(*byte, mask);
            index += width;
            remaining = remaining.saturating_sub(upper);
        }

        while remaining >= 8 {
            let byte = self.byte_mut(index);
            *byte = match mode {
                PixelMode::Set => 0xFF,
                PixelMode::Clear => 0x00,
                PixelMode::Invert => *byte ^ 0xFF,
            };
            index += width;
            remaining -= 8;
        }

        if remaining > 0 {
            let byte = self.byte_mut(index);
            *byte = mode.apply(*byte, LOWER_MASK[remaining as usize]);
        }

        self.dirty.expand(x, y, x, y + len - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;
    use crate::dirty::Window;

    fn framebuffer(width: u16, height: u16) -> Framebuffer {
        Framebuffer::new(Dimensions::new(width, height).unwrap())
    }

    fn column(fb: &Framebuffer, x: i32) -> alloc::vec::Vec<bool> {
        (0..i32::from(fb.height())).map(|y| fb.get_pixel(x, y)).collect()
    }

    #[test]
    fn test_mask_tables() {
        for n in 0..8 {
            assert_eq!(LOWER_MASK[n], ((1u16 << n) - 1) as u8);
            assert_eq!(UPPER_MASK[n], !(0xFFu8 >> n));
        }
    }

    #[test]
    fn test_hspan_sets_one_row() {
        let mut fb = framebuffer(128, 64);
        fb.write_hspan(10, 13, 5, PixelMode::Set);
        for x in 0..128 {
            assert_eq!(fb.get_pixel(x, 13), (10..15).contains(&x));
            assert!(!fb.get_pixel(x, 12));
            assert!(!fb.get_pixel(x, 14));
        }
        assert_eq!(
            fb.dirty().bounds(),
            Some(Window {
                x1: 10,
                y1: 13,
                x2: 14,
                y2: 13
            })
        );
    }

    #[test]
    fn test_hspan_clips_left_edge() {
        let mut fb = framebuffer(128, 64);
        fb.write_hspan(-3, 0, 5, PixelMode::Set);
        assert!(fb.get_pixel(0, 0));
        assert!(fb.get_pixel(1, 0));
        assert!(!fb.get_pixel(2, 0));
        let window = fb.dirty().bounds().unwrap();
        assert_eq!((window.x1, window.x2), (0, 1));
    }

    #[test]
    fn test_hspan_clips_right_edge() {
        let mut fb = framebuffer(128, 64);
        fb.write_hspan(126, 5, 10, PixelMode::Set);
        let window = fb.dirty().bounds().unwrap();
        assert_eq!((window.x1, window.x2, window.width()), (126, 127, 2));
    }

    #[test]
    fn test_hspan_fully_clipped_is_noop() {
        let mut fb = framebuffer(128, 64);
        fb.write_hspan(-10, 0, 10, PixelMode::Set);
        fb.write_hspan(128, 0, 4, PixelMode::Set);
        fb.write_hspan(0, 64, 4, PixelMode::Set);
        fb.write_hspan(0, -1, 4, PixelMode::Set);
        fb.write_hspan(0, 0, 0, PixelMode::Set);
        fb.write_hspan(0, 0, -4, PixelMode::Set);
        assert!(fb.dirty().is_empty());
        assert!(fb.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_hspan_invert() {
        let mut fb = framebuffer(16, 8);
        fb.write_hspan(0, 2, 8, PixelMode::Set);
        fb.write_hspan(4, 2, 8, PixelMode::Invert);
        for x in 0..16 {
            assert_eq!(fb.get_pixel(x, 2), x < 4 || x >= 8, "x={x}");
        }
    }

    #[test]
    fn test_vspan_within_one_byte() {
        let mut fb = framebuffer(8, 16);
        fb.write_vspan(2, 2, 3, PixelMode::Set);
        assert_eq!(fb.as_bytes()[2], 0b0001_1100);
        assert_eq!(fb.as_bytes()[8 + 2], 0);
    }

    #[test]
    fn test_vspan_unaligned_across_bytes_keeps_neighbours() {
        let mut fb = framebuffer(4, 64);
        fb.fill(PixelMode::Set);
        fb.dirty.reset();
        fb.write_vspan(1, 5, 22, PixelMode::Clear);
        let col = column(&fb, 1);
        for (y, lit) in col.iter().enumerate() {
            assert_eq!(*lit, !(5..27).contains(&y), "y={y}");
        }
        // other columns untouched
        assert!(column(&fb, 0).iter().all(|lit| *lit));
        assert!(column(&fb, 2).iter().all(|lit| *lit));
        assert_eq!(
            fb.dirty().bounds(),
            Some(Window {
                x1: 1,
                y1: 5,
                x2: 1,
                y2: 26
            })
        );
    }

    #[test]
    fn test_vspan_aligned_whole_bytes() {
        let mut fb = framebuffer(4, 32);
        fb.write_vspan(3, 8, 16, PixelMode::Set);
        let bytes = fb.as_bytes();
        assert_eq!(bytes[3], 0x00);
        assert_eq!(bytes[4 + 3], 0xFF);
        assert_eq!(bytes[8 + 3], 0xFF);
        assert_eq!(bytes[12 + 3], 0x00);
    }

    #[test]
    fn test_vspan_invert_mixed_content() {
        let mut fb = framebuffer(2, 24);
        fb.write_vspan(0, 0, 24, PixelMode::Set);
        fb.write_vspan(0, 3, 15, PixelMode::Invert);
        for y in 0..24 {
            assert_eq!(fb.get_pixel(0, y), !(3..18).contains(&y), "y={y}");
        }
    }

    #[test]
    fn test_vspan_clips_top_and_bottom() {
        let mut fb = framebuffer(8, 16);
        fb.write_vspan(0, -4, 30, PixelMode::Set);
        assert!(column(&fb, 0).iter().all(|lit| *lit));
        let window = fb.dirty().bounds().unwrap();
        assert_eq!((window.y1, window.y2), (0, 15));
    }

    #[test]
    fn test_vspan_partial_page_panel() {
        // 12 rows: second page only has 4 visible rows
        let mut fb = framebuffer(4, 12);
        fb.write_vspan(0, 6, 100, PixelMode::Set);
        assert_eq!(fb.as_bytes()[0], 0b1100_0000);
        assert_eq!(fb.as_bytes()[4], 0b0000_1111);
    }

    #[test]
    fn test_extreme_runs_clip_without_overflow() {
        let mut fb = framebuffer(128, 64);
        fb.write_hspan(i32::MAX - 1, 0, 10, PixelMode::Set);
        fb.write_hspan(i32::MAX - 1000, 0, 65536 + 500, PixelMode::Set);
        fb.write_hspan(i32::MIN, 0, i32::MAX, PixelMode::Set);
        fb.write_hspan(0, i32::MIN, i32::MAX, PixelMode::Set);
        fb.write_vspan(0, i32::MAX, i32::MAX, PixelMode::Set);
        fb.write_vspan(i32::MIN, 0, 8, PixelMode::Set);
        fb.write_vspan(5, i32::MIN, i32::MAX, PixelMode::Set);
        assert!(fb.dirty().is_empty());
        assert!(fb.as_bytes().iter().all(|b| *b == 0));

        // reaching back onto the panel from far left still clips correctly
        fb.write_hspan(i32::MIN, 3, i32::MAX, PixelMode::Set);
        assert!(fb.dirty().is_empty());
        fb.write_hspan(-(i32::MAX - 2), 3, i32::MAX, PixelMode::Set);
        assert!(fb.get_pixel(0, 3));
        assert!(fb.get_pixel(1, 3));
        assert!(!fb.get_pixel(2, 3));

        fb.write_vspan(7, -(i32::MAX - 10), i32::MAX, PixelMode::Set);
        let lit: alloc::vec::Vec<bool> = column(&fb, 7);
        for (y, on) in lit.iter().enumerate() {
            assert_eq!(*on, y < 10, "y={y}");
        }
    }

    #[test]
    fn test_write_span_dispatches_on_axis() {
        let mut fb = framebuffer(16, 16);
        fb.write_span(
            PhysicalSpan {
                axis: Axis::Vertical,
                x: 2,
                y: 4,
                len: 3,
            },
            PixelMode::Set,
        );
        fb.write_span(
            PhysicalSpan {
                axis: Axis::Horizontal,
                x: -4,
                y: 9,
                len: i64::from(i32::MAX) * 4,
            },
            PixelMode::Set,
        );
        assert_eq!(column(&fb, 2)[4..7], [true, true, true]);
        assert!((0..16).all(|x| fb.get_pixel(x, 9)));
    }

    #[test]
    fn test_vspan_out_of_range_column_is_noop() {
        let mut fb = framebuffer(8, 16);
        fb.write_vspan(8, 0, 4, PixelMode::Set);
        fb.write_vspan(-1, 0, 4, PixelMode::Set);
        assert!(fb.dirty().is_empty());
    }
}
