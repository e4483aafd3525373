//! Embedded splash images
//!
//! Two 1-bit images shown by [`Display::initialize`](crate::display::Display::initialize)
//! unless the configuration asks for a blank start. Panels taller than
//! [`SPLASH_HEIGHT_THRESHOLD`] get the large image, shorter panels the small
//! one.
//!
//! Images are stored row-major, most significant bit first, each row padded
//! to a whole byte. With the `splash` feature disabled no image is compiled in
//! and the display simply starts blank.

use crate::config::SPLASH_HEIGHT_THRESHOLD;

/// A packed 1-bit image
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplashImage {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Row-major bits, MSB first, rows padded to bytes
    pub data: &'static [u8],
}

impl SplashImage {
    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.width.div_ceil(8) as usize
    }

    /// Whether the pixel at `(x, y)` is lit; false outside the image
    pub fn pixel(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y as usize * self.stride() + (x / 8) as usize;
        self.data
            .get(index)
            .is_some_and(|byte| byte & (0x80 >> (x & 7)) != 0)
    }
}

/// Large splash for panels taller than 32 rows
#[cfg(feature = "splash")]
pub const SPLASH_LARGE: SplashImage = SplashImage {
    width: 40,
    height: 40,
    data: &SPLASH_LARGE_DATA,
};

/// Small splash for panels up to 32 rows
///
/// 16 rows tall so it fits the shortest supported panel (96x16) uncropped.
#[cfg(feature = "splash")]
pub const SPLASH_SMALL: SplashImage = SplashImage {
    width: 16,
    height: 16,
    data: &SPLASH_SMALL_DATA,
};

#[cfg(feature = "splash")]
#[rustfmt::skip]
const SPLASH_LARGE_DATA: [u8; 200] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xC0, 0x00, 0x00, 0x1F,
    0xFF, 0xF8, 0x00, 0x00, 0x3F, 0xFF, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x3F,
    0x00, 0x01, 0xF0, 0x00, 0x0F, 0x80, 0x03, 0xE0, 0x00, 0x07, 0xC0, 0x07,
    0x80, 0x00, 0x01, 0xE0, 0x0F, 0x00, 0x00, 0x00, 0xF0, 0x0E, 0x00, 0x00,
    0x00, 0x70, 0x1E, 0x00, 0x00, 0x00, 0x78, 0x3C, 0x00, 0x00, 0x00, 0x3C,
    0x38, 0x00, 0x00, 0x00, 0x1C, 0x38, 0x00, 0x00, 0x00, 0x1C, 0x70, 0x00,
    0x3C, 0x00, 0x0E, 0x70, 0x00, 0xFF, 0x00, 0x0E, 0x70, 0x01, 0xFF, 0x80,
    0x0E, 0x70, 0x01, 0xFF, 0x80, 0x0E, 0x70, 0x03, 0xFF, 0xC0, 0x0E, 0x70,
    0x03, 0xFF, 0xC0, 0x0E, 0x70, 0x03, 0xFF, 0xC0, 0x0E, 0x70, 0x03, 0xFF,
    0xC0, 0x0E, 0x70, 0x01, 0xFF, 0x80, 0x0E, 0x70, 0x01, 0xFF, 0x80, 0x0E,
    0x70, 0x00, 0xFF, 0x00, 0x0E, 0x70, 0x00, 0x3C, 0x00, 0x0E, 0x38, 0x00,
    0x00, 0x00, 0x1C, 0x38, 0x00, 0x00, 0x00, 0x1C, 0x3C, 0x00, 0x00, 0x00,
    0x3C, 0x1E, 0x00, 0x00, 0x00, 0x78, 0x0E, 0x00, 0x00, 0x00, 0x70, 0x0F,
    0x00, 0x00, 0x00, 0xF0, 0x07, 0x80, 0x00, 0x01, 0xE0, 0x03, 0xE0, 0x00,
    0x07, 0xC0, 0x01, 0xF0, 0x00, 0x0F, 0x80, 0x00, 0xFC, 0x00, 0x3F, 0x00,
    0x00, 0x3F, 0xFF, 0xFC, 0x00, 0x00, 0x1F, 0xFF, 0xF8, 0x00, 0x00, 0x03,
    0xFF, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

#[cfg(feature = "splash")]
#[rustfmt::skip]
const SPLASH_SMALL_DATA: [u8; 32] = [
    0x03, 0xC0, 0x0F, 0xF0, 0x1C, 0x38, 0x30, 0x0C, 0x60, 0x06, 0x61, 0x86,
    0xC3, 0xC3, 0xC7, 0xE3, 0xC7, 0xE3, 0xC3, 0xC3, 0x61, 0x86, 0x60, 0x06,
    0x30, 0x0C, 0x1C, 0x38, 0x0F, 0xF0, 0x03, 0xC0,
];

/// Pick the splash image for a panel `height` rows tall
///
/// Returns `None` when no image is compiled in.
#[cfg(feature = "splash")]
pub fn for_height(height: u16) -> Option<SplashImage> {
    if height > SPLASH_HEIGHT_THRESHOLD {
        Some(SPLASH_LARGE)
    } else {
        Some(SPLASH_SMALL)
    }
}

/// Pick the splash image for a panel `height` rows tall
///
/// Returns `None` when no image is compiled in.
#[cfg(not(feature = "splash"))]
pub fn for_height(_height: u16) -> Option<SplashImage> {
    None
}

#[cfg(all(test, feature = "splash"))]
mod tests {
    use super::*;

    #[test]
    fn test_images_are_fully_backed() {
        for image in [SPLASH_LARGE, SPLASH_SMALL] {
            assert_eq!(image.data.len(), image.stride() * image.height as usize);
        }
    }

    #[test]
    fn test_selection_by_height() {
        assert_eq!(for_height(64), Some(SPLASH_LARGE));
        assert_eq!(for_height(33), Some(SPLASH_LARGE));
        assert_eq!(for_height(32), Some(SPLASH_SMALL));
        assert_eq!(for_height(16), Some(SPLASH_SMALL));
    }

    #[test]
    fn test_small_image_fits_short_panels() {
        assert!(SPLASH_SMALL.height <= SPLASH_HEIGHT_THRESHOLD);
        // 96x16 is the shortest panel with a profile
        assert!(SPLASH_SMALL.height <= 16);
        assert!(SPLASH_SMALL.width <= 96);
    }

    #[test]
    fn test_pixel_lookup() {
        // corners are dark, centre is lit
        assert!(!SPLASH_SMALL.pixel(0, 0));
        assert!(SPLASH_SMALL.pixel(7, 7));
        assert!(SPLASH_SMALL.pixel(7, 0));
        assert!(!SPLASH_SMALL.pixel(16, 0));
    }
}
