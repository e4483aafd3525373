//! Pixel write modes
//!
//! The framebuffer stores one bit per pixel, so there is no colour to speak
//! of. Every write instead says what happens to the bit:
//!
//! | Mode     | Bit operation | Whole-byte value |
//! |----------|---------------|------------------|
//! | `Set`    | OR            | 0xFF             |
//! | `Clear`  | AND-NOT       | 0x00             |
//! | `Invert` | XOR           | XOR 0xFF         |
//!
//! ## Example
//!
//! ```
//! use sh1106_oled::PixelMode;
//!
//! assert_eq!(PixelMode::Set.apply(0b0000_0001, 0b1000_0000), 0b1000_0001);
//! assert_eq!(PixelMode::Clear.apply(0xFF, 0x0F), 0xF0);
//! assert_eq!(PixelMode::Invert.apply(0xAA, 0xFF), 0x55);
//! ```

/// How a write affects the pixels it touches
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PixelMode {
    /// Light the pixel
    #[default]
    Set,
    /// Turn the pixel off
    Clear,
    /// Flip the pixel
    Invert,
}

impl PixelMode {
    /// Apply this mode to the bits of `byte` selected by `mask`
    pub fn apply(self, byte: u8, mask: u8) -> u8 {
        match self {
            Self::Set => byte | mask,
            Self::Clear => byte & !mask,
            Self::Invert => byte ^ mask,
        }
    }

    /// Byte value used for whole-buffer fills
    ///
    /// Returns `None` for [`PixelMode::Invert`], which has no single fill value.
    pub fn fill_byte(self) -> Option<u8> {
        match self {
            Self::Set => Some(0xFF),
            Self::Clear => Some(0x00),
            Self::Invert => None,
        }
    }
}

impl From<bool> for PixelMode {
    fn from(on: bool) -> Self {
        if on { Self::Set } else { Self::Clear }
    }
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for PixelMode {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        Self::from(color.is_on())
    }
}
