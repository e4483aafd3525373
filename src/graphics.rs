//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] with [`BinaryColor`] directly, so
//! embedded-graphics primitives, fonts and images draw straight into the
//! framebuffer. `On` maps to [`PixelMode::Set`], `Off` to [`PixelMode::Clear`].
//!
//! Coordinates are logical: the reported size follows the current rotation.
//! Nothing reaches the panel until [`Display::flush`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{MonoTextStyle, ascii::FONT_6X10},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use sh1106_oled::{Builder, Dimensions, Display, I2cInterface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{I2c, Operation};
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let dims = match Dimensions::new(128, 64) {
//! #     Ok(dims) => dims,
//! #     Err(_) => return,
//! # };
//! # let config = match Builder::new().dimensions(dims).build() {
//! #     Ok(config) => config,
//! #     Err(_) => return,
//! # };
//! let mut display = Display::new(I2cInterface::new(MockI2c), config);
//!
//! let _ = display.clear(BinaryColor::Off);
//!
//! let _ = Rectangle::new(Point::new(2, 2), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
//!     .draw(&mut display);
//!
//! let _ = Circle::new(Point::new(80, 10), 30)
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
//! let _ = Text::new("SH1106", Point::new(2, 50), style).draw(&mut display);
//!
//! let _ = display.flush();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
};

use crate::canvas::Canvas;
use crate::display::Display;
use crate::interface::DisplayInterface;
use crate::mode::PixelMode;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color.into());
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        let width = bottom_right.x - area.top_left.x + 1;
        let height = bottom_right.y - area.top_left.y + 1;
        self.fill_rect(
            area.top_left.x,
            area.top_left.y,
            width,
            height,
            color.into(),
        );

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(PixelMode::from(color));
        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let logical = self.logical_dimensions();
        Size::new(u32::from(logical.width), u32::from(logical.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions, Rotation};
    use embedded_graphics::{
        mono_font::{MonoTextStyle, ascii::FONT_6X10},
        prelude::*,
        primitives::{Line, PrimitiveStyle},
        text::Text,
    };
    use embedded_hal::delay::DelayNs;

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = Infallible;

        fn send_command(&mut self, _command: u8, _args: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_display(rotation: Rotation) -> Display<MockInterface> {
        let config = Builder::new()
            .dimensions(Dimensions::new(128, 64).unwrap())
            .rotation(rotation)
            .build()
            .unwrap();
        Display::new(MockInterface, config)
    }

    fn lit_pixels(display: &Display<MockInterface>) -> u32 {
        display.buffer().iter().map(|b| b.count_ones()).sum()
    }

    #[test]
    fn test_size_follows_rotation() {
        assert_eq!(test_display(Rotation::Rotate0).size(), Size::new(128, 64));
        assert_eq!(test_display(Rotation::Rotate90).size(), Size::new(64, 128));
        assert_eq!(test_display(Rotation::Rotate270).size(), Size::new(64, 128));
    }

    #[test]
    fn test_fill_solid_clips_to_panel() {
        let mut display = test_display(Rotation::Rotate0);
        Rectangle::new(Point::new(120, 60), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        assert_eq!(lit_pixels(&display), 8 * 4);
        assert!(display.get_pixel(127, 63));
        assert!(!display.get_pixel(119, 63));
    }

    #[test]
    fn test_fill_solid_outside_is_noop() {
        let mut display = test_display(Rotation::Rotate0);
        display
            .fill_solid(
                &Rectangle::new(Point::new(-30, -30), Size::new(10, 10)),
                BinaryColor::On,
            )
            .unwrap();
        assert_eq!(lit_pixels(&display), 0);
        assert_eq!(display.dirty_window(), None);
    }

    #[test]
    fn test_fill_solid_rotated() {
        let mut display = test_display(Rotation::Rotate90);
        display
            .fill_solid(
                &Rectangle::new(Point::new(0, 0), Size::new(64, 2)),
                BinaryColor::On,
            )
            .unwrap();
        assert_eq!(lit_pixels(&display), 128);
        // logical top rows are the two rightmost physical columns
        assert!(display.framebuffer().get_pixel(127, 0));
        assert!(display.framebuffer().get_pixel(126, 63));
        assert!(!display.framebuffer().get_pixel(125, 0));
    }

    #[test]
    fn test_draw_iter_off_clears() {
        let mut display = test_display(Rotation::Rotate0);
        display.clear(BinaryColor::On).unwrap();
        Line::new(Point::new(0, 5), Point::new(9, 5))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::Off, 1))
            .draw(&mut display)
            .unwrap();
        for x in 0..10 {
            assert!(!display.get_pixel(x, 5));
        }
        assert!(display.get_pixel(10, 5));
        assert_eq!(lit_pixels(&display), 128 * 64 - 10);
    }

    #[test]
    fn test_draw_iter_ignores_out_of_bounds() {
        let mut display = test_display(Rotation::Rotate180);
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(128, 0), BinaryColor::On),
                Pixel(Point::new(0, 64), BinaryColor::On),
                Pixel(Point::new(0, 0), BinaryColor::On),
            ])
            .unwrap();
        assert_eq!(lit_pixels(&display), 1);
        assert!(display.framebuffer().get_pixel(127, 63));
    }

    #[test]
    fn test_text_then_flush() {
        let mut display = test_display(Rotation::Rotate0);
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        Text::new("Hi", Point::new(0, 8), style)
            .draw(&mut display)
            .unwrap();
        assert!(lit_pixels(&display) > 0);
        let window = display.dirty_window().unwrap();
        assert!(window.x2 < 12);
        display.flush().unwrap();
        assert_eq!(display.dirty_window(), None);
    }
}
