//! SH1106 OLED Display Driver
//!
//! A driver for monochrome OLED panels on the SH1106 controller (132x64 RAM,
//! typically wired to a 128x64 panel with a two-column offset).
//!
//! ## Features
//!
//! - `no_std` compatible, no allocator: the framebuffer is a fixed array
//! - `embedded-hal` v1.0 support, over I2C or 4-wire SPI
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Dirty-window tracking: [`Display::flush`] only sends what changed
//! - Software rotation in quarter turns
//! - Set/clear/invert pixel modes with fast horizontal and vertical spans
//! - Start-up splash image (with `splash` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::i2c::{I2c, Operation};
//! use sh1106_oled::{Builder, Dimensions, Display, I2cInterface, PixelMode, Rotation};
//!
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let interface = I2cInterface::new(MockI2c);
//! let dims = match Dimensions::new(128, 64) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate0).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new(interface, config);
//! let _ = display.begin(&mut delay);
//! let _ = display.initialize(&mut delay);
//!
//! display.write_hspan(0, 10, 128, PixelMode::Set);
//! let _ = display.flush();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Drawing capability shared by graphics layers
pub mod canvas;
/// SH1106 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Dirty-window tracking
pub mod dirty;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Bit-packed framebuffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Pixel write modes
pub mod mode;
/// Coordinate rotation utilities
pub mod rotation;
/// Command sequences and their executor
pub mod sequence;
/// Horizontal and vertical span writers
pub mod span;
/// Start-up splash images
pub mod splash;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use canvas::Canvas;
pub use config::{
    Builder, Config, DEFAULT_COLUMN_OFFSET, Dimensions, MAX_COLUMNS, MAX_PAGES, MAX_ROWS,
    PanelProfile, Rotation,
};
pub use dirty::Window;
pub use display::{Display, DisplayState};
pub use error::{BuilderError, Error};
pub use framebuffer::Framebuffer;
pub use interface::{
    DEFAULT_I2C_ADDRESS, DisplayInterface, I2cInterface, InterfaceError, SpiInterface,
};
pub use mode::PixelMode;
