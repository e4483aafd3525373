//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::command::{
    INVERT_DISPLAY, NORMAL_DISPLAY, SET_CONTRAST, high_column, low_column, page_address,
};
use crate::config::{Config, Dimensions, Rotation, rotated};
use crate::dirty::Window;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::{DisplayInterface, with_transaction};
use crate::mode::PixelMode;
use crate::rotation::{apply_rotation, map_hspan, map_vspan};
use crate::sequence::{POWER_OFF, POWER_ON, Step, init_sequence, run};
use crate::splash::{self, SplashImage};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Lifecycle state of the controller as far as the driver knows
///
/// `Uninitialized -> PoweredOff -> Active`, and back to `PoweredOff` on
/// [`Display::power_off`]. Releasing the hardware consumes the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DisplayState {
    /// Nothing has been sent yet
    #[default]
    Uninitialized,
    /// Panel off; the controller may be mid-configuration
    PoweredOff,
    /// Panel on and showing RAM
    Active,
}

/// Core display driver for SH1106
///
/// Owns the hardware interface and a framebuffer covering the panel. Drawing
/// calls only touch the framebuffer and grow the dirty window; [`flush`]
/// sends the dirty rectangle to the controller.
///
/// For embedded-graphics support, enable the `graphics` feature.
///
/// [`flush`]: Display::flush
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Pixel storage and dirty tracking
    framebuffer: Framebuffer,
    /// Rotation applied to drawing calls
    rotation: Rotation,
    /// Contrast restored when leaving dim mode
    contrast: u8,
    /// Lifecycle state
    state: DisplayState,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bus traffic happens until [`begin`](Self::begin) or
    /// [`initialize`](Self::initialize).
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            framebuffer: Framebuffer::new(config.dimensions),
            rotation: config.rotation,
            contrast: config.profile.contrast,
            interface,
            config,
            state: DisplayState::Uninitialized,
        }
    }

    /// Bring up the bus and pulse the reset line
    ///
    /// Call once before [`initialize`](Self::initialize).
    pub fn begin<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!("bus setup and reset");
        self.interface.setup().map_err(Error::Interface)?;
        self.interface.reset(delay).map_err(Error::Interface)
    }

    /// Run the start-up sequence and switch the panel on
    ///
    /// Sends the configuration table, applies the configured rotation, clears
    /// the framebuffer, draws the splash image unless disabled, flushes and
    /// finally turns the display on.
    ///
    /// On error the sequence stops where it failed and the controller is in
    /// an unknown state. Calling `initialize` again starts over.
    pub fn initialize<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!(
            "initializing {}x{} panel",
            self.config.dimensions.width,
            self.config.dimensions.height
        );
        self.state = DisplayState::PoweredOff;

        let steps = init_sequence(&self.config);
        run(&mut self.interface, &steps, delay).map_err(Error::Interface)?;
        self.contrast = self.config.profile.contrast;

        self.rotation = self.config.rotation;
        self.framebuffer.fill(PixelMode::Clear);
        if !self.config.no_splash {
            if let Some(image) = splash::for_height(self.config.dimensions.height) {
                self.draw_splash(image);
            }
        }
        self.flush()?;

        self.set_power(true)
    }

    /// Pre-teardown: switch the panel off
    pub fn power_off(&mut self) -> DisplayResult<I> {
        log::debug!("powering off");
        self.set_power(false)
    }

    /// Post-teardown: shut down the bus and hand back the interface
    ///
    /// If the bus fails to shut down the interface is dropped with the error.
    pub fn release(mut self) -> Result<I, Error<I>> {
        self.interface.teardown().map_err(Error::Interface)?;
        Ok(self.interface)
    }

    /// Write one pixel in logical (rotated) coordinates
    ///
    /// Pixels outside the logical area are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, mode: PixelMode) {
        if let Some((px, py)) = self.to_physical(x, y) {
            self.framebuffer.set_pixel(px, py, mode);
        }
    }

    /// Read one pixel in logical (rotated) coordinates; false outside the area
    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        self.to_physical(x, y)
            .is_some_and(|(px, py)| self.framebuffer.get_pixel(px, py))
    }

    /// Write a horizontal run of `len` logical pixels starting at `(x, y)`
    pub fn write_hspan(&mut self, x: i32, y: i32, len: i32, mode: PixelMode) {
        if len <= 0 {
            return;
        }
        let (width, height) = self.physical_size();
        let span = map_hspan(x, y, len, width, height, self.rotation);
        self.framebuffer.write_span(span, mode);
    }

    /// Write a vertical run of `len` logical pixels starting at `(x, y)`
    pub fn write_vspan(&mut self, x: i32, y: i32, len: i32, mode: PixelMode) {
        if len <= 0 {
            return;
        }
        let (width, height) = self.physical_size();
        let span = map_vspan(x, y, len, width, height, self.rotation);
        self.framebuffer.write_span(span, mode);
    }

    /// Fill the whole panel with [`PixelMode::Set`] or [`PixelMode::Clear`]
    ///
    /// [`PixelMode::Invert`] is ignored; invert with spans instead.
    pub fn fill(&mut self, mode: PixelMode) {
        self.framebuffer.fill(mode);
    }

    /// Send the dirty part of the framebuffer to the controller
    ///
    /// Does nothing when no pixel changed since the last flush. Otherwise
    /// each page crossed by the dirty window gets one transaction: page
    /// select, column address, then the dirty columns of that page.
    ///
    /// On a transport error the dirty window is kept so the flush can be
    /// retried.
    pub fn flush(&mut self) -> DisplayResult<I> {
        let Some(window) = self.framebuffer.dirty().bounds() else {
            return Ok(());
        };
        let (first, last) = window.pages();
        let column = (window.x1 + u16::from(self.config.column_offset)) as u8;
        log::trace!(
            "flush columns {}..={} pages {}..={}",
            window.x1,
            window.x2,
            first,
            last
        );

        for page in first..=last {
            let data = self.framebuffer.page_slice(page, window.x1, window.x2);
            let page_command = page_address(page + self.config.page_offset);
            with_transaction(&mut self.interface, |interface| {
                interface.send_command(page_command, &[])?;
                interface.send_command(low_column(column), &[])?;
                interface.send_command(high_column(column), &[])?;
                interface.send_data(data)
            })
            .map_err(Error::Interface)?;
        }

        self.framebuffer.dirty.reset();
        Ok(())
    }

    /// Invert the panel in hardware; the framebuffer is not touched
    pub fn set_invert(&mut self, invert: bool) -> DisplayResult<I> {
        let command = if invert {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        };
        self.send_steps(&[Step::new(command)])
    }

    /// Set and remember the contrast
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.contrast = contrast;
        self.send_steps(&[Step::with_arg(SET_CONTRAST, contrast)])
    }

    /// Dim the panel to minimum contrast, or restore the remembered contrast
    pub fn dim(&mut self, dim: bool) -> DisplayResult<I> {
        let contrast = if dim { 0 } else { self.contrast };
        self.send_steps(&[Step::with_arg(SET_CONTRAST, contrast)])
    }

    /// Switch the panel on (resume from RAM + display on) or off
    pub fn set_power(&mut self, on: bool) -> DisplayResult<I> {
        if on {
            self.send_steps(&POWER_ON)?;
            self.state = DisplayState::Active;
        } else {
            self.send_steps(&POWER_OFF)?;
            self.state = DisplayState::PoweredOff;
        }
        Ok(())
    }

    /// Change the rotation used by later drawing calls
    ///
    /// Existing framebuffer content stays where it is.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Set the display start line register (hardware vertical scroll)
    pub fn set_start_line(&mut self, line: u8) -> DisplayResult<I> {
        self.send_steps(&[Step::new(crate::command::start_line(line))])
    }

    /// Send a raw command with arguments in one transaction
    ///
    /// The driver does not track what the command does.
    pub fn send_raw_command(&mut self, command: u8, args: &[u8]) -> DisplayResult<I> {
        with_transaction(&mut self.interface, |interface| {
            interface.send_command(command, args)
        })
        .map_err(Error::Interface)
    }

    /// Raw framebuffer bytes, page by page
    pub fn buffer(&self) -> &[u8] {
        self.framebuffer.as_bytes()
    }

    /// Framebuffer, for diagnostics
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Rectangle changed since the last flush, in physical coordinates
    pub fn dirty_window(&self) -> Option<Window> {
        self.framebuffer.dirty().bounds()
    }

    /// Get physical panel dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Dimensions seen by drawing calls at the current rotation
    pub fn logical_dimensions(&self) -> Dimensions {
        rotated(self.config.dimensions, self.rotation)
    }

    /// Get display rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Contrast restored when leaving dim mode
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Lifecycle state
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the hardware interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    fn send_steps(&mut self, steps: &[Step]) -> DisplayResult<I> {
        with_transaction(&mut self.interface, |interface| {
            steps
                .iter()
                .try_for_each(|step| interface.send_command(step.command(), step.args()))
        })
        .map_err(Error::Interface)
    }

    fn physical_size(&self) -> (i32, i32) {
        (
            i32::from(self.config.dimensions.width),
            i32::from(self.config.dimensions.height),
        )
    }

    /// Physical position of a logical point, or `None` when it cannot be on
    /// the panel at all
    fn to_physical(&self, x: i32, y: i32) -> Option<(i32, i32)> {
        let (width, height) = self.physical_size();
        let (px, py) = apply_rotation(x, y, width, height, self.rotation);
        Some((i32::try_from(px).ok()?, i32::try_from(py).ok()?))
    }

    /// Draw `image` centred on the logical area
    fn draw_splash(&mut self, image: SplashImage) {
        let logical = self.logical_dimensions();
        let x0 = (i32::from(logical.width) - i32::from(image.width)) / 2;
        let y0 = (i32::from(logical.height) - i32::from(image.height)) / 2;
        for y in 0..image.height {
            for x in 0..image.width {
                if image.pixel(x, y) {
                    self.set_pixel(x0 + i32::from(x), y0 + i32::from(y), PixelMode::Set);
                }
            }
        }
    }
}
