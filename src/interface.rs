//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and two implementations
//! for talking to an SH1106 controller:
//!
//! - [`I2cInterface`] - I2C bus, control byte `0x00` before command bytes and
//!   `0x40` before data bytes
//! - [`SpiInterface`] - 4-wire SPI with a DC (data/command) pin and a reset pin
//!
//! ## Transactions
//!
//! The controller's page and column pointers persist between commands, so a
//! group of related writes (addressing commands followed by a data burst)
//! must reach the device without anything interleaving. The driver brackets
//! every such group with [`DisplayInterface::begin_transaction`] and
//! [`DisplayInterface::end_transaction`]. The provided implementations rely on
//! the embedded-hal device traits for chip-select and leave these as no-ops;
//! implementations on a shared bus can take their lock there.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation};
//! use sh1106_oled::{DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
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
//! let mut interface = I2cInterface::new(MockI2c);
//!
//! // Display off
//! let _ = interface.send_command(0xAE, &[]);
//!
//! // Contrast with its argument byte
//! let _ = interface.send_command(0x81, &[0x8F]);
//!
//! // Pixel data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::convert::Infallible;
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Default 7-bit I2C address of SH1106 modules (SA0 low)
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// I2C control byte: the rest of the write is command bytes
pub const I2C_CONTROL_COMMAND: u8 = 0x00;

/// I2C control byte: the rest of the write is display data
pub const I2C_CONTROL_DATA: u8 = 0x40;

/// Payload bytes sent per I2C write, not counting the control byte
pub const I2C_CHUNK_SIZE: usize = 32;

/// Trait for hardware interface to the SH1106 controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// bus that can deliver command and data bytes in order.
///
/// ## Implementing
///
/// For most cases, use [`I2cInterface`] or [`SpiInterface`]. If you need
/// custom behavior (e.g. bus arbitration, manual chip-select), implement this
/// trait on your own type and override the transaction hooks.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Bring up the underlying bus before any other call
    #[allow(clippy::type_complexity)]
    fn setup(&mut self) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }

    /// Shut down the underlying bus; nothing is sent afterwards
    #[allow(clippy::type_complexity)]
    fn teardown(&mut self) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }

    /// Start a group of writes that must not be interleaved with other traffic
    #[allow(clippy::type_complexity)]
    fn begin_transaction(&mut self) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }

    /// End the group started by [`begin_transaction`](Self::begin_transaction)
    #[allow(clippy::type_complexity)]
    fn end_transaction(&mut self) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }

    /// Send a command byte followed by its argument bytes
    ///
    /// Arguments are sent in command mode, directly after the command.
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication or GPIO fails.
    #[allow(clippy::type_complexity)]
    fn send_command(&mut self, command: u8, args: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Send a burst of display data
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication or GPIO fails.
    #[allow(clippy::type_complexity)]
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Pulse the reset line, if there is one
    ///
    /// # Errors
    ///
    /// Returns an error if the reset pin cannot be driven.
    #[allow(clippy::type_complexity)]
    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error>;
}

/// Run `writes` between [`DisplayInterface::begin_transaction`] and
/// [`DisplayInterface::end_transaction`]
///
/// The transaction is closed even when `writes` fails; the first error wins.
pub fn with_transaction<I, F>(interface: &mut I, writes: F) -> InterfaceResult<(), I::Error>
where
    I: DisplayInterface,
    F: FnOnce(&mut I) -> InterfaceResult<(), I::Error>,
{
    interface.begin_transaction()?;
    let result = writes(interface);
    let ended = interface.end_transaction();
    result.and(ended)
}

/// Errors that can occur at the interface level
///
/// Generic over bus and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<BusErr, PinErr> {
    /// I2C or SPI communication error
    Bus(BusErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<BusErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<BusErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "Bus error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<BusErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<BusErr, PinErr> {}

/// I2C interface for SH1106 modules
///
/// Every write starts with a control byte selecting command or data mode.
/// Long payloads are split into writes of [`I2C_CHUNK_SIZE`] bytes, each with
/// its own control byte. I2C modules usually have no reset line, so
/// [`reset`](DisplayInterface::reset) does nothing.
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C: I2c> I2cInterface<I2C> {
    /// Create an interface at the default address (0x3C)
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Create an interface at a custom 7-bit address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Device address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Send `bytes` in chunks, each prefixed with `control`
    fn write_chunked<B>(&mut self, control: u8, bytes: B) -> Result<(), I2C::Error>
    where
        B: IntoIterator<Item = u8>,
    {
        let mut buf = [0u8; I2C_CHUNK_SIZE + 1];
        buf[0] = control;
        let mut len = 1;
        for byte in bytes {
            buf[len] = byte;
            len += 1;
            if len == buf.len() {
                self.i2c.write(self.address, &buf)?;
                len = 1;
            }
        }
        if len > 1 {
            self.i2c.write(self.address, &buf[..len])?;
        }
        Ok(())
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = InterfaceError<I2C::Error, Infallible>;

    fn send_command(&mut self, command: u8, args: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.write_chunked(
            I2C_CONTROL_COMMAND,
            core::iter::once(command).chain(args.iter().copied()),
        )
        .map_err(InterfaceError::Bus)
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.write_chunked(I2C_CONTROL_DATA, data.iter().copied())
            .map_err(InterfaceError::Bus)
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> InterfaceResult<(), Self::Error> {
        Ok(())
    }
}

/// SPI interface for SH1106 modules
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`] (owns chip-select)
/// * `DC` - Data/Command pin implementing [`OutputPin`]
/// * `RST` - Reset pin implementing [`OutputPin`]
pub struct SpiInterface<SPI, DC, RST> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
    /// Reset pin (active low)
    rst: RST,
}

impl<SPI, DC, RST> SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Create a new SPI interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    /// * `rst` - Reset pin (output, active low)
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self { spi, dc, rst }
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for SpiInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8, args: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Bus)?;
        if !args.is_empty() {
            self.spi.write(args).map_err(InterfaceError::Bus)?;
        }
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(data).map_err(InterfaceError::Bus)?;
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) -> InterfaceResult<(), Self::Error> {
        // HIGH -> 1ms -> LOW -> 10ms -> HIGH -> 10ms
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(1);
        self.rst.set_low().map_err(InterfaceError::Pin)?;
        delay.delay_ms(10);
        self.rst.set_high().map_err(InterfaceError::Pin)?;
        delay.delay_ms(10);
        Ok(())
    }
}
