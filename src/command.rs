//! SH1106 command definitions
//!
//! This module defines the command bytes used to control the SH1106 OLED
//! controller. Commands are sent with the bus in command mode (DC low on SPI,
//! control byte `0x00` on I2C). Some commands take argument bytes, which are
//! sent in command mode as well. Pixel data is sent in data mode.
//!
//! ## Addressing
//!
//! The controller uses page addressing: a page is one row of 8 vertically
//! stacked pixels. Before a data burst the driver selects a page with
//! [`SET_PAGE_ADDRESS`] and a start column with [`SET_LOW_COLUMN`] and
//! [`SET_HIGH_COLUMN`]. The column pointer auto-increments during the burst.
//!
//! ## Example
//!
//! ```
//! use sh1106_oled::command;
//!
//! // Column 34 is split into two nibbles
//! assert_eq!(command::low_column(34), 0x02);
//! assert_eq!(command::high_column(34), 0x12);
//! assert_eq!(command::page_address(3), 0xB3);
//! ```

// Fundamental commands

/// Set contrast control (0x81)
///
/// Requires 1 byte: contrast value 0x00-0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from RAM content (0xA4)
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Force every pixel on regardless of RAM (0xA5)
pub const DISPLAY_ALL_ON: u8 = 0xA5;

/// Normal display: RAM bit 1 lights the pixel (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted display: RAM bit 0 lights the pixel (0xA7)
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off, controller enters sleep (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Set lower column address nibble (0x00-0x0F)
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Set higher column address nibble (0x10-0x1F)
pub const SET_HIGH_COLUMN: u8 = 0x10;

/// Set page address (0xB0-0xBF)
pub const SET_PAGE_ADDRESS: u8 = 0xB0;

/// Set display start line (0x40-0x7F)
///
/// The line number is ORed into the low 6 bits.
pub const SET_START_LINE: u8 = 0x40;

// Hardware configuration commands

/// Segment remap (0xA0 | bit)
///
/// `0xA1` maps column 131 to SEG0.
pub const SEGMENT_REMAP: u8 = 0xA0;

/// Set multiplex ratio (0xA8)
///
/// Requires 1 byte: number of scanned rows minus one.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM output scan direction, incrementing (0xC0)
pub const COM_SCAN_INC: u8 = 0xC0;

/// COM output scan direction, decrementing (0xC8)
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set display offset (0xD3)
///
/// Requires 1 byte: vertical shift 0-63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Requires 1 byte, panel dependent (0x02 sequential, 0x12 alternative).
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency (0xD5)
///
/// Requires 1 byte.
pub const SET_CLOCK_DIV: u8 = 0xD5;

/// Set pre-charge period (0xD9)
///
/// Requires 1 byte.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOM deselect level (0xDB)
///
/// Requires 1 byte.
pub const SET_VCOM_DETECT: u8 = 0xDB;

/// Charge pump setting (0x8D)
///
/// Requires 1 byte: 0x14 enables the internal pump.
pub const CHARGE_PUMP: u8 = 0x8D;

/// Argument enabling the internal charge pump
pub const CHARGE_PUMP_ON: u8 = 0x14;

/// Default clock divider argument (reset ratio, mid oscillator)
pub const CLOCK_DIV_DEFAULT: u8 = 0x80;

/// Pre-charge period for internally generated VCC
pub const PRECHARGE_INTERNAL_VCC: u8 = 0xF1;

/// VCOM deselect level used at start-up
pub const VCOM_DETECT_DEFAULT: u8 = 0x35;

/// Page-select command for `page`
///
/// Only the low four bits of `page` reach the controller.
pub const fn page_address(page: u8) -> u8 {
    SET_PAGE_ADDRESS | (page & 0x0F)
}

/// Low column nibble command for RAM column `column`
pub const fn low_column(column: u8) -> u8 {
    SET_LOW_COLUMN | (column & 0x0F)
}

/// High column nibble command for RAM column `column`
pub const fn high_column(column: u8) -> u8 {
    SET_HIGH_COLUMN | ((column >> 4) & 0x0F)
}

/// Start-line command for `line` (0-63)
pub const fn start_line(line: u8) -> u8 {
    SET_START_LINE | (line & 0x3F)
}
