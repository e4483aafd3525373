//! Command sequences and their executor
//!
//! Start-up and power transitions are expressed as tables of [`Step`]s: a
//! command byte, its argument bytes and an optional delay to wait once the
//! command has been sent. [`run`] sends them strictly in order, each step in
//! its own interface transaction, and waits outside the transaction so the
//! bus is free during the delay.

use embedded_hal::delay::DelayNs;

use crate::command::{
    CHARGE_PUMP, CHARGE_PUMP_ON, CLOCK_DIV_DEFAULT, COM_SCAN_DEC, DISPLAY_ALL_ON_RESUME,
    DISPLAY_OFF, DISPLAY_ON, NORMAL_DISPLAY, PRECHARGE_INTERNAL_VCC, SEGMENT_REMAP, SET_CLOCK_DIV,
    SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_OFFSET, SET_MULTIPLEX, SET_PRECHARGE,
    SET_VCOM_DETECT, VCOM_DETECT_DEFAULT, start_line,
};
use crate::config::Config;
use crate::interface::{DisplayInterface, with_transaction};

/// Most argument bytes any command in the tables takes
pub const MAX_ARGS: usize = 1;

/// Wait after switching the panel off before reconfiguring the oscillator
pub const POWER_OFF_DELAY_MS: u32 = 10;

/// Number of steps in [`init_sequence`]
pub const INIT_STEPS: usize = 14;

/// One command with its arguments and post-command delay
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    command: u8,
    args: [u8; MAX_ARGS],
    arg_count: u8,
    delay_ms: u32,
}

impl Step {
    /// A command without arguments
    pub const fn new(command: u8) -> Self {
        Self {
            command,
            args: [0; MAX_ARGS],
            arg_count: 0,
            delay_ms: 0,
        }
    }

    /// A command with one argument byte
    pub const fn with_arg(command: u8, arg: u8) -> Self {
        Self {
            command,
            args: [arg],
            arg_count: 1,
            delay_ms: 0,
        }
    }

    /// Wait `ms` milliseconds after this step
    pub const fn then_wait(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Command byte
    pub fn command(&self) -> u8 {
        self.command
    }

    /// Argument bytes
    pub fn args(&self) -> &[u8] {
        &self.args[..self.arg_count as usize]
    }

    /// Delay after the command, in milliseconds
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

/// Start-up table for `config`, up to (not including) power-on
///
/// Order: display off, clock divider, multiplex ratio, charge pump, segment
/// remap, COM scan direction, display offset, start line, COM pins,
/// contrast, pre-charge, VCOM detect, resume from RAM, normal display.
pub fn init_sequence(config: &Config) -> [Step; INIT_STEPS] {
    [
        Step::new(DISPLAY_OFF).then_wait(POWER_OFF_DELAY_MS),
        Step::with_arg(SET_CLOCK_DIV, CLOCK_DIV_DEFAULT),
        Step::with_arg(SET_MULTIPLEX, config.multiplex_ratio()),
        Step::with_arg(CHARGE_PUMP, CHARGE_PUMP_ON),
        Step::new(SEGMENT_REMAP | 0x01),
        Step::new(COM_SCAN_DEC),
        Step::with_arg(SET_DISPLAY_OFFSET, config.display_offset),
        Step::new(start_line(config.start_line)),
        Step::with_arg(SET_COM_PINS, config.profile.com_pins),
        Step::with_arg(SET_CONTRAST, config.profile.contrast),
        Step::with_arg(SET_PRECHARGE, PRECHARGE_INTERNAL_VCC),
        Step::with_arg(SET_VCOM_DETECT, VCOM_DETECT_DEFAULT),
        Step::new(DISPLAY_ALL_ON_RESUME),
        Step::new(NORMAL_DISPLAY),
    ]
}

/// Steps switching the panel on: resume from RAM, then display on
pub const POWER_ON: [Step; 2] = [Step::new(DISPLAY_ALL_ON_RESUME), Step::new(DISPLAY_ON)];

/// Steps switching the panel off
pub const POWER_OFF: [Step; 1] = [Step::new(DISPLAY_OFF)];

/// Send `steps` in order, waiting after each as requested
///
/// Stops at the first transport error; the remaining steps are not sent.
pub fn run<I, D>(interface: &mut I, steps: &[Step], delay: &mut D) -> Result<(), I::Error>
where
    I: DisplayInterface,
    D: DelayNs,
{
    for step in steps {
        with_transaction(interface, |i| i.send_command(step.command, step.args()))?;
        if step.delay_ms > 0 {
            delay.delay_ms(step.delay_ms);
        }
    }
    Ok(())
}
