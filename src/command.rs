//! Command definitions for the DEPG0266BN panel controller
//!
//! This module defines the command bytes understood by the SSD1680-class
//! controller driving the DEPG0266BN panel, plus the data flags used with
//! the display-update-sequence command. Commands are sent over SPI with the
//! DC pin low for commands and high for data.
//!
//! ## Command Structure
//!
//! All commands follow the pattern:
//! 1. Assert CS (Chip Select)
//! 2. Set DC low (command mode)
//! 3. Send command byte
//! 4. Set DC high (data mode)
//! 5. Send data bytes (if any)
//! 6. Deassert CS
//!
//! ## Example
//!
//! ```rust,no_run
//! use depg0266bn::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::{InputPin, OutputPin};
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl InputPin for MockPin {
//! #     fn is_high(&mut self) -> Result<bool, Self::Error> { Ok(false) }
//! #     fn is_low(&mut self) -> Result<bool, Self::Error> { Ok(true) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! // Soft reset
//! let _ = interface.send_command(command::SOFT_RESET);
//!
//! // Select the internal temperature sensor
//! let _ = interface.send_command(command::TEMP_SENSOR_CONTROL);
//! let _ = interface.send_data(&[0x80]);
//! ```

// System control commands

/// Soft reset command (0x12)
///
/// Resets the controller to default state. Must wait for BUSY low after issuing.
pub const SOFT_RESET: u8 = 0x12;

/// Driver output control command (0x01)
///
/// Sets the number of gate outputs (rows) and scanning direction.
/// Requires 3 bytes: [rows-1 (LSB), rows-1 (MSB), scanning mode]
pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;

/// Border waveform control command (0x3C)
///
/// Controls the border color and transition behavior.
/// Requires 1 byte of data.
pub const BORDER_WAVEFORM: u8 = 0x3C;

/// Display update control 1 command (0x21)
///
/// Controls which RAM planes feed the update and their inversion.
/// The panel init sequence sends [0x00, 0x80].
pub const DISPLAY_UPDATE_CTRL1: u8 = 0x21;

/// Temperature sensor control command (0x18)
///
/// Selects internal or external temperature sensor for waveform timing.
/// Requires 1 byte: 0x80 = internal, 0x48 = external
pub const TEMP_SENSOR_CONTROL: u8 = 0x18;

// RAM and data commands

/// Data entry mode command (0x11)
///
/// Controls the address counter auto-increment direction.
/// Requires 1 byte:
/// - Bit 0 (ID0): X direction (0=decrement, 1=increment)
/// - Bit 1 (ID1): Y direction (0=decrement, 1=increment)
/// - Bit 2 (AM): Address counter direction (0=X, 1=Y)
pub const DATA_ENTRY_MODE: u8 = 0x11;

/// Set RAM X address range command (0x44)
///
/// Sets the X (column) address window for RAM access, in byte units.
/// Requires 2 bytes: [start, end]
pub const SET_RAM_X_RANGE: u8 = 0x44;

/// Set RAM Y address range command (0x45)
///
/// Sets the Y (row) address window for RAM access.
/// Requires 4 bytes: [start_LSB, start_MSB, end_LSB, end_MSB]
pub const SET_RAM_Y_RANGE: u8 = 0x45;

/// Set RAM X address counter command (0x4E)
///
/// Sets the X write pointer, in byte units.
/// Requires 1 byte.
pub const SET_RAM_X_COUNTER: u8 = 0x4E;

/// Set RAM Y address counter command (0x4F)
///
/// Sets the Y write pointer.
/// Requires 2 bytes: [address_LSB, address_MSB]
pub const SET_RAM_Y_COUNTER: u8 = 0x4F;

/// Write current-image RAM command (0x24)
///
/// Writes the frame being displayed next. Bit=0: colored, Bit=1: white.
/// Requires pixel data bytes (width * height / 8).
pub const WRITE_RAM_CURRENT: u8 = 0x24;

/// Write previous-image RAM command (0x26)
///
/// Writes the frame the panel last showed. The controller diffs this plane
/// against the current-image plane during partial refresh.
/// Requires pixel data bytes (width * height / 8).
pub const WRITE_RAM_PREVIOUS: u8 = 0x26;

// Display update commands

/// Display update control 2 command (0x22)
///
/// Stages the display update sequence (clock/analog power, LUT source,
/// display pattern). Requires 1 byte; see the `CTRL2_*` flags. The staged
/// sequence runs when [`MASTER_ACTIVATION`] is issued.
pub const DISPLAY_UPDATE_CTRL2: u8 = 0x22;

/// Master activation command (0x20)
///
/// Triggers the staged update sequence. BUSY goes high until it completes.
pub const MASTER_ACTIVATION: u8 = 0x20;

/// Update-sequence flag: enable clock and analog (power on)
pub const CTRL2_POWER_ON: u8 = 0xC0;

/// Update-sequence flag: full refresh from the OTP waveform (0xF4)
///
/// The trailing disable bits mean a full refresh leaves the analog rail
/// off. Some hardware revisions use 0xF7 instead; see
/// [`Builder::full_refresh_flag`](crate::config::Builder::full_refresh_flag).
pub const CTRL2_FULL_REFRESH: u8 = 0xF4;

/// Alternate full-refresh flag observed on GDEW-marked revisions (0xF7)
pub const CTRL2_FULL_REFRESH_ALT: u8 = 0xF7;

/// Update-sequence flag: partial refresh using the RAM-resident waveform
pub const CTRL2_PARTIAL_REFRESH: u8 = 0xCC;

/// Update-sequence flag: disable analog and clock (power off, 0x83)
///
/// Some hardware revisions use the bare 0x03 disable bits instead; see
/// [`Builder::power_off_flag`](crate::config::Builder::power_off_flag).
pub const CTRL2_POWER_OFF: u8 = 0x83;

/// Alternate power-off flag observed on GDEW-marked revisions (0x03)
pub const CTRL2_POWER_OFF_ALT: u8 = 0x03;

// Power and LUT commands

/// Write LUT command (0x32)
///
/// Loads the partial-refresh waveform table.
/// Requires 159 bytes for this panel; see [`crate::lut`].
pub const WRITE_LUT: u8 = 0x32;

/// Deep sleep command (0x10)
///
/// Enters ultra-low power mode. Only a hardware reset can wake the panel.
/// Requires 1 byte: 0x01 = enter deep sleep
pub const DEEP_SLEEP: u8 = 0x10;
