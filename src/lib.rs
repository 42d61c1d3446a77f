//! DEPG0266BN E-Paper Display Driver
//!
//! A driver for the DEPG0266BN 2.66" monochrome e-paper panel (152x296,
//! SSD1680-class controller).
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Full and partial refresh with a configurable full-refresh cadence
//! - Pluggable shadow-buffer storage (volatile, heap, or retained memory)
//! - Hardware-revision register variants selectable at configuration time
//!
//! ## Refresh model
//!
//! Partial refresh on this panel works by letting the controller diff two
//! RAM planes: the previous image and the new one. The driver keeps a shadow
//! copy of the last frame it sent (see [`ShadowStore`]) and streams it ahead
//! of every new frame. A counter forces a full refresh every
//! [`Config::full_update_every`](config::Config::full_update_every) cycles
//! to clear accumulated ghosting; a full refresh takes roughly 1.2s, a
//! partial one roughly 300ms, and [`Display::refresh`] blocks for the whole
//! cycle.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use depg0266bn::{Builder, Display, Interface, VolatileStore, BUFFER_SIZE};
//! # use core::convert::Infallible;
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let busy = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst, busy);
//! let config = match Builder::new().full_update_every(30).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut display = match Display::new(interface, config, VolatileStore::new()) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! let frame = [0xFFu8; BUFFER_SIZE]; // all white
//! let _ = display.refresh(&frame, &mut delay);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Color type for the monochrome panel
pub mod color;
/// Controller command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Partial-refresh waveform table
pub mod lut;
/// Shadow buffer storage strategies
pub mod storage;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

/// Width of the panel in pixels
pub const WIDTH: u32 = 152;

/// Height of the panel in pixels
pub const HEIGHT: u32 = 296;

/// Length in bytes of a bit-packed full frame (one bit per pixel)
pub const BUFFER_SIZE: usize = (WIDTH as usize * HEIGHT as usize) / 8;

pub use color::Color;
pub use config::{Builder, Config, Revision};
pub use display::{Display, FULL_REFRESH_TIME_MS, PARTIAL_REFRESH_TIME_MS};
pub use error::{BuilderError, Error};
pub use interface::{DEFAULT_BUSY_TIMEOUT_MS, DisplayInterface, Interface, InterfaceError};
#[cfg(feature = "alloc")]
pub use storage::HeapStore;
pub use storage::{ShadowStore, StoreError, VolatileStore};

#[cfg(feature = "graphics")]
pub use graphics::{DisplayRotation, GraphicDisplay};
