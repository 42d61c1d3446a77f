//! Graphics support via embedded-graphics
//!
//! This module provides the [`GraphicDisplay`] struct which owns the frame
//! buffer, wraps [`Display`] and implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait
//! from the embedded-graphics ecosystem. Canvas primitives (lines, shapes,
//! text, images) come from `embedded-graphics`; this driver only maps pixels
//! into the panel's bit-packed buffer.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//!     text::Text,
//! };
//! use depg0266bn::{Builder, Color, Display, GraphicDisplay, Interface, VolatileStore, BUFFER_SIZE};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! let interface = Interface::new(MockSpi, MockPin, MockPin, MockPin);
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let display = match Display::new(interface, config, VolatileStore::new()) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//! let mut display = GraphicDisplay::new(display, [0u8; BUFFER_SIZE]);
//! # let mut delay = MockDelay;
//!
//! let _ = Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(Color::Black))
//!     .draw(&mut display);
//!
//! let _ = Text::new(
//!     "Hello, E-Paper!",
//!     Point::new(10, 100),
//!     MonoTextStyle::new(&FONT_6X10, Color::Black),
//! )
//! .draw(&mut display);
//!
//! let _ = display.refresh(&mut delay);
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};
use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::storage::ShadowStore;
use crate::{BUFFER_SIZE, HEIGHT, WIDTH};

/// Display rotation, only 90° increments supported
///
/// The panel is natively portrait (152x296); rotation changes how logical
/// drawing coordinates map into the buffer, not what is sent to the panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DisplayRotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// Map logical coordinates to (byte index, bit mask) in the packed buffer
///
/// At `Rotate0` this is `index = (x + y * WIDTH) / 8`, mask `0x80 >> (x % 8)`
/// (MSB-first within each byte); the other arms fold the rotation into the
/// same native layout.
fn find_position(x: u32, y: u32, rotation: DisplayRotation) -> (usize, u8) {
    match rotation {
        DisplayRotation::Rotate0 => ((x / 8 + (WIDTH / 8) * y) as usize, 0x80 >> (x % 8)),
        DisplayRotation::Rotate90 => (
            ((WIDTH - 1 - y) / 8 + (WIDTH / 8) * x) as usize,
            0x01 << (y % 8),
        ),
        DisplayRotation::Rotate180 => (
            (((WIDTH / 8) * HEIGHT - 1) - (x / 8 + (WIDTH / 8) * y)) as usize,
            0x01 << (x % 8),
        ),
        DisplayRotation::Rotate270 => (
            (y / 8 + (HEIGHT - 1 - x) * (WIDTH / 8)) as usize,
            0x80 >> (y % 8),
        ),
    }
}

/// Display with an owned frame buffer
///
/// Wraps [`Display`] with the pixel-level operations: a bounds-checked
/// pixel mutator, whole-buffer clears, rotation, and the
/// [`DrawTarget`] impl for embedded-graphics.
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `S` - Shadow store implementing [`ShadowStore`]
/// * `B` - Frame buffer backing, `AsRef<[u8]> + AsMut<[u8]>` (an array, a
///   `Vec`, a static slice...)
pub struct GraphicDisplay<I, S, B>
where
    I: DisplayInterface,
    S: ShadowStore,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// The underlying display driver
    display: Display<I, S>,
    /// Bit-packed frame buffer, one bit per pixel, set = white
    frame: B,
    /// Rotation applied to drawing coordinates
    rotation: DisplayRotation,
}

type GraphicsResult<I> = core::result::Result<(), Error<I>>;

impl<I, S, B> GraphicDisplay<I, S, B>
where
    I: DisplayInterface,
    S: ShadowStore,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new GraphicDisplay
    ///
    /// The frame buffer is cleared to white, matching the shadow buffer's
    /// initial state.
    ///
    /// # Panics
    ///
    /// Panics if `frame` is smaller than [`BUFFER_SIZE`]. Use
    /// [`try_new`](Self::try_new) for the fallible version.
    pub fn new(display: Display<I, S>, mut frame: B) -> Self {
        assert!(
            frame.as_mut().len() >= BUFFER_SIZE,
            "frame buffer too small: required {} bytes, got {}",
            BUFFER_SIZE,
            frame.as_mut().len()
        );
        frame.as_mut()[..BUFFER_SIZE].fill(Color::White.byte_value());
        Self {
            display,
            frame,
            rotation: DisplayRotation::default(),
        }
    }

    /// Try to create a new GraphicDisplay, checking the buffer size
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if `frame` is smaller than
    /// [`BUFFER_SIZE`].
    pub fn try_new(
        display: Display<I, S>,
        mut frame: B,
    ) -> core::result::Result<Self, Error<I>> {
        if frame.as_mut().len() < BUFFER_SIZE {
            return Err(Error::BufferTooSmall {
                required: BUFFER_SIZE,
                provided: frame.as_mut().len(),
            });
        }
        frame.as_mut()[..BUFFER_SIZE].fill(Color::White.byte_value());
        Ok(Self {
            display,
            frame,
            rotation: DisplayRotation::default(),
        })
    }

    /// Set the display rotation
    ///
    /// Only affects future drawing; anything already in the buffer stays
    /// where it is.
    pub fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.rotation = rotation;
    }

    /// Get the current rotation
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    /// Set a single pixel
    ///
    /// Coordinates are logical (rotation applied). Writes outside the
    /// panel are silently dropped so callers may iterate a canvas larger
    /// than the panel without pre-clipping. White sets the buffer bit; any
    /// other color clears it.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let (logical_width, logical_height) = match self.rotation {
            DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => (WIDTH, HEIGHT),
            DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => (HEIGHT, WIDTH),
        };
        if x >= logical_width || y >= logical_height {
            return;
        }

        let (index, bit) = find_position(x, y, self.rotation);
        match color {
            Color::White => self.frame.as_mut()[index] |= bit,
            Color::Black => self.frame.as_mut()[index] &= !bit,
        }
    }

    /// Fill the whole frame with one color
    pub fn clear(&mut self, color: Color) {
        self.frame.as_mut()[..BUFFER_SIZE].fill(color.byte_value());
    }

    /// Send the frame to the panel and run one refresh cycle
    ///
    /// See [`Display::refresh`] for the full/partial cadence and blocking
    /// behavior.
    pub fn refresh<D: DelayNs>(&mut self, delay: &mut D) -> GraphicsResult<I> {
        self.display.refresh(self.frame.as_ref(), delay)
    }

    /// Power the panel down and enter deep sleep
    pub fn deep_sleep<D: DelayNs>(&mut self, delay: &mut D) -> GraphicsResult<I> {
        self.display.deep_sleep(delay)
    }

    /// Log the driver configuration
    pub fn log_config(&self) {
        self.display.log_config();
    }

    /// The frame buffer contents
    pub fn buffer(&self) -> &[u8] {
        &self.frame.as_ref()[..BUFFER_SIZE]
    }

    /// Access the underlying Display
    pub fn display(&self) -> &Display<I, S> {
        &self.display
    }

    /// Access the underlying Display mutably
    ///
    /// Use this for low-level operations like
    /// [`power_off`](Display::power_off) or
    /// [`set_full_update_every`](Display::set_full_update_every).
    pub fn display_mut(&mut self) -> &mut Display<I, S> {
        &mut self.display
    }
}

impl<I, S, B> DrawTarget for GraphicDisplay<I, S, B>
where
    I: DisplayInterface,
    S: ShadowStore,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(x as u32, y as u32, color);
        }
        Ok(())
    }
}

impl<I, S, B> OriginDimensions for GraphicDisplay<I, S, B>
where
    I: DisplayInterface,
    S: ShadowStore,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        match self.rotation {
            DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => Size::new(WIDTH, HEIGHT),
            DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => Size::new(HEIGHT, WIDTH),
        }
    }
}
