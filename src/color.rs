//! Color type for the monochrome DEPG0266BN panel
//!
//! The panel stores one bit per pixel. A set bit is white (the background
//! color the RAM resets to); a cleared bit is a colored pixel.
//!
//! | Color | Bit | Full byte |
//! |-------|-----|-----------|
//! | White | 1   | 0xFF      |
//! | Black | 0   | 0x00      |
//!
//! ## Example
//!
//! ```
//! use depg0266bn::Color;
//!
//! assert_eq!(Color::White.bit_value(), 1);
//! assert_eq!(Color::Black.byte_value(), 0x00);
//! assert_eq!(Color::White.inverse(), Color::Black);
//! ```

/// Colors supported by the panel
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Color {
    /// Colored pixels (bit cleared in RAM)
    Black,
    /// White pixels (bit set in RAM)
    #[default]
    White,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU1;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(value: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        use embedded_graphics_core::pixelcolor::BinaryColor;
        match value {
            BinaryColor::On => Self::Black,
            BinaryColor::Off => Self::White,
        }
    }
}

impl Color {
    /// Get the RAM encoding of the color for one pixel
    pub fn bit_value(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::White => 1,
        }
    }

    /// Get a full byte of pixels of this color
    ///
    /// ## Example
    ///
    /// ```
    /// use depg0266bn::Color;
    ///
    /// assert_eq!(Color::Black.byte_value(), 0x00);
    /// assert_eq!(Color::White.byte_value(), 0xFF);
    /// ```
    pub fn byte_value(self) -> u8 {
        match self {
            Self::Black => 0x00,
            Self::White => 0xFF,
        }
    }

    /// Get the opposite color
    pub fn inverse(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}
