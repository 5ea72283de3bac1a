//! Colour generation for the LED ring.
//!
//! WS2812 LEDs expect their colour bytes in green, red, blue order. [`Pixel`] holds a colour
//! already packed that way in the low 24 bits of a `u32`, which is what the sink consumes
//! once shifted up into the top of a word (see [`Pixel::word`]).

use smart_leds::RGB8;

/// Number of wheel positions covered by one segment of the hue ramp
const SEGMENT: u8 = 85;

/// A colour packed in GRB order: green in bits 16..24, red in 8..16, blue in 0..8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pixel(u32);

impl Pixel {
    /// All channels off
    pub const OFF: Pixel = Pixel(0);

    /// Pack an RGB colour into the GRB wire order
    pub const fn from_rgb(colour: RGB8) -> Self {
        Self(((colour.g as u32) << 16) | ((colour.r as u32) << 8) | colour.b as u32)
    }

    /// Unpack back into an RGB colour
    pub const fn rgb(self) -> RGB8 {
        RGB8 {
            r: (self.0 >> 8) as u8,
            g: (self.0 >> 16) as u8,
            b: self.0 as u8,
        }
    }

    /// The packed 24-bit value
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The word handed to the sink. The serial encoder only shifts out the 24 most significant
    /// bits of each word, so the colour is left-justified and the low byte is zero.
    pub const fn word(self) -> u32 {
        self.0 << 8
    }

    /// Recover the colour from a sink word, dropping the unused low byte
    pub const fn from_word(word: u32) -> Self {
        Self(word >> 8)
    }
}

impl From<RGB8> for Pixel {
    fn from(colour: RGB8) -> Self {
        Self::from_rgb(colour)
    }
}

impl From<Pixel> for RGB8 {
    fn from(pixel: Pixel) -> Self {
        pixel.rgb()
    }
}

/// Map a position on the colour wheel to an RGB colour.
///
/// The wheel is split into three segments: red to green, green to blue and blue to red. In each
/// segment one channel climbs by 3 per step, one falls by 3 per step and the third stays off. The
/// last segment runs from 170 to 255 and so has one position more than the other two.
///
/// The climbing channel tops out at 252 (84 * 3) rather than 255 before the next segment starts.
pub const fn wheel_rgb(position: u8) -> RGB8 {
    if position < SEGMENT {
        let step = position * 3;
        RGB8 {
            r: step,
            g: 255 - step,
            b: 0,
        }
    } else if position < 2 * SEGMENT {
        let step = (position - SEGMENT) * 3;
        RGB8 {
            r: 255 - step,
            g: 0,
            b: step,
        }
    } else {
        let step = (position - 2 * SEGMENT) * 3;
        RGB8 {
            r: 0,
            g: step,
            b: 255 - step,
        }
    }
}

/// Map a position on the colour wheel to a packed GRB [`Pixel`]
pub const fn wheel(position: u8) -> Pixel {
    Pixel::from_rgb(wheel_rgb(position))
}
