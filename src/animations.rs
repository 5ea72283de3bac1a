//! Animations module provides the patterns the ring can show.
//!
//! Each pattern is a pure function of LED position and animation phase, so a frame can be
//! recomputed from scratch at any time:
//! - Wheel, a rainbow that walks one wheel step per LED and rotates one step per frame
//! - Christmas, alternating red and green LEDs that swap over every frame

use crate::colour::{Pixel, wheel};
use crate::{CHRISTMAS_INTERVAL_MS, FRAME_INTERVAL_MS};
use smart_leds::RGB8;

/// The two colours the Christmas pattern alternates between
const CHRISTMAS_COLOURS: [Pixel; 2] = [
    Pixel::from_rgb(RGB8 { r: 255, g: 0, b: 0 }),
    Pixel::from_rgb(RGB8 { r: 0, g: 255, b: 0 }),
];

/// Represents the patterns that can be displayed on the LED ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pattern {
    /// Travelling rainbow around the colour wheel
    Wheel,
    /// Red and green, spinning
    Christmas,
}

impl Pattern {
    /// Colour of the LED at `index` when the animation is at `phase`.
    ///
    /// # Arguments
    /// * `index` - Physical position of the LED on the ring, 0 is the first LED on the data line
    /// * `phase` - Current rotation offset of the animation
    pub fn colour_at(self, index: usize, phase: u8) -> Pixel {
        match self {
            Pattern::Wheel => wheel(wheel_input(index, phase)),
            // 256 is even so the alternation survives the phase wrapping
            Pattern::Christmas => {
                CHRISTMAS_COLOURS[(index + phase as usize) % CHRISTMAS_COLOURS.len()]
            }
        }
    }

    /// How long to hold each frame before showing the next one
    pub fn frame_interval_ms(self) -> u32 {
        match self {
            Pattern::Wheel => FRAME_INTERVAL_MS,
            Pattern::Christmas => CHRISTMAS_INTERVAL_MS,
        }
    }
}

/// Wheel position used for the LED at `index` at the given phase
pub fn wheel_input(index: usize, phase: u8) -> u8 {
    ((index + phase as usize) % 256) as u8
}
