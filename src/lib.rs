#![no_std]

pub mod animations;
pub mod colour;
pub mod drivers;
pub mod ring;
#[cfg(feature = "esp32c3")]
pub mod tasks;

pub use animations::Pattern;
pub use colour::{Pixel, wheel};
pub use drivers::WordSink;
pub use ring::{LedBuffer, RingDriver, run};

/// The number of LEDs on the ring we are driving
pub const LED_COUNT: usize = 16;

/// Time each frame of the rainbow stays on the ring, in milliseconds
pub const FRAME_INTERVAL_MS: u32 = 20;

/// Time each frame of the Christmas spin stays on the ring, in milliseconds
pub const CHRISTMAS_INTERVAL_MS: u32 = 500;

/// Bit rate of the WS2812 data line
pub const LED_DATA_RATE_KHZ: u32 = 800;

/// Source clock for the RMT peripheral
pub const RMT_FREQUENCY_MHZ: u32 = 80;

/// The pattern the firmware shows
pub const DEFAULT_PATTERN: Pattern = Pattern::Wheel;
