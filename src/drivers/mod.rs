#[cfg(feature = "esp32c3")]
pub mod neopixel;
pub mod sink;

pub use sink::{FrameSink, WordSink};
