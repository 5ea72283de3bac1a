pub mod neopixel;

pub use neopixel::{Ring, handle_neopixel};
