use crate::{
    drivers::neopixel::RmtWordSink,
    ring::{RingDriver, run},
};
use embassy_time::Delay;

/// The ring as wired on the board: RMT channel 0 feeding the WS2812 data line
pub type Ring = RingDriver<RmtWordSink>;

/// LED ring main task. Owns the ring for the lifetime of the firmware and never returns.
///
/// # Parameters
/// * `ring` - The ring driver, with its sink already configured
#[embassy_executor::task]
pub async fn handle_neopixel(ring: &'static mut Ring) {
    run(ring, Delay).await
}
