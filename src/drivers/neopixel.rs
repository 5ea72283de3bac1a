use crate::{LED_COUNT, drivers::sink::FrameSink};
use esp_hal::{
    Blocking,
    gpio::interconnect::PeripheralOutput,
    rmt::{ChannelCreator, ConstChannelAccess, Tx},
};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};

/// We must know what the LED TX buffer size is as a constant for the types involved here
pub const RMT_BUFFER_SIZE: usize = buffer_size(LED_COUNT);

/// Driver for the ring. We have to size it here to exactly what we will get back from the
/// `SmartLedsAdapter::new()` function when we set up the driver below
pub type RmtAdapter = SmartLedsAdapter<ConstChannelAccess<Tx, 0>, RMT_BUFFER_SIZE>;

/// Word sink feeding the WS2812 ring through RMT channel 0. A frame goes out on the word for
/// the last LED, and that call blocks until the RMT has finished sending it.
pub type RmtWordSink = FrameSink<RmtAdapter, LED_COUNT>;

/// Create the word sink for the ring.
///
/// # Parameters
/// * `channel` - RMT channel 0, from an `Rmt` set up with its source clock
/// * `pin` - The GPIO pin to which the LED data line is connected
pub fn rmt_word_sink<'a>(
    channel: ChannelCreator<Blocking, 0>,
    pin: impl PeripheralOutput<'a>,
) -> RmtWordSink {
    let adapter = SmartLedsAdapter::new(channel, pin, smart_led_buffer!(LED_COUNT));
    FrameSink::new(adapter)
}
