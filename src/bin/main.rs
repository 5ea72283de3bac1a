#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use defmt::info;
use embassy_executor::Spawner;
use esp_hal::{Config, clock::CpuClock, rmt::Rmt, time::Rate, timer::systimer::SystemTimer};
use panic_rtt_target as _;
use rainbow_ring::{
    DEFAULT_PATTERN, LED_COUNT, LED_DATA_RATE_KHZ, RMT_FREQUENCY_MHZ, RingDriver,
    drivers::neopixel::rmt_word_sink,
    tasks::{Ring, handle_neopixel},
};
use static_cell::StaticCell;

/// The ring driver, owned by the neopixel task once spawned
static RING: StaticCell<Ring> = StaticCell::new();

// This creates a default app-descriptor required by the esp-idf bootloader.
// For more information see: <https://docs.espressif.com/projects/esp-idf/en/stable/esp32/api-reference/system/app_image_format.html#application-description>
esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
    #[cfg(all(feature = "rtt", feature = "defmt"))]
    rtt_target::rtt_init_defmt!();

    let peripherals = esp_hal::init(Config::default().with_cpu_clock(CpuClock::max()));
    let timer0 = SystemTimer::new(peripherals.SYSTIMER);
    esp_hal_embassy::init(timer0.alarm0);

    let rmt = Rmt::new(peripherals.RMT, Rate::from_mhz(RMT_FREQUENCY_MHZ))
        .expect("Failed to initialise RMT0");
    let sink = rmt_word_sink(rmt.channel0, peripherals.GPIO2);
    let ring = RING.init(RingDriver::new(sink, DEFAULT_PATTERN));

    info!("MAIN: {} LEDs on GPIO2 at {}kHz", LED_COUNT, LED_DATA_RATE_KHZ);
    spawner
        .spawn(handle_neopixel(ring))
        .expect("Failed to spawn neopixel task");
}
