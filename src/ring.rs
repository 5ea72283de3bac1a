//! The ring driver owns the pixel buffer and the animation phase, and pushes frames to a
//! [`WordSink`].

use crate::LED_COUNT;
use crate::animations::Pattern;
use crate::colour::Pixel;
use crate::drivers::sink::WordSink;
use embedded_hal_async::delay::DelayNs;

/// One colour per LED, indexed by position on the data line
pub type LedBuffer = [Pixel; LED_COUNT];

/// Holds the state needed to animate the ring
pub struct RingDriver<S> {
    sink: S,
    buffer: LedBuffer,
    phase: u8,
    pattern: Pattern,
}

impl<S: WordSink> RingDriver<S> {
    /// Create a driver with a dark buffer at phase 0.
    ///
    /// # Parameters
    /// * `sink` - Where frames are written, already configured for the ring
    /// * `pattern` - The animation to show
    pub fn new(sink: S, pattern: Pattern) -> Self {
        Self {
            sink,
            buffer: [Pixel::OFF; LED_COUNT],
            phase: 0,
            pattern,
        }
    }

    /// Recompute every LED for the current phase
    pub fn fill(&mut self) {
        let (pattern, phase) = (self.pattern, self.phase);
        for (i, pixel) in self.buffer.iter_mut().enumerate() {
            *pixel = pattern.colour_at(i, phase);
        }
    }

    /// Send the buffer to the sink, LED 0 first. Each word blocks until the sink accepts it.
    pub fn transmit(&mut self) {
        for pixel in self.buffer.iter() {
            self.sink.put_blocking(pixel.word());
        }
    }

    /// Produce one frame: fill the buffer, send it and move the animation on by one step
    pub fn step(&mut self) {
        self.fill();
        self.transmit();
        #[cfg(feature = "defmt")]
        defmt::trace!("RING: frame at phase {} sent", self.phase);
        self.phase = self.phase.wrapping_add(1);
    }

    /// Switch every LED off. The phase is left where it was.
    pub fn clear(&mut self) {
        self.buffer.fill(Pixel::OFF);
        self.transmit();
    }

    /// Phase the next frame will be drawn at
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// The colours last written by [`fill`](Self::fill) or [`clear`](Self::clear)
    pub fn buffer(&self) -> &LedBuffer {
        &self.buffer
    }

    /// The animation this ring shows
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// The sink frames are written to
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink, e.g. to inspect or reset a test sink between frames
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

/// Animate the ring forever.
///
/// The ring is blanked once, then a frame is sent every
/// [`frame_interval_ms`](Pattern::frame_interval_ms) for as long as the device is powered.
///
/// # Parameters
/// * `driver` - The ring to animate
/// * `delay` - Used to wait between frames
pub async fn run<S: WordSink, D: DelayNs>(driver: &mut RingDriver<S>, mut delay: D) -> ! {
    let interval = driver.pattern().frame_interval_ms();
    #[cfg(feature = "defmt")]
    defmt::info!(
        "RING: Starting {} on {} LEDs every {}ms",
        driver.pattern(),
        LED_COUNT,
        interval
    );
    driver.clear();
    loop {
        driver.step();
        delay.delay_ms(interval).await;
    }
}
