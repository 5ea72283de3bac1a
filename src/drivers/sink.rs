use crate::colour::Pixel;
use smart_leds::{RGB8, SmartLedsWrite};

/// Anything that accepts LED colour words for the serial encoder.
///
/// Each word carries one LED's colour in its 24 most significant bits, see
/// [`Pixel::word`]. `put_blocking` returns only once the sink has accepted the word, so a caller
/// writing a frame can never overrun the sink's queue.
pub trait WordSink {
    /// Submit one word, waiting as long as it takes for the sink to take it
    fn put_blocking(&mut self, word: u32);
}

impl<S: WordSink + ?Sized> WordSink for &mut S {
    fn put_blocking(&mut self, word: u32) {
        (**self).put_blocking(word);
    }
}

/// Word sink in front of a [`SmartLedsWrite`] LED writer.
///
/// Words are unpacked to colours and queued until `N` of them, one frame, have arrived. The
/// word that completes the frame hands it to the writer and blocks until the writer is done,
/// which is where the backpressure on the caller comes from.
pub struct FrameSink<W, const N: usize> {
    writer: W,
    frame: [RGB8; N],
    queued: usize,
    /// Set while writes keep failing so the failure is only reported once
    failing: bool,
}

impl<W, const N: usize> FrameSink<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Create a sink with an empty queue.
    ///
    /// # Parameters
    /// * `writer` - LED writer already configured for a string of `N` LEDs
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            frame: [RGB8::default(); N],
            queued: 0,
            failing: false,
        }
    }

    /// Number of words waiting for the rest of their frame
    pub fn queued(&self) -> usize {
        self.queued
    }

    /// The LED writer frames are handed to
    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn flush(&mut self) {
        match self.writer.write(self.frame.iter().copied()) {
            Ok(()) => {
                if self.failing {
                    #[cfg(feature = "defmt")]
                    defmt::info!("NEOPIXEL: Writes recovered");
                    self.failing = false;
                }
            }
            // The frame is dropped; the next one is tried as normal
            Err(_) => {
                if !self.failing {
                    #[cfg(feature = "defmt")]
                    defmt::error!(
                        "NEOPIXEL: Failed to write frame, dropping frames until it recovers"
                    );
                    self.failing = true;
                }
            }
        }
    }
}

impl<W, const N: usize> WordSink for FrameSink<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn put_blocking(&mut self, word: u32) {
        self.frame[self.queued] = Pixel::from_word(word).rgb();
        self.queued += 1;
        if self.queued == N {
            self.queued = 0;
            self.flush();
        }
    }
}
