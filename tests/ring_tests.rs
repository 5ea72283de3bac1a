//! Integration tests for the ring driver and runner

mod common;

use common::{CaptureSink, FrameBudgetDelay};
use futures::FutureExt;
use rainbow_ring::{LED_COUNT, Pattern, Pixel, RingDriver, run, wheel};

fn frame(words: &[u32], n: usize) -> &[u32] {
    &words[n * LED_COUNT..(n + 1) * LED_COUNT]
}

#[test]
fn rainbow_rotates_one_step_per_frame() {
    let mut ring = RingDriver::new(CaptureSink::default(), Pattern::Wheel);
    ring.step();
    ring.step();

    let words = &ring.sink().words;
    assert_eq!(words.len(), 2 * LED_COUNT);
    for i in 0..LED_COUNT {
        assert_eq!(frame(words, 0)[i], wheel(i as u8).word());
        assert_eq!(frame(words, 1)[i], wheel(i as u8 + 1).word());
    }
    // Frame 1 is frame 0 moved along by one LED
    assert_eq!(frame(words, 1)[..LED_COUNT - 1], frame(words, 0)[1..]);
}

#[test]
fn every_word_has_an_empty_low_byte() {
    let mut ring = RingDriver::new(CaptureSink::default(), Pattern::Wheel);
    for _ in 0..300 {
        ring.step();
    }
    assert!(ring.sink().words.iter().all(|w| w & 0xFF == 0));
}

#[test]
fn buffer_repeats_every_256_frames() {
    let mut ring = RingDriver::new(CaptureSink::default(), Pattern::Wheel);
    for _ in 0..256 + 3 {
        ring.step();
    }
    let words = &ring.sink().words;
    for k in 0..3 {
        assert_eq!(frame(words, k), frame(words, k + 256), "phase {k}");
    }
}

#[test]
fn frame_wrapping_the_wheel() {
    let mut ring = RingDriver::new(CaptureSink::default(), Pattern::Wheel);
    for _ in 0..250 {
        ring.step();
    }
    ring.fill();
    // LEDs 6 onwards have wrapped back to the start of the wheel
    assert_eq!(ring.buffer()[5], wheel(255));
    assert_eq!(ring.buffer()[6], wheel(0));
    assert_eq!(ring.buffer()[15], wheel(9));
}

#[test]
fn runner_blanks_then_animates() {
    let mut ring = RingDriver::new(CaptureSink::default(), Pattern::Wheel);
    let mut delay = FrameBudgetDelay::new(3);

    // The runner never finishes; it parks once the delay budget runs out
    assert!(run(&mut ring, &mut delay).now_or_never().is_none());

    let words = &ring.sink().words;
    // One dark frame, then three full frames plus the one sent before the parked delay
    assert_eq!(words.len(), 5 * LED_COUNT);
    assert!(frame(words, 0).iter().all(|&w| w == 0));
    assert_eq!(frame(words, 1)[0], wheel(0).word());
    assert_eq!(frame(words, 4)[0], wheel(3).word());
    assert_eq!(delay.requested_ms, [20, 20, 20, 20]);
    assert_eq!(ring.phase(), 4);
}

#[test]
fn christmas_runner_spins_slowly() {
    let mut ring = RingDriver::new(CaptureSink::default(), Pattern::Christmas);
    let mut delay = FrameBudgetDelay::new(1);
    assert!(run(&mut ring, &mut delay).now_or_never().is_none());

    let red = Pixel::from_rgb(smart_leds::RGB8 { r: 255, g: 0, b: 0 }).word();
    let green = Pixel::from_rgb(smart_leds::RGB8 { r: 0, g: 255, b: 0 }).word();
    let words = &ring.sink().words;
    assert_eq!(frame(words, 1)[..2], [red, green]);
    assert_eq!(frame(words, 2)[..2], [green, red]);
    assert_eq!(delay.requested_ms, [500, 500]);
}
