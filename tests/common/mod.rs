//! Shared test infrastructure for rainbow-ring integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use embedded_hal_async::delay::DelayNs;
use rainbow_ring::WordSink;

/// Sink that records every word it is given
#[derive(Default)]
pub struct CaptureSink {
    pub words: Vec<u32>,
}

impl WordSink for CaptureSink {
    fn put_blocking(&mut self, word: u32) {
        self.words.push(word);
    }
}

/// Delay that returns straight away a fixed number of times and then never completes, so a
/// single poll of the runner performs a known number of frames
pub struct FrameBudgetDelay {
    remaining: usize,
    pub requested_ms: Vec<u32>,
}

impl FrameBudgetDelay {
    pub fn new(frames: usize) -> Self {
        Self {
            remaining: frames,
            requested_ms: Vec::new(),
        }
    }
}

impl DelayNs for FrameBudgetDelay {
    async fn delay_ns(&mut self, _ns: u32) {
        core::future::pending::<()>().await
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.requested_ms.push(ms);
        if self.remaining == 0 {
            core::future::pending::<()>().await
        }
        self.remaining -= 1;
    }
}
