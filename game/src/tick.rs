//! Fixed-timestep accumulator.
//!
//! The driver polls the clock once per outer frame and runs the
//! simulation step for each whole tick that has elapsed, so logic
//! advances in constant increments regardless of frame rate.

use std::time::Instant;

use crate::config::{MAX_FRAME_TIME, TICK_DT};

pub struct TickClock {
    last_poll: Instant,
    accumulator: f32,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            last_poll: Instant::now(),
            accumulator: 0.0,
        }
    }

    /// Steps due since the last poll.
    pub fn poll(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = (now - self.last_poll).as_secs_f32();
        self.last_poll = now;
        self.advance(elapsed)
    }

    /// Accumulate `elapsed` seconds and drain whole ticks. Elapsed
    /// time is clamped to bound the number of catch-up steps after a
    /// stall.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        if elapsed > MAX_FRAME_TIME {
            log::warn!("frame time {:.3}s clamped to {}s", elapsed, MAX_FRAME_TIME);
        }
        self.accumulator += elapsed.min(MAX_FRAME_TIME);
        let mut steps = 0;
        while self.accumulator >= TICK_DT {
            self.accumulator -= TICK_DT;
            steps += 1;
        }
        steps
    }

    /// True when less than half a tick is pending; the driver sleeps
    /// briefly instead of spinning.
    pub fn idle(&self) -> bool {
        self.accumulator < TICK_DT / 2.0
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
