use std::time::Duration;

use crate::foundation::clock::{Clock, ManualClock, SystemClock};

/// Target interval of the timer fallback, roughly one 60 Hz refresh.
pub const FALLBACK_FRAME_MS: f64 = 16.0;

/// Something that blocks until the next repaint is due.
pub trait FrameSource {
    /// Wait for the next repaint.
    fn wait_for_frame(&mut self);
}

/// Timer approximation of display refresh for hosts without a vsync callback.
///
/// Each frame fires `max(0, 16 - (now - last))` ms after the request, so frames settle onto a
/// 16 ms grid even when the caller is late.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerFallback {
    last_ms: f64,
}

impl TimerFallback {
    /// Delay before the next frame when asked at `now_ms`; records that frame's time.
    pub fn next_delay_ms(&mut self, now_ms: f64) -> f64 {
        let delay = (FALLBACK_FRAME_MS - (now_ms - self.last_ms)).max(0.0);
        self.last_ms = now_ms + delay;
        delay
    }
}

/// Real-time frame source that sleeps on the timer fallback.
#[derive(Debug, Default)]
pub struct TimerFrameSource {
    clock: SystemClock,
    fallback: TimerFallback,
}

impl TimerFrameSource {
    /// Pace frames against `clock`, which should be the engine's clock.
    pub fn new(clock: SystemClock) -> Self {
        Self {
            clock,
            fallback: TimerFallback::default(),
        }
    }
}

impl FrameSource for TimerFrameSource {
    fn wait_for_frame(&mut self) {
        let delay = self.fallback.next_delay_ms(self.clock.now_ms());
        if delay > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(delay / 1000.0));
        }
    }
}

/// Headless frame source that advances a [`ManualClock`] by a fixed interval per frame.
#[derive(Clone, Debug)]
pub struct ManualFrameSource {
    clock: ManualClock,
    interval_ms: f64,
}

impl ManualFrameSource {
    /// Step `clock` by `interval_ms` on every frame.
    pub fn new(clock: ManualClock, interval_ms: f64) -> Self {
        Self { clock, interval_ms }
    }

    /// Step at a fixed frame rate.
    pub fn at_fps(clock: ManualClock, fps: f64) -> Self {
        Self::new(clock, 1000.0 / fps)
    }

    /// Interval added per frame.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }
}

impl FrameSource for ManualFrameSource {
    fn wait_for_frame(&mut self) {
        self.clock.advance(self.interval_ms);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/pacing.rs"]
mod tests;
