//! Frame clock producing delta-time between ticks

use std::time::{Duration, Instant};

/// Tracks the time between loop ticks.
///
/// `delta_time` is recomputed exactly once per tick by [`advance_to`],
/// which then records the tick instant as the new reference point.
///
/// [`advance_to`]: FrameClock::advance_to
pub struct FrameClock {
    /// Time between the two most recent ticks
    delta_time: Duration,
    /// Instant of the most recent advance
    last_instant: Instant,
    /// Tick rate the loop is scheduled at
    target_fps: u32,
    /// When set, every tick reports this delta instead of wall time
    fixed_delta: Option<Duration>,
    /// Number of completed ticks
    frame_count: u64,
}

impl FrameClock {
    /// Create a wall-time clock. The first tick sees a zero delta.
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(target_fps, Instant::now())
    }

    /// Create a wall-time clock whose reference point is `start`
    pub fn starting_at(target_fps: u32, start: Instant) -> Self {
        Self {
            delta_time: Duration::ZERO,
            last_instant: start,
            target_fps: target_fps.max(1),
            fixed_delta: None,
            frame_count: 0,
        }
    }

    /// Create a clock that reports `delta` on every tick, including the first
    pub fn with_fixed_delta(target_fps: u32, delta: Duration) -> Self {
        Self {
            delta_time: delta,
            fixed_delta: Some(delta),
            ..Self::new(target_fps)
        }
    }

    /// Advance the clock. Call once per tick.
    pub fn advance_to(&mut self, now: Instant) {
        self.delta_time = match self.fixed_delta {
            Some(delta) => delta,
            None => now.saturating_duration_since(self.last_instant),
        };
        self.last_instant = now;
        self.frame_count += 1;
    }

    pub fn delta_time(&self) -> Duration {
        self.delta_time
    }

    /// Delta-time in seconds
    pub fn delta_secs(&self) -> f64 {
        self.delta_time.as_secs_f64()
    }

    pub fn last_instant(&self) -> Instant {
        self.last_instant
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Nominal time between ticks, `1 / target_fps`
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
