/// Implements timing for the application. Computes delta times between frames
use std::time::{Duration, Instant};

pub struct Time {
    last_time: Instant,
    delta_time: Duration,
}

impl Time {
    pub fn new(current_instant: Instant) -> Self {
        Time {
            last_time: current_instant,
            delta_time: Duration::ZERO,
        }
    }

    #[inline(always)]
    pub fn delta_seconds(&self) -> f32 {
        self.delta_time.as_secs_f32()
    }

    #[inline(always)]
    pub fn delta_milliseconds(&self) -> f32 {
        self.delta_seconds() * 1000.0
    }

    pub fn step(&mut self, instant: Instant) {
        self.delta_time = instant - self.last_time;
        self.last_time = instant;
    }
}
