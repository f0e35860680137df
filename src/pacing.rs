use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces the generation loop to a fixed interval.
///
/// `delay` sleeps out whatever remains of the interval after the work done
/// since the previous tick, so rendering time does not stretch the pace.
pub struct TickLimiter {
    target_interval: Duration,
    tick_timer: Instant,
    interval_smoothed: f64,
}

impl TickLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            target_interval: interval,
            tick_timer: Instant::now(),
            interval_smoothed: interval.as_secs_f64(),
        }
    }

    /// Smoothed observed tick rate.
    pub fn ticks_per_second(&self) -> f64 {
        1. / self.interval_smoothed
    }

    pub fn delay(&mut self) {
        let before_wait = self.tick_timer.elapsed();

        if self.target_interval > before_wait {
            sleep(self.target_interval - before_wait);
        }

        let after_wait = self.tick_timer.elapsed();
        let interval = after_wait.as_secs_f64();
        self.interval_smoothed += (interval - self.interval_smoothed) * 0.1;

        self.tick_timer = Instant::now();
    }
}
