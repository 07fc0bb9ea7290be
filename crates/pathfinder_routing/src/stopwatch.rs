use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use tracing::debug;

/// Accumulates the time spent between `start` and `stop` calls.
pub struct Stopwatch {
    name: &'static str,
    running_since: Option<Instant>,
    elapsed_duration: Duration,
    laps: u32,
}

impl Stopwatch {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            running_since: None,
            elapsed_duration: Duration::ZERO,
            laps: 0,
        }
    }

    pub fn start(&mut self) {
        self.running_since = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.elapsed_duration += since.elapsed();
            self.laps += 1;
        }
    }

    /// Stopped laps plus the running one, if any.
    pub fn total_duration(&self) -> Duration {
        self.elapsed_duration + self.running_since.map_or(Duration::ZERO, |since| since.elapsed())
    }

    /// The total duration when it went past `limit`.
    pub fn exceeds(&self, limit: Duration) -> Option<Duration> {
        let total = self.total_duration();
        (total > limit).then_some(total)
    }

    pub fn report(&self) {
        debug!(laps = self.laps, "{}", self);
    }
}

impl Display for Stopwatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {:?}", self.name, self.total_duration())
    }
}
