use std::time::{Duration, Instant};

/// Paces a loop to a fixed interval, measured from the end of the previous sleep.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    pub fn per_second(rate: u64) -> Self {
        Self::new(interval_for_rate(rate))
    }

    pub fn set_rate(&mut self, rate: u64) {
        self.target_delta_time = interval_for_rate(rate);
    }

    /// Sleeps off whatever is left of the interval. Returns false if the caller
    /// was already late (or has never slept before).
    pub fn sleep(&mut self) -> bool {
        let slept = match self.remaining() {
            Some(remaining) => {
                spin_sleep::sleep(remaining);
                true
            }
            None => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }

    pub fn in_time(&self) -> bool {
        self.remaining().is_some()
    }

    fn remaining(&self) -> Option<Duration> {
        // Assume we're late if we've never slept yet.
        let delta_time = self.last_instant?.elapsed();
        self.target_delta_time.checked_sub(delta_time).filter(|remaining| !remaining.is_zero())
    }
}

fn interval_for_rate(rate: u64) -> Duration {
    Duration::from_micros(1_000_000 / rate.max(1))
}
