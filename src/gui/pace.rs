use std::time::{Duration, Instant};

/// Decides when the next automatic generation is due while the simulation runs.
///
/// The caller schedules a repaint after [`StepPacer::wait_time`] instead of blocking.
pub struct StepPacer {
    last_step: Instant,
    step_time_smoothed: f64,
}

impl Default for StepPacer {
    fn default() -> Self {
        Self {
            last_step: Instant::now(),
            step_time_smoothed: 0.,
        }
    }
}

impl StepPacer {
    /// Measured generations per second, `0` before the first step.
    pub fn rate(&self) -> f64 {
        if self.step_time_smoothed > 0. {
            1. / self.step_time_smoothed
        } else {
            0.
        }
    }

    /// Time left before the next generation at `max_rate` generations per second;
    /// `None` if it is due now.
    pub fn wait_time(&self, max_rate: f64) -> Option<Duration> {
        let period = Duration::from_secs_f64(1. / max_rate.max(1.));
        period
            .checked_sub(self.last_step.elapsed())
            .filter(|wait| !wait.is_zero())
    }

    pub fn record_step(&mut self) {
        let step_time = self.last_step.elapsed().as_secs_f64();
        self.step_time_smoothed += (step_time - self.step_time_smoothed) * 0.1;
        self.last_step = Instant::now();
    }

    /// Forgets the time spent paused so it does not count as a slow step.
    pub fn restart(&mut self) {
        self.last_step = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::StepPacer;
    use std::time::Duration;

    #[test]
    fn test_wait_time() {
        let pacer = StepPacer::default();
        let wait = pacer.wait_time(1.).unwrap();
        assert!(wait <= Duration::from_secs(1));
        // rates below one generation per second are raised to one
        assert!(pacer.wait_time(0.).unwrap() <= Duration::from_secs(1));
    }

    #[test]
    fn test_step_is_due() {
        let mut pacer = StepPacer::default();
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(pacer.wait_time(60.), None);
        assert_eq!(pacer.rate(), 0.);
        pacer.record_step();
        assert!(pacer.rate() > 0.);
        assert!(pacer.wait_time(1.).is_some());
    }
}
