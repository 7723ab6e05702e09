use std::time::Instant;

/// Frame timing source: seconds elapsed between loop iterations, with
/// optional once-per-second frame-rate logging.
///
/// Owned by the loop; the application only ever sees the delta passed to
/// `update`.
#[derive(Debug)]
pub struct Clock {
    last: Instant,
    delta: f32,
    log_fps: bool,
    frames: u32,
    period_start: Instant,
}

impl Clock {
    pub fn new(log_fps: bool) -> Self {
        let now = Instant::now();
        Self {
            last: now,
            delta: 0.0,
            log_fps,
            frames: 0,
            period_start: now,
        }
    }

    /// The most recent measurement: seconds between the last two
    /// [`advance`](Self::advance) calls. Zero until the first advance.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Take a new measurement. Called once at the end of every frame.
    pub fn advance(&mut self) {
        let now = Instant::now();
        self.delta = (now - self.last).as_secs_f32();
        self.last = now;

        if self.log_fps {
            self.frames += 1;
            let elapsed = (now - self.period_start).as_secs_f32();
            if elapsed >= 1.0 {
                tracing::info!("fps: {:.1}", self.frames as f32 / elapsed);
                self.frames = 0;
                self.period_start = now;
            }
        }
    }

    /// Discard time accrued so far; the next delta measures from now.
    ///
    /// Used once after startup so asset loading and setup never inflate the
    /// first frame's delta.
    pub fn restart(&mut self) {
        let now = Instant::now();
        self.last = now;
        self.period_start = now;
        self.frames = 0;
        self.delta = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn advance_measures_elapsed_time() {
        let mut clock = Clock::new(false);
        std::thread::sleep(Duration::from_millis(5));
        clock.advance();
        assert!(clock.delta() >= 0.005);
    }

    #[test]
    fn restart_discards_accrued_time() {
        let mut clock = Clock::new(false);
        std::thread::sleep(Duration::from_millis(50));
        clock.restart();
        assert_eq!(clock.delta(), 0.0);
        clock.advance();
        assert!(clock.delta() < 0.05);
    }
}
