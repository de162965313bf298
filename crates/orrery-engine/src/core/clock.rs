//! Simulated-time clock.
//!
//! Wall-clock frame deltas accumulate against a fixed interval; each time
//! the interval fills while the clock is running, simulated time advances
//! by `days_per_frame` and the Earth spin accumulator by the matching
//! degrees. Leftover time inside the interval is discarded rather than
//! carried forward: frame pacing is capped, not interpolated.

/// Simulated frame interval in milliseconds (30 simulated frames/sec).
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 30.0;

/// Default simulated days added per filled interval.
pub const DEFAULT_DAYS_PER_FRAME: f64 = 0.0625;

/// Degrees of Earth self-rotation per simulated day.
const SPIN_DEG_PER_DAY: f64 = 360.0;

#[derive(Debug, Clone)]
pub struct SimulationClock {
    current_day: f64,
    days_per_frame: f64,
    /// Earth self-rotation accumulator, degrees. Advanced alongside
    /// `current_day` but kept separate so day/night spin is independent of
    /// orbital angles.
    spin_deg: f64,
    elapsed_ms: f64,
    running: bool,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self {
            current_day: 0.0,
            days_per_frame: DEFAULT_DAYS_PER_FRAME,
            spin_deg: 0.0,
            elapsed_ms: 0.0,
            running: true,
        }
    }

    /// Feed a wall-clock delta in milliseconds. Returns true if simulated
    /// time advanced. The accumulator resets whenever the interval fills,
    /// paused or not, so unpausing never replays banked time.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms < FRAME_INTERVAL_MS {
            return false;
        }
        self.elapsed_ms = 0.0;
        if !self.running {
            return false;
        }
        self.current_day += self.days_per_frame;
        // Spin tracks the current rate, so a rate change takes effect on
        // the very next tick.
        self.spin_deg += self.days_per_frame * SPIN_DEG_PER_DAY;
        true
    }

    pub fn current_day(&self) -> f64 {
        self.current_day
    }

    pub fn spin_deg(&self) -> f64 {
        self.spin_deg
    }

    pub fn days_per_frame(&self) -> f64 {
        self.days_per_frame
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
    }

    /// Double the simulated rate. Unbounded: powers of two stay exact in
    /// f64 for any reachable number of clicks.
    pub fn double_rate(&mut self) {
        self.days_per_frame *= 2.0;
    }

    /// Halve the simulated rate. Unbounded, like `double_rate`.
    pub fn halve_rate(&mut self) {
        self.days_per_frame /= 2.0;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_advance_below_interval() {
        let mut clock = SimulationClock::new();
        assert!(!clock.advance(FRAME_INTERVAL_MS * 0.9));
        assert_eq!(clock.current_day(), 0.0);
    }

    #[test]
    fn advances_one_frame_per_filled_interval() {
        let mut clock = SimulationClock::new();
        assert!(clock.advance(FRAME_INTERVAL_MS));
        assert_eq!(clock.current_day(), DEFAULT_DAYS_PER_FRAME);
        assert_eq!(clock.spin_deg(), DEFAULT_DAYS_PER_FRAME * 360.0);
    }

    #[test]
    fn excess_time_is_discarded() {
        let mut clock = SimulationClock::new();
        // A long frame fills the interval once, never twice.
        assert!(clock.advance(FRAME_INTERVAL_MS * 3.0));
        assert_eq!(clock.current_day(), DEFAULT_DAYS_PER_FRAME);
        // The accumulator reset to zero: a short follow-up does nothing.
        assert!(!clock.advance(FRAME_INTERVAL_MS * 0.5));
        assert_eq!(clock.current_day(), DEFAULT_DAYS_PER_FRAME);
    }

    #[test]
    fn paused_clock_never_advances() {
        let mut clock = SimulationClock::new();
        clock.set_running(false);
        for _ in 0..100 {
            assert!(!clock.advance(FRAME_INTERVAL_MS * 2.0));
        }
        assert_eq!(clock.current_day(), 0.0);
        assert_eq!(clock.spin_deg(), 0.0);
    }

    #[test]
    fn pause_does_not_bank_time() {
        let mut clock = SimulationClock::new();
        clock.set_running(false);
        clock.advance(FRAME_INTERVAL_MS * 10.0);
        clock.set_running(true);
        // Accumulator was reset while paused; a sub-interval delta after
        // unpausing must not tick.
        assert!(!clock.advance(FRAME_INTERVAL_MS * 0.5));
        assert_eq!(clock.current_day(), 0.0);
    }

    #[test]
    fn rate_doubles_and_halves() {
        let mut clock = SimulationClock::new();
        clock.double_rate();
        clock.double_rate();
        assert_eq!(clock.days_per_frame(), DEFAULT_DAYS_PER_FRAME * 4.0);
        clock.halve_rate();
        assert_eq!(clock.days_per_frame(), DEFAULT_DAYS_PER_FRAME * 2.0);
    }

    #[test]
    fn spin_follows_current_rate() {
        let mut clock = SimulationClock::new();
        clock.advance(FRAME_INTERVAL_MS);
        clock.double_rate();
        clock.advance(FRAME_INTERVAL_MS);
        let expected = DEFAULT_DAYS_PER_FRAME * 360.0 + DEFAULT_DAYS_PER_FRAME * 2.0 * 360.0;
        assert!((clock.spin_deg() - expected).abs() < 1e-12);
    }
}
