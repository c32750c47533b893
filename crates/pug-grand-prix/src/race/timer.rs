//! Countdown and race clock.

/// Seconds before the lights go green.
pub const COUNTDOWN_SECONDS: f32 = 3.0;
/// Race clock at the start of an attempt.
pub const RACE_BUDGET_SECONDS: f32 = 10.0;

/// Relative slack when a phase clock reaches zero. Step sizes that add up to
/// the phase length leave at most a few ulps of the f64 sum behind.
const TOLERANCE: f64 = 1e-6;

/// `Countdown(t) -> Racing(t) -> Finished`. Finished is terminal until the
/// next attempt builds a new timer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RacePhase {
    Countdown(f32),
    Racing(f32),
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Countdown reached zero.
    Started,
    /// Race clock reached zero before the finish line.
    TimedOut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaceTimer {
    phase: RacePhase,
    countdown: f64,
    budget: f64,
    /// Race clock including every bonus collected this attempt.
    limit: f64,
    /// Seconds spent in the current phase, summed in f64.
    clock: f64,
}

impl Default for RaceTimer {
    fn default() -> Self {
        Self::new(COUNTDOWN_SECONDS, RACE_BUDGET_SECONDS)
    }
}

impl RaceTimer {
    pub fn new(countdown: f32, budget: f32) -> Self {
        Self {
            phase: RacePhase::Countdown(countdown),
            countdown: countdown as f64,
            budget: budget as f64,
            limit: budget as f64,
            clock: 0.0,
        }
    }

    pub fn phase(&self) -> RacePhase {
        self.phase
    }

    pub fn is_countdown(&self) -> bool {
        matches!(self.phase, RacePhase::Countdown(_))
    }

    pub fn is_racing(&self) -> bool {
        matches!(self.phase, RacePhase::Racing(_))
    }

    pub fn is_finished(&self) -> bool {
        self.phase == RacePhase::Finished
    }

    /// Seconds left on whichever clock is running; zero once finished.
    pub fn remaining(&self) -> f32 {
        match self.phase {
            RacePhase::Countdown(t) | RacePhase::Racing(t) => t,
            RacePhase::Finished => 0.0,
        }
    }

    /// Seconds spent racing in this attempt.
    pub fn lap_time(&self) -> f32 {
        match self.phase {
            RacePhase::Countdown(_) => 0.0,
            _ => self.clock as f32,
        }
    }

    pub fn tick(&mut self, dt: f32) -> Option<TimerEvent> {
        if self.phase == RacePhase::Finished {
            return None;
        }
        self.clock += dt as f64;
        match self.phase {
            RacePhase::Countdown(_) => {
                let left = self.countdown - self.clock;
                if left <= self.countdown * TOLERANCE {
                    // Overshoot is dropped: the race clock starts from the full budget.
                    self.clock = 0.0;
                    self.phase = RacePhase::Racing(self.budget as f32);
                    Some(TimerEvent::Started)
                } else {
                    self.phase = RacePhase::Countdown(left as f32);
                    None
                }
            }
            RacePhase::Racing(_) => {
                let left = self.limit - self.clock;
                if left <= self.limit * TOLERANCE {
                    self.phase = RacePhase::Finished;
                    Some(TimerEvent::TimedOut)
                } else {
                    self.phase = RacePhase::Racing(left as f32);
                    None
                }
            }
            RacePhase::Finished => None,
        }
    }

    /// Extend the race clock. Ignored outside the Racing phase.
    pub fn add_bonus(&mut self, seconds: f32) {
        if self.is_racing() {
            self.limit += seconds as f64;
            self.phase = RacePhase::Racing((self.limit - self.clock) as f32);
        }
    }

    /// Stop the clock at the finish line and return the lap time.
    /// `None` unless the race was running.
    pub fn finish(&mut self) -> Option<f32> {
        if !self.is_racing() {
            return None;
        }
        self.phase = RacePhase::Finished;
        Some(self.clock as f32)
    }
}
