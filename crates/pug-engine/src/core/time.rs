use std::time::Instant;

/// Source of per-frame delta time for the host loop.
#[derive(Debug, Clone)]
pub enum FrameClock {
    /// Wall-clock deltas measured between calls to [`FrameClock::tick`].
    Realtime { last: Option<Instant> },
    /// Every frame lasts exactly `dt` seconds (headless runs and tests).
    Fixed { dt: f32 },
}

impl FrameClock {
    pub fn realtime() -> Self {
        Self::Realtime { last: None }
    }

    pub fn fixed(dt: f32) -> Self {
        Self::Fixed { dt }
    }

    /// Seconds elapsed since the previous tick. The first realtime tick returns 0.
    pub fn tick(&mut self) -> f32 {
        match self {
            Self::Realtime { last } => {
                let now = Instant::now();
                let dt = last.map(|prev| now.duration_since(prev).as_secs_f32()).unwrap_or(0.0);
                *last = Some(now);
                // Cap to prevent a huge step after a stall (debugger, window drag).
                dt.min(0.25)
            }
            Self::Fixed { dt } => *dt,
        }
    }
}

/// Frames-per-second counter, refreshed once per second of accumulated time.
#[derive(Debug, Clone, Default)]
pub struct FrameStats {
    elapsed: f32,
    frames: u32,
    fps: f32,
    total_frames: u64,
}

impl FrameStats {
    pub fn record(&mut self, dt: f32) {
        self.elapsed += dt;
        self.frames += 1;
        self.total_frames += 1;
        if self.elapsed >= 1.0 {
            self.fps = self.frames as f32 / self.elapsed;
            self.elapsed = 0.0;
            self.frames = 0;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }
}
