pub mod laps;
pub mod scene;
pub mod timer;

pub use laps::{Checkpoint, CompetitorRecord, LapProgress, LapTracker, RaceResult, Standings};
pub use scene::RaceScene;
pub use timer::{RacePhase, RaceTimer, TimerEvent};
