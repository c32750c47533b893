//! Checkpoint sequencing and lap results.

use std::fmt;

use pug_engine::Rect;

use crate::track::CheckpointSpec;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    pub area: Rect,
    pub bonus: f32,
    /// Only read when drawing.
    pub reached: bool,
}

/// What touching the track did this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LapProgress {
    Checkpoint { index: usize, bonus: f32 },
    Finished,
}

/// Strict-order checkpoint tracker. The finish line only counts once every
/// checkpoint has been reached.
#[derive(Debug, Clone)]
pub struct LapTracker {
    checkpoints: Vec<Checkpoint>,
    finish_line: Rect,
    current: usize,
}

impl LapTracker {
    pub fn new(checkpoints: &[CheckpointSpec], finish_line: Rect) -> Self {
        Self {
            checkpoints: checkpoints
                .iter()
                .map(|spec| Checkpoint {
                    area: spec.area,
                    bonus: spec.bonus,
                    reached: false,
                })
                .collect(),
            finish_line,
            current: 0,
        }
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    pub fn finish_line(&self) -> Rect {
        self.finish_line
    }

    /// Index of the next checkpoint to reach.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn all_reached(&self) -> bool {
        self.current >= self.checkpoints.len()
    }

    /// Mark checkpoint `index` reached. Only the current checkpoint counts;
    /// anything else is a no-op. Returns the bonus on success.
    pub fn touch(&mut self, index: usize) -> Option<f32> {
        if index != self.current {
            log::debug!("checkpoint {} touched out of order (next is {})", index, self.current);
            return None;
        }
        let checkpoint = self.checkpoints.get_mut(index)?;
        checkpoint.reached = true;
        self.current += 1;
        log::info!("checkpoint {} reached (+{}s)", index, checkpoint.bonus);
        Some(checkpoint.bonus)
    }

    /// Test the player's box against the next checkpoint, or the finish line
    /// once all are reached.
    pub fn check(&mut self, player: &Rect) -> Option<LapProgress> {
        if self.all_reached() {
            return player.intersects(&self.finish_line).then_some(LapProgress::Finished);
        }
        let index = self.current;
        if !player.intersects(&self.checkpoints[index].area) {
            return None;
        }
        self.touch(index).map(|bonus| LapProgress::Checkpoint { index, bonus })
    }

    pub fn reset(&mut self) {
        self.current = 0;
        for checkpoint in &mut self.checkpoints {
            checkpoint.reached = false;
        }
    }
}

/// One competitor's attempt. `lap_time` is `None` after a timeout.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorRecord {
    pub name: String,
    pub lap_time: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RaceResult {
    Winner { name: String, lap_time: f32 },
    Tie { lap_time: f32 },
    /// Nobody finished.
    NoWinner,
}

impl fmt::Display for RaceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner { name, lap_time } => write!(f, "{} wins with {:.2}s", name, lap_time),
            Self::Tie { lap_time } => write!(f, "tie at {:.2}s", lap_time),
            Self::NoWinner => f.write_str("nobody finished"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Standings {
    records: Vec<CompetitorRecord>,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: impl Into<String>, lap_time: Option<f32>) {
        let name = name.into();
        match lap_time {
            Some(t) => log::info!("{} finished in {:.2}s", name, t),
            None => log::info!("{} ran out of time", name),
        }
        self.records.push(CompetitorRecord { name, lap_time });
    }

    pub fn records(&self) -> &[CompetitorRecord] {
        &self.records
    }

    /// Lowest lap time wins. Equal best times are a tie.
    pub fn result(&self) -> RaceResult {
        let mut best: Option<(&CompetitorRecord, f32)> = None;
        let mut tied = false;
        for record in &self.records {
            let Some(time) = record.lap_time else {
                continue;
            };
            match best {
                Some((_, best_time)) if time > best_time => {}
                Some((_, best_time)) if time == best_time => tied = true,
                _ => {
                    best = Some((record, time));
                    tied = false;
                }
            }
        }
        match best {
            None => RaceResult::NoWinner,
            Some((_, lap_time)) if tied => RaceResult::Tie { lap_time },
            Some((record, lap_time)) => RaceResult::Winner {
                name: record.name.clone(),
                lap_time,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    const TWO: [CheckpointSpec; 2] = [
        CheckpointSpec::new(Rect::new(0.0, 100.0, 200.0, 10.0), 5.0),
        CheckpointSpec::new(Rect::new(0.0, 50.0, 200.0, 10.0), 3.0),
    ];
    const FINISH: Rect = Rect::new(0.0, 150.0, 200.0, 10.0);

    fn player_at(y: f32) -> Rect {
        Rect::from_center(Vec2::new(100.0, y), Vec2::new(20.0, 20.0))
    }

    #[test]
    fn checkpoints_in_order_then_finish() {
        let mut laps = LapTracker::new(&TWO, FINISH);
        assert_eq!(laps.check(&player_at(155.0)), None, "finish line is not live yet");
        assert_eq!(laps.check(&player_at(55.0)), None, "second checkpoint before the first");
        assert_eq!(laps.check(&player_at(105.0)), Some(LapProgress::Checkpoint { index: 0, bonus: 5.0 }));
        assert_eq!(laps.check(&player_at(105.0)), None, "already reached");
        assert_eq!(laps.check(&player_at(55.0)), Some(LapProgress::Checkpoint { index: 1, bonus: 3.0 }));
        assert!(laps.all_reached());
        assert_eq!(laps.check(&player_at(155.0)), Some(LapProgress::Finished));

        laps.reset();
        assert_eq!(laps.current(), 0);
        assert!(laps.checkpoints().iter().all(|c| !c.reached));
    }

    #[test]
    fn faster_lap_wins() {
        let mut standings = Standings::new();
        standings.record("Player 1", Some(9.5));
        standings.record("Player 2", Some(8.25));
        assert_eq!(
            standings.result(),
            RaceResult::Winner { name: "Player 2".into(), lap_time: 8.25 }
        );
    }

    #[test]
    fn equal_laps_tie() {
        let mut standings = Standings::new();
        standings.record("Player 1", Some(7.0));
        standings.record("Player 2", Some(7.0));
        assert_eq!(standings.result(), RaceResult::Tie { lap_time: 7.0 });
    }

    #[test]
    fn timeout_loses_to_any_finish() {
        let mut standings = Standings::new();
        standings.record("Player 1", None);
        standings.record("Player 2", Some(12.0));
        assert!(matches!(standings.result(), RaceResult::Winner { ref name, .. } if name == "Player 2"));

        let mut nobody = Standings::new();
        nobody.record("Player 1", None);
        nobody.record("Player 2", None);
        assert_eq!(nobody.result(), RaceResult::NoWinner);
    }

    proptest! {
        #[test]
        fn pointer_only_advances_on_current(touches in prop::collection::vec(0usize..4, 0..30)) {
            let specs = [TWO[0], TWO[1], TWO[0]];
            let mut laps = LapTracker::new(&specs, FINISH);
            for index in touches {
                let before = laps.current();
                let bonus = laps.touch(index);
                if index == before && before < specs.len() {
                    prop_assert_eq!(laps.current(), before + 1);
                    prop_assert!(bonus.is_some());
                } else {
                    prop_assert_eq!(laps.current(), before);
                    prop_assert!(bonus.is_none());
                }
            }
        }
    }
}
