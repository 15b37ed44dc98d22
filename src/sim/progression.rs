//! Score, high score and difficulty ramp

use crate::highscores::{PersistError, ScoreStore};
use crate::tuning::Tuning;

/// What a single [`Progression::count`] call changed
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreTick {
    /// Score went up by one this call
    pub incremented: bool,
    /// Score passed the loaded high score for the first time this session
    pub new_high_score: bool,
    /// Score landed on a ramp multiple; holds the new global speed
    pub ramp: Option<f32>,
}

/// Score state for one session
#[derive(Debug, Clone)]
pub struct Progression {
    score: u64,
    high_score: u64,
    achieved: bool,
    /// Number of count() calls; even calls score
    calls: u64,
    speed: f32,
    speed_step: f32,
    ramp_interval: u64,
}

impl Progression {
    pub fn new(tuning: &Tuning, high_score: u64) -> Self {
        Self {
            score: 0,
            high_score,
            achieved: false,
            calls: 0,
            speed: tuning.start_speed,
            speed_step: tuning.speed_step,
            ramp_interval: tuning.ramp_interval,
        }
    }

    /// Start a session from whatever the store holds; unreadable scores count as zero
    pub fn load(tuning: &Tuning, store: &dyn ScoreStore) -> Self {
        let high_score = match store.load() {
            Ok(score) => score,
            Err(PersistError::NotFound) => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Ignoring unreadable high score: {}", e);
                0
            }
        };
        Self::new(tuning, high_score)
    }

    /// Write the high score back, only if it was beaten this session
    pub fn save(&self, store: &mut dyn ScoreStore) {
        if !self.achieved {
            return;
        }
        if let Err(e) = store.save(self.high_score) {
            log::warn!("Failed to save high score {}: {}", self.high_score, e);
        }
    }

    /// Called once per running tick
    pub fn count(&mut self) -> ScoreTick {
        let mut tick = ScoreTick::default();

        if self.calls % 2 == 0 {
            self.score += 1;
            tick.incremented = true;

            if self.achieved {
                self.high_score = self.score;
            } else if self.score > self.high_score {
                self.high_score = self.score;
                self.achieved = true;
                tick.new_high_score = true;
                log::debug!("New high score reached at {}", self.score);
            }

            // A zero interval never ramps
            if self.score.checked_rem(self.ramp_interval) == Some(0) {
                self.speed += self.speed_step;
                tick.ramp = Some(self.speed);
            }
        }

        self.calls += 1;
        tick
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn achieved(&self) -> bool {
        self.achieved
    }

    /// Global scroll speed
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::MemoryScoreStore;
    use proptest::prelude::*;

    #[test]
    fn test_first_call_scores() {
        let mut p = Progression::new(&Tuning::default(), 0);
        let tick = p.count();
        assert!(tick.incremented);
        assert_eq!(p.score(), 1);
        assert!(!p.count().incremented);
        assert_eq!(p.score(), 1);
    }

    #[test]
    fn test_high_score_scenario() {
        let mut p = Progression::new(&Tuning::default(), 50);
        let mut flipped_at = None;
        let mut ramps = Vec::new();

        for _ in 0..200 {
            let tick = p.count();
            if tick.new_high_score {
                assert!(flipped_at.is_none());
                flipped_at = Some(p.score());
            }
            if let Some(speed) = tick.ramp {
                ramps.push(speed);
            }
        }
        assert_eq!(p.score(), 100);
        assert_eq!(flipped_at, Some(51));
        assert!(p.achieved());
        assert_eq!(p.high_score(), 100);
        assert!(ramps.is_empty());

        for _ in 0..40 {
            if let Some(speed) = p.count().ramp {
                ramps.push(speed);
            }
        }
        assert_eq!(p.score(), 120);
        assert_eq!(ramps, vec![15.5]);
        assert_eq!(p.speed(), 15.5);
    }

    #[test]
    fn test_below_high_score_not_achieved() {
        let mut p = Progression::new(&Tuning::default(), 500);
        for _ in 0..200 {
            p.count();
        }
        assert_eq!(p.score(), 100);
        assert_eq!(p.high_score(), 500);
        assert!(!p.achieved());
    }

    #[test]
    fn test_zero_ramp_interval_never_ramps() {
        let tuning = Tuning {
            ramp_interval: 0,
            ..Default::default()
        };
        let mut p = Progression::new(&tuning, 0);
        for _ in 0..500 {
            assert_eq!(p.count().ramp, None);
        }
        assert_eq!(p.score(), 250);
        assert_eq!(p.speed(), tuning.start_speed);
    }

    #[test]
    fn test_load_corrupt_defaults_to_zero() {
        let store = MemoryScoreStore::with_contents("abc");
        let p = Progression::load(&Tuning::default(), &store);
        assert_eq!(p.high_score(), 0);

        let p = Progression::load(&Tuning::default(), &MemoryScoreStore::new());
        assert_eq!(p.high_score(), 0);

        let p = Progression::load(&Tuning::default(), &MemoryScoreStore::with_contents("77\n"));
        assert_eq!(p.high_score(), 77);
    }

    #[test]
    fn test_save_only_when_achieved() {
        let mut store = MemoryScoreStore::with_contents("10");
        let mut p = Progression::load(&Tuning::default(), &store);
        for _ in 0..10 {
            p.count();
        }
        p.save(&mut store);
        assert_eq!(store.saves, 0);

        // Score 10 only ties the record
        for _ in 0..10 {
            p.count();
        }
        p.save(&mut store);
        assert_eq!(store.saves, 0);

        for _ in 0..10 {
            p.count();
        }
        p.save(&mut store);
        assert_eq!(store.saves, 1);
        assert_eq!(store.contents.as_deref(), Some("15"));
    }

    proptest! {
        #[test]
        fn score_and_ramp_invariants(loaded in 0u64..400, calls in 1usize..2000) {
            let tuning = Tuning::default();
            let mut p = Progression::new(&tuning, loaded);
            let mut was_achieved = false;
            let mut ramps = 0u32;

            for n in 1..=calls {
                let tick = p.count();
                prop_assert_eq!(p.score(), n.div_ceil(2) as u64);
                if was_achieved {
                    prop_assert!(p.achieved());
                    prop_assert_eq!(p.high_score(), p.score());
                }
                was_achieved = p.achieved();
                if let Some(speed) = tick.ramp {
                    ramps += 1;
                    prop_assert!(p.score() > 0 && p.score() % 120 == 0);
                    prop_assert_eq!(speed, tuning.start_speed + 0.5 * ramps as f32);
                }
            }
            prop_assert_eq!(ramps as u64, p.score() / 120);
            prop_assert_eq!(p.achieved(), p.score() > loaded);
        }
    }
}
