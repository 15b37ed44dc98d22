//! Session state
//!
//! Everything one play-through mutates lives in [`Session`]. A new session
//! is built for every replay; only the high score survives between them
//! (through the score store).

use std::sync::Arc;

use glam::Vec2;
use super::actor::Actor;
use super::collision::CollisionDetector;
use super::obstacles::ObstaclePool;
use super::progression::Progression;
use super::rect::Rect;
use super::scroll::Backdrop;
use crate::highscores::ScoreStore;
use crate::sprites::SpriteSet;
use crate::tuning::Tuning;

/// Size of the replay button on the game over screen
pub const REPLAY_BUTTON_SIZE: Vec2 = Vec2::new(200.0, 60.0);

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Dino waiting for the first jump; nothing scrolls
    Idle,
    /// Active gameplay
    Running,
    /// Collision happened; waiting for replay
    GameOver,
}

/// Side effects produced by a tick, consumed by the game loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The actor left the ground
    Jumped,
    /// Score passed the stored high score
    HighScore { score: u64 },
    /// Global speed increased
    SpeedUp { speed: f32 },
    /// Actor hit an obstacle
    GameOver { score: u64, high_score: u64 },
}

/// One play-through
#[derive(Debug, Clone)]
pub struct Session {
    pub seed: u64,
    pub phase: GamePhase,
    pub actor: Actor,
    pub obstacles: ObstaclePool,
    pub backdrop: Backdrop,
    pub progression: Progression,
    pub detector: CollisionDetector,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    /// Ticks processed, including idle and game over ticks
    pub time_ticks: u64,
    /// Click target that restarts the game after a collision
    pub replay_button: Rect,
    pub tuning: Tuning,
}

impl Session {
    /// Create a fresh session with a known high score
    pub fn new(tuning: Tuning, sprites: Arc<SpriteSet>, seed: u64, high_score: u64) -> Self {
        let progression = Progression::new(&tuning, high_score);
        Self::with_progression(tuning, sprites, seed, progression)
    }

    /// Create a fresh session, reading the high score from `store`
    pub fn load(tuning: Tuning, sprites: Arc<SpriteSet>, seed: u64, store: &dyn ScoreStore) -> Self {
        let progression = Progression::load(&tuning, store);
        Self::with_progression(tuning, sprites, seed, progression)
    }

    fn with_progression(
        tuning: Tuning,
        sprites: Arc<SpriteSet>,
        seed: u64,
        progression: Progression,
    ) -> Self {
        let screen = Vec2::new(tuning.screen_width, tuning.screen_height);
        Self {
            seed,
            phase: GamePhase::Idle,
            actor: Actor::new(&tuning, &sprites),
            obstacles: ObstaclePool::new(&tuning, sprites.variant_count(), seed),
            backdrop: Backdrop::new(&tuning),
            progression,
            detector: CollisionDetector::new(sprites),
            events: Vec::new(),
            time_ticks: 0,
            replay_button: Rect::centered(screen / 2.0, REPLAY_BUTTON_SIZE),
            tuning,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Global scroll speed
    pub fn speed(&self) -> f32 {
        self.progression.speed()
    }
}
