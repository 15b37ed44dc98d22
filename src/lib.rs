//! Dino Run - A side-scrolling reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor physics, obstacles, collisions, score)
//! - `game_loop`: Per-tick orchestration, side effects and frame pacing
//! - `renderer`: Abstract render target and scene composition
//! - `platform`: Native frame limiter
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod game_loop;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod sprites;
pub mod tuning;

pub use game_loop::{
    Autopilot, GameLoop, InputSource, ScriptedInput, SessionOutcome, SessionSummary,
};
pub use highscores::{FileScoreStore, MemoryScoreStore, ScoreStore};
pub use settings::Settings;
pub use sprites::SpriteSet;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Fixed simulation rate (one tick per frame)
    pub const FPS: u32 = 30;

    /// Baseline the actor stands on
    pub const GROUND_HEIGHT: f32 = SCREEN_HEIGHT - 70.0;

    /// Global scroll speed at session start (pixels per tick)
    pub const START_SPEED: f32 = 15.0;
    /// Speed added every ramp
    pub const SPEED_STEP: f32 = 0.5;
    /// Score interval between speed ramps
    pub const RAMP_INTERVAL: u64 = 120;

    /// Actor sprite size and placement
    pub const ACTOR_WIDTH: f32 = 220.0;
    pub const ACTOR_HEIGHT: f32 = 153.0;
    pub const ACTOR_LEFT: f32 = 70.0;

    /// Jump physics (pixels per tick)
    pub const JUMP_SPEED: f32 = 50.0;
    pub const JUMP_BOOST: f32 = 5.0;
    pub const GRAVITY_UP: f32 = 4.0;
    pub const GRAVITY_DOWN: f32 = 2.0;
    /// Height of the jump ceiling above the ground
    pub const JUMP_HEIGHT: f32 = 290.0;

    /// Obstacle sprite size; obstacles stand slightly below the actor baseline
    pub const OBSTACLE_SIZE: f32 = 160.0;
    pub const OBSTACLE_GROUND_INSET: f32 = 11.0;
    /// Initial respawn gap range (pixels, inclusive)
    pub const GAP_LOW: i32 = 240;
    pub const GAP_HIGH: i32 = 720;

    /// Background layer speed offsets, nearest first
    pub const LAYER_OFFSETS: [f32; 4] = [0.0, 12.0, 13.0, 14.0];

    /// Alpha above which a sprite pixel counts as solid
    pub const ALPHA_THRESHOLD: u8 = 127;
}
