//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. The
//! defaults reproduce the classic feel; a JSON file may override any subset.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Tuning load/validation errors
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// Gameplay balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_height: f32,

    pub start_speed: f32,
    pub speed_step: f32,
    pub ramp_interval: u64,

    pub actor_left: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    pub jump_speed: f32,
    pub jump_boost: f32,
    pub gravity_up: f32,
    pub gravity_down: f32,
    pub jump_height: f32,

    pub obstacle_size: f32,
    pub obstacle_ground_inset: f32,
    pub gap_low: i32,
    pub gap_high: i32,

    /// Speed subtracted from the global speed per background layer, nearest first
    pub layer_offsets: [f32; 4],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,

            start_speed: START_SPEED,
            speed_step: SPEED_STEP,
            ramp_interval: RAMP_INTERVAL,

            actor_left: ACTOR_LEFT,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            jump_speed: JUMP_SPEED,
            jump_boost: JUMP_BOOST,
            gravity_up: GRAVITY_UP,
            gravity_down: GRAVITY_DOWN,
            jump_height: JUMP_HEIGHT,

            obstacle_size: OBSTACLE_SIZE,
            obstacle_ground_inset: OBSTACLE_GROUND_INSET,
            gap_low: GAP_LOW,
            gap_high: GAP_HIGH,

            layer_offsets: LAYER_OFFSETS,
        }
    }
}

impl Tuning {
    /// Load tuning overrides from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let tuning: Tuning = serde_json::from_str(&text)?;
        tuning.validate()?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    /// Reject parameter sets that would break simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let slowest = self
            .layer_offsets
            .iter()
            .fold(0.0f32, |acc, &offset| acc.max(offset));
        if self.start_speed < slowest {
            return Err(TuningError::Invalid(format!(
                "start_speed {} would reverse a background layer (largest offset {})",
                self.start_speed, slowest
            )));
        }
        if self.speed_step < 0.0 {
            return Err(TuningError::Invalid("speed_step must not be negative".into()));
        }
        if self.ramp_interval == 0 {
            return Err(TuningError::Invalid("ramp_interval must be positive".into()));
        }
        if self.gap_low < 0 || self.gap_low > self.gap_high {
            return Err(TuningError::Invalid(format!(
                "gap range [{}, {}] is empty or negative",
                self.gap_low, self.gap_high
            )));
        }
        if self.jump_speed <= 0.0 || self.gravity_up <= 0.0 || self.gravity_down <= 0.0 {
            return Err(TuningError::Invalid(
                "jump speed and gravities must be positive".into(),
            ));
        }
        if self.jump_height <= 0.0 || self.jump_height > self.ground_height {
            return Err(TuningError::Invalid(format!(
                "jump_height {} must fit between the ground and the top of the screen",
                self.jump_height
            )));
        }
        if self.screen_width <= 0.0 || self.obstacle_size <= 0.0 {
            return Err(TuningError::Invalid("screen and obstacle sizes must be positive".into()));
        }
        Ok(())
    }

    /// Bottom edge of the actor's jump (screen y of the ceiling)
    pub fn jump_ceiling(&self) -> f32 {
        self.ground_height - self.jump_height
    }

    /// Bottom edge shared by all obstacles
    pub fn obstacle_baseline(&self) -> f32 {
        self.ground_height - self.obstacle_ground_inset
    }
}
