//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Seeded RNG only
//! - Stable slot order when recycling obstacles
//! - No rendering, audio or file access

pub mod actor;
pub mod collision;
pub mod mask;
pub mod obstacles;
pub mod progression;
pub mod rect;
pub mod scroll;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorMode, Animation, Cadence};
pub use collision::{CollisionDetector, FrameKey};
pub use mask::Mask;
pub use obstacles::{Obstacle, ObstaclePool, Respawn, SLOT_COUNT};
pub use progression::{Progression, ScoreTick};
pub use rect::Rect;
pub use scroll::{Backdrop, LAYER_COUNT, ScrollLayer};
pub use state::{GameEvent, GamePhase, REPLAY_BUTTON_SIZE, Session};
pub use tick::{TickInput, TickOutcome, tick};
