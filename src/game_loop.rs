//! Session orchestration
//!
//! Per tick, in order: poll input, advance the simulation (which runs the
//! collision check last), fire audio cues and persistence for the tick's
//! events, draw the frame, then wait for the frame limiter. A session ends
//! on replay or quit; [`GameLoop::run`] keeps starting sessions until quit.

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::{AudioSink, SoundEffect};
use crate::highscores::ScoreStore;
use crate::platform::FrameLimiter;
use crate::renderer::{RenderTarget, draw_session};
use crate::sim::{GameEvent, Session, TickInput, TickOutcome, tick};
use crate::sprites::SpriteSet;
use crate::tuning::{Tuning, TuningError};

/// Source of per-tick input intents
pub trait InputSource {
    fn poll(&mut self, session: &Session) -> TickInput;
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Start another session
    Replay,
    /// Stop the game
    Quit,
}

/// Result of one finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub outcome: SessionOutcome,
    pub seed: u64,
    pub score: u64,
    pub high_score: u64,
    pub ticks: u64,
}

/// Owns every collaborator a session needs
pub struct GameLoop<A: AudioSink, R: RenderTarget, S: ScoreStore> {
    tuning: Tuning,
    sprites: Arc<SpriteSet>,
    store: S,
    audio: A,
    target: R,
    limiter: Option<FrameLimiter>,
    seeds: Pcg32,
}

impl<A: AudioSink, R: RenderTarget, S: ScoreStore> GameLoop<A, R, S> {
    /// Unpaced loop; sessions get seeds derived from `seed`. Rejects
    /// tuning that fails [`Tuning::validate`].
    pub fn new(
        tuning: Tuning,
        sprites: Arc<SpriteSet>,
        store: S,
        audio: A,
        target: R,
        seed: u64,
    ) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            sprites,
            store,
            audio,
            target,
            limiter: None,
            seeds: Pcg32::seed_from_u64(seed),
        })
    }

    /// Pace the loop at `fps` ticks per second
    pub fn with_frame_limiter(mut self, fps: u32) -> Self {
        self.limiter = Some(FrameLimiter::new(fps));
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    /// Play sessions until the player quits; returns how many were played
    pub fn run(&mut self, input: &mut dyn InputSource) -> u32 {
        let mut sessions = 0;
        loop {
            let summary = self.run_session(input);
            sessions += 1;
            if summary.outcome == SessionOutcome::Quit {
                log::info!("Quitting after {} session(s)", sessions);
                return sessions;
            }
        }
    }

    /// Play one session to its end
    pub fn run_session(&mut self, input: &mut dyn InputSource) -> SessionSummary {
        let seed = self.seeds.random::<u64>();
        let mut session = Session::load(
            self.tuning.clone(),
            Arc::clone(&self.sprites),
            seed,
            &self.store,
        );
        log::info!(
            "New session (seed {}, high score {})",
            seed,
            session.progression.high_score()
        );

        loop {
            let intents = input.poll(&session);
            let outcome = tick(&mut session, &intents);

            let outcome = match outcome {
                TickOutcome::Continue => None,
                TickOutcome::Replay => Some(SessionOutcome::Replay),
                TickOutcome::Quit => Some(SessionOutcome::Quit),
            };
            if let Some(outcome) = outcome {
                return SessionSummary {
                    outcome,
                    seed,
                    score: session.progression.score(),
                    high_score: session.progression.high_score(),
                    ticks: session.time_ticks,
                };
            }

            self.handle_events(&session);

            self.target.begin_frame();
            draw_session(&session, &mut self.target);
            self.target.present();

            if let Some(limiter) = &mut self.limiter {
                limiter.wait();
            }
        }
    }

    fn handle_events(&mut self, session: &Session) {
        for event in &session.events {
            match event {
                GameEvent::Jumped => self.audio.play(SoundEffect::Jump),
                GameEvent::HighScore { .. } => self.audio.play(SoundEffect::Score),
                GameEvent::SpeedUp { speed } => {
                    log::info!(
                        "Score {}: speed ramped to {}",
                        session.progression.score(),
                        speed
                    );
                }
                GameEvent::GameOver { .. } => {
                    self.audio.play(SoundEffect::GameOver);
                    session.progression.save(&mut self.store);
                }
            }
        }
    }
}

/// Input replayed from a fixed list, then an endless quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: std::collections::VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _session: &Session) -> TickInput {
        self.inputs.pop_front().unwrap_or(TickInput {
            quit: true,
            ..Default::default()
        })
    }
}

/// Demo player: jumps when a cactus gets close and replays a fixed number
/// of times before quitting
#[derive(Debug, Clone)]
pub struct Autopilot {
    sessions_left: u32,
    /// Ticks of warning before an obstacle reaches the dino
    lead_ticks: f32,
    /// Session tick after which the pilot stops dodging
    give_up_after: u64,
}

impl Autopilot {
    pub fn new(sessions: u32) -> Self {
        Self {
            sessions_left: sessions.max(1),
            lead_ticks: 4.0,
            give_up_after: u64::from(crate::consts::FPS) * 60,
        }
    }

    pub fn with_give_up_after(mut self, ticks: u64) -> Self {
        self.give_up_after = ticks;
        self
    }

    pub fn sessions_left(&self) -> u32 {
        self.sessions_left
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, session: &Session) -> TickInput {
        if session.is_game_over() {
            self.sessions_left = self.sessions_left.saturating_sub(1);
            return if self.sessions_left > 0 {
                TickInput {
                    jump: true,
                    ..Default::default()
                }
            } else {
                TickInput {
                    quit: true,
                    ..Default::default()
                }
            };
        }

        if session.actor.is_idle() {
            return TickInput {
                jump: true,
                ..Default::default()
            };
        }

        if session.time_ticks > self.give_up_after {
            return TickInput::default();
        }

        let reach = session.actor.rect.right() + session.speed() * self.lead_ticks;
        let danger = session.obstacles.snapshot().iter().any(|o| {
            o.rect.right() > session.actor.rect.left() && o.rect.left() <= reach
        });
        TickInput {
            jump: danger && session.actor.can_jump(),
            ..Default::default()
        }
    }
}
