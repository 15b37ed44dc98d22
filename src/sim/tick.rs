//! Fixed-rate simulation tick
//!
//! One call advances the session by exactly one frame. Side effects (sound,
//! persistence, drawing) are left to the caller through [`Session::events`].

use glam::Vec2;

use super::state::{GameEvent, GamePhase, Session};

/// Input intents for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Close the game
    pub quit: bool,
    /// Jump (space / up arrow); doubles as replay after game over
    pub jump: bool,
    /// Pointer click position this tick, in screen coordinates
    pub click: Option<Vec2>,
}

/// How the session should proceed after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Player asked to play again after a game over
    Replay,
    /// Player asked to leave
    Quit,
}

/// Advance the session by one tick
pub fn tick(session: &mut Session, input: &TickInput) -> TickOutcome {
    session.events.clear();
    session.time_ticks += 1;

    if input.quit {
        return TickOutcome::Quit;
    }

    if session.is_game_over() {
        let clicked_replay = input
            .click
            .is_some_and(|pos| session.replay_button.contains_strict(pos));
        if input.jump || clicked_replay {
            return TickOutcome::Replay;
        }
        return TickOutcome::Continue;
    }

    if input.jump && session.actor.request_jump() {
        session.events.push(GameEvent::Jumped);
        if session.phase == GamePhase::Idle {
            log::info!("Run started (seed {})", session.seed);
            session.phase = GamePhase::Running;
        }
    }

    if !session.actor.is_idle() {
        let score = session.progression.count();
        if score.new_high_score {
            session.events.push(GameEvent::HighScore {
                score: session.progression.score(),
            });
        }

        session.backdrop.update();
        for respawn in session.obstacles.update().into_iter().flatten() {
            log::debug!(
                "Respawned obstacle {} at x={} ({} px behind x={}, variant {})",
                respawn.slot,
                respawn.left,
                respawn.gap,
                respawn.reference_right,
                respawn.variant
            );
        }

        // New speed applies from the next tick
        if let Some(speed) = score.ramp {
            session.backdrop.update_speed(speed);
            session.obstacles.update_speed(speed);
            session.actor.boost_launch(session.tuning.jump_boost);
            session.events.push(GameEvent::SpeedUp { speed });
        }
    }

    session.actor.update();

    let lane = session.obstacles.snapshot();
    if session.detector.check(&session.actor, &lane) {
        session.phase = GamePhase::GameOver;
        let score = session.progression.score();
        let high_score = session.progression.high_score();
        log::info!("Game over: score {}, high score {}", score, high_score);
        session.events.push(GameEvent::GameOver { score, high_score });
    }

    TickOutcome::Continue
}
