//! Frame composition
//!
//! Draw order, back to front: background layers (farthest first), obstacles,
//! the dino, the score HUD, and the game over overlay when the run ended.

use glam::Vec2;

use super::{Font, ImageId, RenderTarget, TextAnchor, TextStyle};
use crate::sim::{Rect, Session};

/// HUD icon edge length
const ICON_SIZE: f32 = 35.0;
/// Gap between the screen's right edge and the HUD icons
const ICON_MARGIN: f32 = 15.0;
/// Gap between the screen's right edge and the score digits
const SCORE_TEXT_MARGIN: f32 = 60.0;
const HIGH_SCORE_ROW: f32 = 20.0;
const CURRENT_SCORE_ROW: f32 = 65.0;

const SCORE_STYLE: TextStyle = TextStyle {
    font: Font::Score,
    size: 28.0,
    color: [19, 130, 98],
};

const BANNER_STYLE: TextStyle = TextStyle {
    font: Font::Banner,
    size: 80.0,
    color: [255, 0, 0],
};

/// Draw the whole session as it stands after this tick
pub fn draw_session(session: &Session, target: &mut dyn RenderTarget) {
    let width = session.tuning.screen_width;
    let height = session.tuning.screen_height;

    for (i, layer) in session.backdrop.layers.iter().enumerate().rev() {
        for tile in &layer.tiles {
            target.blit(ImageId::Backdrop(i), *tile);
        }
    }

    for obstacle in session.obstacles.snapshot() {
        target.blit(ImageId::Obstacle(obstacle.variant), obstacle.rect);
    }

    let (sheet, frame) = session.actor.displayed_frame();
    target.blit(ImageId::Actor(sheet, frame), session.actor.rect);

    draw_score(session, target, width);

    if session.is_game_over() {
        target.text(
            "GAME OVER",
            Vec2::new(width / 2.0, height / 3.0),
            TextAnchor::MidTop,
            BANNER_STYLE,
        );
        target.blit(ImageId::ReplayButton, session.replay_button);
    }
}

fn draw_score(session: &Session, target: &mut dyn RenderTarget, width: f32) {
    let rows = [
        (ImageId::HighScoreIcon, HIGH_SCORE_ROW, session.progression.high_score()),
        (ImageId::CurrentScoreIcon, CURRENT_SCORE_ROW, session.progression.score()),
    ];
    for (icon, row, value) in rows {
        let icon_rect = Rect::new(
            width - ICON_MARGIN - ICON_SIZE,
            row,
            ICON_SIZE,
            ICON_SIZE,
        );
        target.blit(icon, icon_rect);
        target.text(
            &value.to_string(),
            Vec2::new(width - SCORE_TEXT_MARGIN, row),
            TextAnchor::TopRight,
            SCORE_STYLE,
        );
    }
}
