//! Pixel-exact collision between the actor and the obstacle lane
//!
//! Sprites carry transparent padding, so bounding boxes would report hits
//! the player never sees. Instead each displayed frame is reduced to an
//! opacity [`Mask`] and the masks are overlapped at the sprites' relative
//! screen offset.

use std::collections::HashMap;
use std::sync::Arc;

use super::actor::Actor;
use super::mask::Mask;
use super::obstacles::Obstacle;
use crate::sprites::{Sheet, SpriteSet};

/// Cache key for a displayable frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKey {
    Actor(Sheet, usize),
    Obstacle(usize),
}

/// Builds masks on first use and keeps them for the rest of the session
#[derive(Debug, Clone)]
pub struct CollisionDetector {
    sprites: Arc<SpriteSet>,
    masks: HashMap<FrameKey, Mask>,
}

impl CollisionDetector {
    pub fn new(sprites: Arc<SpriteSet>) -> Self {
        Self {
            sprites,
            masks: HashMap::new(),
        }
    }

    /// Number of masks built so far
    pub fn cached_masks(&self) -> usize {
        self.masks.len()
    }

    fn build(&mut self, key: FrameKey) {
        if self.masks.contains_key(&key) {
            return;
        }
        let image = match key {
            FrameKey::Actor(sheet, frame) => &self.sprites.sheet(sheet)[frame],
            FrameKey::Obstacle(variant) => &self.sprites.obstacles()[variant],
        };
        self.masks.insert(key, Mask::from_image(image));
    }

    /// True if the actor's displayed frame shares a solid pixel with any obstacle
    pub fn check(&mut self, actor: &Actor, obstacles: &[Obstacle]) -> bool {
        let (sheet, frame) = actor.displayed_frame();
        let actor_key = FrameKey::Actor(sheet, frame);
        self.build(actor_key);
        for obstacle in obstacles {
            self.build(FrameKey::Obstacle(obstacle.variant));
        }

        let actor_mask = &self.masks[&actor_key];
        let origin = actor.rect.pixel_origin();
        obstacles.iter().any(|obstacle| {
            let offset = obstacle.rect.pixel_origin() - origin;
            actor_mask.overlaps(&self.masks[&FrameKey::Obstacle(obstacle.variant)], offset)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::ActorMode;
    use crate::sim::rect::Rect;
    use crate::sprites::Image;
    use crate::tuning::Tuning;
    use glam::Vec2;

    /// 4x4 frame with a single solid pixel
    fn dot(x: usize, y: usize) -> Image {
        let mut pixels = vec![0u8; 4 * 4 * 4];
        pixels[(y * 4 + x) * 4 + 3] = 255;
        Image::from_rgba("dot", 4, 4, pixels).unwrap()
    }

    fn tiny_world(actor_dot: (usize, usize), obstacle_dot: (usize, usize)) -> (Actor, CollisionDetector) {
        let tuning = Tuning {
            actor_width: 4.0,
            actor_height: 4.0,
            actor_left: 10.0,
            ..Default::default()
        };
        let frame = dot(actor_dot.0, actor_dot.1);
        let sprites = SpriteSet::new(
            vec![frame.clone()],
            vec![frame.clone()],
            vec![frame],
            vec![dot(obstacle_dot.0, obstacle_dot.1)],
        )
        .unwrap();
        let actor = Actor::new(&tuning, &sprites);
        (actor, CollisionDetector::new(Arc::new(sprites)))
    }

    fn obstacle_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            rect: Rect {
                pos: Vec2::new(x, y),
                size: Vec2::splat(4.0),
            },
            variant: 0,
        }
    }

    #[test]
    fn test_padding_overlap_is_not_a_hit() {
        // Actor solid at (0,0), obstacle solid at (3,3); boxes overlap by 1 px
        let (actor, mut detector) = tiny_world((0, 0), (3, 3));
        let origin = actor.rect.pos;
        let obstacle = obstacle_at(origin.x + 1.0, origin.y + 1.0);
        assert!(actor.rect.overlaps(&obstacle.rect));
        assert!(!detector.check(&actor, &[obstacle]));
    }

    #[test]
    fn test_shared_pixel_is_a_hit() {
        let (actor, mut detector) = tiny_world((2, 2), (0, 0));
        let origin = actor.rect.pos;
        let far = obstacle_at(origin.x + 200.0, origin.y);
        let near = obstacle_at(origin.x + 2.0, origin.y + 2.0);
        assert!(!detector.check(&actor, &[far]));
        assert!(detector.check(&actor, &[far, near]));
    }

    #[test]
    fn test_masks_are_cached() {
        let tuning = Tuning::default();
        let sprites = Arc::new(SpriteSet::placeholder(&tuning));
        let mut actor = Actor::new(&tuning, &sprites);
        let mut detector = CollisionDetector::new(sprites);
        let lane = [obstacle_at(2000.0, 0.0), obstacle_at(2400.0, 0.0)];

        detector.check(&actor, &lane);
        assert_eq!(detector.cached_masks(), 2);
        detector.check(&actor, &lane);
        assert_eq!(detector.cached_masks(), 2);

        actor.request_jump();
        assert_eq!(actor.mode(), ActorMode::JumpingUp);
        detector.check(&actor, &lane);
        assert_eq!(detector.cached_masks(), 3);
    }

    #[test]
    fn test_placeholder_cactus_hits_grounded_dino() {
        let tuning = Tuning::default();
        let sprites = Arc::new(SpriteSet::placeholder(&tuning));
        let actor = Actor::new(&tuning, &sprites);
        let mut detector = CollisionDetector::new(sprites);

        let size = Vec2::splat(tuning.obstacle_size);
        let on_top = Obstacle {
            rect: Rect::from_bottom_left(actor.rect.left() + 40.0, tuning.obstacle_baseline(), size),
            variant: 0,
        };
        let ahead = Obstacle {
            rect: Rect::from_bottom_left(actor.rect.right() + 5.0, tuning.obstacle_baseline(), size),
            variant: 1,
        };
        assert!(detector.check(&actor, &[on_top]));
        assert!(!detector.check(&actor, &[ahead]));
    }
}
