//! The player character: jump physics and sprite animation
//!
//! Physics advance every tick; each sprite sheet advances its frame only on
//! the ticks its [`Cadence`] selects. All cadences read one shared tick
//! counter that is never reset during a session.

use glam::Vec2;
use super::rect::Rect;
use crate::sprites::{Sheet, SpriteSet};
use crate::tuning::Tuning;

/// Which behavior drives the actor this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorMode {
    /// Standing still before the first jump
    Idle,
    /// On the ground, scrolling
    Running,
    /// Rising toward the jump ceiling
    JumpingUp,
    /// Dropping back to the ground
    Falling,
}

impl ActorMode {
    /// Sprite sheet displayed in this mode
    pub fn sheet(self) -> Sheet {
        match self {
            ActorMode::Idle => Sheet::Idle,
            ActorMode::Running => Sheet::Run,
            ActorMode::JumpingUp | ActorMode::Falling => Sheet::Jump,
        }
    }

    pub fn is_airborne(self) -> bool {
        matches!(self, ActorMode::JumpingUp | ActorMode::Falling)
    }
}

/// Tick predicate deciding when a sheet advances one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    /// Every n-th tick
    Every(u64),
    /// Ticks divisible by 2 or by 3 (four ticks out of six)
    EveryTwoOrThree,
}

impl Cadence {
    #[inline]
    pub fn fires(self, tick: u64) -> bool {
        match self {
            Cadence::Every(n) => tick % n == 0,
            Cadence::EveryTwoOrThree => tick % 2 == 0 || tick % 3 == 0,
        }
    }
}

/// Frame count and cadence of one sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animation {
    pub frame_count: usize,
    pub cadence: Cadence,
}

impl Animation {
    /// Next frame index if this tick advances the sheet
    fn step(&self, frame: usize, tick: u64) -> usize {
        if self.cadence.fires(tick) {
            (frame + 1) % self.frame_count
        } else {
            frame
        }
    }
}

/// The dino
#[derive(Debug, Clone)]
pub struct Actor {
    pub rect: Rect,
    mode: ActorMode,
    /// Current frame per sheet, indexed by [`Sheet::index`]
    frames: [usize; 3],
    animations: [Animation; 3],
    /// Vertical speed magnitude (pixels per tick); direction comes from the mode.
    /// On the ground it holds the speed the next jump launches with.
    jump_speed: f32,
    /// Tuned launch speed restored on every landing
    initial_speed: f32,
    gravity_up: f32,
    gravity_down: f32,
    /// Smallest bottom edge reachable (highest altitude)
    ceiling: f32,
    /// Bottom edge while on the ground
    ground: f32,
    tick: u64,
}

impl Actor {
    pub fn new(tuning: &Tuning, sprites: &SpriteSet) -> Self {
        let animations = [
            Animation {
                frame_count: sprites.frame_count(Sheet::Idle),
                cadence: Cadence::Every(3),
            },
            Animation {
                frame_count: sprites.frame_count(Sheet::Run),
                cadence: Cadence::Every(3),
            },
            Animation {
                frame_count: sprites.frame_count(Sheet::Jump),
                cadence: Cadence::EveryTwoOrThree,
            },
        ];

        Self {
            rect: Rect::from_bottom_left(
                tuning.actor_left,
                tuning.ground_height,
                Vec2::new(tuning.actor_width, tuning.actor_height),
            ),
            mode: ActorMode::Idle,
            frames: [0; 3],
            animations,
            jump_speed: tuning.jump_speed,
            initial_speed: tuning.jump_speed,
            gravity_up: tuning.gravity_up,
            gravity_down: tuning.gravity_down,
            ceiling: tuning.jump_ceiling(),
            ground: tuning.ground_height,
            tick: 0,
        }
    }

    pub fn mode(&self) -> ActorMode {
        self.mode
    }

    pub fn is_idle(&self) -> bool {
        self.mode == ActorMode::Idle
    }

    pub fn can_jump(&self) -> bool {
        !self.mode.is_airborne()
    }

    pub fn jump_speed(&self) -> f32 {
        self.jump_speed
    }

    pub fn initial_speed(&self) -> f32 {
        self.initial_speed
    }

    pub fn ceiling(&self) -> f32 {
        self.ceiling
    }

    pub fn ground(&self) -> f32 {
        self.ground
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Frame index of a sheet (kept even while the sheet is not displayed)
    pub fn frame(&self, sheet: Sheet) -> usize {
        self.frames[sheet.index()]
    }

    /// The sheet and frame currently on screen
    pub fn displayed_frame(&self) -> (Sheet, usize) {
        let sheet = self.mode.sheet();
        (sheet, self.frame(sheet))
    }

    /// Start a jump from the ground at the current jump speed. Returns false
    /// (and does nothing) when already airborne.
    pub fn request_jump(&mut self) -> bool {
        if !self.can_jump() {
            return false;
        }
        self.mode = ActorMode::JumpingUp;
        true
    }

    /// Add `delta` to the current vertical speed in any mode. On the ground
    /// this strengthens the next jump; in the air it speeds up the current
    /// rise or fall. The next landing restores the tuned speed.
    pub fn boost_launch(&mut self, delta: f32) {
        self.jump_speed += delta;
    }

    /// Advance physics and animation by one tick
    pub fn update(&mut self) {
        let tick = self.tick;
        match self.mode {
            ActorMode::Idle => self.advance(Sheet::Idle, tick),
            ActorMode::Running => self.advance(Sheet::Run, tick),
            ActorMode::JumpingUp => {
                self.rise();
                self.advance_airborne(tick);
            }
            ActorMode::Falling => {
                self.fall();
                self.advance_airborne(tick);
            }
        }
        self.tick += 1;
    }

    fn advance(&mut self, sheet: Sheet, tick: u64) {
        let i = sheet.index();
        self.frames[i] = self.animations[i].step(self.frames[i], tick);
    }

    fn advance_airborne(&mut self, tick: u64) {
        if self.mode.is_airborne() {
            self.advance(Sheet::Jump, tick);
        }
    }

    fn rise(&mut self) {
        let bottom = self.rect.bottom() - self.jump_speed;
        self.rect.set_bottom(bottom.max(self.ceiling));

        // Decay only by whole steps so the speed never flips sign
        if self.jump_speed >= self.gravity_up {
            self.jump_speed -= self.gravity_up;
        }

        if bottom <= self.ceiling || self.jump_speed <= 0.0 {
            self.jump_speed = 0.0;
            self.mode = ActorMode::Falling;
        }
    }

    fn fall(&mut self) {
        let bottom = self.rect.bottom() + self.jump_speed;
        self.jump_speed += self.gravity_down;

        if bottom >= self.ground {
            self.rect.set_bottom(self.ground);
            self.jump_speed = self.initial_speed;
            self.frames[Sheet::Jump.index()] = 0;
            self.frames[Sheet::Run.index()] = 0;
            self.mode = ActorMode::Running;
        } else {
            self.rect.set_bottom(bottom);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn actor() -> Actor {
        let tuning = Tuning::default();
        let sprites = SpriteSet::placeholder(&tuning);
        Actor::new(&tuning, &sprites)
    }

    #[test]
    fn test_starts_idle_on_ground() {
        let actor = actor();
        assert_eq!(actor.mode(), ActorMode::Idle);
        assert_eq!(actor.rect.bottom(), 650.0);
        assert_eq!(actor.rect.left(), 70.0);
        assert_eq!(actor.ceiling(), 360.0);
    }

    #[test]
    fn test_idle_animation_every_third_tick() {
        let mut actor = actor();
        // Ticks 0, 3, 6 advance
        let mut seen = Vec::new();
        for _ in 0..7 {
            actor.update();
            seen.push(actor.frame(Sheet::Idle));
        }
        assert_eq!(seen, vec![1, 1, 1, 2, 2, 2, 3]);
    }

    #[test]
    fn test_request_jump_only_from_ground() {
        let mut actor = actor();
        assert!(actor.request_jump());
        assert_eq!(actor.mode(), ActorMode::JumpingUp);
        assert!(!actor.request_jump());
        actor.update();
        assert!(!actor.request_jump());
        assert_eq!(actor.mode(), ActorMode::JumpingUp);
    }

    #[test]
    fn test_jump_trajectory_first_ticks() {
        let mut actor = actor();
        actor.request_jump();
        actor.update();
        assert_eq!(actor.rect.bottom(), 600.0);
        assert_eq!(actor.jump_speed(), 46.0);
        actor.update();
        assert_eq!(actor.rect.bottom(), 554.0);
        assert_eq!(actor.jump_speed(), 42.0);
    }

    #[test]
    fn test_reaching_ceiling_exactly_switches_same_tick() {
        let mut actor = actor();
        actor.request_jump();
        // Place the actor so this tick's rise lands exactly on the ceiling
        let ceiling = actor.ceiling();
        let speed = actor.jump_speed();
        actor.rect.set_bottom(ceiling + speed);
        actor.update();
        assert_eq!(actor.rect.bottom(), ceiling);
        assert_eq!(actor.mode(), ActorMode::Falling);
        assert_eq!(actor.jump_speed(), 0.0);
    }

    #[test]
    fn test_full_jump_lands_running() {
        let mut actor = actor();
        actor.request_jump();
        let mut ticks = 0;
        let mut saw_falling = false;
        while actor.mode() != ActorMode::Running {
            actor.update();
            saw_falling |= actor.mode() == ActorMode::Falling;
            ticks += 1;
            assert!(ticks < 200, "jump never landed");
        }
        assert!(saw_falling);
        assert_eq!(actor.rect.bottom(), actor.ground());
        assert_eq!(actor.jump_speed(), actor.initial_speed());
        assert_eq!(actor.frame(Sheet::Jump), 0);
        assert_eq!(actor.frame(Sheet::Run), 0);
    }

    #[test]
    fn test_airborne_cadence() {
        let mut actor = actor();
        actor.request_jump();
        // Ticks 0..6: advances on 0, 2, 3, 4
        for _ in 0..6 {
            actor.update();
        }
        assert_eq!(actor.frame(Sheet::Jump), 4);
    }

    fn land(actor: &mut Actor) {
        let mut ticks = 0;
        while actor.mode().is_airborne() {
            actor.update();
            ticks += 1;
            assert!(ticks < 200, "jump never landed");
        }
    }

    #[test]
    fn test_ground_boost_lasts_one_jump() {
        let mut actor = actor();
        actor.request_jump();
        land(&mut actor);
        assert_eq!(actor.mode(), ActorMode::Running);

        actor.boost_launch(5.0);
        assert!(actor.request_jump());
        assert_eq!(actor.jump_speed(), 55.0);
        land(&mut actor);
        assert_eq!(actor.jump_speed(), 50.0);

        assert!(actor.request_jump());
        assert_eq!(actor.jump_speed(), 50.0);
        actor.update();
        assert_eq!(actor.rect.bottom(), 600.0);
    }

    #[test]
    fn test_boost_mid_rise_speeds_up_current_jump() {
        let mut actor = actor();
        actor.request_jump();
        actor.update();
        assert_eq!(actor.jump_speed(), 46.0);
        actor.boost_launch(5.0);
        assert_eq!(actor.jump_speed(), 51.0);
        actor.update();
        assert_eq!(actor.rect.bottom(), 549.0);

        land(&mut actor);
        assert_eq!(actor.jump_speed(), actor.initial_speed());
    }

    #[test]
    fn test_weak_jump_still_falls() {
        let tuning = Tuning {
            jump_speed: 8.0,
            ..Default::default()
        };
        let sprites = SpriteSet::placeholder(&tuning);
        let mut actor = Actor::new(&tuning, &sprites);
        actor.request_jump();
        // 8 -> 4 -> 0: apex reached below the ceiling
        actor.update();
        actor.update();
        assert_eq!(actor.mode(), ActorMode::Falling);
        assert_eq!(actor.rect.bottom(), 638.0);
    }

    proptest! {
        #[test]
        fn altitude_stays_between_ceiling_and_ground(
            jumps in proptest::collection::vec(any::<bool>(), 1..400),
            boosts in proptest::collection::vec(any::<bool>(), 1..400),
        ) {
            let mut actor = actor();
            for (jump, boost) in jumps.into_iter().zip(boosts) {
                if jump {
                    actor.request_jump();
                }
                if boost {
                    actor.boost_launch(5.0);
                }
                actor.update();
                let bottom = actor.rect.bottom();
                prop_assert!(bottom >= actor.ceiling());
                prop_assert!(bottom <= actor.ground());
                for sheet in Sheet::ALL {
                    prop_assert!(actor.frame(sheet) < actor.animations[sheet.index()].frame_count);
                }
                if !actor.mode().is_airborne() {
                    prop_assert_eq!(bottom, actor.ground());
                }
            }
        }
    }
}
