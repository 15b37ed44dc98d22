//! Obstacle lane
//!
//! A fixed ring of obstacle slots scrolls left across the lane. A slot that
//! leaves the screen is recycled behind the slot preceding it in the ring,
//! with a random gap and a random cactus variant.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use super::rect::Rect;
use crate::tuning::Tuning;

/// Number of obstacle slots on the lane
pub const SLOT_COUNT: usize = 2;

/// One obstacle on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
    /// Index into the obstacle sprite variants
    pub variant: usize,
}

/// Record of a slot being recycled during [`ObstaclePool::update`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Respawn {
    pub slot: usize,
    /// Right edge of the slot the gap was measured from
    pub reference_right: f32,
    /// Random gap drawn from the current range
    pub gap: i32,
    /// Final left edge after clamping to the screen's right edge
    pub left: f32,
    pub variant: usize,
}

/// The obstacle slots plus the state that recycles them
#[derive(Debug, Clone)]
pub struct ObstaclePool {
    slots: [Obstacle; SLOT_COUNT],
    speed: f32,
    range_low: i32,
    range_high: i32,
    screen_width: f32,
    variant_count: usize,
    rng: Pcg32,
}

impl ObstaclePool {
    pub fn new(tuning: &Tuning, variant_count: usize, seed: u64) -> Self {
        let size = Vec2::splat(tuning.obstacle_size);
        let baseline = tuning.obstacle_baseline();

        let mut slots = [Obstacle {
            rect: Rect::from_bottom_left(tuning.screen_width, baseline, size),
            variant: 0,
        }; SLOT_COUNT];
        for i in 1..SLOT_COUNT {
            let left = slots[i - 1].rect.right() + tuning.screen_width / 2.0;
            slots[i] = Obstacle {
                rect: Rect::from_bottom_left(left, baseline, size),
                variant: i % variant_count.max(1),
            };
        }

        Self {
            slots,
            speed: tuning.start_speed,
            range_low: tuning.gap_low,
            range_high: tuning.gap_high,
            screen_width: tuning.screen_width,
            variant_count: variant_count.max(1),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Read-only copy of every slot, for drawing and collision tests
    pub fn snapshot(&self) -> [Obstacle; SLOT_COUNT] {
        self.slots
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Current inclusive gap range
    pub fn gap_range(&self) -> (i32, i32) {
        (self.range_low, self.range_high)
    }

    /// Set the scroll speed and shift the gap range one pixel wider apart
    pub fn update_speed(&mut self, speed: f32) {
        self.speed = speed;
        self.range_low += 1;
        self.range_high += 1;
    }

    /// Scroll every slot, then recycle the ones that left the screen in
    /// slot order. Returns what was respawned.
    pub fn update(&mut self) -> [Option<Respawn>; SLOT_COUNT] {
        for slot in &mut self.slots {
            slot.rect.pos.x -= self.speed;
        }

        let mut respawns = [None; SLOT_COUNT];
        for i in 0..SLOT_COUNT {
            if self.slots[i].rect.right() < 0.0 {
                respawns[i] = Some(self.respawn(i));
            }
        }
        respawns
    }

    fn respawn(&mut self, i: usize) -> Respawn {
        let reference = (i + SLOT_COUNT - 1) % SLOT_COUNT;
        let reference_right = self.slots[reference].rect.right();
        let gap = self.rng.random_range(self.range_low..=self.range_high);

        let candidate = reference_right + gap as f32;
        let left = if candidate > self.screen_width {
            candidate
        } else {
            self.screen_width
        };
        let variant = self.rng.random_range(0..self.variant_count);

        let slot = &mut self.slots[i];
        slot.rect.set_left(left);
        slot.variant = variant;

        Respawn {
            slot: i,
            reference_right,
            gap,
            left,
            variant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool(seed: u64) -> ObstaclePool {
        ObstaclePool::new(&Tuning::default(), 5, seed)
    }

    #[test]
    fn test_initial_layout() {
        let pool = pool(1);
        let [a, b] = pool.snapshot();
        assert_eq!(a.rect.left(), 1280.0);
        assert_eq!(a.rect.bottom(), 639.0);
        assert_eq!(a.variant, 0);
        assert_eq!(b.rect.left(), 1280.0 + 160.0 + 640.0);
        assert_eq!(b.variant, 1);
    }

    #[test]
    fn test_respawn_relative_to_other_slot() {
        let mut pool = pool(7);
        // Slot 0 right edge ends at -5 after this tick's 15 px move
        pool.slots[0].rect.set_left(-160.0 + 10.0);
        // Slot 1 right edge ends at 900
        pool.slots[1].rect.set_left(900.0 - 160.0 + 15.0);

        let respawns = pool.update();
        let respawn = respawns[0].expect("slot 0 should respawn");
        assert!(respawns[1].is_none());
        assert_eq!(respawn.reference_right, 900.0);
        assert!((240..=720).contains(&respawn.gap));

        let candidate = 900.0 + respawn.gap as f32;
        let expected = if candidate > 1280.0 { candidate } else { 1280.0 };
        assert_eq!(pool.snapshot()[0].rect.left(), expected);
        assert!(pool.snapshot()[0].variant < 5);
    }

    #[test]
    fn test_both_slots_respawn_in_order() {
        let mut pool = pool(3);
        pool.slots[0].rect.set_left(-170.0);
        pool.slots[1].rect.set_left(-165.0);
        let respawns = pool.update();
        let first = respawns[0].unwrap();
        let second = respawns[1].unwrap();
        // Slot 1 measures from slot 0's freshly respawned position
        assert_eq!(second.reference_right, first.left + 160.0);
        let [a, b] = pool.snapshot();
        assert!(b.rect.left() >= a.rect.right() + 240.0);
    }

    #[test]
    fn test_update_speed_widens_range() {
        let mut pool = pool(1);
        pool.update_speed(15.5);
        pool.update_speed(16.0);
        assert_eq!(pool.speed(), 16.0);
        assert_eq!(pool.gap_range(), (242, 722));
    }

    #[test]
    fn test_same_seed_same_lane() {
        let mut a = pool(42);
        let mut b = pool(42);
        for _ in 0..500 {
            assert_eq!(a.update(), b.update());
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    proptest! {
        #[test]
        fn slots_never_overlap_and_gaps_stay_in_range(
            seed in any::<u64>(),
            ramps in proptest::collection::vec(any::<bool>(), 1..1500),
        ) {
            let mut pool = pool(seed);
            let mut speed = pool.speed();
            let mut last_range = pool.gap_range();
            for ramp in ramps {
                if ramp && speed < 40.0 {
                    speed += 0.5;
                    pool.update_speed(speed);
                }
                let range = pool.gap_range();
                prop_assert!(range.0 >= last_range.0 && range.1 >= last_range.1);
                last_range = range;

                for respawn in pool.update().into_iter().flatten() {
                    prop_assert!(respawn.gap >= range.0 && respawn.gap <= range.1);
                    prop_assert!(respawn.left >= 1280.0);
                    prop_assert!(respawn.left >= respawn.reference_right + range.0 as f32
                        || respawn.left == 1280.0);
                }
                let [a, b] = pool.snapshot();
                prop_assert!(!a.rect.overlaps(&b.rect));
                prop_assert!(a.rect.right() >= 0.0 && b.rect.right() >= 0.0);
            }
        }
    }
}
