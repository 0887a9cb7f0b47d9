//! Spin rotation state machine
//!
//! Owns the wheel's single accumulating rotation value (degrees). A spin
//! computes a target strictly ahead of the current rotation that parks the
//! winning sector's center under the pointer after a fixed number of extra
//! revolutions, then eases toward it over a fixed duration. The rotation is
//! never reset, so consecutive spins compose from the true resting position.

use rand::Rng;

use super::sector::{sector_center_angle, sector_width};
use crate::consts::{FULL_EXTRA_TURNS, JITTER_FRACTION, POINTER_ANGLE, SPIN_DURATION};
use crate::normalize_degrees;

/// Current phase of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    /// Resting at whatever rotation the last spin settled on
    Idle,
    /// A transition toward a fixed target rotation is in flight
    Spinning,
}

/// Emitted by `tick` exactly once per completed spin. Carries no payload;
/// the winner was decided before the spin started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinEvent {
    Completed,
}

/// In-flight transition bookkeeping
#[derive(Debug, Clone, Copy)]
struct Transition {
    start: f32,
    target: f32,
    elapsed: f32,
    duration: f32,
}

/// Rotation state machine for the wheel
#[derive(Debug, Clone, Default)]
pub struct SpinAnimator {
    /// Accumulated rotation in degrees, monotonically non-decreasing
    rotation: f32,
    transition: Option<Transition>,
}

impl SpinAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rotation in degrees. The renderer reads this every frame.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn phase(&self) -> SpinPhase {
        if self.transition.is_some() {
            SpinPhase::Spinning
        } else {
            SpinPhase::Idle
        }
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.transition.is_some()
    }

    /// Rotation (mod 360) that parks sector `winning_index`'s center exactly
    /// under the pointer, before jitter.
    pub fn landing_angle(winning_index: usize, sector_count: usize) -> f32 {
        normalize_degrees(POINTER_ANGLE - sector_center_angle(winning_index, sector_count))
    }

    /// Begin a spin that lands `winning_index` under the pointer.
    ///
    /// Geometry is recomputed from `sector_count` on every call, so wheel
    /// edits between spins take effect immediately. A call while a spin is
    /// already in flight is a no-op. An index outside `[0, sector_count)` is
    /// a caller bug and panics.
    pub fn spin<R: Rng + ?Sized>(
        &mut self,
        winning_index: usize,
        sector_count: usize,
        rng: &mut R,
    ) {
        assert!(sector_count > 0, "spin on a wheel with no sectors");
        assert!(
            winning_index < sector_count,
            "winning index {winning_index} out of range for {sector_count} sectors"
        );

        if self.transition.is_some() {
            return;
        }

        let width = sector_width(sector_count);
        let base_delta = Self::landing_angle(winning_index, sector_count);

        let jitter_bound = width * JITTER_FRACTION;
        let jitter = rng.random_range(-jitter_bound..=jitter_bound);

        let current_mod = self.rotation.rem_euclid(360.0);
        let forward = normalize_degrees(base_delta - current_mod);

        let target = self.rotation + FULL_EXTRA_TURNS as f32 * 360.0 + forward + jitter;

        log::debug!(
            "spin: sector {winning_index}/{sector_count}, {:.1} deg -> {:.1} deg",
            self.rotation,
            target
        );

        self.transition = Some(Transition {
            start: self.rotation,
            target,
            elapsed: 0.0,
            duration: SPIN_DURATION,
        });
    }

    /// Advance the in-flight transition by `dt` seconds.
    ///
    /// Rotation never moves backward during a transition. Returns the
    /// completion event exactly once, on the tick the transition finishes;
    /// the rotation then rests at the exact target until the next spin.
    pub fn tick(&mut self, dt: f32) -> Option<SpinEvent> {
        let transition = self.transition.as_mut()?;
        transition.elapsed += dt;

        if transition.elapsed >= transition.duration {
            self.rotation = transition.target;
            self.transition = None;
            return Some(SpinEvent::Completed);
        }

        let progress = ease_out_cubic(transition.elapsed / transition.duration);
        self.rotation = transition.start + (transition.target - transition.start) * progress;
        None
    }
}

/// Starts fast and decelerates; monotonic on [0, 1]
#[inline]
fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Tick until the completion event fires, asserting it eventually does
    fn run_to_completion(animator: &mut SpinAnimator) {
        for _ in 0..100_000 {
            if animator.tick(SIM_DT).is_some() {
                return;
            }
        }
        panic!("spin never completed");
    }

    /// Shortest angular distance between two angles in degrees
    fn angular_distance(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_landing_matches_winning_index() {
        let mut rng = Pcg32::seed_from_u64(7);
        for n in [1usize, 2, 4, 7, 8, 12] {
            for k in 0..n {
                let mut animator = SpinAnimator::new();
                animator.spin(k, n, &mut rng);
                run_to_completion(&mut animator);

                let landed = animator.rotation().rem_euclid(360.0);
                let expected = SpinAnimator::landing_angle(k, n);
                let bound = sector_width(n) * JITTER_FRACTION + 0.01;
                assert!(
                    angular_distance(landed, expected) <= bound,
                    "sector {k}/{n}: landed {landed}, expected near {expected}"
                );
            }
        }
    }

    #[test]
    fn test_continuation_from_resting_position() {
        // 4-sector wheel resting at 10 degrees: sector 2's center (225) must
        // end under the pointer (270) after at least one full revolution
        let mut rng = Pcg32::seed_from_u64(99);
        let mut animator = SpinAnimator::new();
        animator.rotation = 10.0;
        animator.spin(2, 4, &mut rng);
        run_to_completion(&mut animator);

        let landed = animator.rotation().rem_euclid(360.0);
        assert!(angular_distance(landed, 45.0) <= 90.0 * JITTER_FRACTION + 0.01);
        assert!(animator.rotation() > 370.0);
    }

    #[test]
    fn test_rotation_strictly_increases_across_spins() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut animator = SpinAnimator::new();
        let mut last = animator.rotation();
        for k in [0usize, 3, 3, 1, 7] {
            animator.spin(k, 8, &mut rng);
            run_to_completion(&mut animator);
            assert!(animator.rotation() > last);
            last = animator.rotation();
        }
    }

    #[test]
    fn test_rotation_never_decreases_within_transition() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut animator = SpinAnimator::new();
        animator.spin(5, 7, &mut rng);

        let mut prev = animator.rotation();
        loop {
            let done = animator.tick(SIM_DT).is_some();
            assert!(animator.rotation() >= prev);
            prev = animator.rotation();
            if done {
                break;
            }
        }
    }

    #[test]
    fn test_reentrant_spin_is_noop() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut animator = SpinAnimator::new();
        animator.spin(1, 6, &mut rng);
        let target = animator.transition.unwrap().target;

        // Mid-flight spin requests must not touch the in-flight target
        animator.tick(SIM_DT);
        animator.spin(4, 6, &mut rng);
        assert!(animator.is_spinning());
        assert_eq!(animator.transition.unwrap().target, target);

        run_to_completion(&mut animator);
        assert_eq!(animator.rotation(), target);
    }

    #[test]
    fn test_completion_event_fires_once() {
        let mut rng = Pcg32::seed_from_u64(13);
        let mut animator = SpinAnimator::new();
        animator.spin(0, 3, &mut rng);
        run_to_completion(&mut animator);

        let resting = animator.rotation();
        assert_eq!(animator.phase(), SpinPhase::Idle);
        for _ in 0..100 {
            assert!(animator.tick(SIM_DT).is_none());
        }
        assert_eq!(animator.rotation(), resting);
    }

    #[test]
    fn test_geometry_not_cached_across_wheel_edits() {
        let mut rng = Pcg32::seed_from_u64(17);
        let mut animator = SpinAnimator::new();
        animator.spin(3, 8, &mut rng);
        run_to_completion(&mut animator);

        // Wheel shrunk to 3 sectors between spins; next landing must use the
        // new slice width
        animator.spin(1, 3, &mut rng);
        run_to_completion(&mut animator);

        let landed = animator.rotation().rem_euclid(360.0);
        let expected = SpinAnimator::landing_angle(1, 3);
        let bound = sector_width(3) * JITTER_FRACTION + 0.01;
        assert!(angular_distance(landed, expected) <= bound);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_index_panics() {
        let mut rng = Pcg32::seed_from_u64(0);
        SpinAnimator::new().spin(5, 5, &mut rng);
    }

    #[test]
    #[should_panic(expected = "no sectors")]
    fn test_zero_sector_wheel_panics() {
        let mut rng = Pcg32::seed_from_u64(0);
        SpinAnimator::new().spin(0, 0, &mut rng);
    }

    proptest! {
        #[test]
        fn prop_spins_land_within_jitter_bound(
            n in 1usize..16,
            seed in any::<u64>(),
            spins in 1usize..5,
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut animator = SpinAnimator::new();

            for _ in 0..spins {
                let k = rng.random_range(0..n);
                let before = animator.rotation();
                animator.spin(k, n, &mut rng);

                let mut prev = animator.rotation();
                loop {
                    let done = animator.tick(SIM_DT).is_some();
                    prop_assert!(animator.rotation() >= prev);
                    prev = animator.rotation();
                    if done {
                        break;
                    }
                }

                prop_assert!(animator.rotation() > before);
                let landed = animator.rotation().rem_euclid(360.0);
                let expected = SpinAnimator::landing_angle(k, n);
                let bound = sector_width(n) * JITTER_FRACTION + 0.01;
                prop_assert!(angular_distance(landed, expected) <= bound);
            }
        }
    }
}
