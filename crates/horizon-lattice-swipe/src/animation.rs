//! Settle animations for swiped rows.
//!
//! When a swipe gesture is released the row does not jump to its final
//! offset; it settles there over [`SwipeConfig::animation_duration`]. The
//! animation is driven by the host's frame clock through
//! [`RecoverAnimation::advance`], which keeps it deterministic and free of
//! any timer of its own.
//!
//! [`SwipeConfig::animation_duration`]: crate::SwipeConfig::animation_duration

use std::time::Duration;

/// Easing curves available for settle animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (starts fast, decelerates).
    #[default]
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Cubic ease-out (more pronounced than quadratic).
    EaseOutCubic,
}

/// Apply an easing function to a progress value.
///
/// `t` is clamped to `0.0..=1.0`.
///
/// # Example
///
/// ```
/// use horizon_lattice_swipe::animation::{ease, Easing};
///
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
    }
}

/// Interpolate between `start` and `end` using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

/// Where a settling row ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationTarget {
    /// The row settles with its action buttons revealed.
    Open,
    /// The row settles back to zero offset.
    Closed,
}

/// Offset animation for one row, from the release offset to its target.
#[derive(Debug, Clone)]
pub struct RecoverAnimation {
    target: AnimationTarget,
    start_offset: f32,
    target_offset: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl RecoverAnimation {
    /// Creates an animation from `start_offset` to `target_offset`.
    pub fn new(
        target: AnimationTarget,
        start_offset: f32,
        target_offset: f32,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            target,
            start_offset,
            target_offset,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Where the row ends up.
    #[inline]
    pub fn target(&self) -> AnimationTarget {
        self.target
    }

    /// The offset the row has once the animation finishes.
    #[inline]
    pub fn target_offset(&self) -> f32 {
        self.target_offset
    }

    /// Raw progress from 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the animation reached its target.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// The current offset.
    pub fn offset(&self) -> f32 {
        if self.is_finished() {
            self.target_offset
        } else {
            lerp_eased(
                self.easing,
                self.start_offset,
                self.target_offset,
                self.progress(),
            )
        }
    }

    /// Moves the animation forward by `dt` and returns the new offset.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.offset()
    }

    /// Jumps straight to the end of the animation.
    pub fn finish(&mut self) -> f32 {
        self.elapsed = self.duration;
        self.target_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_boundaries() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EaseOutCubic,
        ] {
            assert_eq!(ease(easing, 0.0), 0.0);
            assert_eq!(ease(easing, 1.0), 1.0);
        }
        assert_eq!(ease(Easing::EaseInOut, 0.5), 0.5);
    }

    #[test]
    fn test_ease_clamps() {
        assert_eq!(ease(Easing::Linear, -0.5), 0.0);
        assert_eq!(ease(Easing::Linear, 1.5), 1.0);
    }

    #[test]
    fn test_animation_progress() {
        let mut anim = RecoverAnimation::new(
            AnimationTarget::Closed,
            100.0,
            0.0,
            Duration::from_millis(200),
            Easing::Linear,
        );
        assert_eq!(anim.offset(), 100.0);
        assert_eq!(anim.advance(Duration::from_millis(100)), 50.0);
        assert!(!anim.is_finished());
        assert_eq!(anim.advance(Duration::from_millis(500)), 0.0);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_zero_duration_is_finished() {
        let anim = RecoverAnimation::new(
            AnimationTarget::Open,
            30.0,
            160.0,
            Duration::ZERO,
            Easing::EaseOut,
        );
        assert!(anim.is_finished());
        assert_eq!(anim.offset(), 160.0);
    }

    #[test]
    fn test_finish_jumps_to_target() {
        let mut anim = RecoverAnimation::new(
            AnimationTarget::Open,
            10.0,
            80.0,
            Duration::from_secs(1),
            Easing::EaseOutCubic,
        );
        assert_eq!(anim.finish(), 80.0);
        assert!(anim.is_finished());
    }
}
