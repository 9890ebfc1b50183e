// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Platform gesture constants consumed by the swipe container.
///
/// All distances are in logical pixels and velocities in logical pixels per
/// second. Hosts should pass their platform's values; the defaults match
/// common touch platforms at baseline density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Minimum horizontal travel before a touch sequence can become a swipe.
    pub touch_slop: f64,
    /// Minimum release speed that overrides the half-width position rule.
    pub min_fling_velocity: f64,
    /// Release speeds are clamped to this magnitude before resolution.
    pub max_fling_velocity: f64,
}

impl SwipeConfig {
    /// Default touch slop.
    pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;
    /// Default minimum fling velocity.
    pub const DEFAULT_MIN_FLING_VELOCITY: f64 = 50.0;
    /// Default maximum fling velocity.
    pub const DEFAULT_MAX_FLING_VELOCITY: f64 = 8_000.0;

    /// Returns a copy with the given touch slop.
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Returns a copy with the given minimum fling velocity.
    #[must_use]
    pub fn with_min_fling_velocity(mut self, velocity: f64) -> Self {
        self.min_fling_velocity = velocity;
        self
    }

    /// Returns a copy with the given maximum fling velocity.
    #[must_use]
    pub fn with_max_fling_velocity(mut self, velocity: f64) -> Self {
        self.max_fling_velocity = velocity;
        self
    }

    /// Clamps a release velocity into `[-max_fling_velocity, max_fling_velocity]`.
    ///
    /// A non-finite or non-positive maximum disables clamping.
    #[must_use]
    pub fn clamp_velocity(&self, velocity: f64) -> f64 {
        let max = self.max_fling_velocity;
        if max.is_finite() && max > 0.0 {
            velocity.clamp(-max, max)
        } else {
            velocity
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            touch_slop: Self::DEFAULT_TOUCH_SLOP,
            min_fling_velocity: Self::DEFAULT_MIN_FLING_VELOCITY,
            max_fling_velocity: Self::DEFAULT_MAX_FLING_VELOCITY,
        }
    }
}
