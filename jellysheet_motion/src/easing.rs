// Copyright 2026 the Jellysheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Easing curves for timed interpolations.
///
/// All curves map a linear fraction in `[0, 1]` to an eased fraction in
/// `[0, 1]`, fixing the endpoints. Cubic polynomial forms are used
/// throughout, so no transcendental functions are required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing; the fraction passes through unchanged.
    Linear,
    /// Accelerate from rest (cubic).
    EaseIn,
    /// Decelerate into the target (cubic).
    EaseOut,
    /// Accelerate, then decelerate (cubic on both halves).
    #[default]
    EaseInOut,
}

impl Easing {
    /// Applies the curve to a linear fraction.
    ///
    /// `t` is clamped to `[0, 1]` before the curve is evaluated.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}
