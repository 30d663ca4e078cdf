// Copyright 2026 the Jellysheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use jellysheet_silhouette::SilhouetteParams;

/// Tuning constants for a [`SheetController`](crate::SheetController).
///
/// Lengths are in container units, durations in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetConfig {
    /// Floor for randomized resize heights.
    pub min_height: f64,
    /// Height the sheet is first presented at.
    pub initial_height: f64,
    /// Curvature the top edge rests at between interactions.
    pub neutral_curvature: f64,
    /// Duration of the edge relaxing back out when the finger lifts.
    pub release_duration: f64,
    /// Duration of the geometry animation for snap-back and resize.
    pub snap_duration: f64,
    /// Delay before a resize's overshoot eases back toward
    /// [`neutral_curvature`](Self::neutral_curvature), timed to roughly the
    /// midpoint of the geometry animation.
    pub settle_delay: f64,
    /// Duration of that ease-back.
    pub settle_duration: f64,
    /// Divisor mapping a resize's height delta to its initial edge
    /// overshoot; larger height changes ring harder.
    pub overshoot_damping: f64,
    /// Outline generator constants.
    pub silhouette: SilhouetteParams,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            min_height: 200.0,
            initial_height: 300.0,
            neutral_curvature: 20.0,
            release_duration: 0.2,
            snap_duration: 0.5,
            settle_delay: 0.25,
            settle_duration: 0.3,
            overshoot_damping: 8.0,
            silhouette: SilhouetteParams::default(),
        }
    }
}
