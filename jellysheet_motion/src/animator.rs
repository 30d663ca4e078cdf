// Copyright 2026 the Jellysheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Size};

use jellysheet_silhouette::{Deformation, SilhouetteParams, silhouette};

use crate::{Easing, Tween};

/// Drives a sheet's clip outline through timed deformation transitions.
///
/// The animator owns the single mutable "current outline" and at most one
/// active interpolation. Starting a new interpolation supersedes any that is
/// in flight; there is no queue. The target deformation recorded at start is
/// authoritative: completing, superseding, or force-finishing always lands
/// the outline on exactly the generator output for that target.
#[derive(Clone, Debug)]
pub struct SilhouetteAnimator {
    params: SilhouetteParams,
    current: Option<BezPath>,
    active: Option<Interpolation>,
}

#[derive(Clone, Debug)]
struct Interpolation {
    size: Size,
    from: Deformation,
    to: Deformation,
    tween: Tween,
}

impl SilhouetteAnimator {
    /// Creates an animator with no current outline.
    #[must_use]
    pub fn new(params: SilhouetteParams) -> Self {
        Self {
            params,
            current: None,
            active: None,
        }
    }

    /// The generator parameters outlines are built with.
    #[must_use]
    pub fn params(&self) -> &SilhouetteParams {
        &self.params
    }

    /// The current outline, if one has been set.
    #[must_use]
    pub fn current(&self) -> Option<&BezPath> {
        self.current.as_ref()
    }

    /// Returns `true` while an interpolation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// The authoritative terminal deformation of the active interpolation.
    #[must_use]
    pub fn target(&self) -> Option<Deformation> {
        self.active.as_ref().map(|a| a.to)
    }

    /// Replaces the outline immediately, cancelling any active interpolation.
    pub fn set(&mut self, size: Size, deformation: Option<Deformation>) {
        self.active = None;
        self.current = Some(silhouette(size, deformation, &self.params));
    }

    /// Starts a timed interpolation from `from` to `to`.
    ///
    /// The outline is replaced with the `from` silhouette immediately so
    /// there is no visible jump, then [`tick`](Self::tick) drives it toward
    /// `to`. A call while a previous interpolation is still in flight
    /// supersedes it (last write wins). On first use, when no outline exists
    /// yet, the outline jumps straight to the `to` silhouette with no visible
    /// animation.
    pub fn animate(
        &mut self,
        size: Size,
        from: Deformation,
        to: Deformation,
        duration: f64,
        easing: Easing,
        now: f64,
    ) {
        if self.current.is_none() {
            self.set(size, Some(to));
            return;
        }
        self.current = Some(silhouette(size, Some(from), &self.params));
        self.active = Some(Interpolation {
            size,
            from,
            to,
            tween: Tween::new(now, duration, easing),
        });
    }

    /// Advances the active interpolation to timestamp `now`.
    ///
    /// On completion the outline holds exactly the target silhouette.
    /// Returns `true` if the outline changed.
    pub fn tick(&mut self, now: f64) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        if active.tween.is_finished(now) {
            self.current = Some(silhouette(active.size, Some(active.to), &self.params));
        } else {
            let t = active.tween.progress(now);
            let d = active.from.lerp(active.to, t, self.params.edge_height);
            self.current = Some(silhouette(active.size, Some(d), &self.params));
            self.active = Some(active);
        }
        true
    }

    /// Force-completes the active interpolation, if any, landing the outline
    /// on the target silhouette.
    pub fn finish(&mut self) {
        if let Some(active) = self.active.take() {
            self.current = Some(silhouette(active.size, Some(active.to), &self.params));
        }
    }
}
