// Copyright 2026 the Jellysheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Point, Size};

use crate::Deformation;

/// Cubic Bézier approximation of a quarter circle.
///
/// A quarter arc of radius `r` is drawn as a single cubic whose control
/// points sit `KAPPA * r` along the tangents at each endpoint.
const KAPPA: f64 = 0.552_284_749_8;

/// Tuning constants for [`silhouette`].
///
/// All lengths are in surface-local units (typically device pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SilhouetteParams {
    /// Depth of the deformable band below the surface top. The resting top
    /// edge is drawn along this line; a press above it pulls the edge up
    /// toward the pointer.
    pub edge_height: f64,
    /// Radius of the rounded top corners.
    pub corner_radius: f64,
    /// Horizontal distance of the dimple's Bézier control points from the
    /// press point. Controls how wide the dimple flares.
    pub control_offset: f64,
    /// Extra depth added below the surface bottom when closing a press-mode
    /// outline, so the mask still covers the surface while its height is
    /// animating. Hosts commonly set this to the container height.
    pub mask_overrun: f64,
}

impl Default for SilhouetteParams {
    fn default() -> Self {
        Self {
            edge_height: 70.0,
            corner_radius: 16.0,
            control_offset: 60.0,
            mask_overrun: 600.0,
        }
    }
}

/// Computes the closed clip outline for a sheet surface of `size` under the
/// given deformation.
///
/// Pure and deterministic: identical inputs always produce an identical
/// outline. `None` produces the resting outline (straight top edge, rounded
/// corners), which is also what a [`Deformation::Press`] at or below the
/// resting edge line degenerates to. A press point above the surface top is
/// clamped to the surface top.
///
/// Press-mode outlines (including the resting outline) close at
/// `size.height + params.mask_overrun`; curvature-mode outlines close at the
/// surface's actual height.
#[must_use]
pub fn silhouette(
    size: Size,
    deformation: Option<Deformation>,
    params: &SilhouetteParams,
) -> BezPath {
    let w = size.width;
    let top = params.edge_height;
    let r = params.corner_radius;
    let k = KAPPA * r;

    let mut path = BezPath::new();
    path.move_to((0.0, top + r));
    // Top-left corner, quarter turn.
    path.curve_to((0.0, top + r - k), (r - k, top), (r, top));

    let bottom = match deformation {
        Some(Deformation::Curve(curvature)) => {
            let inner = w - 2.0 * r;
            path.curve_to(
                (r + inner / 3.0, top - curvature),
                (r + inner * 2.0 / 3.0, top - curvature),
                (w - r, top),
            );
            size.height
        }
        Some(Deformation::Press(press)) if press.y <= top => {
            let press = Point::new(press.x, press.y.max(0.0));
            let co = params.control_offset;
            path.curve_to((press.x - co, top), (press.x - co, press.y), press.into());
            path.curve_to((press.x + co, press.y), (press.x + co, top), (w - r, top));
            size.height + params.mask_overrun
        }
        _ => {
            path.line_to((w - r, top));
            size.height + params.mask_overrun
        }
    };

    // Top-right corner, then close down both sides and across the bottom.
    path.curve_to((w - r + k, top), (w, top + r - k), (w, top + r));
    path.line_to((w, bottom));
    path.line_to((0.0, bottom));
    path.close_path();

    path
}
