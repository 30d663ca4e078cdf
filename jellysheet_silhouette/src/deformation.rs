// Copyright 2026 the Jellysheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Top-edge deformation parameter.
///
/// The two encodings describe the same physical quantity — how far the top
/// edge is displaced from its resting line, and where — and both are accepted
/// by [`silhouette`](crate::silhouette):
///
/// - [`Press`](Self::Press) pinches the edge toward an absolute surface-local
///   point, for use while a pointer is in contact.
/// - [`Curve`](Self::Curve) bows the whole edge by a signed amount; positive
///   values bulge upward (outward), negative values dip downward.
///
/// [`Deformation::lerp`] interpolates within either encoding and across them,
/// which is what makes timed transitions between any two outlines possible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Deformation {
    /// Pinch the top edge toward this surface-local point.
    ///
    /// The point's `y` is interpreted relative to the surface top; values
    /// above the surface (negative) are clamped to the surface top, and
    /// values at or below the resting edge line leave the edge straight.
    Press(Point),
    /// Bow the whole top edge by this signed amount.
    Curve(f64),
}

impl Deformation {
    /// Signed displacement of the edge's deepest point from the resting edge
    /// line at `edge_height`.
    ///
    /// This is the common scale the two encodings share: a press at the
    /// surface top displaces the edge by the full `edge_height`, a press on
    /// or below the resting line displaces it by zero, and a curvature *is*
    /// its displacement.
    #[must_use]
    pub fn displacement(self, edge_height: f64) -> f64 {
        match self {
            Self::Press(p) => edge_height - p.y.clamp(0.0, edge_height),
            Self::Curve(c) => c,
        }
    }

    /// Linearly interpolates between two deformations.
    ///
    /// Same-encoding pairs interpolate componentwise. Mixed pairs reduce both
    /// endpoints to their [`displacement`](Self::displacement), interpolate
    /// that, and re-express the result in `other`'s encoding (an interpolated
    /// press keeps `other`'s horizontal position). `t` is not clamped;
    /// callers normally pass an eased fraction in `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64, edge_height: f64) -> Self {
        match (self, other) {
            (Self::Press(a), Self::Press(b)) => Self::Press(a.lerp(b, t)),
            (Self::Curve(a), Self::Curve(b)) => Self::Curve(a + (b - a) * t),
            (from, to) => {
                let a = from.displacement(edge_height);
                let b = to.displacement(edge_height);
                let d = a + (b - a) * t;
                match to {
                    Self::Press(p) => Self::Press(Point::new(p.x, edge_height - d)),
                    Self::Curve(_) => Self::Curve(d),
                }
            }
        }
    }
}
