// Copyright 2026 the Jellysheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=jellysheet_silhouette --heading-base-level=0

//! Jellysheet Silhouette: procedural clip outlines for jelly sheet surfaces.
//!
//! A "jelly" bottom sheet is masked by a closed vector outline whose top edge
//! deforms in response to touch. This crate computes that outline as a pure
//! function of the surface dimensions and a [`Deformation`] parameter. It
//! owns no state beyond the tuning constants in [`SilhouetteParams`]; callers
//! regenerate the outline whenever either input changes and install the
//! result as their rendering mask.
//!
//! Two deformation encodings are supported, and are interchangeable at the
//! generator's contract:
//!
//! - [`Deformation::Press`]: an absolute surface-local point the top edge
//!   pinches toward, used while finger contact continues. Produces a
//!   localized dimple centered on the touch.
//! - [`Deformation::Curve`]: a signed scalar magnitude producing a smooth,
//!   symmetric bulge across the whole edge. Because it is one-dimensional it
//!   can be driven by a timed animation with no synthetic pointer location.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use jellysheet_silhouette::{silhouette, Deformation, SilhouetteParams};
//!
//! let params = SilhouetteParams::default();
//! let size = Size::new(400.0, 300.0);
//!
//! // Resting outline: straight top edge with rounded corners.
//! let rest = silhouette(size, None, &params);
//!
//! // Finger pressing near the top edge pulls a dimple toward the touch.
//! let pressed = silhouette(
//!     size,
//!     Some(Deformation::Press(Point::new(180.0, 30.0))),
//!     &params,
//! );
//! assert_ne!(rest.elements(), pressed.elements());
//!
//! // Identical inputs always produce an identical outline.
//! let again = silhouette(size, None, &params);
//! assert_eq!(rest.elements(), again.elements());
//! ```
//!
//! ## Design notes
//!
//! - The generator is deterministic and side-effect free; outlines are value
//!   types with no identity, replaced wholesale on every update.
//! - In press mode the outline closes well below the visible surface
//!   (see [`SilhouetteParams::mask_overrun`]) so the mask keeps covering the
//!   surface while its height is animating.
//! - Interpolation between outlines is handled one level up (see the
//!   `jellysheet_motion` crate) by lerping the [`Deformation`] parameter and
//!   regenerating, so this crate never has to match path element structure.
//!
//! This crate is `no_std`.

#![no_std]

mod deformation;
mod outline;

pub use deformation::Deformation;
pub use outline::{SilhouetteParams, silhouette};
