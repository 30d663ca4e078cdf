// Copyright 2026 the Jellysheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=jellysheet_motion --heading-base-level=0

//! Jellysheet Motion: host-agnostic timed interpolation for sheet silhouettes.
//!
//! This crate supplies the small animation vocabulary the jelly sheet core
//! needs — easing curves, a [`Tween`] progress model, and the
//! [`SilhouetteAnimator`] that drives a sheet's single mutable clip outline
//! through timed transitions between `jellysheet_silhouette` generator
//! outputs.
//!
//! ## Time model
//!
//! Nothing in this crate reads a clock. Hosts supply monotonic timestamps
//! (seconds, `f64`) when starting an animation and on every subsequent
//! `tick`. That keeps the crate single-threaded, deterministic, and trivially
//! testable: time only advances when the host says it does.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use jellysheet_silhouette::{silhouette, Deformation, SilhouetteParams};
//! use jellysheet_motion::{Easing, SilhouetteAnimator};
//!
//! let params = SilhouetteParams::default();
//! let size = Size::new(400.0, 300.0);
//! let mut animator = SilhouetteAnimator::new(params);
//!
//! // A live press sets the outline immediately, no animation.
//! let press = Deformation::Press(Point::new(180.0, 30.0));
//! animator.set(size, Some(press));
//!
//! // On release, ease the dimple back out to the resting edge line.
//! let rest = Deformation::Press(Point::new(180.0, params.edge_height));
//! animator.animate(size, press, rest, 0.2, Easing::EaseIn, 0.0);
//!
//! // The host drives the interpolation with its own timestamps.
//! animator.tick(0.1);
//! animator.tick(0.25);
//! assert!(!animator.is_animating());
//! assert_eq!(
//!     animator.current().unwrap().elements(),
//!     silhouette(size, Some(rest), &params).elements(),
//! );
//! ```
//!
//! ## Design notes
//!
//! - The animator owns exactly one "current outline" field, replaced
//!   wholesale per update, and at most one active interpolation — no
//!   queueing, no history. A new `animate` call supersedes whatever was in
//!   flight (last write wins).
//! - The recorded target is authoritative: interrupting or finishing an
//!   interpolation always lands on exactly the target outline, so a
//!   mid-flight inspection can never observe a stale terminal value.
//! - Interpolation lerps the [`Deformation`](jellysheet_silhouette::Deformation)
//!   parameter and regenerates the outline, rather than matching path
//!   element structure between arbitrary outlines.
//!
//! This crate is `no_std`.

#![no_std]

mod animator;
mod easing;
mod tween;

pub use animator::SilhouetteAnimator;
pub use easing::Easing;
pub use tween::Tween;
