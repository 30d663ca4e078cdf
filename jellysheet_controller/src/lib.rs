// Copyright 2026 the Jellysheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=jellysheet_controller --heading-base-level=0

//! Jellysheet Controller: the gesture-driven presentation core for jelly
//! sheet surfaces.
//!
//! A sheet slides up over a host view, can be dragged to reposition or
//! dismiss, and its top edge squishes toward the finger while touched. This
//! crate owns the state that makes that coherent: the sheet's geometry and
//! [`ScaleState`], the gesture state machine that turns a stream of
//! [`GestureSample`]s into geometry and deformation updates, the
//! snap-back-vs-dismiss decision at gesture end, and the randomized resize
//! "bounce" whose top edge overshoots and then rings back to rest.
//!
//! ## Host contract
//!
//! The controller is headless and host-driven, in the same spirit as the
//! event-state crates it is built on: it owns no event loop, no clock, and
//! no rendering. A host
//!
//! - supplies container bounds via [`SheetController::set_container`]
//!   (passing `None` during teardown is fine — entry points degrade to
//!   silent no-ops without geometry context);
//! - feeds pointer samples to [`SheetController::handle_gesture`] and
//!   monotonic timestamps to [`SheetController::tick`] every frame;
//! - lays the sheet out from [`SheetController::geometry`], masks it with
//!   [`SheetController::silhouette`], and interprets the returned
//!   [`GestureOutcome`] / [`BackdropDirective`] values — a
//!   [`GestureOutcome::Dismiss`] means "tear the presentation down", which
//!   stays the host's job.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use jellysheet_controller::{
//!     GestureOutcome, GesturePhase, GestureSample, SheetConfig, SheetController,
//! };
//!
//! let mut sheet = SheetController::new(SheetConfig::default());
//! sheet.set_container(Some(Size::new(400.0, 800.0)));
//!
//! // Drag that ends inside the container: the sheet snaps back.
//! sheet.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), 0.0);
//! let outcome = sheet.handle_gesture(
//!     GestureSample {
//!         phase: GesturePhase::Ended,
//!         translation: Vec2::new(0.0, 120.0),
//!         velocity: Vec2::new(0.0, 40.0),
//!         location: Point::new(200.0, 640.0),
//!     },
//!     0.4,
//! );
//! assert_eq!(outcome, Some(GestureOutcome::SnapBack));
//!
//! // The host drives the snap-back animation with its frame clock.
//! sheet.tick(1.0);
//! assert_eq!(sheet.geometry().origin_y, 800.0 - sheet.geometry().height);
//! ```
//!
//! Diagnostics are emitted through the [`log`] facade; install any logger to
//! see state transitions and resize decisions.

mod config;
mod controller;
mod geometry;
mod gesture;

pub use config::SheetConfig;
pub use controller::{BackdropDirective, SheetController, SheetDebugInfo, SheetPhase};
pub use geometry::{ScaleState, SheetGeometry};
pub use gesture::{GestureInterpreter, GestureOutcome, GesturePhase, GestureSample, GestureUpdate};
