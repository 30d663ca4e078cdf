// Copyright 2026 the Jellysheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Point, Rect, Size};
use log::{debug, trace};

use jellysheet_motion::{Easing, SilhouetteAnimator, Tween};
use jellysheet_silhouette::Deformation;

use crate::{
    GestureInterpreter, GestureOutcome, GesturePhase, GestureSample, GestureUpdate, ScaleState,
    SheetConfig, SheetGeometry,
};

/// Where the controller's state machine currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetPhase {
    /// No drag in progress; also the initial state.
    Idle,
    /// A drag is being tracked, interpreted under the captured
    /// [`ScaleState`].
    Dragging(ScaleState),
    /// Geometry is animating back to the canonical frame after a snap-back
    /// or a resize.
    Settling,
}

/// What the host should do with its backdrop in response to a presentation
/// lifecycle hook.
///
/// The backdrop itself (typically a dimmed overlay at ~0.75 opacity with
/// tap-to-dismiss) is owned and styled by the host; the controller only
/// sequences its fades.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackdropDirective {
    /// Fade the backdrop in alongside the presentation transition.
    FadeIn,
    /// Fade the backdrop out alongside the dismissal transition.
    FadeOut,
    /// The dismissal completed; remove the backdrop from the host view.
    Detach,
}

#[derive(Clone, Copy, Debug)]
struct GeometryTween {
    from: SheetGeometry,
    to: SheetGeometry,
    tween: Tween,
}

#[derive(Clone, Copy, Debug)]
struct PendingSettle {
    at: f64,
    generation: u64,
    size: Size,
    overshoot: f64,
}

/// The interactive presentation core for one presented sheet.
///
/// A controller is created per presentation request and owns the sheet's
/// geometry, scale state, and deformation for its whole lifetime; it is the
/// sole mutator of all three. Everything is driven from the host's thread:
/// gesture samples through [`handle_gesture`](Self::handle_gesture), time
/// through [`tick`](Self::tick). See the crate docs for the full host
/// contract.
#[derive(Debug)]
pub struct SheetController {
    config: SheetConfig,
    container: Option<Size>,
    geometry: SheetGeometry,
    committed_height: f64,
    scale_state: ScaleState,
    phase: SheetPhase,
    interpreter: GestureInterpreter,
    animator: SilhouetteAnimator,
    geometry_tween: Option<GeometryTween>,
    pending_settle: Option<PendingSettle>,
    settle_generation: u64,
    rng: fastrand::Rng,
}

impl SheetController {
    /// Creates a controller for a new presentation request.
    #[must_use]
    pub fn new(config: SheetConfig) -> Self {
        Self::with_rng(config, fastrand::Rng::new())
    }

    /// Creates a controller whose resize heights come from a seeded RNG,
    /// for reproducible behavior in tests.
    #[must_use]
    pub fn with_seed(config: SheetConfig, seed: u64) -> Self {
        Self::with_rng(config, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(config: SheetConfig, rng: fastrand::Rng) -> Self {
        Self {
            config,
            container: None,
            geometry: SheetGeometry {
                height: config.initial_height,
                origin_y: 0.0,
            },
            committed_height: config.initial_height,
            scale_state: ScaleState::Interaction,
            phase: SheetPhase::Idle,
            interpreter: GestureInterpreter::default(),
            animator: SilhouetteAnimator::new(config.silhouette),
            geometry_tween: None,
            pending_settle: None,
            settle_generation: 0,
            rng,
        }
    }

    /// Updates the container bounds the host is presenting into.
    ///
    /// Pass `None` when the container goes away during teardown; subsequent
    /// gesture and resize calls become no-ops. Outside of a drag or a
    /// running geometry animation, the sheet re-anchors to the container
    /// bottom.
    pub fn set_container(&mut self, container: Option<Size>) {
        self.container = container;
        if let Some(c) = container
            && !matches!(self.phase, SheetPhase::Dragging(_))
            && self.geometry_tween.is_none()
        {
            self.geometry.origin_y = c.height - self.geometry.height;
        }
    }

    /// The container bounds, if the host has provided them.
    #[must_use]
    pub fn container(&self) -> Option<Size> {
        self.container
    }

    /// The sheet's current frame values.
    #[must_use]
    pub fn geometry(&self) -> SheetGeometry {
        self.geometry
    }

    /// The current scale state.
    #[must_use]
    pub fn scale_state(&self) -> ScaleState {
        self.scale_state
    }

    /// Where the state machine currently sits.
    #[must_use]
    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    /// The height the sheet settles to when not being dragged.
    #[must_use]
    pub fn committed_height(&self) -> f64 {
        self.committed_height
    }

    /// The current clip outline for the presented surface, if one has been
    /// generated yet.
    #[must_use]
    pub fn silhouette(&self) -> Option<&BezPath> {
        self.animator.current()
    }

    /// The canonical presented frame in container coordinates: full width,
    /// committed height, pinned to the container bottom.
    #[must_use]
    pub fn frame_in_container(&self) -> Option<Rect> {
        let c = self.container?;
        Some(Rect::new(
            0.0,
            c.height - self.committed_height,
            c.width,
            c.height,
        ))
    }

    /// Hook for the start of the presentation transition.
    ///
    /// Seeds the resting clip outline and tells the host to fade its
    /// backdrop in alongside the transition.
    pub fn presentation_will_begin(&mut self) -> BackdropDirective {
        if self.container.is_some() {
            self.animator.set(self.sheet_size(), None);
        }
        BackdropDirective::FadeIn
    }

    /// Marks the presentation as finger-driven: drags move the sheet as a
    /// rigid block ([`ScaleState::Presentation`]) until a release inside the
    /// container settles it into [`ScaleState::Interaction`].
    ///
    /// Hosts call this when the user initiates an interactive present or
    /// dismiss; a non-interactive presentation can skip it and stay in
    /// `Interaction` throughout.
    pub fn begin_interactive_presentation(&mut self) {
        debug!("sheet entering interactive presentation");
        self.scale_state = ScaleState::Presentation;
    }

    /// Hook for the start of the dismissal transition.
    pub fn dismissal_will_begin(&mut self) -> BackdropDirective {
        BackdropDirective::FadeOut
    }

    /// Hook for the end of the dismissal transition.
    ///
    /// Returns [`BackdropDirective::Detach`] only when the dismissal
    /// actually completed; a cancelled dismissal keeps the backdrop.
    pub fn dismissal_did_end(&mut self, completed: bool) -> Option<BackdropDirective> {
        completed.then_some(BackdropDirective::Detach)
    }

    /// Feeds one pointer drag sample into the state machine.
    ///
    /// Returns the terminal decision for `Ended`/`Cancelled` samples that
    /// close an active drag; `None` otherwise. Without container bounds this
    /// is a silent no-op.
    pub fn handle_gesture(&mut self, sample: GestureSample, now: f64) -> Option<GestureOutcome> {
        let container = self.container?;
        // Everything except Began requires an active drag; stray samples
        // between gestures stay quiet.
        let mode = match self.phase {
            SheetPhase::Dragging(mode) => mode,
            _ if sample.phase == GesturePhase::Began => self.scale_state,
            _ => return None,
        };
        match self.interpreter.interpret(sample, mode) {
            GestureUpdate::Begin => {
                // Pin the height for the duration of the drag so external
                // layout passes cannot change it mid-gesture, and invalidate
                // any settle still pending from an earlier resize.
                self.geometry.height = self.committed_height;
                self.geometry_tween = None;
                self.settle_generation += 1;
                self.phase = SheetPhase::Dragging(self.scale_state);
                trace!("sheet drag began in {:?}", self.scale_state);
                None
            }
            GestureUpdate::Deform(location) => {
                let press = self.local_press(location);
                self.animator
                    .set(self.sheet_size(), Some(Deformation::Press(press)));
                None
            }
            GestureUpdate::MoveOrigin(origin_y) => {
                self.geometry.origin_y = origin_y;
                None
            }
            GestureUpdate::Release(location) => {
                // Relax the dimple back out to the resting edge line from
                // wherever the finger lifted.
                let press = self.local_press(location);
                let rest = Point::new(press.x, self.config.silhouette.edge_height);
                self.animator.animate(
                    self.sheet_size(),
                    Deformation::Press(press),
                    Deformation::Press(rest),
                    self.config.release_duration,
                    Easing::EaseIn,
                    now,
                );

                let origin_y = self.geometry.origin_y;
                if (0.0..=container.height).contains(&origin_y) {
                    debug!("sheet drag ended at origin {origin_y:.1}: snap back");
                    self.scale_state = ScaleState::Interaction;
                    self.begin_geometry_tween(
                        SheetGeometry::anchored_to_bottom(self.geometry.height, container.height),
                        now,
                    );
                    self.phase = SheetPhase::Settling;
                    Some(GestureOutcome::SnapBack)
                } else {
                    debug!("sheet drag ended at origin {origin_y:.1}: dismiss");
                    self.phase = SheetPhase::Idle;
                    Some(GestureOutcome::Dismiss)
                }
            }
        }
    }

    /// Animates the sheet to a new uniformly random height in
    /// `[min_height, container_height]`, ringing the top edge.
    ///
    /// The edge takes an immediate curvature overshoot proportional to the
    /// height delta, then eases back to the neutral curvature once the
    /// deferred settle fires mid-animation. Calling again before the settle
    /// fires supersedes it: last write wins. Returns the chosen height, or
    /// `None` when a drag is in progress or no container is set.
    pub fn resize(&mut self, now: f64) -> Option<f64> {
        let container = self.container?;
        if matches!(self.phase, SheetPhase::Dragging(_)) {
            return None;
        }
        let max = container.height;
        let min = self.config.min_height.min(max);
        let target = min + self.rng.f64() * (max - min);

        let old = self.committed_height;
        let overshoot =
            self.config.neutral_curvature + (old - target) / self.config.overshoot_damping;
        debug!("sheet resize {old:.1} -> {target:.1} (overshoot {overshoot:.1})");

        self.committed_height = target;
        self.begin_geometry_tween(
            SheetGeometry::anchored_to_bottom(target, container.height),
            now,
        );
        self.phase = SheetPhase::Settling;

        let size = Size::new(container.width, target);
        self.animator.set(size, Some(Deformation::Curve(overshoot)));
        self.settle_generation += 1;
        self.pending_settle = Some(PendingSettle {
            at: now + self.config.settle_delay,
            generation: self.settle_generation,
            size,
            overshoot,
        });
        Some(target)
    }

    /// Advances all timed work to timestamp `now`: the geometry animation,
    /// the deferred curvature settle, and the silhouette interpolation.
    ///
    /// Returns `true` if geometry or outline changed.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut changed = false;

        if let Some(gt) = self.geometry_tween {
            if gt.tween.is_finished(now) {
                self.geometry = gt.to;
                self.committed_height = gt.to.height;
                self.geometry_tween = None;
                if self.phase == SheetPhase::Settling {
                    self.phase = SheetPhase::Idle;
                }
            } else {
                self.geometry = gt.from.lerp(gt.to, gt.tween.progress(now));
            }
            changed = true;
        }

        if let Some(settle) = self.pending_settle {
            if settle.generation != self.settle_generation {
                // Superseded by a newer resize or drag; drop it unapplied.
                trace!("sheet settle superseded (generation {})", settle.generation);
                self.pending_settle = None;
            } else if now >= settle.at {
                self.pending_settle = None;
                self.animator.animate(
                    settle.size,
                    Deformation::Curve(settle.overshoot),
                    Deformation::Curve(self.config.neutral_curvature),
                    self.config.settle_duration,
                    Easing::EaseOut,
                    now,
                );
                changed = true;
            }
        }

        changed |= self.animator.tick(now);
        changed
    }

    /// Snapshot of the controller's state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SheetDebugInfo {
        SheetDebugInfo {
            phase: self.phase,
            scale_state: self.scale_state,
            geometry: self.geometry,
            committed_height: self.committed_height,
            direction: self.interpreter.direction(),
            container: self.container,
            edge_animating: self.animator.is_animating(),
            pending_settle_at: self.pending_settle.map(|s| s.at),
            settle_generation: self.settle_generation,
        }
    }

    /// Converts a container-space pointer location into the presented
    /// surface's local space.
    fn local_press(&self, location: Point) -> Point {
        Point::new(location.x, location.y - self.geometry.origin_y)
    }

    fn sheet_size(&self) -> Size {
        let width = self.container.map_or(0.0, |c| c.width);
        Size::new(width, self.geometry.height)
    }

    fn begin_geometry_tween(&mut self, to: SheetGeometry, now: f64) {
        self.geometry_tween = Some(GeometryTween {
            from: self.geometry,
            to,
            tween: Tween::new(now, self.config.snap_duration, Easing::EaseInOut),
        });
    }
}

/// Debug snapshot of a [`SheetController`]'s state.
#[derive(Clone, Copy, Debug)]
pub struct SheetDebugInfo {
    /// Where the state machine currently sits.
    pub phase: SheetPhase,
    /// Current scale state.
    pub scale_state: ScaleState,
    /// Current frame values.
    pub geometry: SheetGeometry,
    /// Height the sheet settles to when not being dragged.
    pub committed_height: f64,
    /// Vertical velocity recorded from the most recent Changed sample.
    pub direction: f64,
    /// Container bounds, if set.
    pub container: Option<Size>,
    /// Whether a silhouette interpolation is in flight.
    pub edge_animating: bool,
    /// Deadline of the pending curvature settle, if one is scheduled.
    pub pending_settle_at: Option<f64>,
    /// Generation counter guarding deferred settles.
    pub settle_generation: u64,
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use jellysheet_silhouette::silhouette;

    use super::*;

    const CONTAINER: Size = Size::new(400.0, 800.0);

    fn controller() -> SheetController {
        let mut c = SheetController::with_seed(SheetConfig::default(), 7);
        c.set_container(Some(CONTAINER));
        c
    }

    fn changed(location: Point, translation: Vec2) -> GestureSample {
        GestureSample {
            phase: GesturePhase::Changed,
            translation,
            velocity: Vec2::new(0.0, 55.0),
            location,
        }
    }

    fn ended(location: Point) -> GestureSample {
        GestureSample {
            phase: GesturePhase::Ended,
            translation: Vec2::ZERO,
            velocity: Vec2::ZERO,
            location,
        }
    }

    #[test]
    fn container_anchors_sheet_to_bottom() {
        let c = controller();
        assert_eq!(c.geometry().height, 300.0);
        assert_eq!(c.geometry().origin_y, 500.0);
        assert_eq!(
            c.frame_in_container(),
            Some(Rect::new(0.0, 500.0, 400.0, 800.0))
        );
    }

    #[test]
    fn began_pins_height_to_committed_value() {
        let mut c = controller();
        c.geometry.height = 444.0; // external layout interference
        c.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), 0.0);
        assert_eq!(c.geometry().height, 300.0);
        assert_eq!(c.phase(), SheetPhase::Dragging(ScaleState::Interaction));
    }

    #[test]
    fn interaction_drag_moves_only_the_silhouette() {
        let mut c = controller();
        c.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), 0.0);
        let before = c.geometry();
        c.handle_gesture(changed(Point::new(210.0, 530.0), Vec2::new(10.0, 10.0)), 0.1);

        assert_eq!(c.geometry(), before, "geometry must not move");
        // Location (210, 530) in a sheet whose top sits at 500 presses at
        // local (210, 30).
        let expected = silhouette(
            Size::new(400.0, 300.0),
            Some(Deformation::Press(Point::new(210.0, 30.0))),
            &c.config.silhouette,
        );
        assert_eq!(c.silhouette().unwrap().elements(), expected.elements());
    }

    #[test]
    fn presentation_drag_tracks_translation_rigidly() {
        let mut c = controller();
        c.begin_interactive_presentation();
        c.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), 0.0);
        c.handle_gesture(
            changed(Point::new(200.0, 640.0), Vec2::new(0.0, 640.0)),
            0.1,
        );
        assert_eq!(c.geometry().origin_y, 640.0);
        assert_eq!(c.geometry().height, 300.0);
    }

    #[test]
    fn changed_records_direction_of_travel() {
        let mut c = controller();
        c.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), 0.0);
        c.handle_gesture(changed(Point::new(200.0, 530.0), Vec2::new(0.0, 10.0)), 0.1);
        assert_eq!(c.debug_info().direction, 55.0);
    }

    #[test]
    fn end_inside_container_snaps_back() {
        let mut c = controller();
        c.begin_interactive_presentation();
        c.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), 0.0);
        c.handle_gesture(
            changed(Point::new(200.0, 640.0), Vec2::new(0.0, 640.0)),
            0.1,
        );
        let outcome = c.handle_gesture(ended(Point::new(200.0, 640.0)), 0.2);

        assert_eq!(outcome, Some(GestureOutcome::SnapBack));
        assert_eq!(c.scale_state(), ScaleState::Interaction);
        assert_eq!(c.phase(), SheetPhase::Settling);

        // Geometry animates back to the canonical frame, then the
        // controller returns to idle.
        c.tick(0.2 + c.config.snap_duration);
        assert_eq!(
            c.geometry(),
            SheetGeometry::anchored_to_bottom(300.0, CONTAINER.height)
        );
        assert_eq!(c.phase(), SheetPhase::Idle);
    }

    #[test]
    fn end_at_interval_boundaries_snaps_back() {
        for origin in [0.0, CONTAINER.height] {
            let mut c = controller();
            c.begin_interactive_presentation();
            c.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), 0.0);
            c.handle_gesture(
                changed(Point::new(200.0, origin), Vec2::new(0.0, origin)),
                0.1,
            );
            let outcome = c.handle_gesture(ended(Point::new(200.0, origin)), 0.2);
            assert_eq!(
                outcome,
                Some(GestureOutcome::SnapBack),
                "boundary origin {origin} is inclusive"
            );
        }
    }

    #[test]
    fn end_beyond_container_requests_dismissal_once() {
        let mut c = controller();
        c.begin_interactive_presentation();
        c.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), 0.0);
        c.handle_gesture(
            changed(Point::new(200.0, 850.0), Vec2::new(0.0, 850.0)),
            0.1,
        );
        let outcome = c.handle_gesture(ended(Point::new(200.0, 850.0)), 0.2);
        assert_eq!(outcome, Some(GestureOutcome::Dismiss));
        assert_eq!(c.phase(), SheetPhase::Idle);

        // A stray repeat end sample must not re-request dismissal.
        assert_eq!(c.handle_gesture(ended(Point::new(200.0, 850.0)), 0.3), None);
    }

    #[test]
    fn cancelled_behaves_like_ended() {
        let mut c = controller();
        c.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), 0.0);
        let outcome = c.handle_gesture(
            GestureSample {
                phase: GesturePhase::Cancelled,
                translation: Vec2::ZERO,
                velocity: Vec2::ZERO,
                location: Point::new(200.0, 530.0),
            },
            0.1,
        );
        assert_eq!(outcome, Some(GestureOutcome::SnapBack));
        assert!(
            !matches!(c.phase(), SheetPhase::Dragging(_)),
            "cancellation must not leave the machine mid-drag"
        );
    }

    #[test]
    fn release_relaxes_the_dimple_to_the_resting_line() {
        let mut c = controller();
        c.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), 0.0);
        c.handle_gesture(changed(Point::new(210.0, 530.0), Vec2::new(10.0, 10.0)), 0.1);
        c.handle_gesture(ended(Point::new(210.0, 530.0)), 0.2);

        c.tick(0.2 + c.config.release_duration);
        let expected = silhouette(
            Size::new(400.0, 300.0),
            Some(Deformation::Press(Point::new(
                210.0,
                c.config.silhouette.edge_height,
            ))),
            &c.config.silhouette,
        );
        assert_eq!(c.silhouette().unwrap().elements(), expected.elements());
    }

    #[test]
    fn gesture_without_container_is_a_no_op() {
        let mut c = SheetController::with_seed(SheetConfig::default(), 7);
        assert_eq!(
            c.handle_gesture(GestureSample::began(Point::new(0.0, 0.0)), 0.0),
            None
        );
        assert_eq!(c.phase(), SheetPhase::Idle);
        assert_eq!(c.resize(0.0), None);
    }

    #[test]
    fn resize_is_rejected_mid_drag() {
        let mut c = controller();
        c.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), 0.0);
        assert_eq!(c.resize(0.1), None);
    }

    #[test]
    fn resize_stays_within_bounds_and_commits() {
        let mut c = controller();
        for i in 0..50 {
            let now = i as f64;
            let h = c.resize(now).unwrap();
            assert!((200.0..=800.0).contains(&h), "height {h} out of bounds");
            assert_eq!(c.committed_height(), h);
            c.tick(now + c.config.snap_duration);
            assert_eq!(
                c.geometry(),
                SheetGeometry::anchored_to_bottom(h, CONTAINER.height)
            );
            assert_eq!(c.phase(), SheetPhase::Idle);
        }
    }

    #[test]
    fn resize_overshoot_sign_follows_height_delta() {
        let mut c = controller();
        let neutral = c.config.neutral_curvature;
        let mut old = c.committed_height();
        for i in 0..20 {
            let now = i as f64 * 10.0;
            let new = c.resize(now).unwrap();
            let expected = neutral + (old - new) / c.config.overshoot_damping;
            let Some(settle_at) = c.debug_info().pending_settle_at else {
                panic!("resize must schedule a settle");
            };
            assert_eq!(settle_at, now + c.config.settle_delay);
            // The overshoot silhouette is applied immediately.
            let mask = silhouette(
                Size::new(CONTAINER.width, new),
                Some(Deformation::Curve(expected)),
                &c.config.silhouette,
            );
            assert_eq!(c.silhouette().unwrap().elements(), mask.elements());
            c.tick(now + 5.0);
            old = new;
        }
    }

    #[test]
    fn rapid_resizes_apply_only_the_last_settle() {
        let mut c = controller();
        c.resize(0.0).unwrap();
        let second = c.resize(0.1).unwrap();

        // Past the first settle deadline: the pending slot now belongs to
        // the second resize, so nothing fires yet.
        c.tick(0.3);
        assert!(!c.debug_info().edge_animating, "first settle must not fire");

        // The second settle fires at its own deadline and eases back to the
        // neutral curvature.
        c.tick(0.36);
        assert!(c.debug_info().edge_animating);
        c.tick(0.36 + c.config.settle_duration);
        let expected = silhouette(
            Size::new(CONTAINER.width, second),
            Some(Deformation::Curve(c.config.neutral_curvature)),
            &c.config.silhouette,
        );
        assert_eq!(c.silhouette().unwrap().elements(), expected.elements());
        assert!(c.debug_info().pending_settle_at.is_none());

        // The displayed height matches only the second target.
        assert_eq!(
            c.geometry(),
            SheetGeometry::anchored_to_bottom(second, CONTAINER.height)
        );
    }

    #[test]
    fn drag_supersedes_a_pending_settle() {
        let mut c = controller();
        c.resize(0.0).unwrap();
        c.handle_gesture(GestureSample::began(Point::new(200.0, 520.0)), 0.1);
        c.tick(0.3);
        assert!(
            c.debug_info().pending_settle_at.is_none(),
            "stale settle must be dropped, not applied"
        );
        assert!(!c.debug_info().edge_animating);
    }

    #[test]
    fn lifecycle_hooks_sequence_the_backdrop() {
        let mut c = controller();
        assert_eq!(c.presentation_will_begin(), BackdropDirective::FadeIn);
        assert!(c.silhouette().is_some(), "presentation seeds the mask");
        assert_eq!(c.dismissal_will_begin(), BackdropDirective::FadeOut);
        assert_eq!(c.dismissal_did_end(false), None);
        assert_eq!(c.dismissal_did_end(true), Some(BackdropDirective::Detach));
    }
}
