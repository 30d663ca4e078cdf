// Copyright 2026 the Jellysheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::ScaleState;

/// Lifecycle phase of a pointer drag sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// First contact of a drag.
    Began,
    /// Pointer moved while down.
    Changed,
    /// Pointer lifted; the drag completed normally.
    Ended,
    /// The drag was interrupted by the platform. Treated exactly like
    /// [`Ended`](Self::Ended) using the sample's values, so the state
    /// machine never parks mid-drag.
    Cancelled,
}

/// One sample of a pointer drag, as reported by the host's recognizer.
///
/// Samples are transient: the controller consumes each one immediately and
/// retains nothing beyond the vertical direction of travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    /// Where in the drag lifecycle this sample falls.
    pub phase: GesturePhase,
    /// Cumulative translation since the drag began, in container space.
    pub translation: Vec2,
    /// Instantaneous pointer velocity, in container units per second.
    pub velocity: Vec2,
    /// Current pointer location in container space.
    pub location: Point,
}

impl GestureSample {
    /// A [`GesturePhase::Began`] sample at `location` with zero translation
    /// and velocity.
    #[must_use]
    pub fn began(location: Point) -> Self {
        Self {
            phase: GesturePhase::Began,
            translation: Vec2::ZERO,
            velocity: Vec2::ZERO,
            location,
        }
    }
}

/// Terminal decision of a completed drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The sheet stays presented; geometry is animating back to the
    /// canonical frame.
    SnapBack,
    /// The sheet was dragged off-screen; the host should dismiss the
    /// presentation. Emitted exactly once per dismissing drag.
    Dismiss,
}

/// What a drag sample asks the sheet to do, as decided by the
/// [`GestureInterpreter`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureUpdate {
    /// A drag started: capture the scale state and pin the height.
    Begin,
    /// Deform the top edge toward this container-space location.
    Deform(Point),
    /// Move the sheet's top edge to this vertical origin.
    MoveOrigin(f64),
    /// The drag finished at this container-space location; resolve
    /// snap-back versus dismissal.
    Release(Point),
}

/// Interprets a stream of drag samples under a [`ScaleState`].
///
/// The interpreter is the only place raw samples are read. In
/// [`ScaleState::Interaction`] movement becomes edge deformation; in
/// [`ScaleState::Presentation`] it becomes rigid vertical tracking of the
/// translation. The only state retained across samples is the vertical
/// direction of travel.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureInterpreter {
    direction: f64,
}

impl GestureInterpreter {
    /// Maps one sample to the update it requests.
    ///
    /// `mode` is the scale state captured when the drag began. `Cancelled`
    /// is interpreted exactly like `Ended`, using the sample's values as the
    /// last known reading.
    pub fn interpret(&mut self, sample: GestureSample, mode: ScaleState) -> GestureUpdate {
        match sample.phase {
            GesturePhase::Began => GestureUpdate::Begin,
            GesturePhase::Changed => {
                self.direction = sample.velocity.y;
                match mode {
                    ScaleState::Interaction => GestureUpdate::Deform(sample.location),
                    ScaleState::Presentation => GestureUpdate::MoveOrigin(sample.translation.y),
                }
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                GestureUpdate::Release(sample.location)
            }
        }
    }

    /// Vertical velocity of the most recent `Changed` sample.
    ///
    /// Recorded for direction-of-travel; not consulted by the dismiss
    /// decision.
    #[must_use]
    pub fn direction(&self) -> f64 {
        self.direction
    }
}
