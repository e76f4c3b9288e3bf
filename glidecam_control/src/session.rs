// Copyright 2026 the Glidecam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Interval after which the velocity sample window rolls over, in seconds.
///
/// Estimating release velocity from the last completed window rather than the
/// whole gesture keeps a fast swipe that ends in a long static hold from
/// being misread as fast.
pub(crate) const RESAMPLE_INTERVAL: f64 = 0.02;

/// Interaction state of the controller.
///
/// Transitions:
///
/// | From       | Trigger                                  | To         |
/// |------------|------------------------------------------|------------|
/// | `Idle`     | first pointer press                      | `Tracking` |
/// | `Tracking` | additional pointer press                 | `Multi`    |
/// | `Tracking` | release with a qualifying sample window  | `Flying`   |
/// | `Tracking` | release without qualification            | `Idle`     |
/// | `Multi`    | additional pointer press                 | `Multi`    |
/// | `Multi`    | last pointer release                     | `Idle`     |
/// | `Flying`   | inertia exhausted                        | `Idle`     |
/// | `Flying`   | pointer press (fling cancelled)          | `Tracking` |
///
/// Once a sequence has been `Multi` it can never fling: the phase stays
/// `Multi` until every pointer lifts, even with a single finger remaining.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No pointer down, no inertial motion.
    #[default]
    Idle,
    /// Exactly one pointer has been down since the sequence began; a fast
    /// release may fling.
    Tracking,
    /// Two or more pointers participated in this sequence; pinch geometry is
    /// live and flinging is disqualified.
    Multi,
    /// Inertial motion after a qualifying release.
    Flying,
}

/// Per-sequence sampling state consumed on release to decide a fling.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GestureSession {
    /// Pointer position at the start of the last completed sample window.
    pub(crate) start: Point,
    /// Pointer position at the end of the last completed sample window.
    pub(crate) end: Point,
    /// Duration of the last completed sample window, in seconds. Zero until
    /// the first rollover; doubles as the "any movement sampled yet" flag.
    pub(crate) window: f64,
    /// Time accumulated since the last rollover, in seconds.
    pub(crate) timer: f64,
    /// Pinch distance at the last zoom step; zero until initialized.
    pub(crate) last_pinch_distance: f64,
    /// Whether velocity sampling is active for this sequence.
    pub(crate) sampling: bool,
}

impl GestureSession {
    /// Resets the session at the first press of a sequence.
    pub(crate) fn begin(&mut self, position: Point) {
        self.start = position;
        self.end = position;
        self.window = 0.0;
        self.timer = 0.0;
        self.last_pinch_distance = 0.0;
    }

    /// Rolls the sample window over to end at `position`.
    pub(crate) fn resample(&mut self, position: Point) {
        self.start = self.end;
        self.end = position;
        self.window = self.timer;
        self.timer = 0.0;
    }
}
