// Copyright 2026 the Glidecam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glidecam_control --heading-base-level=0

//! Glidecam Control: gesture-to-motion control for a bounded 2D camera.
//!
//! This crate turns a host's raw pointer/touch/trackpad/mouse events into
//! camera position and zoom changes on a [`glidecam_camera::BoundedCamera`].
//! It focuses on:
//! - Multi-touch bookkeeping: an insertion-ordered [`TouchRegistry`] tracks
//!   which pointers are down and where.
//! - Gesture classification: one pointer pans, two pinch-zoom, wheel and
//!   trackpad gestures zoom or pan per configuration.
//! - Fling inertia: release velocity is estimated from the last completed
//!   sample window and integrated with per-axis deceleration until rest.
//! - Limit awareness: every position write funnels through the camera's
//!   clamping setter; past the limits a fling damps out quickly and the
//!   elastic return glides the camera back.
//!
//! It does **not** decode platform input or render anything. Callers are
//! expected to:
//! - Translate their windowing events into [`InputEvent`] values and feed
//!   them to [`CameraController::handle_event`] in delivery order.
//! - Call [`CameraController::tick`] once per rendered frame with the
//!   elapsed time in seconds.
//! - Read the resulting pose from [`CameraController::camera`] when
//!   painting.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use glidecam_control::{CameraController, GesturePhase, InputEvent};
//!
//! let mut controller = CameraController::new(Size::new(800.0, 600.0));
//!
//! // One-finger drag: the camera chases opposite the finger.
//! controller.handle_event(InputEvent::TouchDown {
//!     index: 0,
//!     position: Point::new(400.0, 300.0),
//! });
//! controller.tick(0.03);
//! controller.handle_event(InputEvent::TouchDrag {
//!     index: 0,
//!     position: Point::new(370.0, 300.0),
//!     delta: Vec2::new(-30.0, 0.0),
//! });
//! assert_eq!(controller.camera().position(), Point::new(30.0, 0.0));
//!
//! // A fast release keeps gliding.
//! controller.handle_event(InputEvent::TouchUp {
//!     index: 0,
//!     position: Point::new(370.0, 300.0),
//! });
//! assert_eq!(controller.phase(), GesturePhase::Flying);
//! controller.tick(1.0 / 60.0);
//! assert!(controller.camera().position().x > 30.0);
//! ```
//!
//! ## Design notes
//!
//! - The controller is a single state object with two externally driven
//!   entry points (`handle_event`, `tick`); it is single-threaded and never
//!   reentrant.
//! - The "first two" registry entries anchor the pinch. Releasing and
//!   re-pressing a finger mid-gesture can therefore change which pair drives
//!   the zoom; this mirrors how multi-touch hardware reports identifiers and
//!   is deliberate.
//! - There are no error returns: out-of-range values are clamped, time
//!   deltas are floored at a small epsilon, and irrelevant events are
//!   ignored.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod events;
mod fling;
mod registry;
mod session;

pub use glidecam_camera::{AnchorMode, BoundedCamera, CameraDebugInfo};

pub use config::{ControllerConfig, TrackpadPanBehavior};
pub use controller::{CameraController, ControllerDebugInfo};
pub use events::{InputEvent, MOUSE_POINTER_ID, PointerButton};
pub use fling::FlingState;
pub use registry::{TouchPoint, TouchRegistry};
pub use session::GesturePhase;
