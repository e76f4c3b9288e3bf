// Copyright 2026 the Glidecam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glidecam_camera::BoundedCamera;
use kurbo::{Point, Size, Vec2};

use crate::config::{ControllerConfig, TrackpadPanBehavior};
use crate::events::{InputEvent, MOUSE_POINTER_ID, PointerButton};
use crate::fling::{self, FlingState};
use crate::registry::TouchRegistry;
use crate::session::{GesturePhase, GestureSession, RESAMPLE_INTERVAL};

/// Gesture-to-motion controller for a [`BoundedCamera`].
///
/// The controller consumes the host's pre-decoded input events and a
/// per-frame tick, and drives the camera through its clamping setters:
/// - One pointer down pans; a fast release glides on with inertia.
/// - Two pointers down pinch-zoom around their midpoint.
/// - Wheel clicks and trackpad gestures zoom (or pan, per configuration).
///
/// Both entry points — [`Self::handle_event`] and [`Self::tick`] — are
/// synchronous and externally driven; the controller never animates or
/// schedules anything on its own.
#[derive(Clone, Debug)]
pub struct CameraController {
    config: ControllerConfig,
    camera: BoundedCamera,
    registry: TouchRegistry,
    session: GestureSession,
    phase: GesturePhase,
    fling: FlingState,
}

impl CameraController {
    /// Creates a controller with the default configuration.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let config = ControllerConfig::default();
        let mut camera = BoundedCamera::new(viewport);
        camera.set_stop_on_limit(config.stop_on_limit);
        camera.set_return_speed(config.return_speed);
        camera.set_zoom_limits(config.min_zoom, config.max_zoom);
        Self {
            config,
            camera,
            registry: TouchRegistry::new(),
            session: GestureSession::default(),
            phase: GesturePhase::Idle,
            fling: FlingState::default(),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Applies a new configuration.
    ///
    /// Values are clamped into their documented ranges first; applying a
    /// configuration equal to the current one is a no-op.
    pub fn apply_config(&mut self, config: ControllerConfig) {
        let config = config.sanitized();
        if config == self.config {
            return;
        }
        self.config = config;
        self.camera.set_stop_on_limit(config.stop_on_limit);
        self.camera.set_return_speed(config.return_speed);
        self.camera.set_zoom_limits(config.min_zoom, config.max_zoom);
    }

    /// Returns the driven camera.
    #[must_use]
    pub fn camera(&self) -> &BoundedCamera {
        &self.camera
    }

    /// Returns the driven camera mutably.
    ///
    /// All camera methods funnel through the clamping setters, so hosts may
    /// reposition or re-limit the camera directly between events.
    pub fn camera_mut(&mut self) -> &mut BoundedCamera {
        &mut self.camera
    }

    /// Returns the current interaction phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Forwards a new viewport size to the camera.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        self.camera.set_viewport_size(viewport);
    }

    /// Processes one input event.
    ///
    /// Events are expected in delivery order. Variants irrelevant to the
    /// current configuration (for example mouse events while mouse handling
    /// is off) are ignored without any state change.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::TouchDown { index, position } => self.press(index, position),
            InputEvent::TouchUp { index, position } => self.release(index, position),
            InputEvent::TouchDrag {
                index,
                position,
                delta,
            } => self.drag(index, position, delta),
            InputEvent::MouseButton {
                button,
                pressed,
                position,
            } => {
                if self.config.handle_mouse_events {
                    self.mouse_button(button, pressed, position);
                }
            }
            InputEvent::MouseMotion { position, delta } => {
                if self.config.handle_mouse_events && self.registry.contains(MOUSE_POINTER_ID) {
                    self.drag(MOUSE_POINTER_ID, position, delta);
                }
            }
            InputEvent::TrackpadPan { position, delta } => self.trackpad_pan(position, delta),
            InputEvent::Magnify { position, factor } => self.magnify(position, factor),
        }
    }

    /// Advances time-driven behavior by one frame.
    ///
    /// While flying this integrates the fling; while idle it advances the
    /// elastic return; during a gesture it only accumulates the sample
    /// timer.
    pub fn tick(&mut self, dt: f64) {
        match self.phase {
            GesturePhase::Flying => {
                if !fling::step(&mut self.fling, &mut self.camera, dt) {
                    self.phase = GesturePhase::Idle;
                }
            }
            GesturePhase::Idle => self.camera.settle(),
            GesturePhase::Tracking | GesturePhase::Multi => {
                self.session.timer += dt;
            }
        }
    }

    /// Stops any inertial motion immediately. The camera stays where it is.
    pub fn cancel_fling(&mut self) {
        self.fling = FlingState::default();
        if self.phase == GesturePhase::Flying {
            self.phase = GesturePhase::Idle;
        }
    }

    /// Drops every tracked pointer and returns to [`GesturePhase::Idle`]
    /// without moving the camera. For hosts to call on focus loss or scene
    /// changes.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.session = GestureSession::default();
        self.fling = FlingState::default();
        self.phase = GesturePhase::Idle;
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ControllerDebugInfo {
        ControllerDebugInfo {
            phase: self.phase,
            active_touches: self.registry.len(),
            fling: self.fling,
            sample_window: self.session.window,
            last_pinch_distance: self.session.last_pinch_distance,
        }
    }

    fn press(&mut self, id: i64, position: Point) {
        self.cancel_fling();
        self.registry.register(id, position);
        if self.registry.len() > 1 {
            // Multi-touch never flings, for the rest of this sequence.
            self.phase = GesturePhase::Multi;
        } else {
            self.phase = GesturePhase::Tracking;
            self.session.begin(position);
        }
        self.session.sampling = self.config.fling_action;
    }

    fn release(&mut self, id: i64, _position: Point) {
        if !self.registry.contains(id) {
            return;
        }
        let mut qualified = None;
        if self.phase == GesturePhase::Tracking && self.session.sampling && self.session.window > 0.0
        {
            qualified = fling::qualify(
                self.session.start,
                self.session.end,
                self.session.window,
                self.config.min_fling_velocity,
                self.config.deceleration,
            );
        }
        self.registry.unregister(id);
        if self.registry.is_empty() {
            self.session.sampling = false;
            if let Some(fling) = qualified {
                self.fling = fling;
                self.phase = GesturePhase::Flying;
            } else {
                self.phase = GesturePhase::Idle;
            }
        }
    }

    fn drag(&mut self, id: i64, position: Point, delta: Vec2) {
        if !self.registry.contains(id) {
            return;
        }
        if self.phase == GesturePhase::Tracking
            && self.session.sampling
            && self.session.timer > RESAMPLE_INTERVAL
        {
            self.session.resample(position);
        }
        // Sub-threshold jitter must not perturb pinch-distance tracking.
        let moved = self
            .registry
            .position_of(id)
            .is_some_and(|last| last.distance(position) > self.config.zoom_sensitivity);
        if moved {
            self.registry.register(id, position);
        }
        if self.registry.len() >= 2 {
            if self.config.move_while_zooming {
                // Halved: two fingers travel together.
                self.pan_by(delta / 2.0);
            }
            self.pinch();
        } else {
            self.pan_by(delta);
        }
    }

    /// Translates the camera opposite a screen-space delta, scaled into
    /// world units by the current zoom so panning feels the same at every
    /// zoom level.
    fn pan_by(&mut self, delta: Vec2) {
        let zoom = self.camera.zoom();
        let world = Vec2::new(delta.x * zoom.x, delta.y * zoom.y) * self.config.pan_sensitivity;
        self.camera.set_position(self.camera.position() - world);
    }

    fn pinch(&mut self) {
        let Some((a, b)) = self.registry.first_two() else {
            return;
        };
        let distance = a.distance(b);
        if self.session.last_pinch_distance == 0.0 {
            self.session.last_pinch_distance = distance;
            return;
        }
        if (distance - self.session.last_pinch_distance).abs() <= self.config.zoom_sensitivity {
            return;
        }
        let zoom = self.camera.zoom();
        let step = Vec2::new(
            self.config.zoom_increment.x * zoom.x,
            self.config.zoom_increment.y * zoom.y,
        );
        let target = if distance < self.session.last_pinch_distance {
            zoom - step
        } else {
            zoom + step
        };
        self.apply_zoom(target, a.midpoint(b));
        self.session.last_pinch_distance = distance;
    }

    fn apply_zoom(&mut self, target: Vec2, focus: Point) {
        if self.config.zoom_at_point {
            self.cancel_fling();
            self.camera.zoom_at(target, focus);
        } else {
            self.camera.set_zoom(target);
        }
    }

    fn mouse_button(&mut self, button: PointerButton, pressed: bool, position: Point) {
        match button {
            PointerButton::Primary => {
                if pressed {
                    self.press(MOUSE_POINTER_ID, position);
                } else {
                    self.release(MOUSE_POINTER_ID, position);
                }
            }
            PointerButton::WheelUp | PointerButton::WheelDown if pressed => {
                let direction = if button == PointerButton::WheelUp {
                    -1.0
                } else {
                    1.0
                };
                self.wheel_zoom(direction, position);
            }
            PointerButton::Secondary | PointerButton::Middle => {
                // A concurrent non-primary click must not keep the pan/pinch
                // session alive.
                if !self.config.move_while_zooming {
                    self.evict(MOUSE_POINTER_ID);
                }
            }
            _ => {}
        }
    }

    /// Drops a pointer without evaluating a fling.
    fn evict(&mut self, id: i64) {
        self.registry.unregister(id);
        if self.registry.is_empty() && self.phase != GesturePhase::Flying {
            self.phase = GesturePhase::Idle;
            self.session.sampling = false;
        }
    }

    fn wheel_zoom(&mut self, direction: f64, position: Point) {
        let zoom = self.camera.zoom();
        let step = Vec2::new(
            self.config.mouse_zoom_increment.x * zoom.x,
            self.config.mouse_zoom_increment.y * zoom.y,
        );
        self.apply_zoom(zoom + step * direction, position);
    }

    fn trackpad_pan(&mut self, position: Point, delta: Vec2) {
        match self.config.trackpad_pan_behavior {
            TrackpadPanBehavior::Pan => {
                let target = self.camera.position() + delta * self.config.trackpad_pan_speed;
                self.camera.set_position(target);
            }
            TrackpadPanBehavior::Zoom => {
                if delta.y.abs() > delta.x.abs() {
                    let direction = if delta.y < 0.0 { -1.0 } else { 1.0 };
                    self.wheel_zoom(direction, position);
                }
            }
        }
    }

    fn magnify(&mut self, position: Point, factor: f64) {
        let zoom = self.camera.zoom();
        let target = zoom + zoom * (1.0 - factor);
        self.apply_zoom(target, position);
    }
}

/// Debug snapshot of a [`CameraController`] state.
#[derive(Clone, Copy, Debug)]
pub struct ControllerDebugInfo {
    /// Current interaction phase.
    pub phase: GesturePhase,
    /// Number of tracked pointers.
    pub active_touches: usize,
    /// Inertial motion state; zeroed unless flying.
    pub fling: FlingState,
    /// Duration of the last completed velocity sample window.
    pub sample_window: f64,
    /// Pinch distance at the last zoom step.
    pub last_pinch_distance: f64,
}
