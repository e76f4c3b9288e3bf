// Copyright 2026 the Glidecam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// What a trackpad two-finger pan gesture does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TrackpadPanBehavior {
    /// A dominant vertical delta zooms, like wheel clicks.
    #[default]
    Zoom,
    /// The gesture pans the camera directly.
    Pan,
}

/// Recognized controller options.
///
/// Values outside the documented ranges are clamped when the configuration is
/// applied, never rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Hard-clamp the camera position at the limits instead of letting it
    /// overshoot and return elastically.
    pub stop_on_limit: bool,
    /// Fraction of the remaining out-of-limit offset recovered per idle
    /// frame, in `[0.01, 1.0]`.
    pub return_speed: f64,
    /// Scale applied to drag deltas before they move the camera, in
    /// `[0.1, 1.0]`.
    pub pan_sensitivity: f64,
    /// Whether a fast release starts an inertial fling at all.
    pub fling_action: bool,
    /// Minimum release velocity that qualifies as a fling, in px/s.
    pub min_fling_velocity: f64,
    /// Fling deceleration, in px/s², in `[1.0, 10000.0]`.
    pub deceleration: f64,
    /// Minimum zoom factor (world units per pixel).
    pub min_zoom: f64,
    /// Maximum zoom factor (world units per pixel).
    pub max_zoom: f64,
    /// Pinch-distance change (and registry jitter gate) in pixels below
    /// which no zoom step is taken.
    pub zoom_sensitivity: f64,
    /// Relative zoom step per qualifying pinch-distance change.
    pub zoom_increment: Vec2,
    /// Anchor zoom steps at the gesture position instead of the camera
    /// position.
    pub zoom_at_point: bool,
    /// Keep panning with the midpoint while two fingers are down.
    pub move_while_zooming: bool,
    /// Fold mouse interaction into the touch pipeline.
    pub handle_mouse_events: bool,
    /// Relative zoom step per mouse wheel click.
    pub mouse_zoom_increment: Vec2,
    /// What a trackpad two-finger pan gesture does.
    pub trackpad_pan_behavior: TrackpadPanBehavior,
    /// Scale applied to trackpad pan deltas.
    pub trackpad_pan_speed: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            stop_on_limit: true,
            return_speed: 0.1,
            pan_sensitivity: 1.0,
            fling_action: true,
            min_fling_velocity: 100.0,
            deceleration: 2500.0,
            min_zoom: 0.1,
            max_zoom: 10.0,
            zoom_sensitivity: 5.0,
            zoom_increment: Vec2::new(0.1, 0.1),
            zoom_at_point: true,
            move_while_zooming: false,
            handle_mouse_events: true,
            mouse_zoom_increment: Vec2::new(0.1, 0.1),
            trackpad_pan_behavior: TrackpadPanBehavior::default(),
            trackpad_pan_speed: 1.0,
        }
    }
}

impl ControllerConfig {
    /// Returns the configuration with every value clamped into its
    /// documented range.
    #[must_use]
    pub(crate) fn sanitized(mut self) -> Self {
        self.return_speed = self.return_speed.clamp(0.01, 1.0);
        self.pan_sensitivity = self.pan_sensitivity.clamp(0.1, 1.0);
        self.deceleration = self.deceleration.clamp(1.0, 10_000.0);
        self.min_fling_velocity = self.min_fling_velocity.max(0.0);
        self.zoom_sensitivity = self.zoom_sensitivity.max(0.0);
        if self.min_zoom > self.max_zoom {
            core::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }
        self
    }
}
