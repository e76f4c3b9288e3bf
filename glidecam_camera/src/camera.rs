// Copyright 2026 the Glidecam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::anchor::AnchorMode;

/// Pseudo-infinite coordinate used for the hard limits while elastic return
/// is active. Wide enough that no realistic pan or fling reaches it, small
/// enough that `f64` arithmetic near it stays exact to well under a pixel.
const LIMIT_UNBOUNDED: f64 = 1.0e12;

/// Minimum zoom factor accepted by [`BoundedCamera::set_zoom_limits`].
///
/// Keeps the world-units-per-pixel factor strictly positive so screen/world
/// conversions never divide by zero.
const ZOOM_FLOOR: f64 = 1.0e-6;

fn unbounded_rect() -> Rect {
    Rect::new(
        -LIMIT_UNBOUNDED,
        -LIMIT_UNBOUNDED,
        LIMIT_UNBOUNDED,
        LIMIT_UNBOUNDED,
    )
}

fn clamp_point(p: Point, r: Rect) -> Point {
    Point::new(p.x.clamp(r.x0, r.x1), p.y.clamp(r.y0, r.y1))
}

/// 2D camera constrained to a pannable/zoomable bounded region.
///
/// `BoundedCamera` tracks a world-space position and a uniform zoom factor
/// (world units per viewport pixel), and derives from the developer-configured
/// base limits the rectangle of positions the camera may occupy without the
/// viewport ever rendering outside those limits. It can be used to:
/// - Clamp every position write into that rectangle (`stop_on_limit`), or
/// - Let the position overshoot and glide back elastically ([`Self::settle`]).
/// - Zoom within a clamped range, keeping a chosen focus point stationary.
///
/// The camera is headless: it never animates on its own. A controller drives
/// it through [`Self::set_position`], [`Self::set_zoom`] / [`Self::zoom_at`]
/// and one [`Self::settle`] call per idle frame.
#[derive(Clone, Debug)]
pub struct BoundedCamera {
    position: Point,
    zoom: Vec2,
    limit_target: Point,
    viewport: Size,
    anchor: AnchorMode,
    base_limits: Rect,
    hard_limits: Rect,
    valid_limit: Rect,
    stop_on_limit: bool,
    return_speed: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoomed_to_min: bool,
    zoomed_to_max: bool,
}

impl BoundedCamera {
    /// Creates a camera for the given viewport size.
    ///
    /// - Initial position is the world origin, zoom is `1.0`.
    /// - Base limits start effectively unbounded; set them with
    ///   [`Self::set_base_limits`].
    /// - `stop_on_limit` starts enabled; zoom is clamped to `[0.1, 10.0]`.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let mut camera = Self {
            position: Point::ZERO,
            zoom: Vec2::new(1.0, 1.0),
            limit_target: Point::ZERO,
            viewport,
            anchor: AnchorMode::default(),
            base_limits: unbounded_rect(),
            hard_limits: unbounded_rect(),
            valid_limit: unbounded_rect(),
            stop_on_limit: true,
            return_speed: 0.1,
            min_zoom: 0.1,
            max_zoom: 10.0,
            zoomed_to_min: false,
            zoomed_to_max: false,
        };
        camera.recompute_valid_limit();
        camera
    }

    /// Returns the current world-space position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the current uniform zoom vector (world units per pixel).
    #[must_use]
    pub fn zoom(&self) -> Vec2 {
        self.zoom
    }

    /// Returns the attractor the elastic return pulls the position toward.
    ///
    /// Always equal to the current position clamped into the valid limit
    /// rectangle; identical to the position itself while `stop_on_limit` is
    /// enabled or the camera is in bounds.
    #[must_use]
    pub fn limit_target(&self) -> Point {
        self.limit_target
    }

    /// Returns the current viewport size in pixels.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size in pixels.
    ///
    /// The valid limit rectangle depends on the viewport extent, so it is
    /// recomputed and the position re-clamped.
    pub fn set_viewport_size(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.recompute_valid_limit();
        self.reapply_position();
    }

    /// Returns the current anchor mode.
    #[must_use]
    pub fn anchor_mode(&self) -> AnchorMode {
        self.anchor
    }

    /// Sets how the visible rectangle hangs off the camera position.
    pub fn set_anchor_mode(&mut self, anchor: AnchorMode) {
        if self.anchor == anchor {
            return;
        }
        self.anchor = anchor;
        self.recompute_valid_limit();
        self.reapply_position();
    }

    /// Returns the developer-configured base limit rectangle in world units.
    #[must_use]
    pub fn base_limits(&self) -> Rect {
        self.base_limits
    }

    /// Sets the base limit rectangle in world units.
    pub fn set_base_limits(&mut self, limits: Rect) {
        if self.base_limits == limits {
            return;
        }
        self.base_limits = limits;
        if self.stop_on_limit {
            self.hard_limits = limits;
        }
        self.recompute_valid_limit();
        self.reapply_position();
    }

    /// Returns the derived rectangle the position must stay within so the
    /// viewport never renders outside the base limits.
    #[must_use]
    pub fn valid_limit(&self) -> Rect {
        self.valid_limit
    }

    /// Returns whether position writes are hard-clamped into the valid limit.
    #[must_use]
    pub fn stop_on_limit(&self) -> bool {
        self.stop_on_limit
    }

    /// Enables or disables hard clamping at the limits.
    ///
    /// Setting the current value again is a no-op. Enabling snaps the hard
    /// limits to the base rectangle and pulls the position back inside;
    /// disabling widens the hard limits to a pseudo-infinite range so the
    /// camera may overshoot while the elastic return steers it back.
    pub fn set_stop_on_limit(&mut self, stop: bool) {
        if self.stop_on_limit == stop {
            return;
        }
        self.stop_on_limit = stop;
        self.hard_limits = if stop {
            self.base_limits
        } else {
            unbounded_rect()
        };
        self.reapply_position();
    }

    /// Returns the elastic return rate.
    #[must_use]
    pub fn return_speed(&self) -> f64 {
        self.return_speed
    }

    /// Sets the fraction of the remaining out-of-limit offset recovered per
    /// [`Self::settle`] call, clamped to `[0.01, 1.0]`.
    pub fn set_return_speed(&mut self, speed: f64) {
        self.return_speed = speed.clamp(0.01, 1.0);
    }

    /// Returns the minimum zoom factor.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Returns the maximum zoom factor.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom` and
    /// floored at a small positive value. The current zoom is re-clamped into
    /// the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom.max(ZOOM_FLOOR);
        self.max_zoom = max_zoom.max(self.min_zoom);
        let zoom = self.zoom;
        self.zoomed_to_min = false;
        self.zoomed_to_max = false;
        self.set_zoom(zoom);
    }

    /// Returns `true` if the last zoom write was pinned at the minimum.
    #[must_use]
    pub fn zoomed_to_min(&self) -> bool {
        self.zoomed_to_min
    }

    /// Returns `true` if the last zoom write was pinned at the maximum.
    #[must_use]
    pub fn zoomed_to_max(&self) -> bool {
        self.zoomed_to_max
    }

    /// Sets the camera position.
    ///
    /// Every mutation path funnels through here. The position is always
    /// clamped into the hard limits; with `stop_on_limit` it is additionally
    /// clamped into the valid limit rectangle, otherwise it is stored as-is
    /// while the limit target records the clamped value for the elastic
    /// return.
    pub fn set_position(&mut self, position: Point) {
        let position = clamp_point(position, self.hard_limits);
        let clamped = clamp_point(position, self.valid_limit);
        if self.stop_on_limit {
            self.position = clamped;
        } else {
            self.position = position;
        }
        self.limit_target = clamped;
    }

    /// Sets the zoom, enforcing uniformity and the configured range.
    ///
    /// The `x` component drives the uniform factor. A request at or below the
    /// minimum pins to the minimum and raises the min flag; at or above the
    /// maximum pins to the maximum and raises the max flag; in between both
    /// flags clear. Any change recomputes the valid limit rectangle and
    /// re-applies the position through [`Self::set_position`].
    pub fn set_zoom(&mut self, zoom: Vec2) {
        let requested = zoom.x;
        let (factor, to_min, to_max) = if requested <= self.min_zoom {
            (self.min_zoom, true, false)
        } else if requested >= self.max_zoom {
            (self.max_zoom, false, true)
        } else {
            (requested.clamp(self.min_zoom, self.max_zoom), false, false)
        };
        if self.zoom.x == factor
            && self.zoom.y == factor
            && self.zoomed_to_min == to_min
            && self.zoomed_to_max == to_max
        {
            return;
        }
        self.zoom = Vec2::new(factor, factor);
        self.zoomed_to_min = to_min;
        self.zoomed_to_max = to_max;
        self.recompute_valid_limit();
        self.reapply_position();
    }

    /// Zooms while keeping the world under `focus` stationary on screen.
    ///
    /// `focus` is a viewport-space point in pixels. With a center anchor it
    /// is first translated to be viewport-center-relative. The requested zoom
    /// is floored at the minimum per axis and applied via [`Self::set_zoom`];
    /// if the write was pinned at either end no repositioning happens.
    pub fn zoom_at(&mut self, new_zoom: Vec2, focus: Point) {
        let delta = new_zoom - self.zoom;
        let focus = focus.to_vec2() - self.anchor_offset();
        let floored = Vec2::new(
            new_zoom.x.max(self.min_zoom),
            new_zoom.y.max(self.min_zoom),
        );
        self.set_zoom(floored);
        if !self.zoomed_to_min && !self.zoomed_to_max {
            let shift = Vec2::new(focus.x * delta.x, focus.y * delta.y);
            self.set_position(self.position - shift);
        }
    }

    /// Positions the camera so `world_point` sits at the viewport center.
    pub fn center_on(&mut self, world_point: Point) {
        let target = match self.anchor {
            AnchorMode::DragCenter => world_point,
            AnchorMode::FixedTopLeft => {
                let half = Vec2::new(
                    self.viewport.width / 2.0 * self.zoom.x,
                    self.viewport.height / 2.0 * self.zoom.y,
                );
                world_point - half
            }
        };
        self.set_position(target);
    }

    /// Advances the elastic return by one idle frame.
    ///
    /// While `stop_on_limit` is disabled and the position sits outside the
    /// valid limit rectangle, each call moves the position a `return_speed`
    /// fraction of the way toward the limit target. The approach is monotone
    /// and never overshoots. No-op otherwise.
    pub fn settle(&mut self) {
        if self.stop_on_limit || self.position == self.limit_target {
            return;
        }
        let next = self.position.lerp(self.limit_target, self.return_speed);
        self.set_position(next);
    }

    /// Returns `true` if the position is outside the valid limit on the X axis.
    #[must_use]
    pub fn outside_valid_x(&self) -> bool {
        self.position.x < self.valid_limit.x0 || self.position.x > self.valid_limit.x1
    }

    /// Returns `true` if the position is outside the valid limit on the Y axis.
    #[must_use]
    pub fn outside_valid_y(&self) -> bool {
        self.position.y < self.valid_limit.y0 || self.position.y > self.valid_limit.y1
    }

    /// Returns `true` if the position is outside the valid limit on any axis.
    #[must_use]
    pub fn is_out_of_limits(&self) -> bool {
        self.outside_valid_x() || self.outside_valid_y()
    }

    /// Converts a viewport-space point in pixels into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        let rel = screen.to_vec2() - self.anchor_offset();
        self.position + Vec2::new(rel.x * self.zoom.x, rel.y * self.zoom.y)
    }

    /// Converts a world-space point into viewport coordinates in pixels.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        let rel = world - self.position;
        let px = Vec2::new(rel.x / self.zoom.x, rel.y / self.zoom.y);
        (px + self.anchor_offset()).to_point()
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            position: self.position,
            zoom: self.zoom,
            limit_target: self.limit_target,
            viewport: self.viewport,
            anchor: self.anchor,
            base_limits: self.base_limits,
            valid_limit: self.valid_limit,
            stop_on_limit: self.stop_on_limit,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            zoomed_to_min: self.zoomed_to_min,
            zoomed_to_max: self.zoomed_to_max,
        }
    }

    /// Pixel offset of the anchor point within the viewport.
    fn anchor_offset(&self) -> Vec2 {
        match self.anchor {
            AnchorMode::DragCenter => {
                Vec2::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
            }
            AnchorMode::FixedTopLeft => Vec2::ZERO,
        }
    }

    fn recompute_valid_limit(&mut self) {
        let extent = Vec2::new(
            self.viewport.width * self.zoom.x,
            self.viewport.height * self.zoom.y,
        );
        let b = self.base_limits;
        let r = match self.anchor {
            AnchorMode::DragCenter => Rect::new(
                b.x0 + extent.x / 2.0,
                b.y0 + extent.y / 2.0,
                b.x1 - extent.x / 2.0,
                b.y1 - extent.y / 2.0,
            ),
            AnchorMode::FixedTopLeft => Rect::new(b.x0, b.y0, b.x1 - extent.x, b.y1 - extent.y),
        };
        // A viewport larger than the base limits leaves no valid span on an
        // axis; collapse that span to its midpoint so clamping stays total.
        let (x0, x1) = collapse(r.x0, r.x1);
        let (y0, y1) = collapse(r.y0, r.y1);
        self.valid_limit = Rect::new(x0, y0, x1, y1);
    }

    fn reapply_position(&mut self) {
        let position = self.position;
        self.set_position(position);
    }
}

fn collapse(lo: f64, hi: f64) -> (f64, f64) {
    if lo > hi {
        let mid = (lo + hi) / 2.0;
        (mid, mid)
    } else {
        (lo, hi)
    }
}

/// Debug snapshot of a [`BoundedCamera`] state.
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Current world-space position.
    pub position: Point,
    /// Current uniform zoom vector.
    pub zoom: Vec2,
    /// Attractor for the elastic return.
    pub limit_target: Point,
    /// Viewport size in pixels.
    pub viewport: Size,
    /// Anchor mode in effect.
    pub anchor: AnchorMode,
    /// Developer-configured base limits.
    pub base_limits: Rect,
    /// Derived valid position rectangle.
    pub valid_limit: Rect,
    /// Whether position writes are hard-clamped.
    pub stop_on_limit: bool,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
    /// Whether the last zoom write pinned at the minimum.
    pub zoomed_to_min: bool,
    /// Whether the last zoom write pinned at the maximum.
    pub zoomed_to_max: bool,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{AnchorMode, BoundedCamera};

    fn camera_with_limits(anchor: AnchorMode) -> BoundedCamera {
        let mut camera = BoundedCamera::new(Size::new(800.0, 600.0));
        camera.set_anchor_mode(anchor);
        camera.set_base_limits(Rect::new(0.0, 0.0, 4000.0, 3000.0));
        camera
    }

    #[test]
    fn stop_on_limit_clamps_every_position_write() {
        let mut camera = camera_with_limits(AnchorMode::DragCenter);

        camera.set_position(Point::new(-10_000.0, 50_000.0));
        let p = camera.position();
        let valid = camera.valid_limit();
        assert!(p.x >= valid.x0 && p.x <= valid.x1);
        assert!(p.y >= valid.y0 && p.y <= valid.y1);
        assert_eq!(p, camera.limit_target());
    }

    #[test]
    fn valid_limit_keeps_viewport_inside_base_limits() {
        for anchor in [AnchorMode::DragCenter, AnchorMode::FixedTopLeft] {
            let mut camera = camera_with_limits(anchor);
            camera.set_zoom(Vec2::new(2.0, 2.0));

            // Push toward each corner; the screen corners must stay inside.
            for target in [
                Point::new(-1e9, -1e9),
                Point::new(1e9, -1e9),
                Point::new(-1e9, 1e9),
                Point::new(1e9, 1e9),
            ] {
                camera.set_position(target);
                let base = camera.base_limits();
                let top_left = camera.screen_to_world(Point::ZERO);
                let bottom_right = camera.screen_to_world(Point::new(800.0, 600.0));
                assert!(top_left.x >= base.x0 - 1e-9 && top_left.y >= base.y0 - 1e-9);
                assert!(bottom_right.x <= base.x1 + 1e-9 && bottom_right.y <= base.y1 + 1e-9);
            }
        }
    }

    #[test]
    fn elastic_mode_records_target_and_settles_monotonically() {
        let mut camera = camera_with_limits(AnchorMode::DragCenter);
        camera.set_stop_on_limit(false);

        camera.set_position(Point::new(-2000.0, 1000.0));
        // Position overshoots, target is the clamped value.
        assert_eq!(camera.position(), Point::new(-2000.0, 1000.0));
        let target = camera.limit_target();
        assert_eq!(target.x, camera.valid_limit().x0);

        let mut distance = (camera.position() - target).hypot();
        for _ in 0..200 {
            camera.settle();
            let d = (camera.position() - target).hypot();
            assert!(d <= distance + 1e-12);
            distance = d;
        }
        assert!(distance < 1.0);
        // The in-bounds axis never moved.
        assert_eq!(camera.position().y, 1000.0);
    }

    #[test]
    fn settle_is_inert_while_stop_on_limit() {
        let mut camera = camera_with_limits(AnchorMode::DragCenter);
        camera.set_position(Point::new(2000.0, 1500.0));
        let before = camera.position();
        camera.settle();
        assert_eq!(camera.position(), before);
    }

    #[test]
    fn zoom_clamps_and_pins_flags() {
        let mut camera = BoundedCamera::new(Size::new(800.0, 600.0));
        camera.set_zoom_limits(0.5, 4.0);

        camera.set_zoom(Vec2::new(100.0, 100.0));
        assert_eq!(camera.zoom(), Vec2::new(4.0, 4.0));
        assert!(camera.zoomed_to_max() && !camera.zoomed_to_min());

        camera.set_zoom(Vec2::new(0.01, 0.01));
        assert_eq!(camera.zoom(), Vec2::new(0.5, 0.5));
        assert!(camera.zoomed_to_min() && !camera.zoomed_to_max());

        camera.set_zoom(Vec2::new(2.0, 2.0));
        assert_eq!(camera.zoom(), Vec2::new(2.0, 2.0));
        assert!(!camera.zoomed_to_min() && !camera.zoomed_to_max());
    }

    #[test]
    fn set_zoom_limits_normalizes_inverted_range() {
        let mut camera = BoundedCamera::new(Size::new(800.0, 600.0));
        camera.set_zoom_limits(8.0, 0.25);
        assert_eq!(camera.min_zoom(), 0.25);
        assert_eq!(camera.max_zoom(), 8.0);
    }

    #[test]
    fn zoom_at_keeps_focus_stationary() {
        for anchor in [AnchorMode::DragCenter, AnchorMode::FixedTopLeft] {
            let mut camera = BoundedCamera::new(Size::new(800.0, 600.0));
            camera.set_anchor_mode(anchor);
            camera.set_position(Point::new(100.0, 200.0));

            let focus = Point::new(620.0, 130.0);
            let world_before = camera.screen_to_world(focus);
            camera.zoom_at(Vec2::new(2.5, 2.5), focus);
            let world_after = camera.screen_to_world(focus);

            assert!((world_after.x - world_before.x).abs() < 1e-9);
            assert!((world_after.y - world_before.y).abs() < 1e-9);
        }
    }

    #[test]
    fn zoom_at_pinned_at_limit_does_not_reposition() {
        let mut camera = BoundedCamera::new(Size::new(800.0, 600.0));
        camera.set_zoom_limits(0.5, 2.0);
        let before = camera.position();

        camera.zoom_at(Vec2::new(50.0, 50.0), Point::new(10.0, 10.0));
        assert_eq!(camera.zoom(), Vec2::new(2.0, 2.0));
        assert_eq!(camera.position(), before);
    }

    #[test]
    fn viewport_resize_changes_only_the_offset_term() {
        let mut camera = camera_with_limits(AnchorMode::FixedTopLeft);
        let base = camera.base_limits();
        let before = camera.valid_limit();

        camera.set_viewport_size(Size::new(1000.0, 700.0));
        let after = camera.valid_limit();

        assert_eq!(camera.base_limits(), base);
        // Near edges are pinned to the base rect, far edges track the
        // viewport extent.
        assert_eq!(after.x0, before.x0);
        assert_eq!(after.y0, before.y0);
        assert_eq!(after.x1, base.x1 - 1000.0);
        assert_eq!(after.y1, base.y1 - 700.0);
    }

    #[test]
    fn stop_on_limit_toggle_same_value_is_noop() {
        let mut camera = camera_with_limits(AnchorMode::DragCenter);
        camera.set_position(Point::new(1234.0, 987.0));
        let before = camera.debug_info();

        camera.set_stop_on_limit(true);
        let after = camera.debug_info();
        assert_eq!(before.position, after.position);
        assert_eq!(before.limit_target, after.limit_target);
        assert_eq!(before.valid_limit, after.valid_limit);
        assert_eq!(before.stop_on_limit, after.stop_on_limit);
    }

    #[test]
    fn toggling_stop_on_limit_back_on_reclamps() {
        let mut camera = camera_with_limits(AnchorMode::DragCenter);
        camera.set_stop_on_limit(false);
        camera.set_position(Point::new(-2000.0, -2000.0));
        assert!(camera.is_out_of_limits());

        camera.set_stop_on_limit(true);
        assert!(!camera.is_out_of_limits());
        assert_eq!(camera.position(), camera.limit_target());
    }

    #[test]
    fn oversized_viewport_collapses_valid_span_to_midpoint() {
        let mut camera = BoundedCamera::new(Size::new(800.0, 600.0));
        camera.set_base_limits(Rect::new(0.0, 0.0, 100.0, 100.0));

        let valid = camera.valid_limit();
        assert_eq!(valid.x0, valid.x1);
        assert_eq!(valid.x0, 50.0);

        camera.set_position(Point::new(999.0, -999.0));
        assert_eq!(camera.position(), Point::new(50.0, 50.0));
    }

    #[test]
    fn center_on_places_world_point_at_viewport_center() {
        for anchor in [AnchorMode::DragCenter, AnchorMode::FixedTopLeft] {
            let mut camera = BoundedCamera::new(Size::new(800.0, 600.0));
            camera.set_anchor_mode(anchor);
            camera.set_zoom(Vec2::new(2.0, 2.0));

            let target = Point::new(300.0, -150.0);
            camera.center_on(target);
            let center_world = camera.screen_to_world(Point::new(400.0, 300.0));
            assert!((center_world.x - target.x).abs() < 1e-9);
            assert!((center_world.y - target.y).abs() < 1e-9);
        }
    }

    #[test]
    fn screen_world_roundtrip() {
        let mut camera = BoundedCamera::new(Size::new(800.0, 600.0));
        camera.set_position(Point::new(42.0, -17.0));
        camera.set_zoom(Vec2::new(0.5, 0.5));

        let screen = Point::new(123.0, 456.0);
        let back = camera.world_to_screen(camera.screen_to_world(screen));
        assert!((back.x - screen.x).abs() < 1e-9);
        assert!((back.y - screen.y).abs() < 1e-9);
    }
}
