// Copyright 2026 the Glidecam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fling kinematics: qualification at release, deceleration while flying.

use glidecam_camera::BoundedCamera;
use kurbo::{Point, Vec2};

/// Floor for time deltas so velocity estimates never divide by zero.
const MIN_SAMPLE_DT: f64 = 1.0e-4;

/// Time within which an axis that crossed the valid limit is forced to rest,
/// in seconds.
const BOUNCE_STOP_TIME: f64 = 0.2;

/// Inertial motion state. Present (non-zero) only while flying.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlingState {
    /// Current velocity in px/s.
    pub velocity: Vec2,
    /// Per-axis deceleration in px/s², chosen so both axes rest together.
    pub deceleration: Vec2,
    /// Time until the fling self-terminates, in seconds.
    pub remaining: f64,
}

/// Decides whether a release qualifies as a fling.
///
/// `start` and `end` delimit the last completed sample window and `dt` its
/// duration. Qualification is inclusive: a release at exactly
/// `min_fling_velocity` flings. The per-axis deceleration is derived from the
/// shared estimated duration so neither axis stops visibly before the other.
pub(crate) fn qualify(
    start: Point,
    end: Point,
    dt: f64,
    min_fling_velocity: f64,
    deceleration: f64,
) -> Option<FlingState> {
    let dt = dt.max(MIN_SAMPLE_DT);
    let initial_velocity = start.distance(end) / dt;
    if initial_velocity < min_fling_velocity {
        return None;
    }
    let duration = (initial_velocity / deceleration).max(MIN_SAMPLE_DT);
    let velocity = (start - end) / dt;
    Some(FlingState {
        velocity,
        deceleration: velocity / duration,
        remaining: duration,
    })
}

/// Advances the fling by one frame, moving the camera through its position
/// setter. Returns `false` once the inertia is exhausted.
pub(crate) fn step(fling: &mut FlingState, camera: &mut BoundedCamera, dt: f64) -> bool {
    fling.remaining -= dt;
    if fling.remaining <= 0.0 {
        *fling = FlingState::default();
        return false;
    }
    // Past the limit the linear glide turns into a short damped stop; the
    // elastic return takes over from there.
    if camera.outside_valid_x() {
        fling.deceleration.x = fling.velocity.x / BOUNCE_STOP_TIME;
    }
    if camera.outside_valid_y() {
        fling.deceleration.y = fling.velocity.y / BOUNCE_STOP_TIME;
    }
    camera.set_position(camera.position() + fling.velocity * dt);
    fling.velocity -= fling.deceleration * dt;
    true
}

#[cfg(test)]
mod tests {
    use glidecam_camera::BoundedCamera;
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{FlingState, qualify, step};

    #[test]
    fn fast_swipe_qualifies_with_signed_velocity() {
        let fling = qualify(
            Point::new(0.0, 0.0),
            Point::new(300.0, 0.0),
            0.1,
            100.0,
            2500.0,
        )
        .unwrap();
        assert_eq!(fling.velocity, Vec2::new(-3000.0, 0.0));
        // 3000 px/s over 2500 px/s² rests in 1.2 s.
        assert!((fling.remaining - 1.2).abs() < 1e-12);
    }

    #[test]
    fn threshold_is_inclusive() {
        // 10 px over 0.1 s is exactly 100 px/s.
        let fling = qualify(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            0.1,
            100.0,
            2500.0,
        );
        assert!(fling.is_some());

        let slow = qualify(
            Point::new(0.0, 0.0),
            Point::new(9.0, 0.0),
            0.1,
            100.0,
            2500.0,
        );
        assert!(slow.is_none());
    }

    #[test]
    fn axes_rest_together() {
        let fling = qualify(
            Point::new(0.0, 0.0),
            Point::new(300.0, 400.0),
            0.1,
            100.0,
            2500.0,
        )
        .unwrap();
        let stop_x = fling.velocity.x / fling.deceleration.x;
        let stop_y = fling.velocity.y / fling.deceleration.y;
        assert!((stop_x - stop_y).abs() < 1e-9);
        assert!((stop_x - fling.remaining).abs() < 1e-9);
    }

    #[test]
    fn zero_dt_is_guarded() {
        let fling = qualify(
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            0.0,
            100.0,
            2500.0,
        );
        // 5 px over the epsilon window is far above threshold, and every
        // field stays finite.
        let fling = fling.unwrap();
        assert!(fling.velocity.x.is_finite());
        assert!(fling.deceleration.x.is_finite());
        assert!(fling.remaining.is_finite());
    }

    #[test]
    fn step_glides_and_terminates() {
        let mut camera = BoundedCamera::new(Size::new(800.0, 600.0));
        let mut fling = FlingState {
            velocity: Vec2::new(-1000.0, 0.0),
            deceleration: Vec2::new(-2500.0, 0.0),
            remaining: 0.4,
        };

        let mut ticks = 0;
        while step(&mut fling, &mut camera, 1.0 / 60.0) {
            ticks += 1;
            assert!(ticks < 1000, "fling must self-terminate");
        }
        assert_eq!(fling, FlingState::default());
        // The camera glided in the velocity direction.
        assert!(camera.position().x < -100.0);
    }

    #[test]
    fn crossing_the_limit_forces_a_quick_stop() {
        let mut camera = BoundedCamera::new(Size::new(100.0, 100.0));
        camera.set_base_limits(Rect::new(-1000.0, -1000.0, 1000.0, 1000.0));
        camera.set_stop_on_limit(false);
        camera.set_position(Point::new(940.0, 0.0));
        assert!(!camera.outside_valid_x());

        let mut fling = FlingState {
            velocity: Vec2::new(600.0, 0.0),
            deceleration: Vec2::new(60.0, 0.0),
            remaining: 10.0,
        };

        // Drive until the camera has crossed the limit, then let the damped
        // stop play out.
        let dt = 1.0 / 60.0;
        while !camera.outside_valid_x() {
            assert!(step(&mut fling, &mut camera, dt));
        }
        let crossing_velocity = fling.velocity.x;
        let mut t = 0.0;
        while t < 3.0 && step(&mut fling, &mut camera, dt) {
            t += dt;
        }

        // Recomputing the deceleration from the live velocity sums to an
        // overshoot of at most `velocity * 0.2` past the crossing frame,
        // plus up to two frames of undamped travel around the crossing.
        let overshoot = camera.position().x - camera.valid_limit().x1;
        assert!(overshoot <= crossing_velocity * (0.2 + 2.0 * dt));
        assert!(fling.velocity.x.abs() < crossing_velocity * 0.05);
    }
}
