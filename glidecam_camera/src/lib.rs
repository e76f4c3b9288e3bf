// Copyright 2026 the Glidecam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=glidecam_camera --heading-base-level=0

//! Glidecam Camera: a bounded 2D camera model.
//!
//! This crate provides a small, headless camera over a world‑space plane. The
//! camera tracks a position, a uniform zoom factor, and a developer‑configured
//! rectangle of base limits, and derives from them the rectangle of positions
//! the camera may occupy without the viewport ever showing anything outside
//! those limits. It focuses on:
//! - Camera pose (position + uniform zoom, anchored per [`AnchorMode`]).
//! - Deriving and enforcing the valid position rectangle for the current
//!   anchor mode, viewport size, and zoom.
//! - Hard clamping or elastic return when the position leaves that rectangle.
//! - Zoom clamping with min/max pinning and focus‑stationary zooming.
//!
//! It does **not** interpret input events or animate on its own. Callers are
//! expected to:
//! - Drive position and zoom through [`BoundedCamera::set_position`] and
//!   [`BoundedCamera::set_zoom`] / [`BoundedCamera::zoom_at`].
//! - Call [`BoundedCamera::settle`] once per idle frame so an out‑of‑limit
//!   position glides back inside when hard clamping is disabled.
//! - Wire gesture interpretation (panning, pinching, inertia) in at a higher
//!   layer, for example with `glidecam_control`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use glidecam_camera::{AnchorMode, BoundedCamera};
//!
//! // 800x600 viewport, camera position at the viewport center.
//! let mut camera = BoundedCamera::new(Size::new(800.0, 600.0));
//! camera.set_anchor_mode(AnchorMode::DragCenter);
//! camera.set_base_limits(Rect::new(0.0, 0.0, 4000.0, 4000.0));
//!
//! // Positions are clamped so the viewport stays inside the base limits.
//! camera.set_position(Point::new(-500.0, 2000.0));
//! assert_eq!(camera.position(), Point::new(400.0, 2000.0));
//!
//! // Zoom toward a point on screen; the world under it stays put.
//! camera.zoom_at(Vec2::new(0.5, 0.5), Point::new(200.0, 150.0));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is a **uniform** 2D vector (`x == y` enforced) expressed in world
//!   units per viewport pixel, so a larger zoom value shows more world.
//! - All position writes go through [`BoundedCamera::set_position`]; there is
//!   no way to place the camera outside the hard limits.
//! - Rotation is intentionally left out and can be added later as a
//!   backwards‑compatible extension.
//!
//! This crate is `no_std`.

#![no_std]

mod anchor;
mod camera;

pub use anchor::AnchorMode;
pub use camera::{BoundedCamera, CameraDebugInfo};
