// Copyright 2026 the Glidecam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the camera's on-screen rectangle hangs off its position point.
///
/// This mode is consulted by [`crate::BoundedCamera`] both when deriving the
/// valid position rectangle and when interpreting focus points for
/// [`crate::BoundedCamera::zoom_at`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnchorMode {
    /// The camera position is the top-left corner of the visible rectangle.
    FixedTopLeft,
    /// The camera position is the center of the visible rectangle.
    #[default]
    DragCenter,
}
