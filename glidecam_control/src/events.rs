// Copyright 2026 the Glidecam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Pointer identifier reserved for the mouse.
///
/// Mouse interaction is folded into the touch pipeline under this identifier,
/// so a primary-button drag behaves exactly like a one-finger drag.
pub const MOUSE_POINTER_ID: i64 = 0;

/// A mouse button, including the wheel "buttons" emitted per wheel click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary (usually left) button.
    Primary,
    /// The secondary (usually right) button.
    Secondary,
    /// The middle button.
    Middle,
    /// One upward wheel click.
    WheelUp,
    /// One downward wheel click.
    WheelDown,
}

/// A pre-decoded input event delivered by the host.
///
/// Every variant carries a viewport-space position in pixels; drag and motion
/// variants additionally carry the relative delta since the previous event of
/// the same kind. Variants that do not apply to the current configuration are
/// ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A touch point went down.
    TouchDown {
        /// Device-provided touch index.
        index: i64,
        /// Position in viewport pixels.
        position: Point,
    },
    /// A touch point was released.
    TouchUp {
        /// Device-provided touch index.
        index: i64,
        /// Position in viewport pixels.
        position: Point,
    },
    /// A touch point moved while down.
    TouchDrag {
        /// Device-provided touch index.
        index: i64,
        /// Position in viewport pixels.
        position: Point,
        /// Movement since the previous drag event for this index.
        delta: Vec2,
    },
    /// A mouse button changed state.
    MouseButton {
        /// Which button.
        button: PointerButton,
        /// `true` on press, `false` on release.
        pressed: bool,
        /// Position in viewport pixels.
        position: Point,
    },
    /// The mouse moved.
    MouseMotion {
        /// Position in viewport pixels.
        position: Point,
        /// Movement since the previous motion event.
        delta: Vec2,
    },
    /// A trackpad two-finger pan gesture.
    TrackpadPan {
        /// Position in viewport pixels.
        position: Point,
        /// Gesture delta since the previous pan event.
        delta: Vec2,
    },
    /// A trackpad pinch (magnify) gesture.
    Magnify {
        /// Position in viewport pixels.
        position: Point,
        /// Magnification factor; `> 1.0` spreads, `< 1.0` pinches together.
        factor: f64,
    },
}
