// Copyright 2026 the Glidecam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch registry: the source of truth for which pointers are down and where.

use kurbo::Point;
use smallvec::SmallVec;

/// Touch points tracked inline before spilling to the heap. Real hardware
/// rarely reports more than ten simultaneous contacts.
const INLINE_TOUCHES: usize = 10;

/// One tracked pointer: identifier plus last registered position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Pointer identifier (device touch index, or the mouse identifier).
    pub id: i64,
    /// Last registered position in viewport pixels.
    pub position: Point,
}

/// Insertion-ordered association from pointer identifier to last position.
///
/// Iteration order is insertion order, and the "first two" entries are the
/// pair that drives pinch geometry. Re-registering an existing identifier
/// updates its position in place without changing its slot.
#[derive(Clone, Debug, Default)]
pub struct TouchRegistry {
    points: SmallVec<[TouchPoint; INLINE_TOUCHES]>,
}

impl TouchRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            points: SmallVec::new(),
        }
    }

    /// Inserts the pointer, or updates its position if already tracked.
    pub fn register(&mut self, id: i64, position: Point) {
        if let Some(point) = self.points.iter_mut().find(|p| p.id == id) {
            point.position = position;
        } else {
            self.points.push(TouchPoint { id, position });
        }
    }

    /// Removes the pointer. Unknown identifiers are ignored.
    pub fn unregister(&mut self, id: i64) {
        self.points.retain(|p| p.id != id);
    }

    /// Removes every tracked pointer.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Number of tracked pointers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no pointer is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns `true` if the identifier is tracked.
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.points.iter().any(|p| p.id == id)
    }

    /// Last registered position for the identifier.
    #[must_use]
    pub fn position_of(&self, id: i64) -> Option<Point> {
        self.points.iter().find(|p| p.id == id).map(|p| p.position)
    }

    /// The first two tracked positions in insertion order.
    ///
    /// These are whichever two pointers remain in the registry, not
    /// necessarily the first two fingers that went down this sequence.
    #[must_use]
    pub fn first_two(&self) -> Option<(Point, Point)> {
        match self.points.as_slice() {
            [a, b, ..] => Some((a.position, b.position)),
            _ => None,
        }
    }

    /// Iterates over the tracked pointers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TouchPoint> {
        self.points.iter()
    }
}
