//! Raw touch event types forwarded by the shell.

use crate::draw::Point;

/// One active touch pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPointer {
    /// Pointer ID (stable for the lifetime of a touch)
    pub id: i32,
    /// X coordinate in view space
    pub x: f64,
    /// Y coordinate in view space
    pub y: f64,
}

impl TouchPointer {
    pub fn new(id: i32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Touch event kinds delivered to the canvas.
///
/// The pointer count of an event is the length of its pointer list.
#[derive(Debug, Clone, PartialEq)]
pub enum TouchEvent {
    /// First finger touched the canvas
    Down { pointer: TouchPointer },
    /// An additional finger touched while others are down
    PointerDown {
        pointer: TouchPointer,
        pointers: Vec<TouchPointer>,
    },
    /// One or more active pointers moved
    Move { pointers: Vec<TouchPointer> },
    /// Last finger lifted
    Up { pointer: TouchPointer },
    /// A non-last finger lifted
    PointerUp {
        pointer: TouchPointer,
        pointers: Vec<TouchPointer>,
    },
    /// Gesture aborted by the system
    Cancel,
    /// Pointer moved without touching (stylus hover)
    Hover { pointer: TouchPointer },
}

impl TouchEvent {
    /// Number of pointers down while this event was generated.
    pub fn pointer_count(&self) -> usize {
        match self {
            TouchEvent::Down { .. } | TouchEvent::Up { .. } => 1,
            TouchEvent::PointerDown { pointers, .. }
            | TouchEvent::PointerUp { pointers, .. }
            | TouchEvent::Move { pointers } => pointers.len(),
            TouchEvent::Cancel | TouchEvent::Hover { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_count_follows_pointer_list() {
        let first = TouchPointer::new(0, 1.0, 2.0);
        let second = TouchPointer::new(3, 4.0, 5.0);

        assert_eq!(TouchEvent::Down { pointer: first }.pointer_count(), 1);
        assert_eq!(TouchEvent::Up { pointer: first }.pointer_count(), 1);
        assert_eq!(
            TouchEvent::PointerDown {
                pointer: second,
                pointers: vec![first, second],
            }
            .pointer_count(),
            2
        );
        assert_eq!(
            TouchEvent::Move {
                pointers: vec![first, second, TouchPointer::new(9, 0.0, 0.0)],
            }
            .pointer_count(),
            3
        );
        assert_eq!(TouchEvent::Cancel.pointer_count(), 0);
        assert_eq!(TouchEvent::Hover { pointer: first }.pointer_count(), 0);
    }

    #[test]
    fn pointer_converts_to_point() {
        assert_eq!(TouchPointer::new(2, 7.5, -1.0).point(), Point::new(7.5, -1.0));
    }
}
