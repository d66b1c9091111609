//! Pointer input as seen by the drag tracker.
//!
//! Mouse and touch events are folded into one [`DragEvent`] so coordinate
//! extraction happens in a single place.

use crate::error::DragError;
use web_sys::{MouseEvent, TouchEvent};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to `self`.
    pub fn offset_from(self, origin: Point) -> (f64, f64) {
        (self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Mouse,
    Touch,
}

/// Anything the tracker can read a pointer position from.
pub trait PointerInput {
    fn kind(&self) -> InputKind;

    /// Mouse input reports viewport coordinates, touch input page coordinates
    /// of the first touch point.
    fn position(&self) -> Result<Point, DragError>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DragEvent {
    Mouse(MouseEvent),
    Touch(TouchEvent),
}

impl From<MouseEvent> for DragEvent {
    fn from(e: MouseEvent) -> Self {
        DragEvent::Mouse(e)
    }
}

impl From<TouchEvent> for DragEvent {
    fn from(e: TouchEvent) -> Self {
        DragEvent::Touch(e)
    }
}

impl PointerInput for DragEvent {
    fn kind(&self) -> InputKind {
        match self {
            DragEvent::Mouse(_) => InputKind::Mouse,
            DragEvent::Touch(_) => InputKind::Touch,
        }
    }

    fn position(&self) -> Result<Point, DragError> {
        match self {
            DragEvent::Mouse(e) => Ok(Point::new(e.client_x() as f64, e.client_y() as f64)),
            DragEvent::Touch(e) => e
                .touches()
                .get(0)
                .map(|t| Point::new(t.page_x() as f64, t.page_y() as f64))
                .ok_or(DragError::NoTouchPoint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_current_minus_origin() {
        let origin = Point::new(10.0, 20.0);
        assert_eq!(Point::new(15.0, 26.0).offset_from(origin), (5.0, 6.0));
        assert_eq!(Point::new(8.0, 20.0).offset_from(origin), (-2.0, 0.0));
    }

    #[test]
    fn origin_offset_is_zero() {
        let p = Point::new(3.5, -1.0);
        assert_eq!(p.offset_from(p), (0.0, 0.0));
    }
}
