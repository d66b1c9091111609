//! Drag state snapshots handed to callbacks.

use crate::input::Point;
use serde::{Deserialize, Serialize};

/// Snapshot of a drag gesture.
///
/// Idle when `start_x`/`start_y` are absent. Offsets appear only after the
/// first move of a gesture. Values are never mutated in place: every
/// transition produces a new snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_y: Option<f64>,
    /// Milliseconds since the Unix epoch when the gesture began.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
}

impl DragState {
    pub fn started(at: Point, time: f64) -> Self {
        Self {
            start_x: Some(at.x),
            start_y: Some(at.y),
            start_time: Some(time),
            offset_x: None,
            offset_y: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some() && self.start_y.is_some()
    }

    pub fn start(&self) -> Option<Point> {
        Some(Point::new(self.start_x?, self.start_y?))
    }

    pub fn offset(&self) -> Option<(f64, f64)> {
        Some((self.offset_x?, self.offset_y?))
    }

    /// Candidate state with offsets towards `current`; `None` while idle.
    pub fn moved_to(&self, current: Point) -> Option<Self> {
        let (dx, dy) = current.offset_from(self.start()?);
        Some(Self {
            offset_x: Some(dx),
            offset_y: Some(dy),
            ..*self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let s = DragState::default();
        assert!(!s.is_dragging());
        assert_eq!(s.start(), None);
        assert_eq!(s.offset(), None);
    }

    #[test]
    fn started_has_no_offset() {
        let s = DragState::started(Point::new(10.0, 20.0), 1_000.0);
        assert!(s.is_dragging());
        assert_eq!(s.start(), Some(Point::new(10.0, 20.0)));
        assert_eq!(s.start_time, Some(1_000.0));
        assert_eq!(s.offset(), None);
    }

    #[test]
    fn moved_to_keeps_start_and_sets_offset() {
        let s = DragState::started(Point::new(10.0, 20.0), 5.0);
        let m = s.moved_to(Point::new(15.0, 26.0)).unwrap();
        assert_eq!(m.offset(), Some((5.0, 6.0)));
        assert_eq!(m.start(), s.start());
        assert_eq!(m.start_time, Some(5.0));
        // the source snapshot is untouched
        assert_eq!(s.offset(), None);
    }

    #[test]
    fn offsets_are_relative_to_start_not_previous_move() {
        let s = DragState::started(Point::new(0.0, 0.0), 0.0);
        let a = s.moved_to(Point::new(4.0, 4.0)).unwrap();
        let b = a.moved_to(Point::new(1.0, -3.0)).unwrap();
        assert_eq!(b.offset(), Some((1.0, -3.0)));
    }

    #[test]
    fn idle_state_cannot_move() {
        assert_eq!(DragState::default().moved_to(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn half_started_state_is_not_dragging() {
        let s = DragState {
            start_x: Some(1.0),
            ..Default::default()
        };
        assert!(!s.is_dragging());
        assert_eq!(s.moved_to(Point::new(2.0, 2.0)), None);
    }

    #[test]
    fn serializes_like_the_js_mapping() {
        let s = DragState::started(Point::new(10.0, 20.0), 42.0);
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r#"{"startX":10.0,"startY":20.0,"startTime":42.0}"#
        );
        let m = s.moved_to(Point::new(15.0, 26.0)).unwrap();
        let v = serde_json::to_value(m).unwrap();
        assert_eq!(v["offsetX"], 5.0);
        assert_eq!(v["offsetY"], 6.0);
        assert_eq!(serde_json::to_string(&DragState::default()).unwrap(), "{}");
    }

    #[test]
    fn deserializes_partial_mapping() {
        let s: DragState = serde_json::from_str(r#"{"startX":1,"startY":2}"#).unwrap();
        assert!(s.is_dragging());
        assert_eq!(s.start_time, None);
    }
}
