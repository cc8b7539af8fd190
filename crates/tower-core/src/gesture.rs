//! Drag-to-scrub gesture handling.
//!
//! While a pointer or touch is held the frame follows the horizontal drag
//! distance directly. On release the viewer snaps to the next stop frame in
//! the drag direction.

use crate::frame::FrameIndex;

/// Default pixels of horizontal travel per frame.
pub const DRAG_SENSITIVITY_PX: f64 = 8.0;

/// Direction of travel through the stop frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Drag state, alive only between pointer down and pointer up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Active {
        start_x: f64,
        last_x: f64,
        start_frame: FrameIndex,
    },
}

/// What the caller should do after a gesture ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    /// No gesture was in progress.
    NotDragging,
    /// Zero net displacement; treated as a click elsewhere.
    Click,
    /// Ease to the next stop in this direction.
    Snap(Direction),
}

#[derive(Debug, Clone)]
pub struct GestureController {
    state: DragState,
    sensitivity: f64,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(DRAG_SENSITIVITY_PX)
    }
}

impl GestureController {
    pub fn new(sensitivity: f64) -> Self {
        Self {
            state: DragState::Idle,
            sensitivity,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Active { .. })
    }

    /// Pointer or touch down at `x` while `frame` is shown.
    pub fn begin(&mut self, x: f64, frame: FrameIndex) {
        self.state = DragState::Active {
            start_x: x,
            last_x: x,
            start_frame: frame,
        };
    }

    /// Pointer or touch move. Returns the frame to show, if dragging.
    pub fn update(&mut self, x: f64) -> Option<FrameIndex> {
        let DragState::Active {
            start_x,
            start_frame,
            ref mut last_x,
        } = self.state
        else {
            return None;
        };
        *last_x = x;
        Some(start_frame.offset(frame_delta(x - start_x, self.sensitivity)))
    }

    /// Pointer or touch up. `x` falls back to the last seen position.
    pub fn end(&mut self, x: Option<f64>) -> GestureEnd {
        let DragState::Active {
            start_x, last_x, ..
        } = std::mem::take(&mut self.state)
        else {
            return GestureEnd::NotDragging;
        };
        let moved = x.unwrap_or(last_x) - start_x;
        if moved == 0.0 {
            GestureEnd::Click
        } else if moved < 0.0 {
            GestureEnd::Snap(Direction::Forward)
        } else {
            GestureEnd::Snap(Direction::Backward)
        }
    }

    /// Drops any gesture in progress without producing an outcome.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

/// Frames to move for a horizontal drag of `dx` pixels.
///
/// Dragging right moves backward. Halves round toward positive infinity.
#[allow(clippy::cast_possible_truncation)]
pub fn frame_delta(dx: f64, sensitivity: f64) -> i64 {
    -((dx / sensitivity + 0.5).floor() as i64)
}

/// Next stop after `from` in `direction`, wrapping around the stop list.
///
/// `stops` must be sorted ascending and non-empty.
pub fn next_stop(stops: &[FrameIndex], from: FrameIndex, direction: Direction) -> FrameIndex {
    let fallback = match direction {
        Direction::Forward => stops.first(),
        Direction::Backward => stops.last(),
    };
    let found = match direction {
        Direction::Forward => stops.iter().find(|&&s| s > from),
        Direction::Backward => stops.iter().rev().find(|&&s| s < from),
    };
    found.or(fallback).copied().unwrap_or(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{STOP_FRAMES, THUMBNAIL_FRAMES};

    fn frame(n: i64) -> FrameIndex {
        FrameIndex::wrap(n)
    }

    #[test]
    fn test_drag_right_moves_backward() {
        let mut gesture = GestureController::default();
        gesture.begin(100.0, frame(10));
        assert_eq!(gesture.update(140.0), Some(frame(5)));
        assert_eq!(frame_delta(40.0, 8.0), -5);
    }

    #[test]
    fn test_drag_wraps_past_first_frame() {
        let mut gesture = GestureController::default();
        gesture.begin(0.0, frame(1));
        assert_eq!(gesture.update(16.0), Some(frame(361)));
        assert_eq!(gesture.update(-16.0), Some(frame(3)));
    }

    #[test]
    fn test_update_is_relative_to_gesture_start() {
        let mut gesture = GestureController::default();
        gesture.begin(50.0, frame(100));
        gesture.update(10.0);
        gesture.update(30.0);
        assert_eq!(gesture.update(50.0), Some(frame(100)));
    }

    #[test]
    fn test_rounding_matches_half_up() {
        assert_eq!(frame_delta(4.0, 8.0), -1);
        assert_eq!(frame_delta(-4.0, 8.0), 0);
        assert_eq!(frame_delta(-4.1, 8.0), 1);
        assert_eq!(frame_delta(12.0, 8.0), -2);
    }

    #[test]
    fn test_zero_displacement_is_click() {
        let mut gesture = GestureController::default();
        gesture.begin(200.0, frame(1));
        assert_eq!(gesture.end(Some(200.0)), GestureEnd::Click);
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn test_end_direction() {
        let mut gesture = GestureController::default();
        gesture.begin(200.0, frame(1));
        assert_eq!(gesture.end(Some(150.0)), GestureEnd::Snap(Direction::Forward));

        gesture.begin(200.0, frame(1));
        gesture.update(260.0);
        assert_eq!(gesture.end(None), GestureEnd::Snap(Direction::Backward));
    }

    #[test]
    fn test_move_and_end_without_begin() {
        let mut gesture = GestureController::default();
        assert_eq!(gesture.update(10.0), None);
        assert_eq!(gesture.end(Some(10.0)), GestureEnd::NotDragging);
    }

    #[test]
    fn test_next_stop_forward() {
        let stops = THUMBNAIL_FRAMES;
        assert_eq!(next_stop(&stops, frame(1), Direction::Forward), frame(90));
        assert_eq!(next_stop(&stops, frame(90), Direction::Forward), frame(181));
        assert_eq!(next_stop(&stops, frame(200), Direction::Forward), frame(270));
        assert_eq!(next_stop(&stops, frame(300), Direction::Forward), frame(1));
    }

    #[test]
    fn test_next_stop_backward() {
        let stops = THUMBNAIL_FRAMES;
        assert_eq!(next_stop(&stops, frame(100), Direction::Backward), frame(90));
        assert_eq!(next_stop(&stops, frame(90), Direction::Backward), frame(1));
        assert_eq!(next_stop(&stops, frame(1), Direction::Backward), frame(270));
        assert_eq!(next_stop(&stops, frame(362), Direction::Backward), frame(270));
    }

    #[test]
    fn test_next_stop_over_stop_frames() {
        assert_eq!(next_stop(&STOP_FRAMES, frame(300), Direction::Forward), frame(362));
        assert_eq!(next_stop(&STOP_FRAMES, frame(362), Direction::Forward), frame(90));
        assert_eq!(next_stop(&STOP_FRAMES, frame(90), Direction::Backward), frame(362));
        assert_eq!(next_stop(&[], frame(7), Direction::Forward), frame(7));
    }
}
