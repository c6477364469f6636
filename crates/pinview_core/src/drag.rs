//! Drag gesture state machine for panning.

use crate::clamp::clamp_offset;
use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// Pan drag interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    /// Not dragging
    #[default]
    Idle,
    /// Between a pointer-down and its pointer-up
    Dragging,
}

impl DragState {
    /// Check if currently dragging
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging)
    }

    /// Pointer pressed on the surface.
    pub fn pointer_down(&mut self) {
        *self = DragState::Dragging;
    }

    /// Pointer released. Also used for leave/blur, which end the session the same way.
    pub fn pointer_up(&mut self) {
        *self = DragState::Idle;
    }

    /// Compute the pan offset after a pointer movement of `(dx, dy)`.
    ///
    /// The movement is subtracted so the image follows the pointer. Returns `None`
    /// while idle.
    pub fn pointer_move(
        &self,
        pan: Point,
        dx: f32,
        dy: f32,
        image: Size,
        container: Size,
        zoom: f32,
    ) -> Option<Point> {
        match self {
            DragState::Idle => None,
            DragState::Dragging => Some(clamp_offset(
                pan - Point::new(dx, dy),
                image,
                container,
                zoom,
            )),
        }
    }
}
