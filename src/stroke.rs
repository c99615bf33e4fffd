//! The gesture state machine: Idle ⇄ Pressed.
//!
//! This module is pure — it never touches the DOM. The capture layer
//! feeds it surface-local points and paints whatever [`PaintOp`] comes
//! back, which keeps every transition natively testable.
//!
//! A gesture is one press, zero or more motions, and a release. Only
//! motions that arrive while pressed produce paint; everything else is
//! ignored. Release always returns the machine to Idle, so concurrent
//! gestures cannot interleave state.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use crate::surface::Point;

/// A painting instruction for the capture layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintOp {
    /// Start a new path at the point and stroke a zero-length segment
    /// there (renders as a dot under a round cap).
    Begin(Point),
    /// Append a segment from the previous point to this one and stroke
    /// it immediately.
    Extend(Point),
}

/// Ephemeral per-gesture state. Owned exclusively by the capture
/// layer; reset to not-pressed at the end of every gesture.
#[derive(Debug, Default)]
pub struct StrokeState {
    pressed: bool,
    last: Point,
}

impl StrokeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// The most recent point, in surface-local logical coordinates.
    #[must_use]
    pub fn last_point(&self) -> Point {
        self.last
    }

    /// Idle → Pressed. Captures the first point of the stroke.
    pub fn press(&mut self, point: Point) -> PaintOp {
        self.pressed = true;
        self.last = point;
        PaintOp::Begin(point)
    }

    /// Pressed → Pressed. Ignored while idle.
    pub fn motion(&mut self, point: Point) -> Option<PaintOp> {
        if !self.pressed {
            return None;
        }
        self.last = point;
        Some(PaintOp::Extend(point))
    }

    /// Pressed → Idle. Also a no-op from Idle, so stray release events
    /// (e.g. mouse-leave after mouse-up) are harmless.
    pub fn release(&mut self) {
        self.pressed = false;
    }
}
