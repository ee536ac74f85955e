//! View transform: pan offset + zoom scale applied to the room layer.
//!
//! Pan is a screen-space translation applied *after* scaling, so dragging is
//! 1:1 with the cursor regardless of zoom. The inverse mapping
//! `model = (screen - pan) / zoom` interprets every click, which is what
//! makes drafted hallway points land under the cursor at any pan/zoom.

use crate::geometry::Point;

pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 2.0;

/// Transient view state. Never persisted.
#[derive(Debug, Clone, Copy)]
pub struct ViewTransform {
    pub zoom: f32,
    pub pan: Point,
    /// Drag anchor captured at pan start: `screen - pan`. `None` when idle.
    pan_anchor: Option<Point>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Point::default(),
            pan_anchor: None,
        }
    }
}

impl ViewTransform {
    /// Adjust zoom by `delta`, silently clamped to `[ZOOM_MIN, ZOOM_MAX]`.
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom + delta).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Back to 1:1 with no offset.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Point::default();
        self.pan_anchor = None;
    }

    /// Begin a pan drag at a screen position.
    pub fn begin_pan(&mut self, screen: Point) {
        self.pan_anchor = Some(Point::new(screen.x - self.pan.x, screen.y - self.pan.y));
    }

    /// Continue a pan drag. No-op unless a drag is in progress.
    pub fn pan_move(&mut self, screen: Point) {
        if let Some(anchor) = self.pan_anchor {
            self.pan = Point::new(screen.x - anchor.x, screen.y - anchor.y);
        }
    }

    /// End the pan drag (pointer up or leave).
    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }

    /// Screen → model.
    pub fn to_model(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    /// Model → screen.
    pub fn to_screen(&self, model: Point) -> Point {
        Point::new(
            model.x * self.zoom + self.pan.x,
            model.y * self.zoom + self.pan.y,
        )
    }
}
