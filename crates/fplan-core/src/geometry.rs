//! Model-space geometry: points, rectangles, and the grid-snap policy.
//!
//! All room geometry lives in model space (unscaled, unpanned). The view
//! transform in [`crate::view`] is the only place screen coordinates appear.

use serde::{Deserialize, Serialize};

/// Grid spacing for coordinate quantization, in model units.
pub const GRID_PITCH: f32 = 20.0;

/// A point in model space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in model space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// AABB overlap test.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Optional quantization of coordinates to a fixed grid pitch.
///
/// Applied only when a coordinate is committed (room creation, hallway point
/// placement) — toggling the flag never re-snaps existing rooms.
#[derive(Debug, Clone, Copy)]
pub struct GridSnap {
    pub enabled: bool,
    pub pitch: f32,
}

impl Default for GridSnap {
    fn default() -> Self {
        Self {
            enabled: true,
            pitch: GRID_PITCH,
        }
    }
}

impl GridSnap {
    /// Quantize one axis: `round(v / pitch) * pitch`, identity when disabled.
    pub fn snap(&self, v: f32) -> f32 {
        if self.enabled {
            (v / self.pitch).round() * self.pitch
        } else {
            v
        }
    }

    /// Quantize both axes independently.
    pub fn snap_point(&self, p: Point) -> Point {
        Point::new(self.snap(p.x), self.snap(p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_pitch() {
        let snap = GridSnap::default();
        assert_eq!(snap.snap(0.0), 0.0);
        assert_eq!(snap.snap(9.0), 0.0);
        assert_eq!(snap.snap(10.0), 20.0);
        assert_eq!(snap.snap(33.0), 40.0);
        assert_eq!(snap.snap(-33.0), -40.0);
    }

    #[test]
    fn snap_is_idempotent() {
        let snap = GridSnap::default();
        for v in [-137.4, -10.0, 0.0, 7.3, 19.9, 20.0, 310.5] {
            let once = snap.snap(v);
            assert_eq!(snap.snap(once), once, "snap(snap({v})) drifted");
        }
    }

    #[test]
    fn snap_disabled_is_identity() {
        let snap = GridSnap {
            enabled: false,
            ..GridSnap::default()
        };
        assert_eq!(snap.snap(13.7), 13.7);
        assert_eq!(
            snap.snap_point(Point::new(1.0, 2.0)),
            Point::new(1.0, 2.0)
        );
    }

    #[test]
    fn rect_contains_and_center() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert!(r.contains(10.0, 10.0));
        assert!(r.contains(110.0, 60.0));
        assert!(!r.contains(9.9, 10.0));
        assert_eq!(r.center(), Point::new(60.0, 35.0));
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 40.0);
        let b = Rect::new(90.0, 30.0, 40.0, 100.0);
        let c = Rect::new(200.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
