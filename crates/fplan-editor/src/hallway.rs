//! Hallway drafting: collect points via canvas clicks, then materialize one
//! rectangular corridor segment per consecutive pair.
//!
//! States: `Idle → Drafting(points) → Idle` (complete or cancel). Points are
//! transient and never persisted. Completion with fewer than two points is a
//! validation error and leaves the draft untouched.

use fplan_core::{GridSnap, Point, Rect};
use std::fmt;

/// Floor for a collapsed axis of a segment box, in model units. A purely
/// horizontal or vertical pair still yields a selectable rectangle.
pub const MIN_SEGMENT_EXTENT: f32 = 40.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Completion requires at least two points.
    TooFewPoints { have: usize },
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::TooFewPoints { .. } => write!(f, "Need at least 2 points"),
        }
    }
}

impl std::error::Error for DraftError {}

#[derive(Debug, Clone, Default)]
enum DraftState {
    #[default]
    Idle,
    Drafting(Vec<Point>),
}

#[derive(Debug, Default)]
pub struct HallwayTool {
    state: DraftState,
}

impl HallwayTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, DraftState::Drafting(_))
    }

    /// Drafted points so far, in click order. Empty when idle.
    pub fn points(&self) -> &[Point] {
        match &self.state {
            DraftState::Idle => &[],
            DraftState::Drafting(points) => points,
        }
    }

    /// Enter drafting with no points. Restarting an active draft discards
    /// its points.
    pub fn start(&mut self) {
        self.state = DraftState::Drafting(Vec::new());
    }

    /// Append one point, run through the snap policy at commit time.
    /// Ignored while idle. Returns whether a point was added.
    pub fn click_at(&mut self, model: Point, snap: &GridSnap) -> bool {
        match &mut self.state {
            DraftState::Idle => false,
            DraftState::Drafting(points) => {
                points.push(snap.snap_point(model));
                true
            }
        }
    }

    /// Discard all points and deactivate.
    pub fn cancel(&mut self) {
        self.state = DraftState::Idle;
    }

    /// Materialize the draft: one axis-aligned box per consecutive pair of
    /// points. On success the draft clears and deactivates; with fewer than
    /// two points the draft is left as-is so the user can keep clicking.
    pub fn complete(&mut self) -> Result<Vec<Rect>, DraftError> {
        let points = match &self.state {
            DraftState::Drafting(points) if points.len() >= 2 => points,
            DraftState::Drafting(points) => {
                return Err(DraftError::TooFewPoints { have: points.len() });
            }
            DraftState::Idle => return Err(DraftError::TooFewPoints { have: 0 }),
        };
        let segments: Vec<Rect> = points
            .windows(2)
            .map(|pair| segment_box(pair[0], pair[1]))
            .collect();
        self.state = DraftState::Idle;
        Ok(segments)
    }
}

/// Bounding box of a point pair. An axis the pair is collinear on (zero
/// extent) is widened to [`MIN_SEGMENT_EXTENT`]; a diagonal pair keeps its
/// exact extents.
fn segment_box(a: Point, b: Point) -> Rect {
    let width = (b.x - a.x).abs();
    let height = (b.y - a.y).abs();
    Rect::new(
        a.x.min(b.x),
        a.y.min(b.y),
        if width == 0.0 { MIN_SEGMENT_EXTENT } else { width },
        if height == 0.0 { MIN_SEGMENT_EXTENT } else { height },
    )
}
