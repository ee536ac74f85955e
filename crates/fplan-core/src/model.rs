//! Facility data model.
//!
//! A plan is an ordered list of [`Room`] records. Geometry is stored in
//! model space. `sections` and `doors` are opaque payloads owned by the
//! room-detail editor — this crate stores and returns them unchanged.
//!
//! The serde shape matches the persisted browser blob: the category tag is
//! serialized as `"type"`, connections as an array of id strings.

use crate::geometry::{Point, Rect};
use crate::id::RoomId;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Default extents for a freshly placed room, in model units.
pub const DEFAULT_ROOM_WIDTH: f32 = 120.0;
pub const DEFAULT_ROOM_HEIGHT: f32 = 80.0;

/// A single room in the facility plan.
///
/// `kind` is a free-form category tag (`"control"`, `"research"`,
/// `"containment"`, `"corridor"`, ...) — an open set, not an enum.
///
/// Invariant: `connections` is symmetric across the store (if A lists B,
/// B lists A), never contains the room's own id, and never references an
/// id absent from the store. [`crate::store::RoomStore`] maintains this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,

    /// Opaque detail-editor payload. Pass-through only.
    #[serde(default)]
    pub sections: Vec<serde_json::Value>,
    /// Opaque detail-editor payload. Pass-through only.
    #[serde(default)]
    pub doors: Vec<serde_json::Value>,

    /// Ids of adjacent rooms.
    #[serde(default)]
    pub connections: SmallVec<[RoomId; 4]>,
}

impl Room {
    /// Build a room with empty payloads and no connections.
    pub fn new(id: RoomId, kind: &str, name: &str, bounds: Rect) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind: kind.to_string(),
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            sections: Vec::new(),
            doors: Vec::new(),
            connections: SmallVec::new(),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Midpoint, used for connection line endpoints.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    pub fn is_connected_to(&self, other: RoomId) -> bool {
        self.connections.contains(&other)
    }
}
