//! The room store: ordered room records plus the mutation operations that
//! keep the connection lists symmetric and the persisted blob current.
//!
//! Every mutation re-persists the whole blob — there is no explicit save
//! step. All operations are total: bad ids are guarded no-ops, never errors.

use crate::geometry::{GridSnap, Point, Rect};
use crate::id::RoomId;
use crate::model::{DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH, Room};
use crate::persist::{StateStore, keys, load_json, save_json};

/// Anchor position for a freshly added room, before snapping.
pub const DEFAULT_ANCHOR: Point = Point::new(100.0, 100.0);

pub struct RoomStore {
    rooms: Vec<Room>,
    persist: Box<dyn StateStore>,
    /// Next candidate number for [`Self::fresh_id`]. Counts from zero each
    /// session; candidates colliding with loaded rooms are skipped.
    next_id: u64,
}

impl RoomStore {
    /// Open the store over a persistence collaborator, loading any
    /// previously saved rooms (empty plan when the key is absent).
    pub fn open(persist: Box<dyn StateStore>) -> Self {
        let rooms: Vec<Room> = load_json(&*persist, keys::ROOMS, Vec::new());
        log::debug!("room store opened with {} room(s)", rooms.len());
        Self {
            rooms,
            persist,
            next_id: 0,
        }
    }

    /// Allocate an id that no room in the store currently uses
    /// (e.g. `room-3`, `hallway-7`). A reopened store counts from zero
    /// again, so candidates already occupied by the persisted blob are
    /// skipped until a free one turns up.
    pub fn fresh_id(&mut self, prefix: &str) -> RoomId {
        loop {
            let candidate = RoomId::intern(&format!("{prefix}-{}", self.next_id));
            self.next_id += 1;
            if self.get(candidate).is_none() {
                return candidate;
            }
            log::debug!("id {candidate:?} already in the plan, skipping");
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// The persistence collaborator, for callers that keep their own flags
    /// in the same backing (snap / show-connections toggles).
    pub fn state_store_mut(&mut self) -> &mut dyn StateStore {
        &mut *self.persist
    }

    /// Add a room of the given category at the default anchor, run through
    /// the current snap policy. Name defaults to `"{kind} {n}"`.
    pub fn add_room(&mut self, kind: &str, name: Option<&str>, snap: &GridSnap) -> RoomId {
        let anchor = snap.snap_point(DEFAULT_ANCHOR);
        let default_name;
        let name = match name {
            Some(n) => n,
            None => {
                default_name = format!("{kind} {}", self.rooms.len() + 1);
                default_name.as_str()
            }
        };
        let id = self.fresh_id("room");
        let room = Room::new(
            id,
            kind,
            name,
            Rect::new(anchor.x, anchor.y, DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_HEIGHT),
        );
        self.rooms.push(room);
        self.flush();
        id
    }

    /// Append an already-built room (hallway segment materialization).
    /// Callers obtain the id from [`Self::fresh_id`]; a room reusing an
    /// occupied id is rejected so id uniqueness holds on every path.
    pub fn insert(&mut self, room: Room) {
        if self.get(room.id).is_some() {
            log::warn!("room {:?} already in the plan, insert ignored", room.id);
            return;
        }
        self.rooms.push(room);
        self.flush();
    }

    /// Replace the room with a matching id. No-op when absent — the
    /// detail editor may hand back a room deleted underneath it.
    pub fn update_room(&mut self, updated: Room) {
        if let Some(slot) = self.rooms.iter_mut().find(|r| r.id == updated.id) {
            *slot = updated;
            self.flush();
        } else {
            log::debug!("update for unknown room {:?} ignored", updated.id);
        }
    }

    /// Record a symmetric adjacency between two rooms. Idempotent; a
    /// self-connection or an id absent from the store is a no-op.
    /// Returns whether anything changed.
    pub fn connect_rooms(&mut self, a: RoomId, b: RoomId) -> bool {
        if a == b || self.get(a).is_none() || self.get(b).is_none() {
            log::debug!("connect {a:?} ↔ {b:?} rejected");
            return false;
        }
        let mut changed = false;
        for (room, other) in [(a, b), (b, a)] {
            if let Some(r) = self.rooms.iter_mut().find(|r| r.id == room)
                && !r.connections.contains(&other)
            {
                r.connections.push(other);
                changed = true;
            }
        }
        if changed {
            self.flush();
        }
        changed
    }

    /// Remove a room and strip its id from every remaining room's
    /// connections, so no dangling reference survives. Returns whether a
    /// room was removed.
    pub fn delete_room(&mut self, id: RoomId) -> bool {
        let before = self.rooms.len();
        self.rooms.retain(|r| r.id != id);
        if self.rooms.len() == before {
            return false;
        }
        for room in &mut self.rooms {
            room.connections.retain(|c| *c != id);
        }
        self.flush();
        true
    }

    fn flush(&mut self) {
        save_json(&mut *self.persist, keys::ROOMS, &self.rooms);
    }
}
