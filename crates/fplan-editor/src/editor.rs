//! The planner editor facade.
//!
//! Owns the room store plus every piece of transient UI state — pan/zoom,
//! the hallway draft, the pending-connection slot, the double-activation
//! tracker, and the open-detail-editor slot — as explicit fields, so the
//! whole interaction layer is testable without a rendering surface.
//!
//! All entry points take screen-space coordinates where a pointer is
//! involved; the view transform is applied exactly once, on the way in.

use crate::activation::{Activation, ActivationTracker};
use crate::connect::{ConnectAction, ConnectGesture};
use crate::hallway::HallwayTool;
use fplan_core::persist::{load_json, save_json};
use fplan_core::{
    GridSnap, Notifier, Point, Room, RoomId, RoomStore, StateStore, ViewTransform, keys,
};

/// Zoom increment per toolbar click.
pub const ZOOM_STEP: f32 = 0.1;

pub struct PlannerEditor {
    store: RoomStore,
    view: ViewTransform,
    snap: GridSnap,
    show_connections: bool,
    hallway: HallwayTool,
    connect: ConnectGesture,
    activation: ActivationTracker,
    editing: Option<RoomId>,
    notifier: Box<dyn Notifier>,
}

impl PlannerEditor {
    /// Open an editor over the persistence collaborator: loads the room
    /// blob and the two persisted toggles (both default to on).
    pub fn open(persist: Box<dyn StateStore>, notifier: Box<dyn Notifier>) -> Self {
        let snap = GridSnap {
            enabled: load_json(&*persist, keys::SNAP, true),
            ..GridSnap::default()
        };
        let show_connections = load_json(&*persist, keys::CONNECTIONS, true);
        Self {
            store: RoomStore::open(persist),
            view: ViewTransform::default(),
            snap,
            show_connections,
            hallway: HallwayTool::new(),
            connect: ConnectGesture::new(),
            activation: ActivationTracker::new(),
            editing: None,
            notifier,
        }
    }

    pub fn store(&self) -> &RoomStore {
        &self.store
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    // ─── Rooms ───────────────────────────────────────────────────────────

    /// Add a room of the given category at the snapped default anchor.
    pub fn add_room(&mut self, kind: &str) -> RoomId {
        let id = self.store.add_room(kind, None, &self.snap);
        self.notifier.success("Room added - double-click to edit");
        id
    }

    /// A plain activation on a room. A double within the threshold opens
    /// the detail editor; returns the opened room id when that happens.
    pub fn room_click(&mut self, id: RoomId, now_ms: u64) -> Option<RoomId> {
        if self.store.get(id).is_none() {
            return None;
        }
        match self.activation.observe(id, now_ms) {
            Activation::Double => {
                self.editing = Some(id);
                Some(id)
            }
            Activation::Single => None,
        }
    }

    /// Room currently open in the detail editor, if any.
    pub fn editing_room(&self) -> Option<&Room> {
        self.editing.and_then(|id| self.store.get(id))
    }

    pub fn close_room_editor(&mut self) {
        self.editing = None;
    }

    /// Detail-editor save callback: commit the edited room and close.
    pub fn save_room(&mut self, updated: Room) {
        self.store.update_room(updated);
        self.editing = None;
    }

    /// Remove a room, pruning its connections and any editor state that
    /// pointed at it.
    pub fn delete_room(&mut self, id: RoomId) -> bool {
        let removed = self.store.delete_room(id);
        if removed {
            if self.connect.pending() == Some(id) {
                self.connect.clear();
            }
            if self.editing == Some(id) {
                self.editing = None;
            }
        }
        removed
    }

    // ─── Connection gesture ──────────────────────────────────────────────

    /// A qualifying connect interaction on a room (context-menu or link
    /// button). Unknown ids fall through the lookup-miss guard.
    pub fn toggle_connection(&mut self, room: RoomId) {
        if self.store.get(room).is_none() {
            return;
        }
        match self.connect.toggle(room) {
            ConnectAction::Armed(_) => {
                self.notifier.info("Select another room to connect");
            }
            ConnectAction::Cancelled => {}
            ConnectAction::Commit { source, target } => {
                // The source may have been deleted while armed; the store
                // guard makes that a silent no-op.
                if self.store.connect_rooms(source, target) {
                    self.notifier.success("Rooms connected");
                }
            }
        }
    }

    /// Pending connection source, for render highlighting.
    pub fn pending_connection(&self) -> Option<RoomId> {
        self.connect.pending()
    }

    /// Center-to-center line per connected pair, each pair once (drawn from
    /// the side whose id orders first). Empty when the toggle is off.
    pub fn connection_lines(&self) -> Vec<(Point, Point)> {
        if !self.show_connections {
            return Vec::new();
        }
        let mut lines = Vec::new();
        for room in self.store.rooms() {
            for conn in &room.connections {
                if conn.as_str() < room.id.as_str() {
                    continue;
                }
                if let Some(target) = self.store.get(*conn) {
                    lines.push((room.center(), target.center()));
                }
            }
        }
        lines
    }

    // ─── Hallway drafting ────────────────────────────────────────────────

    pub fn start_hallway(&mut self) {
        self.hallway.start();
        self.notifier.info("Click points to create hallway");
    }

    pub fn hallway_active(&self) -> bool {
        self.hallway.is_active()
    }

    pub fn hallway_points(&self) -> &[Point] {
        self.hallway.points()
    }

    /// A click on empty canvas. While drafting this places a hallway point
    /// under the cursor (screen → model, then snap); otherwise it is inert.
    pub fn canvas_click(&mut self, screen: Point) -> bool {
        if !self.hallway.is_active() {
            return false;
        }
        let model = self.view.to_model(screen);
        self.hallway.click_at(model, &self.snap)
    }

    /// Materialize the draft into corridor rooms, one per consecutive point
    /// pair. Returns the ids of the created rooms; an under-filled draft
    /// reports a validation error and stays active.
    pub fn complete_hallway(&mut self) -> Vec<RoomId> {
        match self.hallway.complete() {
            Ok(segments) => {
                let mut ids = Vec::with_capacity(segments.len());
                for bounds in segments {
                    let id = self.store.fresh_id("hallway");
                    self.store.insert(Room::new(id, "corridor", "Hallway", bounds));
                    ids.push(id);
                }
                log::debug!("hallway completed with {} segment(s)", ids.len());
                self.notifier.success("Hallway created");
                ids
            }
            Err(e) => {
                self.notifier.error(&e.to_string());
                Vec::new()
            }
        }
    }

    pub fn cancel_hallway(&mut self) {
        self.hallway.cancel();
    }

    // ─── View ────────────────────────────────────────────────────────────

    pub fn zoom_in(&mut self) {
        self.view.zoom_by(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.view.zoom_by(-ZOOM_STEP);
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    pub fn begin_pan(&mut self, screen: Point) {
        self.view.begin_pan(screen);
    }

    pub fn pan_move(&mut self, screen: Point) {
        self.view.pan_move(screen);
    }

    pub fn end_pan(&mut self) {
        self.view.end_pan();
    }

    // ─── Persisted toggles ───────────────────────────────────────────────

    pub fn snap_enabled(&self) -> bool {
        self.snap.enabled
    }

    /// Toggle grid snap. Takes effect for future placements only; existing
    /// rooms keep their coordinates.
    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.snap.enabled = enabled;
        save_json(self.store.state_store_mut(), keys::SNAP, &enabled);
    }

    pub fn show_connections(&self) -> bool {
        self.show_connections
    }

    pub fn set_show_connections(&mut self, show: bool) {
        self.show_connections = show;
        save_json(self.store.state_store_mut(), keys::CONNECTIONS, &show);
    }
}
