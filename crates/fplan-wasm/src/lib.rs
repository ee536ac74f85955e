//! WASM bridge for the facility planner — exposes the Rust editor engine to
//! the browser shell.
//!
//! The bridge stays thin: pointer and toolbar events come in, a JSON scene
//! snapshot and a toast queue go out. Drawing is the shell's job. Rooms
//! persist to `localStorage` under the same keys the shell always used.

use fplan_core::persist::keys;
use fplan_core::{MemoryNotifier, NoticeLevel, Point, Room, RoomId, StateStore};
use fplan_editor::PlannerEditor;
use wasm_bindgen::prelude::*;

/// `localStorage`-backed persistence collaborator. Storage may be absent
/// (sandboxed iframe); every access degrades to a no-op then.
struct LocalStorageStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageStore {
    fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; plan will not persist");
        }
        Self { storage }
    }
}

impl StateStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            // Quota errors are fire-and-forget by contract
            let _ = storage.set_item(key, value);
        }
    }
}

/// The main WASM-facing planner controller.
///
/// Holds the editor engine and a shared toast queue. All interaction from
/// the shell JS goes through this struct.
#[wasm_bindgen]
pub struct PlannerCanvas {
    editor: PlannerEditor,
    toasts: MemoryNotifier,
}

impl Default for PlannerCanvas {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PlannerCanvas {
    /// Create a controller over the browser's localStorage.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let toasts = MemoryNotifier::new();
        let editor = PlannerEditor::open(
            Box::new(LocalStorageStore::new()),
            Box::new(toasts.clone()),
        );
        Self { editor, toasts }
    }

    // ─── Rooms ───────────────────────────────────────────────────────────

    /// Add a room of the given category. Returns the new room's id.
    pub fn add_room(&mut self, kind: &str) -> String {
        self.editor.add_room(kind).to_string()
    }

    /// A click on a room. Uses the browser clock for double-activation
    /// detection; returns the room id when a double opened the editor.
    pub fn room_click(&mut self, id: &str) -> Option<String> {
        let now_ms = js_sys::Date::now() as u64;
        self.editor
            .room_click(RoomId::intern(id), now_ms)
            .map(|id| id.to_string())
    }

    /// Room currently open in the detail editor, as JSON (`null` if none).
    pub fn editing_room_json(&self) -> String {
        json_or_null(self.editor.editing_room())
    }

    /// Detail-editor save callback. Returns `false` when the payload does
    /// not parse as a room.
    pub fn save_room(&mut self, room_json: &str) -> bool {
        match serde_json::from_str::<Room>(room_json) {
            Ok(room) => {
                self.editor.save_room(room);
                true
            }
            Err(e) => {
                log::warn!("rejecting room payload: {e}");
                false
            }
        }
    }

    pub fn close_room_editor(&mut self) {
        self.editor.close_room_editor();
    }

    pub fn delete_room(&mut self, id: &str) -> bool {
        self.editor.delete_room(RoomId::intern(id))
    }

    // ─── Connection gesture ──────────────────────────────────────────────

    /// Context-menu / link-button interaction on a room.
    pub fn toggle_connection(&mut self, id: &str) {
        self.editor.toggle_connection(RoomId::intern(id));
    }

    // ─── Hallway drafting ────────────────────────────────────────────────

    pub fn start_hallway(&mut self) {
        self.editor.start_hallway();
    }

    pub fn hallway_active(&self) -> bool {
        self.editor.hallway_active()
    }

    /// A click on empty canvas, in screen coordinates. Places a drafting
    /// point while the hallway tool is active.
    pub fn canvas_click(&mut self, x: f32, y: f32) -> bool {
        self.editor.canvas_click(Point::new(x, y))
    }

    /// Complete the draft. Returns how many corridor segments were created
    /// (zero on a validation failure, which also queues an error toast).
    pub fn complete_hallway(&mut self) -> usize {
        self.editor.complete_hallway().len()
    }

    pub fn cancel_hallway(&mut self) {
        self.editor.cancel_hallway();
    }

    // ─── View ────────────────────────────────────────────────────────────

    pub fn zoom_in(&mut self) {
        self.editor.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.editor.zoom_out();
    }

    pub fn reset_view(&mut self) {
        self.editor.reset_view();
    }

    pub fn begin_pan(&mut self, x: f32, y: f32) {
        self.editor.begin_pan(Point::new(x, y));
    }

    pub fn pan_move(&mut self, x: f32, y: f32) {
        self.editor.pan_move(Point::new(x, y));
    }

    pub fn end_pan(&mut self) {
        self.editor.end_pan();
    }

    // ─── Persisted toggles ───────────────────────────────────────────────

    pub fn snap_enabled(&self) -> bool {
        self.editor.snap_enabled()
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.editor.set_snap_enabled(enabled);
    }

    pub fn show_connections(&self) -> bool {
        self.editor.show_connections()
    }

    pub fn set_show_connections(&mut self, show: bool) {
        self.editor.set_show_connections(show);
    }

    // ─── Shell output ────────────────────────────────────────────────────

    /// Everything the shell needs to draw one frame, as JSON: rooms, view
    /// transform, drafting points, connection lines, highlight state.
    pub fn scene_json(&self) -> String {
        let view = self.editor.view();
        let lines: Vec<serde_json::Value> = self
            .editor
            .connection_lines()
            .into_iter()
            .map(|(a, b)| {
                serde_json::json!({ "x1": a.x, "y1": a.y, "x2": b.x, "y2": b.y })
            })
            .collect();
        let scene = serde_json::json!({
            "zoom": view.zoom,
            "pan": view.pan,
            "snapToGrid": self.editor.snap_enabled(),
            "showConnections": self.editor.show_connections(),
            "rooms": self.editor.store().rooms(),
            "hallway": {
                "active": self.editor.hallway_active(),
                "points": self.editor.hallway_points(),
            },
            "connectionLines": lines,
            "pendingConnection": self.editor.pending_connection().map(|id| id.to_string()),
        });
        scene.to_string()
    }

    /// Drain queued toasts as a JSON array of `{level, message}`, oldest
    /// first. The shell feeds these to its toast system.
    pub fn drain_toasts(&mut self) -> String {
        let toasts: Vec<serde_json::Value> = self
            .toasts
            .drain()
            .into_iter()
            .map(|n| {
                let level = match n.level {
                    NoticeLevel::Info => "info",
                    NoticeLevel::Success => "success",
                    NoticeLevel::Error => "error",
                };
                serde_json::json!({ "level": level, "message": n.message })
            })
            .collect();
        serde_json::Value::Array(toasts).to_string()
    }

    /// Storage keys the planner owns, for the shell's settings page.
    pub fn storage_keys(&self) -> Vec<String> {
        vec![
            keys::ROOMS.to_string(),
            keys::SNAP.to_string(),
            keys::CONNECTIONS.to_string(),
        ]
    }
}

fn json_or_null<T: serde::Serialize>(value: Option<T>) -> String {
    match value {
        Some(v) => serde_json::to_string(&v).unwrap_or_else(|_| "null".to_string()),
        None => "null".to_string(),
    }
}
