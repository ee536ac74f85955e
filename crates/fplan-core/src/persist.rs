//! Persistence seam: a black-box key/value collaborator.
//!
//! The shell provides the real backing store (browser localStorage via the
//! wasm crate). Writes are fire-and-forget; the only contract is that a
//! saved value loads back verbatim.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Well-known storage keys.
pub mod keys {
    pub const ROOMS: &str = "facility_planner_rooms";
    pub const SNAP: &str = "facility_planner_snap";
    pub const CONNECTIONS: &str = "facility_planner_connections";
}

/// Load-by-key / store-by-key collaborator.
pub trait StateStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// Load a JSON value, falling back to `default` on a missing key or a blob
/// that no longer parses.
pub fn load_json<T: DeserializeOwned>(store: &dyn StateStore, key: &str, default: T) -> T {
    match store.load(key) {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("discarding unreadable blob at {key:?}: {e}");
            default
        }),
        None => default,
    }
}

/// Serialize and store a JSON value. Serialization of model types cannot
/// fail in practice; a failure is logged and dropped.
pub fn save_json<T: Serialize>(store: &mut dyn StateStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.save(key, &raw),
        Err(e) => log::warn!("failed to serialize {key:?}: {e}"),
    }
}

/// In-memory store over a shared map. Cloning yields a handle onto the same
/// backing, so tests can reopen a store over identical persisted state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
    }
}
