//! Integration tests: room store ↔ persistence collaborator.
//!
//! Exercises the full blob round-trip: mutate a store, reopen over the same
//! backing, and verify the model (including opaque payloads) is intact.

use fplan_core::{GridSnap, MemoryStore, Room, RoomId, RoomStore};

#[test]
fn full_model_survives_reopen() {
    let backing = MemoryStore::new();
    let snap = GridSnap::default();

    let (a, b) = {
        let mut store = RoomStore::open(Box::new(backing.clone()));
        let a = store.add_room("control", Some("Ops"), &snap);
        let b = store.add_room("containment", None, &snap);
        store.connect_rooms(a, b);

        // Attach detail-editor payloads the core must carry untouched
        let mut edited = store.get(a).unwrap().clone();
        edited.sections = vec![serde_json::json!({"label": "console row"})];
        edited.doors = vec![serde_json::json!({"wall": "south"})];
        store.update_room(edited);
        (a, b)
    };

    let reopened = RoomStore::open(Box::new(backing));
    assert_eq!(reopened.len(), 2);

    let room_a = reopened.get(a).unwrap();
    assert_eq!(room_a.name, "Ops");
    assert_eq!(room_a.kind, "control");
    assert_eq!(room_a.sections[0]["label"], "console row");
    assert_eq!(room_a.doors[0]["wall"], "south");
    assert!(room_a.is_connected_to(b));
    assert!(reopened.get(b).unwrap().is_connected_to(a));
}

#[test]
fn delete_is_reflected_in_the_blob() {
    let backing = MemoryStore::new();
    let snap = GridSnap::default();

    let (a, b) = {
        let mut store = RoomStore::open(Box::new(backing.clone()));
        let a = store.add_room("control", None, &snap);
        let b = store.add_room("research", None, &snap);
        store.connect_rooms(a, b);
        store.delete_room(b);
        (a, b)
    };

    let reopened = RoomStore::open(Box::new(backing));
    assert_eq!(reopened.len(), 1);
    assert!(reopened.get(b).is_none());
    assert!(
        reopened.get(a).unwrap().connections.is_empty(),
        "pruned connection leaked back through persistence"
    );
}

#[test]
fn foreign_blob_shape_is_accepted() {
    // A blob written by the original shell: "type" tag, string ids,
    // payload arrays present.
    let raw = r#"[
        {"id": "room-1700000000000", "name": "control 1", "type": "control",
         "x": 100, "y": 100, "width": 120, "height": 80,
         "sections": [], "doors": [], "connections": ["hallway-1700000000001-0"]},
        {"id": "hallway-1700000000001-0", "name": "Hallway", "type": "corridor",
         "x": 0, "y": 0, "width": 100, "height": 40,
         "sections": [], "doors": [], "connections": ["room-1700000000000"]}
    ]"#;
    let mut backing = MemoryStore::new();
    use fplan_core::StateStore;
    backing.save(fplan_core::keys::ROOMS, raw);

    let store = RoomStore::open(Box::new(backing));
    assert_eq!(store.len(), 2);
    let control = store.get(RoomId::intern("room-1700000000000")).unwrap();
    assert!(control.is_connected_to(RoomId::intern("hallway-1700000000001-0")));
}

#[test]
fn rooms_missing_optional_fields_load_with_defaults() {
    let raw = r#"[{"id": "r1", "name": "bare", "type": "research",
                   "x": 0, "y": 0, "width": 120, "height": 80}]"#;
    let mut backing = MemoryStore::new();
    use fplan_core::StateStore;
    backing.save(fplan_core::keys::ROOMS, raw);

    let store = RoomStore::open(Box::new(backing));
    let room: &Room = store.get(RoomId::intern("r1")).unwrap();
    assert!(room.sections.is_empty());
    assert!(room.doors.is_empty());
    assert!(room.connections.is_empty());
}
