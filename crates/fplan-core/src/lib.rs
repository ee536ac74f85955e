pub mod geometry;
pub mod id;
pub mod model;
pub mod notify;
pub mod persist;
pub mod store;
pub mod view;

pub use geometry::{GRID_PITCH, GridSnap, Point, Rect};
pub use id::RoomId;
pub use model::Room;
pub use notify::{LogNotifier, MemoryNotifier, Notice, NoticeLevel, Notifier, NullNotifier};
pub use persist::{MemoryStore, StateStore, keys};
pub use store::RoomStore;
pub use view::ViewTransform;
