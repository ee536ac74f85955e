pub mod activation;
pub mod connect;
pub mod editor;
pub mod hallway;

pub use activation::{Activation, ActivationTracker, DOUBLE_ACTIVATE_MS};
pub use connect::{ConnectAction, ConnectGesture};
pub use editor::PlannerEditor;
pub use hallway::{DraftError, HallwayTool, MIN_SEGMENT_EXTENT};
