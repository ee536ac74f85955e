//! Two-click room connection gesture.
//!
//! One global pending-source slot drives the gesture: the first qualifying
//! interaction arms a source room, the second on a different room commits
//! the pair, and re-clicking the source cancels. At most one connection
//! attempt is ever in flight.

use fplan_core::RoomId;

/// Outcome of one qualifying interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectAction {
    /// Slot was empty; this room is now the pending source.
    Armed(RoomId),
    /// The pending source was re-clicked; slot cleared, nothing connected.
    Cancelled,
    /// A second, different room completed the gesture. The caller applies
    /// the actual store mutation.
    Commit { source: RoomId, target: RoomId },
}

#[derive(Debug, Default)]
pub struct ConnectGesture {
    pending: Option<RoomId>,
}

impl ConnectGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<RoomId> {
        self.pending
    }

    /// Feed one qualifying interaction on `room` through the gesture.
    /// The slot is cleared on both `Cancelled` and `Commit`.
    pub fn toggle(&mut self, room: RoomId) -> ConnectAction {
        match self.pending.take() {
            None => {
                self.pending = Some(room);
                ConnectAction::Armed(room)
            }
            Some(source) if source == room => ConnectAction::Cancelled,
            Some(source) => ConnectAction::Commit {
                source,
                target: room,
            },
        }
    }

    /// Drop any pending source (e.g. when the source room is deleted).
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_clicks_commit_in_order() {
        let mut gesture = ConnectGesture::new();
        let a = RoomId::intern("conn-a");
        let b = RoomId::intern("conn-b");

        assert_eq!(gesture.toggle(a), ConnectAction::Armed(a));
        assert_eq!(gesture.pending(), Some(a));
        assert_eq!(
            gesture.toggle(b),
            ConnectAction::Commit { source: a, target: b }
        );
        assert_eq!(gesture.pending(), None);
    }

    #[test]
    fn reclick_cancels() {
        let mut gesture = ConnectGesture::new();
        let a = RoomId::intern("conn-re");
        gesture.toggle(a);
        assert_eq!(gesture.toggle(a), ConnectAction::Cancelled);
        assert_eq!(gesture.pending(), None);

        // Next click starts a fresh gesture
        assert_eq!(gesture.toggle(a), ConnectAction::Armed(a));
    }
}
