//! Double-activation detection without a native double-click primitive.
//!
//! Keeps the last activated room id and its timestamp; a second activation
//! of the same room within the threshold is a double. The clock is supplied
//! by the caller, so behavior is deterministic under test.

use fplan_core::RoomId;

/// Two activations of the same room within this window count as a double.
pub const DOUBLE_ACTIVATE_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Single,
    Double,
}

#[derive(Debug, Default)]
pub struct ActivationTracker {
    last: Option<(RoomId, u64)>,
}

impl ActivationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an activation of `id` at `now_ms` and classify it.
    /// A double consumes the pending state, so a triple click is
    /// double + single, not two doubles.
    pub fn observe(&mut self, id: RoomId, now_ms: u64) -> Activation {
        match self.last.take() {
            Some((last_id, at)) if last_id == id && now_ms.saturating_sub(at) <= DOUBLE_ACTIVATE_MS => {
                Activation::Double
            }
            _ => {
                self.last = Some((id, now_ms));
                Activation::Single
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_repeat_is_double() {
        let mut tracker = ActivationTracker::new();
        let room = RoomId::intern("room-dbl");
        assert_eq!(tracker.observe(room, 1_000), Activation::Single);
        assert_eq!(tracker.observe(room, 1_300), Activation::Double);
    }

    #[test]
    fn slow_repeat_is_two_singles() {
        let mut tracker = ActivationTracker::new();
        let room = RoomId::intern("room-slow");
        assert_eq!(tracker.observe(room, 0), Activation::Single);
        assert_eq!(tracker.observe(room, 501), Activation::Single);
    }

    #[test]
    fn different_room_resets_the_window() {
        let mut tracker = ActivationTracker::new();
        let a = RoomId::intern("room-a");
        let b = RoomId::intern("room-b");
        assert_eq!(tracker.observe(a, 0), Activation::Single);
        assert_eq!(tracker.observe(b, 100), Activation::Single);
        assert_eq!(tracker.observe(b, 200), Activation::Double);
    }

    #[test]
    fn triple_click_is_double_then_single() {
        let mut tracker = ActivationTracker::new();
        let room = RoomId::intern("room-triple");
        assert_eq!(tracker.observe(room, 0), Activation::Single);
        assert_eq!(tracker.observe(room, 100), Activation::Double);
        assert_eq!(tracker.observe(room, 200), Activation::Single);
    }
}
