use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for room IDs — fast comparisons, low memory.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// A lightweight, interned identifier for rooms in the facility plan.
/// Internally a `Spur` index — 4 bytes, Copy, Eq, Hash in O(1).
///
/// This type is only the token. Allocating a *fresh* id is the store's
/// job ([`crate::store::RoomStore::fresh_id`]): uniqueness is a store
/// invariant, and only the store can see which ids the persisted blob
/// already occupies. Persisted blobs carry the underlying string, so ids
/// survive a save/load round-trip.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(Spur);

impl RoomId {
    /// Intern a string as a RoomId, or return the existing token.
    pub fn intern(s: &str) -> Self {
        RoomId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }
}

impl fmt::Debug for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.as_str())
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RoomId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RoomId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(RoomId::intern(&s))
    }
}
