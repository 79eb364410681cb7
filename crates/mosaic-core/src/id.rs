//! Entity identifiers

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide counter, so ids stay unique across independent game loops
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an entity in a game loop's live set.
///
/// Entities are removed by identity, never by value. An id is never reused,
/// so a stale id held after `destroy` can only ever miss.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct EntityId(u64);

impl EntityId {
    /// Allocate a fresh, never-before-seen id
    pub fn new() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Create an EntityId from a raw value (for testing)
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw u64 value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generation() {
        let id1 = EntityId::new();
        let id2 = EntityId::new();
        assert_ne!(id1, id2);
        assert!(id2.raw() > id1.raw());
    }

    #[test]
    fn test_from_raw() {
        let id = EntityId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(format!("{:?}", id), "EntityId(42)");
    }
}
