use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a rendering surface.
///
/// Removal from the popup registry and event routing both go through
/// this id rather than through object identity, so the same semantics
/// hold no matter how handles are stored or cloned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceId(u32);

impl SurfaceId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

/// Monotonic allocator for surface ids. All surfaces are created on
/// the UI event loop, so no atomics are needed.
#[derive(Debug, Default)]
pub struct SurfaceIdAllocator {
    next: u32,
}

impl SurfaceIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> SurfaceId {
        let id = SurfaceId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_starts_at_zero() {
        let mut alloc = SurfaceIdAllocator::new();
        assert_eq!(alloc.allocate(), SurfaceId::new(0));
        assert_eq!(alloc.allocate(), SurfaceId::new(1));
        assert_eq!(alloc.allocate(), SurfaceId::new(2));
    }

    #[test]
    fn ids_are_unique() {
        let mut alloc = SurfaceIdAllocator::new();
        let a = alloc.allocate();
        let b = alloc.allocate();
        assert_ne!(a, b);
    }

    #[test]
    fn display_format() {
        assert_eq!(SurfaceId::new(7).to_string(), "surface-7");
    }

    #[test]
    fn surface_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(SurfaceId::new(3));
        set.insert(SurfaceId::new(3));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn surface_id_serialization() {
        let id = SurfaceId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        let parsed: SurfaceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
