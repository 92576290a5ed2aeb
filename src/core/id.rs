//! Swatch identification.
//!
//! Every swatch a session creates gets a `SwatchId` that is never reused
//! within that session. Ids are what the ordering judge compares, so a
//! swatch keeps its id no matter how often the player moves it.
//!
//! ```
//! use chroma_games::core::{SwatchId, SwatchIdAllocator};
//!
//! let mut ids = SwatchIdAllocator::new();
//! let a = ids.next_id();
//! let b = ids.next_id();
//!
//! assert_ne!(a, b);
//! assert_eq!(a.to_string(), "swatch-0");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a swatch within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SwatchId(pub u32);

impl SwatchId {
    /// Create a swatch ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for SwatchId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SwatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "swatch-{}", self.0)
    }
}

/// Monotonic allocator handing out fresh swatch IDs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SwatchIdAllocator {
    next: u32,
}

impl SwatchIdAllocator {
    /// Create an allocator starting at `swatch-0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator that hands out IDs strictly above `last`.
    ///
    /// Returns `None` if `last` is the largest possible ID.
    #[must_use]
    pub fn after(last: SwatchId) -> Option<Self> {
        last.0.checked_add(1).map(|next| Self { next })
    }

    /// Allocate the next ID.
    pub fn next_id(&mut self) -> SwatchId {
        let id = SwatchId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
