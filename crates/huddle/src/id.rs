//! Session-local identifiers for transient UI objects.
//!
//! Ids are plain monotonically increasing integers, wrapped in a marker type so
//! overlay ids, instance ids and toast ids cannot be mixed up. They are never
//! persisted and never sent over the wire.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A type-safe wrapper around a monotonically allocated integer.
pub struct Id<T> {
    value: u64,
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wraps a raw value.
    ///
    /// # Example
    /// ```
    /// use huddle::id::OverlayId;
    ///
    /// let id = OverlayId::from_raw(7);
    /// assert_eq!(id.get(), 7);
    /// ```
    pub const fn from_raw(value: u64) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    pub const fn get(&self) -> u64 {
        self.value
    }
}

// Manual impls so `T` (a bare marker) does not need to implement anything.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Hands out strictly increasing ids of one kind.
///
/// # Example
/// ```
/// use huddle::id::{IdAllocator, OverlayMarker};
///
/// let mut ids = IdAllocator::<OverlayMarker>::new();
/// let first = ids.next_id();
/// let second = ids.next_id();
/// assert!(second > first);
/// ```
pub struct IdAllocator<T> {
    next: u64,
    _phantom: PhantomData<T>,
}

impl<T> IdAllocator<T> {
    pub const fn new() -> Self {
        Self {
            next: 0,
            _phantom: PhantomData,
        }
    }

    pub fn next_id(&mut self) -> Id<T> {
        let id = Id::from_raw(self.next);
        self.next += 1;
        id
    }
}

impl<T> Default for IdAllocator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for IdAllocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdAllocator").field("next", &self.next).finish()
    }
}

impl<T> Clone for IdAllocator<T> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            _phantom: PhantomData,
        }
    }
}

// Type markers for the different transient objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastMarker;

/// Identifies one reaction overlay (a burst of floating emoji).
pub type OverlayId = Id<OverlayMarker>;

/// Identifies a single floating emoji inside an overlay.
pub type InstanceId = Id<InstanceMarker>;

/// Identifies one queued toast.
pub type ToastId = Id<ToastMarker>;
