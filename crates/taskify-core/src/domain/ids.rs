//! Domain identifiers (strongly-typed integer IDs).
//!
//! Task keys and widget surface ids are both plain integers on the wire, but
//! they must never be mixed up in code. `Id<T>` carries the integer and a
//! zero-sized marker type, so `TaskKey` and `SurfaceId` are distinct types
//! while sharing one implementation.
//!
//! Serialization is transparent: an id is written as a bare JSON integer,
//! never as a float or an object, so a re-decoded key compares equal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// Marker trait for each id kind.
///
/// Provides the prefix used by `Display` ("task-", "surface-").
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// Generic integer id.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T: IdMarker> {
    value: i64,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn value(&self) -> i64 {
        self.value
    }
}

impl<T: IdMarker> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.value)
    }
}

// ========================================
// Marker types
// ========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Task {}

impl IdMarker for Task {
    fn prefix() -> &'static str {
        "task-"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Surface {}

impl IdMarker for Surface {
    fn prefix() -> &'static str {
        "surface-"
    }
}

/// Stable identifier of a task record inside the snapshot.
pub type TaskKey = Id<Task>;

/// Identifier of one placed widget surface, assigned by the host.
pub type SurfaceId = Id<Surface>;

impl TaskKey {
    /// Sentinel for "no key": a record without a usable key, or a completion
    /// command that arrived without one. Never matched and never bound to a row.
    pub const ABSENT: TaskKey = TaskKey::new(-1);

    pub fn is_absent(&self) -> bool {
        *self == Self::ABSENT
    }
}
