//! # Identity Tags
//!
//! Opaque, process-unique identifiers for entities that carry one
//! (employees and auditors). Tags are minted once at construction and
//! never change for the lifetime of the owning value.

use std::fmt;

use uuid::Uuid;

/// A unique opaque identifier minted for one entity.
///
/// Backed by a random v4 UUID, so two tags minted in the same process are
/// never equal (collision probability negligible). No central registry is
/// involved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdTag(Uuid);

impl IdTag {
    /// Mints a fresh random tag.
    #[must_use]
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for IdTag {
    fn default() -> Self {
        Self::mint()
    }
}

impl fmt::Display for IdTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
