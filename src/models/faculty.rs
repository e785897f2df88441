//! Faculty model.
//!
//! A faculty member is the unit of invigilation capacity. Members are
//! created by the roster, which owns id generation; once created a
//! member never changes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A faculty member eligible for invigilation duty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacultyMember {
    /// Stable identifier, `T<n>` with `n` the 1-based creation order.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl FacultyMember {
    /// Creates a member with the id for the given 1-based ordinal.
    pub(crate) fn with_ordinal(ordinal: usize, name: impl Into<String>) -> Self {
        Self {
            id: Self::id_for(ordinal),
            name: name.into(),
        }
    }

    /// Formats the roster id for a 1-based creation ordinal.
    pub fn id_for(ordinal: usize) -> String {
        format!("T{ordinal}")
    }

    /// Parses the creation ordinal back out of an id (`"T7"` → `7`).
    pub fn ordinal(&self) -> Option<usize> {
        self.id.strip_prefix('T')?.parse().ok()
    }
}

impl fmt::Display for FacultyMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
