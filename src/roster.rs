//! Faculty roster.
//!
//! The roster is the only mutable source of truth besides day selection.
//! It grows by appending; members are never removed or edited. Id
//! generation happens inside [`RosterStore::append`] so the id handed back
//! always matches the member's position.
//!
//! In a multi-threaded host, wrap the store in a [`SharedRoster`]: appends
//! are serialized behind one mutex, so concurrent callers can never
//! observe duplicate or out-of-order ids.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{BoardError, Result};
use crate::models::FacultyMember;
use crate::validation::validate_roster;

/// Faculty seeded into a fresh board.
pub const DEFAULT_FACULTY: [&str; 30] = [
    "Dr. Ramesh Kumar",
    "Dr. Suresh Rao",
    "Dr. Anil Sharma",
    "Dr. Kiran Patel",
    "Dr. Venkatesh Naidu",
    "Dr. Mahesh Reddy",
    "Dr. Sunitha Devi",
    "Dr. Prakash Mehta",
    "Dr. Ravi Teja",
    "Dr. Sumanth Varma",
    "Dr. Lakshmi Narayana",
    "Dr. Harsha Vardhan",
    "Dr. Pooja Singh",
    "Dr. Nikhil Jain",
    "Dr. Aparna Iyer",
    "Dr. Naveen Chandra",
    "Dr. Priya Malhotra",
    "Dr. Arjun Verma",
    "Dr. Sneha Kulkarni",
    "Dr. Rohit Agarwal",
    "Dr. Deepak Mishra",
    "Dr. Kavitha Rao",
    "Dr. Sanjay Gupta",
    "Dr. Meena Iyer",
    "Dr. Karthik Subramaniam",
    "Dr. Anusha Reddy",
    "Dr. Vikram Singh",
    "Dr. Bhavya Shah",
    "Dr. Sateesh Babu",
    "Dr. Neha Kapoor",
];

/// Append-only, insertion-ordered faculty collection.
///
/// Deserialization goes through [`RosterStore::from_members`], so a stored
/// roster with ids out of sequence is rejected rather than loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RosterDocument")]
pub struct RosterStore {
    members: Vec<FacultyMember>,
}

#[derive(Deserialize)]
struct RosterDocument {
    members: Vec<FacultyMember>,
}

impl TryFrom<RosterDocument> for RosterStore {
    type Error = BoardError;

    fn try_from(doc: RosterDocument) -> Result<Self> {
        Self::from_members(doc.members)
    }
}

impl RosterStore {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster seeded with [`DEFAULT_FACULTY`] (`T1`..`T30`).
    pub fn with_default_faculty() -> Self {
        let members = DEFAULT_FACULTY
            .iter()
            .enumerate()
            .map(|(i, name)| FacultyMember::with_ordinal(i + 1, *name))
            .collect();
        Self { members }
    }

    /// Restores a roster from previously issued members.
    ///
    /// The member at position `i` must carry id `T<i + 1>` and a non-blank
    /// name; otherwise every problem is returned in
    /// [`BoardError::InvalidRoster`].
    pub fn from_members(members: Vec<FacultyMember>) -> Result<Self> {
        validate_roster(&members).map_err(BoardError::InvalidRoster)?;
        Ok(Self { members })
    }

    /// Builds a roster by appending each name in order.
    ///
    /// Fails on the first blank name; no partial roster is returned.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.append(name)?;
        }
        Ok(roster)
    }

    /// Appends a member and returns it.
    ///
    /// The new id is `T<len + 1>`. A blank or whitespace-only name is
    /// rejected with [`BoardError::InvalidInput`] and the roster is left
    /// unchanged. The name is stored as given.
    pub fn append(&mut self, name: impl Into<String>) -> Result<FacultyMember> {
        let name = name.into();
        if name.trim().is_empty() {
            tracing::warn!(len = self.members.len(), "Rejected blank faculty name");
            return Err(BoardError::invalid_input(
                "faculty name",
                "must not be empty or whitespace",
            ));
        }

        let member = FacultyMember::with_ordinal(self.members.len() + 1, name);
        self.members.push(member.clone());
        tracing::info!(faculty_id = %member.id, roster_len = self.members.len(), "Faculty appended");
        Ok(member)
    }

    /// Members in insertion order.
    pub fn list(&self) -> &[FacultyMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Finds a member by id.
    pub fn get(&self, id: &str) -> Option<&FacultyMember> {
        self.members.iter().find(|m| m.id == id)
    }
}

/// Thread-safe handle to a roster with single-writer appends.
#[derive(Debug, Clone, Default)]
pub struct SharedRoster {
    inner: Arc<Mutex<RosterStore>>,
}

impl SharedRoster {
    pub fn new(roster: RosterStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(roster)),
        }
    }

    // An append either pushes a complete member or nothing, so a poisoned
    // lock still guards a consistent roster.
    fn lock(&self) -> MutexGuard<'_, RosterStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends under the lock; id and position are assigned atomically.
    pub fn append(&self, name: impl Into<String>) -> Result<FacultyMember> {
        self.lock().append(name)
    }

    /// Copy of the current members in insertion order.
    pub fn snapshot(&self) -> Vec<FacultyMember> {
        self.lock().list().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
