//! Duty load metrics.
//!
//! Derives how many invigilation slots each faculty member holds in an
//! allocation table. The result always covers the full roster, in roster
//! order, including members with no duty.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Count | Slots held by a member across all rooms |
//! | Total | Sum of counts (= filled slots in the table) |
//! | Overloaded | Count above a view-supplied threshold |
//! | Idle | Count of zero |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{BoardError, Result};
use crate::models::{AllocationTable, FacultyMember};

/// Duty count for one faculty member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyLoad {
    pub member: FacultyMember,
    pub count: usize,
}

impl DutyLoad {
    /// Whether the count exceeds `threshold`.
    pub fn is_overloaded(&self, threshold: usize) -> bool {
        self.count > threshold
    }
}

/// Per-member duty counts derived from one allocation table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyCount {
    /// One entry per roster member, in roster order.
    pub loads: Vec<DutyLoad>,
}

impl DutyCount {
    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.loads.iter().map(|l| l.count).sum()
    }

    /// Count for a faculty id, or `None` if the id is not on the roster.
    pub fn count_for(&self, faculty_id: &str) -> Option<usize> {
        self.loads
            .iter()
            .find(|l| l.member.id == faculty_id)
            .map(|l| l.count)
    }

    /// Members whose count exceeds `threshold`, in roster order.
    pub fn overloaded(&self, threshold: usize) -> Vec<&DutyLoad> {
        self.loads
            .iter()
            .filter(|l| l.is_overloaded(threshold))
            .collect()
    }

    /// Members with no duty, in roster order.
    pub fn idle(&self) -> Vec<&FacultyMember> {
        self.loads
            .iter()
            .filter(|l| l.count == 0)
            .map(|l| &l.member)
            .collect()
    }

    /// Highest single count (0 for an empty roster).
    pub fn max_count(&self) -> usize {
        self.loads.iter().map(|l| l.count).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}

/// Counts each member's slots in `table`.
///
/// Every roster member starts at zero. Fails with
/// [`BoardError::ReferentialIntegrity`] if the table names a faculty id
/// that is not on `roster`, and with [`BoardError::DuplicateFaculty`] if
/// `roster` lists an id twice (slots could not be attributed).
pub fn analyze(roster: &[FacultyMember], table: &AllocationTable) -> Result<DutyCount> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(roster.len());
    for (i, member) in roster.iter().enumerate() {
        if index.insert(member.id.as_str(), i).is_some() {
            tracing::error!(faculty_id = %member.id, "Roster repeats faculty id");
            return Err(BoardError::DuplicateFaculty(member.id.clone()));
        }
    }
    let mut counts = vec![0usize; roster.len()];

    for assignment in &table.assignments {
        for slot in &assignment.slots {
            match index.get(slot.faculty.id.as_str()) {
                Some(&i) => counts[i] += 1,
                None => {
                    tracing::error!(
                        faculty_id = %slot.faculty.id,
                        room = %assignment.room,
                        "Allocation references faculty outside roster"
                    );
                    return Err(BoardError::ReferentialIntegrity {
                        faculty_id: slot.faculty.id.clone(),
                        room: assignment.room.label.clone(),
                    });
                }
            }
        }
    }

    let loads = roster
        .iter()
        .zip(counts)
        .map(|(member, count)| DutyLoad {
            member: member.clone(),
            count,
        })
        .collect();
    Ok(DutyCount { loads })
}
