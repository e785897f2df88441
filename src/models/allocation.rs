//! Allocation (solution) model.
//!
//! An allocation table records, for one day, which faculty members
//! invigilate each room in each session. Tables are derived values: they
//! are rebuilt from the roster, room set, and day rather than edited.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Day, FacultyMember, Room};

/// Slots each room needs to be fully staffed.
pub const SLOTS_PER_ROOM: usize = 2;

/// Half-day examination session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Session {
    Morning,
    Afternoon,
}

impl Session {
    /// Sessions in fill order.
    pub const ALL: [Session; SLOTS_PER_ROOM] = [Session::Morning, Session::Afternoon];

    pub fn label(self) -> &'static str {
        match self {
            Session::Morning => "Morning",
            Session::Afternoon => "Afternoon",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A faculty member placed in one session of a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSlot {
    pub faculty: FacultyMember,
    pub session: Session,
}

impl SessionSlot {
    pub fn new(faculty: FacultyMember, session: Session) -> Self {
        Self { faculty, session }
    }
}

/// The staffing of a single room.
///
/// Holds zero, one, or two slots. When two are present their sessions
/// are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAssignment {
    pub room: Room,
    pub slots: Vec<SessionSlot>,
}

impl RoomAssignment {
    /// Creates an assignment with no slots filled.
    pub fn empty(room: Room) -> Self {
        Self {
            room,
            slots: Vec::with_capacity(SLOTS_PER_ROOM),
        }
    }

    /// Fewer than two slots filled; shown as pending reassignment.
    pub fn is_understaffed(&self) -> bool {
        self.slots.len() < SLOTS_PER_ROOM
    }

    /// No slot filled at all.
    pub fn is_unstaffed(&self) -> bool {
        self.slots.is_empty()
    }

    /// The member covering a given session, if any.
    pub fn faculty_for(&self, session: Session) -> Option<&FacultyMember> {
        self.slots
            .iter()
            .find(|s| s.session == session)
            .map(|s| &s.faculty)
    }

    /// Whether no session appears twice.
    pub fn has_distinct_sessions(&self) -> bool {
        Session::ALL
            .iter()
            .all(|&session| self.slots.iter().filter(|s| s.session == session).count() <= 1)
    }
}

/// One assignment per room, in room order, for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationTable {
    pub day: Day,
    pub assignments: Vec<RoomAssignment>,
}

impl AllocationTable {
    pub fn new(day: Day) -> Self {
        Self {
            day,
            assignments: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Total session slots filled across all rooms.
    pub fn filled_slots(&self) -> usize {
        self.assignments.iter().map(|a| a.slots.len()).sum()
    }

    /// Rooms with fewer than two slots filled.
    pub fn pending_rooms(&self) -> Vec<&RoomAssignment> {
        self.assignments
            .iter()
            .filter(|a| a.is_understaffed())
            .collect()
    }

    /// Whether every room is fully staffed.
    pub fn is_fully_staffed(&self) -> bool {
        self.assignments.iter().all(|a| !a.is_understaffed())
    }

    /// Finds the assignment for a room label.
    pub fn assignment_for_room(&self, label: &str) -> Option<&RoomAssignment> {
        self.assignments.iter().find(|a| a.room.label == label)
    }

    /// All slots held by a faculty member, with their room.
    pub fn duties_of(&self, faculty_id: &str) -> Vec<(&Room, Session)> {
        self.assignments
            .iter()
            .flat_map(|a| {
                a.slots
                    .iter()
                    .filter(move |s| s.faculty.id == faculty_id)
                    .map(move |s| (&a.room, s.session))
            })
            .collect()
    }
}
