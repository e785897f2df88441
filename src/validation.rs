//! Input and output integrity checks.
//!
//! Checks structural integrity of rosters, room sets, and allocation
//! tables. Detects:
//! - Duplicate faculty ids or room labels
//! - Blank faculty names or room labels
//! - Faculty ids out of step with roster position
//! - Tables whose rooms, slot counts, or sessions break the table shape
//!
//! All problems are collected and returned together.

use crate::models::{AllocationTable, FacultyMember, Room, SLOTS_PER_ROOM};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same id or label.
    DuplicateId,
    /// A name or label is empty or whitespace.
    BlankName,
    /// A faculty id does not match its roster position.
    IdOutOfSequence,
    /// The table's rooms differ from the room set (count or order).
    RoomMismatch,
    /// A room holds more than two slots or repeats a session.
    SlotConflict,
    /// A slot names a faculty member not on the roster.
    UnknownFaculty,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster.
///
/// Checks:
/// 1. No duplicate ids
/// 2. No blank names
/// 3. The member at position `i` has id `T<i + 1>`
pub fn validate_roster(roster: &[FacultyMember]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (i, member) in roster.iter().enumerate() {
        if !ids.insert(member.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty ID: {}", member.id),
            ));
        }
        if member.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                format!("Faculty '{}' has a blank name", member.id),
            ));
        }
        let expected = FacultyMember::id_for(i + 1);
        if member.id != expected {
            errors.push(ValidationError::new(
                ValidationErrorKind::IdOutOfSequence,
                format!("Faculty at position {} has ID '{}', expected '{expected}'", i + 1, member.id),
            ));
        }
    }

    into_result(errors)
}

/// Validates a room set: unique, non-blank labels.
pub fn validate_rooms(rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut labels = HashSet::new();

    for room in rooms {
        if room.label.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                "Room with blank label",
            ));
        }
        if !labels.insert(room.label.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room label: {}", room.label),
            ));
        }
    }

    into_result(errors)
}

/// Validates a roster and room set together.
pub fn validate_input(roster: &[FacultyMember], rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();
    if let Err(mut e) = validate_roster(roster) {
        errors.append(&mut e);
    }
    if let Err(mut e) = validate_rooms(rooms) {
        errors.append(&mut e);
    }
    into_result(errors)
}

/// Validates the shape of an allocation table against its inputs.
///
/// Checks:
/// 1. One assignment per room, in room order
/// 2. At most two slots per room, no repeated session
/// 3. Every assigned member is on the roster
pub fn validate_table(
    table: &AllocationTable,
    roster: &[FacultyMember],
    rooms: &[Room],
) -> ValidationResult {
    let mut errors = Vec::new();

    if table.assignments.len() != rooms.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::RoomMismatch,
            format!(
                "Table has {} rooms, room set has {}",
                table.assignments.len(),
                rooms.len()
            ),
        ));
    }
    for (i, (a, room)) in table.assignments.iter().zip(rooms).enumerate() {
        if a.room != *room {
            errors.push(ValidationError::new(
                ValidationErrorKind::RoomMismatch,
                format!("Position {i} holds '{}', expected '{}'", a.room, room),
            ));
        }
    }

    let known: HashSet<&str> = roster.iter().map(|m| m.id.as_str()).collect();
    for a in &table.assignments {
        if a.slots.len() > SLOTS_PER_ROOM {
            errors.push(ValidationError::new(
                ValidationErrorKind::SlotConflict,
                format!("{} has {} slots", a.room, a.slots.len()),
            ));
        }
        if !a.has_distinct_sessions() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SlotConflict,
                format!("{} repeats a session", a.room),
            ));
        }
        for slot in &a.slots {
            if !known.contains(slot.faculty.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownFaculty,
                    format!("{} references unknown faculty '{}'", a.room, slot.faculty.id),
                ));
            }
        }
    }

    into_result(errors)
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoomSetConfig;
    use crate::models::{Day, RoomAssignment, RoomSet, Session, SessionSlot};
    use crate::roster::RosterStore;
    use crate::scheduler::allocate;

    fn sample_rooms() -> RoomSet {
        RoomSet::initialize(&RoomSetConfig::new(4)).unwrap()
    }

    fn member(id: &str, name: &str) -> FacultyMember {
        FacultyMember {
            id: id.into(),
            name: name.into(),
        }
    }

    #[test]
    fn test_valid_input() {
        let roster = RosterStore::with_default_faculty();
        assert!(validate_input(roster.list(), sample_rooms().rooms()).is_ok());
    }

    #[test]
    fn test_duplicate_faculty_id() {
        let roster = vec![member("T1", "A"), member("T1", "B")];
        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_blank_name() {
        let roster = vec![member("T1", "  ")];
        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::BlankName);
    }

    #[test]
    fn test_id_out_of_sequence() {
        let roster = vec![member("T1", "A"), member("T3", "B")];
        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::IdOutOfSequence && e.message.contains("T2")));
    }

    #[test]
    fn test_duplicate_room_label() {
        let rooms = vec![Room::new("Room 101"), Room::new("Room 101")];
        let errors = validate_rooms(&rooms).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("room")));
    }

    #[test]
    fn test_allocated_table_is_valid() {
        let roster = RosterStore::with_default_faculty();
        let rooms = sample_rooms();
        for day in Day::ALL {
            let table = allocate(roster.list(), rooms.rooms(), day);
            assert!(validate_table(&table, roster.list(), rooms.rooms()).is_ok());
        }
    }

    #[test]
    fn test_table_room_mismatch() {
        let roster = RosterStore::with_default_faculty();
        let rooms = sample_rooms();
        let mut table = allocate(roster.list(), rooms.rooms(), Day::Mon);
        table.assignments.swap(0, 1);
        let errors = validate_table(&table, roster.list(), rooms.rooms()).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::RoomMismatch)
                .count(),
            2
        );

        table.assignments.pop();
        let errors = validate_table(&table, roster.list(), rooms.rooms()).unwrap_err();
        assert!(errors.iter().any(|e| e.message.contains("Table has 3 rooms")));
    }

    #[test]
    fn test_table_slot_conflict_and_unknown() {
        let roster = RosterStore::from_names(["A", "B"]).unwrap();
        let rooms = vec![Room::new("Room 101")];
        let mut a = RoomAssignment::empty(rooms[0].clone());
        a.slots.push(SessionSlot::new(roster.list()[0].clone(), Session::Morning));
        a.slots.push(SessionSlot::new(roster.list()[1].clone(), Session::Morning));
        a.slots.push(SessionSlot::new(member("T9", "Ghost"), Session::Afternoon));
        let table = AllocationTable {
            day: Day::Mon,
            assignments: vec![a],
        };

        let errors = validate_table(&table, roster.list(), &rooms).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::SlotConflict)
                .count(),
            2
        );
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownFaculty));
    }

    #[test]
    fn test_multiple_errors() {
        let roster = vec![member("T2", " ")];
        let rooms = vec![Room::new(""), Room::new("")];
        let errors = validate_input(&roster, &rooms).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
