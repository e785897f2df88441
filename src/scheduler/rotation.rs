//! Day-rotated roster walk.
//!
//! # Algorithm
//!
//! 1. Start a cursor at the day's offset (`Day::index() * 2`).
//! 2. For each room in order, fill `Morning` then `Afternoon` with
//!    `roster[cursor]`, advancing the cursor after each fill.
//! 3. The cursor never wraps. Once it passes the end of the roster every
//!    remaining session of every remaining room stays empty.
//!
//! No fairness or availability logic is applied; different days only see
//! different windows of the same roster.
//!
//! # Complexity
//! O(r) where r = number of rooms.

use crate::models::{AllocationTable, Day, FacultyMember, Room, RoomAssignment, Session, SessionSlot};

/// Builds the allocation table for one day.
///
/// Always returns one assignment per room, in room order. An empty or
/// short roster under-assigns instead of failing.
///
/// # Example
///
/// ```
/// use u_invigilate::config::RoomSetConfig;
/// use u_invigilate::models::{Day, RoomSet, Session};
/// use u_invigilate::roster::RosterStore;
/// use u_invigilate::scheduler::allocate;
///
/// let roster = RosterStore::from_names(["A", "B", "C"]).unwrap();
/// let rooms = RoomSet::initialize(&RoomSetConfig::new(2)).unwrap();
///
/// let table = allocate(roster.list(), rooms.rooms(), Day::Mon);
/// assert_eq!(table.assignments[0].faculty_for(Session::Morning).unwrap().id, "T1");
/// assert_eq!(table.assignments[1].slots.len(), 1);
/// assert_eq!(table.pending_rooms().len(), 1);
/// ```
pub fn allocate(roster: &[FacultyMember], rooms: &[Room], day: Day) -> AllocationTable {
    let mut table = AllocationTable::new(day);
    table.assignments.reserve(rooms.len());
    let mut cursor = day.offset();

    for room in rooms {
        let mut assignment = RoomAssignment::empty(room.clone());
        for session in Session::ALL {
            if let Some(member) = roster.get(cursor) {
                assignment.slots.push(SessionSlot::new(member.clone(), session));
                cursor += 1;
            }
        }
        table.assignments.push(assignment);
    }

    tracing::debug!(
        day = %day,
        rooms = rooms.len(),
        roster = roster.len(),
        filled = table.filled_slots(),
        pending = table.pending_rooms().len(),
        "Allocation derived"
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoomSetConfig;
    use crate::models::{RoomSet, SLOTS_PER_ROOM};
    use crate::roster::RosterStore;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn roster(n: usize) -> RosterStore {
        RosterStore::from_names((1..=n).map(|i| format!("Faculty {i}"))).unwrap()
    }

    fn rooms(n: usize) -> RoomSet {
        RoomSet::initialize(&RoomSetConfig::new(n)).unwrap()
    }

    fn ids(a: &RoomAssignment) -> Vec<(&str, Session)> {
        a.slots
            .iter()
            .map(|s| (s.faculty.id.as_str(), s.session))
            .collect()
    }

    #[test]
    fn test_monday_ten_faculty_four_rooms() {
        let r = roster(10);
        let table = allocate(r.list(), rooms(4).rooms(), Day::Mon);

        assert_eq!(table.day, Day::Mon);
        assert_eq!(table.len(), 4);
        let expected = [
            ("Room 101", "T1", "T2"),
            ("Room 102", "T3", "T4"),
            ("Room 103", "T5", "T6"),
            ("Room 104", "T7", "T8"),
        ];
        for (a, (label, morning, afternoon)) in table.assignments.iter().zip(expected) {
            assert_eq!(a.room.label, label);
            assert_eq!(
                ids(a),
                vec![(morning, Session::Morning), (afternoon, Session::Afternoon)]
            );
        }
        assert!(table.is_fully_staffed());
    }

    #[test]
    fn test_wednesday_exhausts_roster() {
        let r = roster(10);
        let table = allocate(r.list(), rooms(4).rooms(), Day::Wed);

        assert_eq!(
            ids(&table.assignments[0]),
            vec![("T5", Session::Morning), ("T6", Session::Afternoon)]
        );
        assert_eq!(
            ids(&table.assignments[1]),
            vec![("T7", Session::Morning), ("T8", Session::Afternoon)]
        );
        assert_eq!(
            ids(&table.assignments[2]),
            vec![("T9", Session::Morning), ("T10", Session::Afternoon)]
        );
        assert_eq!(table.assignments[3].room.label, "Room 104");
        assert!(table.assignments[3].is_unstaffed());
    }

    #[test]
    fn test_odd_roster_leaves_half_room() {
        let r = roster(5);
        let table = allocate(r.list(), rooms(3).rooms(), Day::Mon);
        assert_eq!(ids(&table.assignments[2]), vec![("T5", Session::Morning)]);
        assert!(table.assignments[2].is_understaffed());
        assert!(table.assignments[2].faculty_for(Session::Afternoon).is_none());
    }

    #[test]
    fn test_no_wraparound() {
        // Friday starts at T9; a 10-member roster has only T9 and T10 left.
        let r = roster(10);
        let table = allocate(r.list(), rooms(3).rooms(), Day::Fri);
        assert_eq!(table.filled_slots(), 2);
        assert_eq!(
            ids(&table.assignments[0]),
            vec![("T9", Session::Morning), ("T10", Session::Afternoon)]
        );
        assert!(table.assignments[1].is_unstaffed());
        assert!(table.assignments[2].is_unstaffed());
        assert!(table.duties_of("T1").is_empty());
    }

    #[test]
    fn test_offset_beyond_roster() {
        let r = roster(3);
        let table = allocate(r.list(), rooms(4).rooms(), Day::Thu);
        assert_eq!(table.len(), 4);
        assert!(table.assignments.iter().all(|a| a.is_unstaffed()));
    }

    #[test]
    fn test_empty_inputs() {
        let r = roster(6);
        let table = allocate(r.list(), &[], Day::Tue);
        assert!(table.is_empty());
        assert_eq!(table.day, Day::Tue);

        let table = allocate(&[], rooms(2).rooms(), Day::Mon);
        assert_eq!(table.len(), 2);
        assert_eq!(table.filled_slots(), 0);
    }

    #[test]
    fn test_default_board_shape() {
        let r = RosterStore::with_default_faculty();
        let set = RoomSet::default();
        let table = allocate(r.list(), set.rooms(), Day::Tue);
        // 30 faculty from T3 on fill 14 rooms; Room 114 gets T29/T30.
        assert_eq!(table.filled_slots(), 28);
        assert_eq!(
            ids(table.assignment_for_room("Room 114").unwrap()),
            vec![("T29", Session::Morning), ("T30", Session::Afternoon)]
        );
        assert!(table.assignment_for_room("Room 115").unwrap().is_unstaffed());
        assert_eq!(table.pending_rooms().len(), 46);
    }

    #[test]
    fn test_randomized_invariants() {
        let mut rng = StdRng::seed_from_u64(0x1f2e);
        for _ in 0..200 {
            let roster_len = rng.random_range(0..40);
            let room_count = rng.random_range(0..25);
            let day = Day::ALL[rng.random_range(0..Day::ALL.len())];

            let r = roster(roster_len);
            let set = rooms(room_count);
            let table = allocate(r.list(), set.rooms(), day);

            // One entry per room, in room order.
            assert_eq!(table.len(), room_count);
            for (a, room) in table.assignments.iter().zip(set.rooms()) {
                assert_eq!(&a.room, room);
                assert!(a.slots.len() <= SLOTS_PER_ROOM);
                assert!(a.has_distinct_sessions());
            }

            // Filled slots are exactly the roster window after the offset.
            let available = roster_len.saturating_sub(day.offset());
            assert_eq!(
                table.filled_slots(),
                available.min(SLOTS_PER_ROOM * room_count)
            );

            if roster_len >= SLOTS_PER_ROOM * room_count + day.offset() {
                assert!(table.is_fully_staffed());
            }
            if roster_len <= day.offset() {
                assert!(table.assignments.iter().all(|a| a.is_unstaffed()));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let r = roster(17);
        let set = rooms(6);
        for day in Day::ALL {
            assert_eq!(
                allocate(r.list(), set.rooms(), day),
                allocate(r.list(), set.rooms(), day)
            );
        }
    }
}
