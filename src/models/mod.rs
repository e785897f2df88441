//! Invigilation domain models.
//!
//! Provides the data types for an exam-day invigilation problem and its
//! solution: who can invigilate, where, on which day, and the resulting
//! allocation table.
//!
//! # Domain Mappings
//!
//! | u-invigilate | Generic scheduling |
//! |--------------|--------------------|
//! | FacultyMember | Resource (human) |
//! | Room | Task |
//! | Session | Activity |
//! | AllocationTable | Schedule |

mod allocation;
mod day;
mod faculty;
mod room;

pub use allocation::{AllocationTable, RoomAssignment, Session, SessionSlot, SLOTS_PER_ROOM};
pub use day::{Day, DAY_STRIDE};
pub use faculty::FacultyMember;
pub use room::{Room, RoomSet};
