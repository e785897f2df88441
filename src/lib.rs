//! Invigilation duty allocation for examination days.
//!
//! Given a faculty roster and a fixed set of exam rooms, assigns one
//! morning and one afternoon invigilator to every room for a selected
//! day, counts each member's duties, and flags rooms left understaffed.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `FacultyMember`, `Room`, `RoomSet`, `Day`,
//!   `Session`, `RoomAssignment`, `AllocationTable`
//! - **`roster`**: Append-only faculty roster and its thread-safe handle
//! - **`scheduler`**: `allocate` (day-rotated roster walk) and `analyze`
//!   (per-member duty counts)
//! - **`validation`**: Integrity checks for rosters, room sets, and tables
//! - **`board`**: Recompute-on-demand facade over roster, rooms, and day
//! - **`report`**: Content of the printable allocation and load reports
//! - **`config`**: Room-set shape and view thresholds
//!
//! # Architecture
//!
//! Roster and day selection are the only mutable state. Allocation tables
//! and duty counts are pure derivations and are rebuilt on every request.
//! The crate logs through `tracing` and never installs a subscriber.

pub mod board;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod roster;
pub mod scheduler;
pub mod validation;

pub use board::{BoardView, InvigilationBoard};
pub use error::{BoardError, Result};
