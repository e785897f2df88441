//! Allocation engine and duty load analysis.
//!
//! # Algorithm
//!
//! `allocate` walks the roster from a day-dependent offset, giving each
//! room a morning and an afternoon invigilator in turn. It is a fixed,
//! deterministic window walk, not an optimizer: trailing rooms stay
//! unstaffed once the roster runs out.
//!
//! # Load
//!
//! `analyze` counts how many slots each roster member holds in a table
//! and refuses tables that reference members outside the roster.

mod load;
mod rotation;

pub use load::{analyze, DutyCount, DutyLoad};
pub use rotation::allocate;
