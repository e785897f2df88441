//! Examination day model.
//!
//! Days form a fixed ordered sequence. A day's only role in allocation is
//! to pick the starting position of the roster walk.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// Number of roster positions each day shifts the starting cursor by.
pub const DAY_STRIDE: usize = 2;

/// A weekday on which examinations run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    #[default]
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    /// All days in selection order.
    pub const ALL: [Day; 5] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Position within [`Day::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Starting roster cursor for this day.
    pub fn offset(self) -> usize {
        self.index() * DAY_STRIDE
    }

    /// Short label (`"Mon"`, `"Tue"`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| BoardError::invalid_input("day", format!("unknown day '{s}'")))
    }
}
