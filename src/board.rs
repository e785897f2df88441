//! Invigilation board.
//!
//! Holds the mutable inputs (roster and selected day) next to the fixed
//! room set and derives everything else on request. Allocation tables and
//! duty counts are never stored, so a view can never lag behind the
//! roster or day it was built from.

use serde::Serialize;

use crate::config::BoardConfig;
use crate::error::{BoardError, Result};
use crate::models::{AllocationTable, Day, FacultyMember, RoomSet};
use crate::report::Report;
use crate::roster::{RosterStore, SharedRoster};
use crate::scheduler::{allocate, analyze, DutyCount};
use crate::validation::{validate_input, ValidationError};

/// Everything a dashboard renders for the current inputs.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub day: Day,
    pub table: AllocationTable,
    pub duty: DutyCount,
    pub overload_threshold: usize,
}

impl BoardView {
    /// Labels of rooms shown as pending reassignment.
    pub fn pending_labels(&self) -> Vec<&str> {
        self.table
            .pending_rooms()
            .iter()
            .map(|a| a.room.label.as_str())
            .collect()
    }

    /// Ids of members shown as overloaded.
    pub fn overloaded_ids(&self) -> Vec<&str> {
        self.duty
            .overloaded(self.overload_threshold)
            .iter()
            .map(|l| l.member.id.as_str())
            .collect()
    }

    /// Room allocation report for this view's day.
    pub fn room_report(&self) -> Report {
        Report::room_allocation(&self.table)
    }

    /// Faculty load report matching [`BoardView::room_report`].
    pub fn load_report(&self) -> Report {
        Report::faculty_load(&self.duty)
    }
}

/// Roster, room set, and day selection for one exam office.
#[derive(Debug, Clone)]
pub struct InvigilationBoard {
    roster: SharedRoster,
    rooms: RoomSet,
    day: Day,
    overload_threshold: usize,
}

impl InvigilationBoard {
    /// Builds a board from configuration.
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        let rooms = RoomSet::initialize(&config.rooms)?;
        let roster = if config.seed_default_roster {
            RosterStore::with_default_faculty()
        } else {
            RosterStore::new()
        };
        tracing::info!(
            rooms = rooms.len(),
            faculty = roster.len(),
            day = %config.initial_day,
            "Invigilation board initialized"
        );
        Ok(Self {
            roster: SharedRoster::new(roster),
            rooms,
            day: config.initial_day,
            overload_threshold: config.overload_threshold,
        })
    }

    /// Builds a board from an existing roster and room set.
    ///
    /// Both are checked first; all structural problems are returned.
    pub fn from_parts(
        roster: RosterStore,
        rooms: RoomSet,
    ) -> std::result::Result<Self, Vec<ValidationError>> {
        validate_input(roster.list(), rooms.rooms())?;
        let defaults = BoardConfig::default();
        Ok(Self {
            roster: SharedRoster::new(roster),
            rooms,
            day: defaults.initial_day,
            overload_threshold: defaults.overload_threshold,
        })
    }

    /// Handle for appending from other threads.
    pub fn roster_handle(&self) -> SharedRoster {
        self.roster.clone()
    }

    /// Current roster in insertion order.
    pub fn faculty(&self) -> Vec<FacultyMember> {
        self.roster.snapshot()
    }

    pub fn rooms(&self) -> &RoomSet {
        &self.rooms
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn overload_threshold(&self) -> usize {
        self.overload_threshold
    }

    pub fn select_day(&mut self, day: Day) {
        tracing::debug!(from = %self.day, to = %day, "Day selected");
        self.day = day;
    }

    /// Selects a day by its short label (`"Mon"`..`"Fri"`).
    pub fn select_day_str(&mut self, label: &str) -> Result<Day> {
        let day: Day = label.parse()?;
        self.select_day(day);
        Ok(day)
    }

    /// Adds a faculty member; see [`RosterStore::append`].
    pub fn append_faculty(&self, name: impl Into<String>) -> Result<FacultyMember> {
        self.roster.append(name)
    }

    /// Allocation for the current roster and day.
    pub fn allocation(&self) -> AllocationTable {
        allocate(&self.roster.snapshot(), self.rooms.rooms(), self.day)
    }

    /// Duty counts for the current allocation.
    pub fn duty_count(&self) -> Result<DutyCount> {
        Ok(self.view()?.duty)
    }

    /// Derives table and duty count from one roster snapshot.
    pub fn view(&self) -> Result<BoardView> {
        let roster = self.roster.snapshot();
        let table = allocate(&roster, self.rooms.rooms(), self.day);
        let duty = analyze(&roster, &table)?;
        Ok(BoardView {
            day: self.day,
            table,
            duty,
            overload_threshold: self.overload_threshold,
        })
    }

    /// Room allocation report for the current day.
    ///
    /// Takes its own roster snapshot. Use [`InvigilationBoard::reports`]
    /// when both reports must agree.
    pub fn room_report(&self) -> Report {
        Report::room_allocation(&self.allocation())
    }

    /// Faculty load report for the current day.
    pub fn load_report(&self) -> Result<Report> {
        Ok(self.view()?.load_report())
    }

    /// Room and load reports built from one roster snapshot.
    pub fn reports(&self) -> Result<(Report, Report)> {
        let view = self.view()?;
        Ok((view.room_report(), view.load_report()))
    }
}

impl TryFrom<BoardConfig> for InvigilationBoard {
    type Error = BoardError;

    fn try_from(config: BoardConfig) -> Result<Self> {
        Self::from_config(&config)
    }
}
