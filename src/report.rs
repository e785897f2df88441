//! Printable report content.
//!
//! Builds the text of the two exam-office reports from derived data. Page
//! layout and PDF encoding belong to the caller; this module only decides
//! what is printed, in which order, and at which indent level.

use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

use crate::models::{AllocationTable, RoomAssignment};
use crate::scheduler::DutyCount;

/// Printed under a room with no invigilator.
pub const UNSTAFFED_NOTICE: &str = "Faculty will be replaced soon";

/// Shown in the room detail view for a room with no invigilator.
pub const REPLACEMENT_IN_PROGRESS: &str = "Faculty replacement in progress";

/// One printed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    /// Nesting level (0 = heading, 1 = detail).
    pub indent: u8,
    pub text: String,
}

impl ReportLine {
    fn heading(text: impl Into<String>) -> Self {
        Self {
            indent: 0,
            text: text.into(),
        }
    }

    fn detail(text: impl Into<String>) -> Self {
        Self {
            indent: 1,
            text: text.into(),
        }
    }
}

/// A titled document ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    /// Suggested download name.
    pub file_name: String,
    pub lines: Vec<ReportLine>,
}

impl Report {
    /// Room-by-room staffing for the table's day.
    pub fn room_allocation(table: &AllocationTable) -> Self {
        let mut lines = Vec::new();
        for assignment in &table.assignments {
            lines.push(ReportLine::heading(assignment.room.label.clone()));
            if assignment.is_unstaffed() {
                lines.push(ReportLine::detail(UNSTAFFED_NOTICE));
            } else {
                lines.extend(assignment.slots.iter().map(|s| {
                    ReportLine::detail(format!("- {} ({})", s.faculty.name, s.session))
                }));
            }
        }

        Self {
            title: format!("Room Allocation – {}", table.day),
            file_name: format!("Room_Allocation_{}.pdf", table.day),
            lines,
        }
    }

    /// Duty count per faculty member, in roster order.
    pub fn faculty_load(duty: &DutyCount) -> Self {
        let lines = duty
            .loads
            .iter()
            .map(|l| ReportLine::heading(format!("{} – Duties: {}", l.member.name, l.count)))
            .collect();

        Self {
            title: "Faculty Load Analysis".to_string(),
            file_name: "Faculty_Load_Report.pdf".to_string(),
            lines,
        }
    }

    /// Writes the report as indented plain text.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;
        for line in &self.lines {
            let pad = "  ".repeat(line.indent as usize);
            writeln!(f, "{pad}{}", line.text)?;
        }
        Ok(())
    }
}

/// Detail lines for one room, as shown when the room is selected.
pub fn room_detail(assignment: &RoomAssignment) -> Vec<String> {
    if assignment.is_unstaffed() {
        return vec![REPLACEMENT_IN_PROGRESS.to_string()];
    }
    assignment
        .slots
        .iter()
        .map(|s| format!("{} – {}", s.faculty.name, s.session))
        .collect()
}
