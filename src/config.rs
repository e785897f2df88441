//! Board configuration.
//!
//! Room-set shape and view thresholds are supplied once at startup. All
//! fields have defaults matching the campus exam-hall layout, so an empty
//! JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, Result};
use crate::models::{Day, RoomSet};

/// Rooms in the default exam-hall layout (`Room 101`..`Room 160`).
pub const DEFAULT_ROOM_COUNT: u32 = 60;

/// Number of the first room in the default layout.
pub const DEFAULT_START_INDEX: u32 = 101;

/// Shape of the exam room set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomSetConfig {
    /// Number of rooms.
    pub count: usize,
    /// Label prefix (`"Room"` → `"Room 101"`).
    pub label_prefix: String,
    /// Number of the first room.
    pub start_index: u32,
}

impl Default for RoomSetConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_ROOM_COUNT as usize,
            label_prefix: "Room".to_string(),
            start_index: DEFAULT_START_INDEX,
        }
    }
}

impl RoomSetConfig {
    /// Default prefix and numbering with the given room count.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    pub fn with_start_index(mut self, start_index: u32) -> Self {
        self.start_index = start_index;
        self
    }
}

/// Top-level board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rooms: RoomSetConfig,
    /// A member is shown as overloaded when their duty count exceeds this.
    pub overload_threshold: usize,
    /// Day selected when the board opens.
    pub initial_day: Day,
    /// Start from the built-in faculty list instead of an empty roster.
    pub seed_default_roster: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rooms: RoomSetConfig::default(),
            overload_threshold: 2,
            initial_day: Day::Mon,
            seed_default_roster: true,
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the room set can be built.
    pub fn validate(&self) -> Result<()> {
        RoomSet::initialize(&self.rooms).map(|_| ())
    }

    pub fn with_rooms(mut self, rooms: RoomSetConfig) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn with_overload_threshold(mut self, threshold: usize) -> Self {
        self.overload_threshold = threshold;
        self
    }

    pub fn with_initial_day(mut self, day: Day) -> Self {
        self.initial_day = day;
        self
    }

    /// Starts from an empty roster.
    pub fn without_seed_roster(mut self) -> Self {
        self.seed_default_roster = false;
        self
    }
}

impl TryFrom<&str> for BoardConfig {
    type Error = BoardError;

    fn try_from(json: &str) -> Result<Self> {
        Self::from_json_str(json)
    }
}
