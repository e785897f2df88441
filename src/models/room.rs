//! Examination room model.
//!
//! The room set is generated once from configuration and never changes
//! for the lifetime of a board.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{RoomSetConfig, DEFAULT_ROOM_COUNT};
use crate::error::{BoardError, Result};

/// An examination room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Unique label (e.g. `"Room 101"`).
    pub label: String,
}

impl Room {
    /// Creates a room with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Fixed ordered set of rooms.
///
/// No mutation is exposed; the only way to obtain a different set is to
/// initialize a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSet {
    rooms: Vec<Room>,
}

impl RoomSet {
    /// Generates `count` rooms labelled `<prefix> <start + i>`.
    ///
    /// Fails with [`BoardError::InvalidConfig`] if the numbering would
    /// overflow.
    pub fn initialize(config: &RoomSetConfig) -> Result<Self> {
        let count = u32::try_from(config.count).map_err(|_| {
            BoardError::InvalidConfig(format!("room count {} too large", config.count))
        })?;
        if count > 0 && config.start_index.checked_add(count - 1).is_none() {
            return Err(BoardError::InvalidConfig(format!(
                "room numbering overflows: start {} + count {}",
                config.start_index, config.count
            )));
        }

        Ok(Self {
            rooms: generate(config, count),
        })
    }

    /// Rooms in label order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Finds a room by label.
    pub fn get(&self, label: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.label == label)
    }
}

impl Default for RoomSet {
    fn default() -> Self {
        Self {
            rooms: generate(&RoomSetConfig::default(), DEFAULT_ROOM_COUNT),
        }
    }
}

// Callers guarantee `start_index + count - 1` fits in u32.
fn generate(config: &RoomSetConfig, count: u32) -> Vec<Room> {
    let prefix = config.label_prefix.trim();
    (0..count)
        .map(|i| {
            let number = config.start_index + i;
            if prefix.is_empty() {
                Room::new(number.to_string())
            } else {
                Room::new(format!("{prefix} {number}"))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_labels() {
        let set = RoomSet::initialize(&RoomSetConfig::new(4)).unwrap();
        let labels: Vec<&str> = set.rooms().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Room 101", "Room 102", "Room 103", "Room 104"]);
    }

    #[test]
    fn test_initialize_custom_prefix() {
        let config = RoomSetConfig::new(2)
            .with_label_prefix("Hall")
            .with_start_index(1);
        let set = RoomSet::initialize(&config).unwrap();
        assert_eq!(set.rooms()[0].label, "Hall 1");
        assert_eq!(set.rooms()[1].label, "Hall 2");
    }

    #[test]
    fn test_initialize_blank_prefix() {
        let config = RoomSetConfig::new(1).with_label_prefix("  ");
        let set = RoomSet::initialize(&config).unwrap();
        assert_eq!(set.rooms()[0].label, "101");
    }

    #[test]
    fn test_initialize_empty() {
        let set = RoomSet::initialize(&RoomSetConfig::new(0)).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_initialize_overflow() {
        let config = RoomSetConfig::new(2).with_start_index(u32::MAX);
        assert!(matches!(
            RoomSet::initialize(&config),
            Err(BoardError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_default_matches_config_default() {
        let set = RoomSet::default();
        assert_eq!(set.len(), 60);
        assert_eq!(set.rooms()[0].label, "Room 101");
        assert_eq!(set.rooms()[59].label, "Room 160");
        assert_eq!(set, RoomSet::initialize(&RoomSetConfig::default()).unwrap());
    }

    #[test]
    fn test_get_by_label() {
        let set = RoomSet::initialize(&RoomSetConfig::new(3)).unwrap();
        assert!(set.get("Room 102").is_some());
        assert!(set.get("Room 104").is_none());
    }
}
