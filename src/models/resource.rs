//! Teacher and room models.
//!
//! Teachers and rooms are the shared resources a class-level competes for
//! with other class-levels of the same term. The scheduler only looks at
//! their identifiers and, for rooms, the type tag.

use serde::{Deserialize, Serialize};

/// A teacher that can be assigned to subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Teacher {
    /// Creates a teacher.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// A room that can host a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Room classification.
    pub room_type: RoomType,
    /// Seats. Carried through, not used for placement.
    pub capacity: u32,
}

/// Room classification.
///
/// Lab and workshop rooms are preferred for subjects with practice hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    /// General lecture room.
    Classroom,
    /// Laboratory (computers, science benches).
    Lab,
    /// Workshop (tools, machinery).
    Workshop,
    /// Institution-specific type.
    Custom(String),
}

impl RoomType {
    /// Whether the room suits practice hours.
    pub fn is_practical(&self) -> bool {
        matches!(self, RoomType::Lab | RoomType::Workshop)
    }
}

impl Room {
    /// Creates a room of the given type.
    pub fn new(id: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            room_type,
            capacity: 0,
        }
    }

    /// Creates a general classroom.
    pub fn classroom(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Classroom)
    }

    /// Creates a lab.
    pub fn lab(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Lab)
    }

    /// Creates a workshop.
    pub fn workshop(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Workshop)
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether this room is a lab or workshop.
    #[inline]
    pub fn is_practical(&self) -> bool {
        self.room_type.is_practical()
    }
}
