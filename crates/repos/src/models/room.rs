//! Room models and DTOs.
//!
//! Rooms are the physical spaces managed from the room console; tables
//! may reference the room they sit in.

use serde::{Deserialize, Serialize};

use hostal_core::types::{DbId, Timestamp};

/// A room as represented by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: DbId,
    pub name: String,
    pub capacity: i32,
    pub floor: Option<i32>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    pub name: String,
    pub capacity: i32,
    pub floor: Option<i32>,
    pub description: Option<String>,
}

/// DTO for partially updating a room.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRoom {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub floor: Option<i32>,
    pub description: Option<String>,
}
