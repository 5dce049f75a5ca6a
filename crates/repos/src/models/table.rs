//! Table models and DTOs.
//!
//! Tables belong to the table console ("mesas"). A table optionally
//! references the room it sits in and tracks its availability flag.

use serde::{Deserialize, Serialize};

use hostal_core::types::{DbId, Timestamp};

/// A table as represented by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: DbId,
    pub room_id: Option<DbId>,
    pub number: i32,
    pub seats: i32,
    pub available: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTable {
    pub room_id: Option<DbId>,
    pub number: i32,
    pub seats: i32,
}

/// DTO for partially updating a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTable {
    pub room_id: Option<DbId>,
    pub number: Option<i32>,
    pub seats: Option<i32>,
    pub available: Option<bool>,
}
