use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Floor states for a dining table. Tables are managed by the (out of scope)
/// floor-plan flow; the console only counts them.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
    Unknown,
}

impl From<&str> for TableStatus {
    fn from(value: &str) -> Self {
        match value {
            "available" => Self::Available,
            "occupied" => Self::Occupied,
            "reserved" => Self::Reserved,
            _ => Self::Unknown,
        }
    }
}

impl From<TableStatus> for &'static str {
    fn from(value: TableStatus) -> Self {
        match value {
            TableStatus::Available => "available",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
            TableStatus::Unknown => "unknown",
        }
    }
}

/// Domain representation of a dining table on the restaurant floor.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DiningTable {
    /// Unique identifier of the table.
    pub id: i32,
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Current floor status.
    pub status: TableStatus,
    /// Timestamp for when the table record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last status change.
    pub updated_at: NaiveDateTime,
}

impl DiningTable {
    /// Whether the table is free to seat new customers.
    pub fn is_available(&self) -> bool {
        self.status == TableStatus::Available
    }
}

/// Query definition used to list tables for a restaurant.
#[derive(Debug, Clone)]
pub struct TableListQuery {
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
}

impl TableListQuery {
    pub fn new(restaurant_id: i32) -> Self {
        Self { restaurant_id }
    }
}
