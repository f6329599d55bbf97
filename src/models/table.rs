use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::table::{DiningTable, TableStatus};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::restaurant_tables)]
pub struct RestaurantTable {
    pub id: i32,
    pub restaurant_id: i32,
    pub status: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable table row, used by seeding and integration tests standing in
/// for the floor-plan flow.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::restaurant_tables)]
pub struct NewRestaurantTable<'a> {
    pub restaurant_id: i32,
    pub status: Option<&'a str>,
}

impl From<RestaurantTable> for DiningTable {
    fn from(value: RestaurantTable) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            status: value
                .status
                .as_deref()
                .map(TableStatus::from)
                .unwrap_or(TableStatus::Unknown),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
