use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::inventory::InventoryItem as DomainInventoryItem;
use crate::models::coerce_quantity;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct InventoryItem {
    pub id: i32,
    pub user_id: String,
    pub name: String,
    pub current_stock: Option<String>,
    pub minimum_stock: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable inventory row, used by seeding and integration tests standing
/// in for the stock-management flow.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::inventory_items)]
pub struct NewInventoryItem<'a> {
    pub user_id: &'a str,
    pub name: &'a str,
    pub current_stock: Option<&'a str>,
    pub minimum_stock: Option<&'a str>,
}

impl From<InventoryItem> for DomainInventoryItem {
    fn from(value: InventoryItem) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            name: value.name,
            current_stock: coerce_quantity(value.current_stock.as_deref()),
            minimum_stock: coerce_quantity(value.minimum_stock.as_deref()),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
