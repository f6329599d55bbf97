use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a stock-tracked inventory item.
///
/// Inventory is scoped by the owning principal rather than the restaurant.
/// The upstream data model was built that way and the aggregation preserves
/// it, so the query key here is the `user_id`, not a restaurant id.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InventoryItem {
    /// Unique identifier of the item.
    pub id: i32,
    /// Principal id of the owning operator.
    pub user_id: String,
    /// Display name of the item.
    pub name: String,
    /// Quantity currently on hand; non-numeric storage reads as 0.
    pub current_stock: f64,
    /// Restock threshold; non-numeric storage reads as 0.
    pub minimum_stock: f64,
    /// Timestamp for when the item record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last stock adjustment.
    pub updated_at: NaiveDateTime,
}

impl InventoryItem {
    /// An item sitting exactly at its threshold already counts as low stock.
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.minimum_stock
    }
}

/// Query definition used to list inventory items owned by a principal.
#[derive(Debug, Clone)]
pub struct InventoryListQuery {
    /// Principal id of the owning operator.
    pub user_id: String,
}

impl InventoryListQuery {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(current: f64, minimum: f64) -> InventoryItem {
        let at = NaiveDate::from_ymd_opt(2025, 8, 1)
            .and_then(|date| date.and_hms_opt(9, 0, 0))
            .unwrap_or_default();
        InventoryItem {
            id: 1,
            user_id: "user-1".to_string(),
            name: "Basmati rice".to_string(),
            current_stock: current,
            minimum_stock: minimum,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn stock_at_threshold_counts_as_low() {
        assert!(item(5.0, 5.0).is_low_stock());
    }

    #[test]
    fn stock_above_threshold_is_not_low() {
        assert!(!item(5.1, 5.0).is_low_stock());
        assert!(item(4.9, 5.0).is_low_stock());
    }
}
