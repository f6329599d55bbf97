use diesel::prelude::*;

use crate::domain::inventory::{InventoryItem as DomainInventoryItem, InventoryListQuery};
use crate::models::inventory::InventoryItem as DbInventoryItem;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, InventoryReader};

impl InventoryReader for DieselRepository {
    fn list_inventory_items(
        &self,
        query: InventoryListQuery,
    ) -> RepositoryResult<Vec<DomainInventoryItem>> {
        use crate::schema::inventory_items;

        let mut conn = self.conn()?;

        let rows = inventory_items::table
            .filter(inventory_items::user_id.eq(query.user_id.as_str()))
            .order(inventory_items::id.asc())
            .load::<DbInventoryItem>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
