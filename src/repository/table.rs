use diesel::prelude::*;

use crate::domain::table::{DiningTable, TableListQuery};
use crate::models::table::RestaurantTable as DbRestaurantTable;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, TableReader};

impl TableReader for DieselRepository {
    fn list_tables(&self, query: TableListQuery) -> RepositoryResult<Vec<DiningTable>> {
        use crate::schema::restaurant_tables;

        let mut conn = self.conn()?;

        let rows = restaurant_tables::table
            .filter(restaurant_tables::restaurant_id.eq(query.restaurant_id))
            .order(restaurant_tables::id.asc())
            .load::<DbRestaurantTable>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
