use diesel::prelude::*;

use crate::domain::order::{Order as DomainOrder, OrderListQuery};
use crate::models::order::Order as DbOrder;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, OrderReader};

impl OrderReader for DieselRepository {
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<DomainOrder>> {
        use crate::schema::orders;

        let mut conn = self.conn()?;

        let OrderListQuery {
            restaurant_id,
            status,
            limit,
        } = query;

        let mut items = orders::table
            .filter(orders::restaurant_id.eq(restaurant_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status) = status {
            let status_value: &str = status.into();
            items = items.filter(orders::status.eq(status_value));
        }

        items = items.order(orders::created_at.desc());

        if let Some(limit) = limit {
            items = items.limit(limit);
        }

        let rows = items.load::<DbOrder>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
