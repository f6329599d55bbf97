use diesel::prelude::*;

use crate::domain::restaurant::{
    NewRestaurant as DomainNewRestaurant, Restaurant as DomainRestaurant,
    UpdateRestaurant as DomainUpdateRestaurant,
};
use crate::models::restaurant::{
    NewRestaurant as DbNewRestaurant, Restaurant as DbRestaurant,
    UpdateRestaurant as DbUpdateRestaurant,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, RestaurantReader, RestaurantWriter};

impl RestaurantReader for DieselRepository {
    fn get_restaurant_by_user(&self, user_id: &str) -> RepositoryResult<Option<DomainRestaurant>> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        // Uniqueness per principal is a convention, not a constraint. Order
        // by id so duplicate rows always resolve to the same profile.
        let restaurant = restaurants::table
            .filter(restaurants::user_id.eq(user_id))
            .order(restaurants::id.asc())
            .first::<DbRestaurant>(&mut conn)
            .optional()?;

        Ok(restaurant.map(Into::into))
    }
}

impl RestaurantWriter for DieselRepository {
    fn create_restaurant(
        &self,
        new_restaurant: &DomainNewRestaurant,
    ) -> RepositoryResult<DomainRestaurant> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(restaurants::table)
            .values(&DbNewRestaurant::from(new_restaurant))
            .get_result::<DbRestaurant>(&mut conn)?;

        Ok(created.into())
    }

    fn update_restaurant(
        &self,
        restaurant_id: i32,
        updates: &DomainUpdateRestaurant,
    ) -> RepositoryResult<DomainRestaurant> {
        use crate::schema::restaurants;

        let mut conn = self.conn()?;

        let target = restaurants::table.filter(restaurants::id.eq(restaurant_id));
        let updated = diesel::update(target)
            .set(&DbUpdateRestaurant::from(updates))
            .get_result::<DbRestaurant>(&mut conn)?;

        Ok(updated.into())
    }
}
