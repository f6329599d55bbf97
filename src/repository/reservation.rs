use diesel::prelude::*;

use crate::domain::reservation::{
    NewReservation as DomainNewReservation, Reservation as DomainReservation,
    ReservationListQuery,
};
use crate::models::reservation::{
    NewReservation as DbNewReservation, Reservation as DbReservation,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ReservationReader, ReservationWriter};

impl ReservationReader for DieselRepository {
    fn list_reservations(
        &self,
        query: ReservationListQuery,
    ) -> RepositoryResult<Vec<DomainReservation>> {
        use crate::schema::reservations;

        let mut conn = self.conn()?;

        let ReservationListQuery {
            restaurant_id,
            status,
        } = query;

        let mut items = reservations::table
            .filter(reservations::restaurant_id.eq(restaurant_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status) = status {
            let status_value: &str = status.into();
            items = items.filter(reservations::status.eq(status_value));
        }

        // Sort by the booking's business date, not by when the record was
        // created.
        let rows = items
            .order(reservations::reservation_date.desc())
            .load::<DbReservation>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl ReservationWriter for DieselRepository {
    fn create_reservation(
        &self,
        new_reservation: &DomainNewReservation,
    ) -> RepositoryResult<DomainReservation> {
        use crate::schema::reservations;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(reservations::table)
            .values(&DbNewReservation::from(new_reservation))
            .get_result::<DbReservation>(&mut conn)?;

        Ok(created.into())
    }
}
