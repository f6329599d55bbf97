use chrono::NaiveDateTime;

use crate::auth::AuthenticatedUser;
use crate::domain::reservation::{Reservation, ReservationListQuery};
use crate::forms::reservations::AddReservationForm;
use crate::repository::{ReservationReader, ReservationWriter, RestaurantReader};
use crate::services::{ServiceError, ServiceResult};

/// Data required to render the reservations page.
#[derive(Debug, Default)]
pub struct ReservationsPageData {
    /// Bookings ordered by business date, newest first.
    pub reservations: Vec<Reservation>,
}

/// Lists the authenticated operator's reservations.
///
/// An operator without a restaurant simply has no bookings yet; that renders
/// as an empty list, not an error.
pub fn load_reservations<R>(
    repo: &R,
    user: &AuthenticatedUser,
) -> ServiceResult<ReservationsPageData>
where
    R: RestaurantReader + ReservationReader + ?Sized,
{
    let Some(restaurant) = repo.get_restaurant_by_user(&user.sub)? else {
        return Ok(ReservationsPageData::default());
    };

    let reservations = repo.list_reservations(ReservationListQuery::new(restaurant.id))?;

    Ok(ReservationsPageData { reservations })
}

/// Creates a booking for the authenticated operator's restaurant.
///
/// Validation happens before any write: a missing restaurant profile, a
/// non-numeric party size or a missing required field all fail without
/// touching storage. `now` stamps the record's creation time.
pub fn create_reservation<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &AddReservationForm,
    now: NaiveDateTime,
) -> ServiceResult<Reservation>
where
    R: RestaurantReader + ReservationWriter + ?Sized,
{
    let restaurant = repo.get_restaurant_by_user(&user.sub)?.ok_or_else(|| {
        ServiceError::Form("Save your restaurant profile before taking reservations.".to_string())
    })?;

    let new_reservation = form
        .to_new_reservation(restaurant.id, now)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_reservation(&new_reservation)
        .map_err(ServiceError::from)
}
