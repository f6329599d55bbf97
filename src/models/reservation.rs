use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::domain::reservation::{
    NewReservation as DomainNewReservation, Reservation as DomainReservation, ReservationSource,
    ReservationStatus,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::reservations)]
pub struct Reservation {
    pub id: i32,
    pub restaurant_id: i32,
    pub table_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub party_size: i32,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub status: String,
    pub special_requests: Option<String>,
    pub source: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reservations)]
pub struct NewReservation<'a> {
    pub restaurant_id: i32,
    pub table_id: &'a str,
    pub customer_name: &'a str,
    pub customer_phone: &'a str,
    pub customer_email: Option<&'a str>,
    pub party_size: i32,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub status: &'static str,
    pub special_requests: Option<&'a str>,
    pub source: &'static str,
    pub created_at: NaiveDateTime,
}

impl From<Reservation> for DomainReservation {
    fn from(value: Reservation) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            table_id: value.table_id,
            customer_name: value.customer_name,
            customer_phone: value.customer_phone,
            customer_email: value.customer_email,
            party_size: value.party_size,
            reservation_date: value.reservation_date,
            reservation_time: value.reservation_time,
            status: ReservationStatus::from(value.status.as_str()),
            special_requests: value.special_requests,
            source: ReservationSource::from(value.source.as_str()),
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewReservation> for NewReservation<'a> {
    fn from(value: &'a DomainNewReservation) -> Self {
        Self {
            restaurant_id: value.restaurant_id,
            table_id: value.table_id.as_str(),
            customer_name: value.customer_name.as_str(),
            customer_phone: value.customer_phone.as_str(),
            customer_email: value.customer_email.as_deref(),
            party_size: value.party_size,
            reservation_date: value.reservation_date,
            reservation_time: value.reservation_time,
            status: value.status.into(),
            special_requests: value.special_requests.as_deref(),
            source: value.source.into(),
            created_at: value.created_at,
        }
    }
}
