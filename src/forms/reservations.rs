use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::reservation::NewReservation;
use crate::routes::empty_string_as_none;

/// Maximum allowed length for free-text fields on the booking form.
const TEXT_MAX_LEN: u64 = 255;

/// Result type returned by the reservation form helpers.
pub type ReservationFormResult<T> = Result<T, ReservationFormError>;

/// Errors that can occur while processing the add-reservation form.
#[derive(Debug, Error)]
pub enum ReservationFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// Party size was empty, non-numeric, zero or negative.
    #[error("party size must be a positive whole number")]
    InvalidPartySize,
    /// Reservation date did not parse as an ISO date.
    #[error("reservation date must look like 2025-08-20")]
    InvalidDate,
    /// Reservation time did not parse as HH:MM.
    #[error("reservation time must look like 19:30")]
    InvalidTime,
}

/// Form payload emitted when submitting the "New reservation" dialog.
///
/// Party size arrives as text and is parsed here; an unparsable value is a
/// validation error, never a silent default.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddReservationForm {
    /// Name the booking is held under.
    #[validate(length(min = 1, max = TEXT_MAX_LEN))]
    pub customer_name: String,
    /// Contact phone number.
    #[validate(length(min = 1, max = 32))]
    pub customer_phone: String,
    /// Optional contact email.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(email)]
    pub customer_email: Option<String>,
    /// Number of guests, as entered.
    #[validate(length(min = 1, max = 8))]
    pub party_size: String,
    /// Business date of the booking, ISO formatted by the date input.
    #[validate(length(min = 1))]
    pub reservation_date: String,
    /// Arrival time, HH:MM as emitted by the time input.
    #[validate(length(min = 1))]
    pub reservation_time: String,
    /// Label of the table to reserve.
    #[validate(length(min = 1, max = 32))]
    pub table_id: String,
    /// Optional free-form requests.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub special_requests: Option<String>,
}

impl AddReservationForm {
    /// Validates the payload into a domain `NewReservation` stamped with the
    /// tenant and the caller's clock. Borrows so the caller can hand the
    /// submitted values back to the template when this fails.
    pub fn to_new_reservation(
        &self,
        restaurant_id: i32,
        now: NaiveDateTime,
    ) -> ReservationFormResult<NewReservation> {
        self.validate()?;

        let party_size = parse_party_size(&self.party_size)?;
        let reservation_date = parse_reservation_date(&self.reservation_date)?;
        let reservation_time = parse_reservation_time(&self.reservation_time)?;

        Ok(NewReservation::direct(
            restaurant_id,
            self.table_id.trim(),
            self.customer_name.trim(),
            self.customer_phone.trim(),
            party_size,
            reservation_date,
            reservation_time,
            now,
        )
        .with_email(self.customer_email.as_deref())
        .with_special_requests(self.special_requests.as_deref()))
    }
}

fn parse_party_size(raw: &str) -> ReservationFormResult<i32> {
    let size = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| ReservationFormError::InvalidPartySize)?;
    if size < 1 {
        return Err(ReservationFormError::InvalidPartySize);
    }
    Ok(size)
}

fn parse_reservation_date(raw: &str) -> ReservationFormResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ReservationFormError::InvalidDate)
}

fn parse_reservation_time(raw: &str) -> ReservationFormResult<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| ReservationFormError::InvalidTime)
}
