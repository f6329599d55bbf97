use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Lifecycle states for a reservation.
///
/// A reservation is born `confirmed`. The other three states are terminal:
/// once a booking is cancelled, completed or marked a no-show there is no way
/// back. Edit/cancel actions are not wired up yet, so the transition methods
/// are currently exercised by tests only.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl Default for ReservationStatus {
    fn default() -> Self {
        Self::Confirmed
    }
}

impl ReservationStatus {
    /// Terminal states admit no further transition.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Confirmed)
    }

    /// Whether the booking may move from `self` to `next`.
    pub fn can_transition_to(self, next: ReservationStatus) -> bool {
        matches!(self, Self::Confirmed) && next != Self::Confirmed
    }
}

impl From<&str> for ReservationStatus {
    fn from(value: &str) -> Self {
        match value {
            "cancelled" => Self::Cancelled,
            "completed" => Self::Completed,
            "no_show" => Self::NoShow,
            _ => Self::Confirmed,
        }
    }
}

impl From<ReservationStatus> for &'static str {
    fn from(value: ReservationStatus) -> Self {
        match value {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
            ReservationStatus::NoShow => "no_show",
        }
    }
}

/// Where a booking came from. Operator-entered bookings are `direct`;
/// aggregator integrations write the others.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReservationSource {
    Direct,
    Zomato,
    Dineout,
    Other,
}

impl Default for ReservationSource {
    fn default() -> Self {
        Self::Direct
    }
}

impl From<&str> for ReservationSource {
    fn from(value: &str) -> Self {
        match value {
            "direct" | "" => Self::Direct,
            "zomato" => Self::Zomato,
            "dineout" => Self::Dineout,
            _ => Self::Other,
        }
    }
}

impl From<ReservationSource> for &'static str {
    fn from(value: ReservationSource) -> Self {
        match value {
            ReservationSource::Direct => "direct",
            ReservationSource::Zomato => "zomato",
            ReservationSource::Dineout => "dineout",
            ReservationSource::Other => "other",
        }
    }
}

/// Domain representation of a table reservation.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Reservation {
    /// Unique identifier of the reservation.
    pub id: i32,
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Label of the reserved table.
    pub table_id: String,
    /// Name the booking is held under.
    pub customer_name: String,
    /// Contact phone number.
    pub customer_phone: String,
    /// Contact email, when provided.
    pub customer_email: Option<String>,
    /// Number of guests, always positive.
    pub party_size: i32,
    /// Business date of the booking.
    pub reservation_date: NaiveDate,
    /// Arrival time of the booking.
    pub reservation_time: NaiveTime,
    /// Current lifecycle status.
    pub status: ReservationStatus,
    /// Free-form requests, when provided.
    pub special_requests: Option<String>,
    /// Channel the booking arrived through.
    pub source: ReservationSource,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
}

/// Payload required to insert a new reservation.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub restaurant_id: i32,
    pub table_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub party_size: i32,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub status: ReservationStatus,
    pub special_requests: Option<String>,
    pub source: ReservationSource,
    pub created_at: NaiveDateTime,
}

impl NewReservation {
    /// Build an operator-entered booking: confirmed, direct, stamped with the
    /// caller's clock.
    #[allow(clippy::too_many_arguments)]
    pub fn direct(
        restaurant_id: i32,
        table_id: impl Into<String>,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        party_size: i32,
        reservation_date: NaiveDate,
        reservation_time: NaiveTime,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            restaurant_id,
            table_id: table_id.into(),
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            customer_email: None,
            party_size,
            reservation_date,
            reservation_time,
            status: ReservationStatus::Confirmed,
            special_requests: None,
            source: ReservationSource::Direct,
            created_at,
        }
    }

    pub fn with_email(mut self, email: Option<impl Into<String>>) -> Self {
        self.customer_email = email.map(Into::into);
        self
    }

    pub fn with_special_requests(mut self, requests: Option<impl Into<String>>) -> Self {
        self.special_requests = requests.map(Into::into);
        self
    }
}

/// Query definition used to list reservations for a restaurant, ordered by
/// the booking's business date (newest first), not by creation time.
#[derive(Debug, Clone)]
pub struct ReservationListQuery {
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Optional status filter.
    pub status: Option<ReservationStatus>,
}

impl ReservationListQuery {
    /// Construct a query that targets all reservations belonging to
    /// `restaurant_id`.
    pub fn new(restaurant_id: i32) -> Self {
        Self {
            restaurant_id,
            status: None,
        }
    }

    /// Filter the results by the provided status.
    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = Some(status);
        self
    }
}
