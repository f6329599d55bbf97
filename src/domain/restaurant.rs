use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a restaurant profile.
///
/// The restaurant is the tenant boundary: every order, reservation and table
/// hangs off a restaurant id, and the profile itself hangs off the owning
/// principal's `user_id`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Restaurant {
    /// Unique identifier of the restaurant.
    pub id: i32,
    /// Principal id of the owning operator.
    pub user_id: String,
    /// Display name of the restaurant.
    pub name: String,
    /// Street address, when provided.
    pub address: Option<String>,
    /// Contact phone number, when provided.
    pub phone: Option<String>,
    /// Contact email, when provided.
    pub email: Option<String>,
    /// Free-form cuisine description, e.g. "Indian" or "Italian".
    pub cuisine_type: Option<String>,
    /// Total number of tables on the floor.
    pub total_tables: i32,
    /// Timestamp for when the profile was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last profile update.
    pub updated_at: NaiveDateTime,
}

/// Payload required to create a restaurant profile for a principal.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub user_id: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub cuisine_type: Option<String>,
    pub total_tables: i32,
}

impl NewRestaurant {
    /// Build a minimal profile payload owned by `user_id`.
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            address: None,
            phone: None,
            email: None,
            cuisine_type: None,
            total_tables: 0,
        }
    }

    pub fn with_address(mut self, address: Option<impl Into<String>>) -> Self {
        self.address = address.map(Into::into);
        self
    }

    pub fn with_phone(mut self, phone: Option<impl Into<String>>) -> Self {
        self.phone = phone.map(Into::into);
        self
    }

    pub fn with_email(mut self, email: Option<impl Into<String>>) -> Self {
        self.email = email.map(Into::into);
        self
    }

    pub fn with_cuisine_type(mut self, cuisine_type: Option<impl Into<String>>) -> Self {
        self.cuisine_type = cuisine_type.map(Into::into);
        self
    }

    pub fn with_total_tables(mut self, total_tables: i32) -> Self {
        self.total_tables = total_tables;
        self
    }
}

/// Patch data applied when updating an existing restaurant profile.
#[derive(Debug, Clone)]
pub struct UpdateRestaurant {
    /// Optional name update.
    pub name: Option<String>,
    /// Optional address update, `Some(None)` clears the value.
    pub address: Option<Option<String>>,
    /// Optional phone update, `Some(None)` clears the value.
    pub phone: Option<Option<String>>,
    /// Optional email update, `Some(None)` clears the value.
    pub email: Option<Option<String>>,
    /// Optional cuisine update, `Some(None)` clears the value.
    pub cuisine_type: Option<Option<String>>,
    /// Optional table-count update.
    pub total_tables: Option<i32>,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateRestaurant {
    /// Create a patch with no changes applied yet.
    pub fn new(updated_at: NaiveDateTime) -> Self {
        Self {
            name: None,
            address: None,
            phone: None,
            email: None,
            cuisine_type: None,
            total_tables: None,
            updated_at,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn address(mut self, address: Option<impl Into<String>>) -> Self {
        self.address = Some(address.map(Into::into));
        self
    }

    pub fn phone(mut self, phone: Option<impl Into<String>>) -> Self {
        self.phone = Some(phone.map(Into::into));
        self
    }

    pub fn email(mut self, email: Option<impl Into<String>>) -> Self {
        self.email = Some(email.map(Into::into));
        self
    }

    pub fn cuisine_type(mut self, cuisine_type: Option<impl Into<String>>) -> Self {
        self.cuisine_type = Some(cuisine_type.map(Into::into));
        self
    }

    pub fn total_tables(mut self, total_tables: i32) -> Self {
        self.total_tables = Some(total_tables);
        self
    }
}
