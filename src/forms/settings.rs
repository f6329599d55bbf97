use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::restaurant::{NewRestaurant, UpdateRestaurant};
use crate::routes::empty_string_as_none;

/// Result type returned by the settings form helpers.
pub type SettingsFormResult<T> = Result<T, SettingsFormError>;

/// Errors that can occur while processing the restaurant-settings form.
#[derive(Debug, Error)]
pub enum SettingsFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Form payload emitted when saving the restaurant-information card.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RestaurantSettingsForm {
    /// Display name of the restaurant.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Optional street address.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub address: Option<String>,
    /// Optional contact phone number.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,
    /// Optional contact email.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(email)]
    pub email: Option<String>,
    /// Optional cuisine description.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub cuisine_type: Option<String>,
    /// Total number of tables on the floor.
    #[validate(range(min = 0))]
    pub total_tables: i32,
}

impl RestaurantSettingsForm {
    /// Validates the payload into a profile-creation record owned by
    /// `user_id`.
    pub fn to_new_restaurant(&self, user_id: &str) -> SettingsFormResult<NewRestaurant> {
        self.validate()?;

        Ok(NewRestaurant::new(user_id, self.name.trim())
            .with_address(self.address.as_deref())
            .with_phone(self.phone.as_deref())
            .with_email(self.email.as_deref())
            .with_cuisine_type(self.cuisine_type.as_deref())
            .with_total_tables(self.total_tables))
    }

    /// Validates the payload into a full-profile patch; absent optional
    /// fields clear their stored values, matching what the settings form
    /// displays.
    pub fn to_update_restaurant(
        &self,
        updated_at: NaiveDateTime,
    ) -> SettingsFormResult<UpdateRestaurant> {
        self.validate()?;

        Ok(UpdateRestaurant::new(updated_at)
            .name(self.name.trim())
            .address(self.address.as_deref())
            .phone(self.phone.as_deref())
            .email(self.email.as_deref())
            .cuisine_type(self.cuisine_type.as_deref())
            .total_tables(self.total_tables))
    }
}
