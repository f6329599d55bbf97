use chrono::NaiveDateTime;

use crate::auth::AuthenticatedUser;
use crate::domain::restaurant::Restaurant;
use crate::forms::settings::RestaurantSettingsForm;
use crate::repository::{RestaurantReader, RestaurantWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches the operator's restaurant profile, if one has been saved yet.
pub fn load_settings<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<Option<Restaurant>>
where
    R: RestaurantReader + ?Sized,
{
    repo.get_restaurant_by_user(&user.sub)
        .map_err(ServiceError::from)
}

/// Saves the restaurant-information form: updates the existing profile in
/// place, or creates one on first save. The only true upsert in the service.
pub fn save_settings<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: &RestaurantSettingsForm,
    now: NaiveDateTime,
) -> ServiceResult<Restaurant>
where
    R: RestaurantReader + RestaurantWriter + ?Sized,
{
    match repo.get_restaurant_by_user(&user.sub)? {
        Some(existing) => {
            let updates = form
                .to_update_restaurant(now)
                .map_err(|err| ServiceError::Form(err.to_string()))?;
            repo.update_restaurant(existing.id, &updates)
                .map_err(ServiceError::from)
        }
        None => {
            let new_restaurant = form
                .to_new_restaurant(&user.sub)
                .map_err(|err| ServiceError::Form(err.to_string()))?;
            repo.create_restaurant(&new_restaurant)
                .map_err(ServiceError::from)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::repository::mock::MockSettingsRepo;

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, 0))
            .expect("valid datetime")
    }

    fn operator() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "user-1".to_string(),
            email: "owner@example.com".to_string(),
            name: "Owner".to_string(),
            exp: 0,
        }
    }

    fn restaurant(id: i32, name: &str) -> Restaurant {
        let at = datetime(2025, 1, 1, 0, 0);
        Restaurant {
            id,
            user_id: "user-1".to_string(),
            name: name.to_string(),
            address: None,
            phone: None,
            email: None,
            cuisine_type: None,
            total_tables: 12,
            created_at: at,
            updated_at: at,
        }
    }

    fn sample_form() -> RestaurantSettingsForm {
        RestaurantSettingsForm {
            name: "Spice Route".to_string(),
            address: Some("12 MG Road".to_string()),
            phone: None,
            email: None,
            cuisine_type: Some("Indian".to_string()),
            total_tables: 18,
        }
    }

    #[test]
    fn first_save_creates_a_profile_owned_by_the_principal() {
        let mut repo = MockSettingsRepo::new();
        repo.expect_get_restaurant_by_user()
            .times(1)
            .withf(|user_id| user_id == "user-1")
            .returning(|_| Ok(None));
        repo.expect_create_restaurant()
            .times(1)
            .withf(|new_restaurant| {
                assert_eq!(new_restaurant.user_id, "user-1");
                assert_eq!(new_restaurant.name, "Spice Route");
                assert_eq!(new_restaurant.total_tables, 18);
                true
            })
            .returning(|_| Ok(restaurant(1, "Spice Route")));

        let saved = save_settings(
            &repo,
            &operator(),
            &sample_form(),
            datetime(2025, 8, 20, 9, 0),
        )
        .expect("expected Ok");

        assert_eq!(saved.id, 1);
    }

    #[test]
    fn later_saves_update_in_place() {
        let now = datetime(2025, 8, 20, 9, 0);
        let mut repo = MockSettingsRepo::new();
        repo.expect_get_restaurant_by_user()
            .times(1)
            .returning(|_| Ok(Some(restaurant(7, "Old Name"))));
        repo.expect_update_restaurant()
            .times(1)
            .withf(move |restaurant_id, updates| {
                assert_eq!(*restaurant_id, 7);
                assert_eq!(updates.name.as_deref(), Some("Spice Route"));
                assert_eq!(updates.updated_at, now);
                true
            })
            .returning(|_, _| Ok(restaurant(7, "Spice Route")));

        let saved = save_settings(&repo, &operator(), &sample_form(), now).expect("expected Ok");

        assert_eq!(saved.name, "Spice Route");
    }

    #[test]
    fn invalid_form_fails_before_any_write() {
        let mut repo = MockSettingsRepo::new();
        repo.expect_get_restaurant_by_user()
            .times(1)
            .returning(|_| Ok(None));
        // No create expectation: a write would panic the mock.

        let form = RestaurantSettingsForm {
            name: String::new(),
            ..sample_form()
        };

        let result = save_settings(&repo, &operator(), &form, datetime(2025, 8, 20, 9, 0));

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn load_returns_none_for_new_operators() {
        let mut repo = MockSettingsRepo::new();
        repo.expect_get_restaurant_by_user()
            .times(1)
            .returning(|_| Ok(None));

        let profile = load_settings(&repo, &operator()).expect("expected Ok");

        assert!(profile.is_none());
    }
}
