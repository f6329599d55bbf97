use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Local;
use tera::Tera;

use crate::auth::{AuthenticatedUser, ServerConfig};
use crate::forms::settings::RestaurantSettingsForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::settings as settings_service;
use crate::services::ServiceError;

#[get("/settings")]
pub async fn show_settings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(
        &flash_messages,
        &user,
        "settings",
        &server_config.auth_service_url,
    );

    match settings_service::load_settings(repo.get_ref(), &user) {
        Ok(restaurant) => {
            context.insert("restaurant", &restaurant);
        }
        Err(err) => {
            log::error!("Failed to load settings: {err}");
            context.insert("restaurant", &None::<()>);
            context.insert("load_error", &true);
        }
    }

    render_template(&tera, "settings/index.html", &context)
}

#[post("/settings/save")]
pub async fn save_settings(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<RestaurantSettingsForm>,
) -> impl Responder {
    let now = Local::now().naive_local();

    match settings_service::save_settings(repo.get_ref(), &user, &form, now) {
        Ok(_) => {
            FlashMessage::success("Restaurant settings saved.").send();
            redirect("/settings")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/settings")
        }
        Err(err) => {
            log::error!("Failed to save settings: {err}");
            FlashMessage::error("Could not save settings. Please try again.").send();
            redirect("/settings")
        }
    }
}
