use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Local;
use tera::Tera;

use crate::auth::{AuthenticatedUser, ServerConfig};
use crate::domain::reservation::Reservation;
use crate::forms::reservations::AddReservationForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::reservations as reservation_service;

/// Rebuild the page context after a failed submit, carrying the operator's
/// input back into the form so nothing has to be retyped.
fn failed_submission_context(
    mut context: tera::Context,
    reservations: &[Reservation],
    form: &AddReservationForm,
    error: &ServiceError,
) -> tera::Context {
    context.insert("reservations", reservations);
    context.insert("form", form);
    context.insert("form_error", &error.to_string());
    context
}

#[get("/reservations")]
pub async fn show_reservations(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(
        &flash_messages,
        &user,
        "reservations",
        &server_config.auth_service_url,
    );

    match reservation_service::load_reservations(repo.get_ref(), &user) {
        Ok(data) => {
            context.insert("reservations", &data.reservations);
        }
        Err(err) => {
            log::error!("Failed to list reservations: {err}");
            context.insert("reservations", &Vec::<()>::new());
            context.insert("load_error", &true);
        }
    }

    render_template(&tera, "reservations/index.html", &context)
}

#[post("/reservations/add")]
pub async fn add_reservation(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddReservationForm>,
) -> impl Responder {
    let now = Local::now().naive_local();

    match reservation_service::create_reservation(repo.get_ref(), &user, &form, now) {
        Ok(created) => {
            FlashMessage::success(format!(
                "Reservation for {} added.",
                created.customer_name
            ))
            .send();
            redirect("/reservations")
        }
        Err(err) => {
            log::error!("Failed to add a reservation: {err}");
            let context = base_context(
                &flash_messages,
                &user,
                "reservations",
                &server_config.auth_service_url,
            );
            let reservations = reservation_service::load_reservations(repo.get_ref(), &user)
                .map(|data| data.reservations)
                .unwrap_or_default();
            let context = failed_submission_context(context, &reservations, &form, &err);
            render_template(&tera, "reservations/index.html", &context)
        }
    }
}
