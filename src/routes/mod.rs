use actix_identity::Identity;
use actix_web::http::header;
use actix_web::{HttpResponse, Responder, get};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::{Deserialize, Deserializer};
use tera::Tera;

use crate::auth::AuthenticatedUser;

pub mod dashboard;
pub mod reservations;
pub mod settings;

/// Issue a `303 See Other` to `location`.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

/// Render `name` with `context`, or a 500 when the template fails.
pub fn render_template(tera: &Tera, name: &str, context: &tera::Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {name}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context shared by every page: the operator, flash messages, the active
/// nav item and where the login lives.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    active_page: &str,
    auth_service_url: &str,
) -> tera::Context {
    let messages: Vec<(String, &str)> = flash_messages
        .iter()
        .map(|message| {
            let level = match message.level() {
                Level::Debug => "debug",
                Level::Info => "info",
                Level::Success => "success",
                Level::Warning => "warning",
                Level::Error => "error",
            };
            (message.content().to_string(), level)
        })
        .collect();

    let mut context = tera::Context::new();
    context.insert("messages", &messages);
    context.insert("current_user", user);
    context.insert("active_page", active_page);
    context.insert("auth_service_url", auth_service_url);
    context
}

/// Deserialize an HTML form field treating blank input as absent.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|raw| !raw.trim().is_empty()))
}

#[get("/logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    redirect("/")
}
