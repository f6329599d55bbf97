use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use chrono::Local;
use tera::Tera;

use crate::auth::{AuthenticatedUser, ServerConfig};
use crate::domain::order::Order;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::dashboard::{self, DashboardStats};

#[get("/")]
pub async fn show_dashboard(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(
        &flash_messages,
        &user,
        "dashboard",
        &server_config.auth_service_url,
    );

    let now = Local::now().naive_local();
    match dashboard::load_dashboard(repo.get_ref(), &user, now) {
        Ok(data) => {
            context.insert("restaurant", &data.restaurant);
            context.insert("stats", &data.stats);
            context.insert("recent_orders", &data.recent_orders);
        }
        Err(err) => {
            // A failed snapshot renders as the empty state, never a crash.
            log::error!("Failed to compute dashboard snapshot: {err}");
            context.insert("restaurant", &None::<()>);
            context.insert("stats", &DashboardStats::default());
            context.insert("recent_orders", &Vec::<Order>::new());
            context.insert("load_error", &true);
        }
    }

    render_template(&tera, "dashboard/index.html", &context)
}
