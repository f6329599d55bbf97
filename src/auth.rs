use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpRequest, web};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Server-wide settings shared with every handler.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Secret used to verify the session JWT.
    pub secret: String,
    /// Where unauthenticated visitors are sent to log in.
    pub auth_service_url: String,
}

/// Claims carried by the session JWT issued by the auth service.
///
/// `sub` is the principal id and the key every tenant lookup hangs off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub exp: usize,
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = Identity::from_request(req, payload).into_inner();
        let config = req.app_data::<web::Data<ServerConfig>>().cloned();

        let user = identity
            .and_then(|identity| {
                identity
                    .id()
                    .map_err(|_| ErrorUnauthorized("missing identity"))
            })
            .and_then(|token| {
                let config = config.ok_or_else(|| ErrorUnauthorized("server misconfigured"))?;
                decode::<AuthenticatedUser>(
                    &token,
                    &DecodingKey::from_secret(config.secret.as_bytes()),
                    &Validation::default(),
                )
                .map(|data| data.claims)
                .map_err(|_| ErrorUnauthorized("invalid session token"))
            });

        ready(user)
    }
}
