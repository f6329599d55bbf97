use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use futures_util::future::LocalBoxFuture;

use crate::auth::ServerConfig;

/// Turns `401 Unauthorized` responses into a redirect to the auth service so
/// visitors without a valid session land on the login page instead of a bare
/// error.
pub struct RedirectUnauthorized;

impl<S, B> Transform<S, ServiceRequest> for RedirectUnauthorized
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Transform = RedirectUnauthorizedMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectUnauthorizedMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RedirectUnauthorizedMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RedirectUnauthorizedMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let auth_service_url = req
                .app_data::<web::Data<ServerConfig>>()
                .map(|config| config.auth_service_url.clone());

            let res = service.call(req).await?;

            if res.status() == StatusCode::UNAUTHORIZED {
                if let Some(auth_service_url) = auth_service_url {
                    let (req, _) = res.into_parts();
                    let response = HttpResponse::SeeOther()
                        .insert_header((header::LOCATION, auth_service_url))
                        .finish()
                        .map_into_right_body();
                    return Ok(ServiceResponse::new(req, response));
                }
            }

            Ok(res.map_into_left_body())
        })
    }
}
