use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::NormalizePath,
    web, App,
};
use tracing_actix_web::TracingLogger;

use crate::{constants::API_SCOPE, handlers::{home::home, system::health_check}, AppState};

mod contact;
mod json_error;
mod portfolio;

/// Full application: routes plus the middleware stack every worker runs.
pub fn build_app(
    state: web::Data<AppState>,
    cors: Cors,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(NormalizePath::trim())
        .wrap(cors)
        .wrap(TracingLogger::default())
        .configure(configure_routes)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope(API_SCOPE)
            .configure(portfolio::config_routes)
            .configure(contact::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
