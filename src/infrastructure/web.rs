use actix_cors::Cors;
use actix_web::http::{header, Method};

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Builds the CORS policy for the public API. `*` allows any origin.
pub fn cors(origins: &[String]) -> Cors {
    let base = Cors::default()
        .allowed_methods([Method::GET, Method::POST])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(PREFLIGHT_MAX_AGE_SECS);

    if origins.iter().any(|o| o == "*") {
        return base.allow_any_origin();
    }

    origins
        .iter()
        .fold(base, |cors, origin| cors.allowed_origin(origin))
}
