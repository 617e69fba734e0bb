use actix_web::web;

use crate::handlers::portfolio;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/projects").route(web::get().to(portfolio::list_projects)))
        .service(web::resource("/skills").route(web::get().to(portfolio::list_skills)))
        .service(web::resource("/experience").route(web::get().to(portfolio::list_experience)))
        .service(web::resource("/certifications").route(web::get().to(portfolio::list_certifications)));
}
