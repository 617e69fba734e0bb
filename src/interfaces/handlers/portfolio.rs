use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn list_projects(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let projects = state.portfolio_handler.list_projects().await?;
    Ok(HttpResponse::Ok().json(projects))
}

#[instrument(skip(state))]
pub async fn list_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let skills = state.portfolio_handler.list_skills().await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(state))]
pub async fn list_experience(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let experience = state.portfolio_handler.list_experience().await?;
    Ok(HttpResponse::Ok().json(experience))
}

#[instrument(skip(state))]
pub async fn list_certifications(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let certifications = state.portfolio_handler.list_certifications().await?;
    Ok(HttpResponse::Ok().json(certifications))
}
