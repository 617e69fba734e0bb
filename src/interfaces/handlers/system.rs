use std::time::Duration;

use actix_web::{get, web, HttpResponse, Responder};
use humantime::format_duration;
use serde::Serialize;

use crate::{constants::START_TIME, repositories::portfolio::PortfolioRepository, AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthCheckResponse {
    status: &'static str,
    uptime: String,
    timestamp: String,
    started_at: String,
    database: &'static str,
    version: &'static str,
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = chrono::Utc::now();
    let uptime = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    let database = match state.portfolio_handler.portfolio_repo.check_connection().await {
        Ok(_) => "OK",
        Err(e) => {
            tracing::warn!("Health check database ping failed: {}", e);
            "Unavailable"
        }
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy",
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        started_at: START_TIME.to_rfc3339(),
        database,
        version: env!("CARGO_PKG_VERSION"),
    })
}
