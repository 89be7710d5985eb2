// Route exports
pub mod errors;
pub mod pose;
pub mod ranks;

use actix_web::{web, HttpResponse, Responder};
use crate::core::PoseClassifier;
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::ScoreBoard;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub classifier: PoseClassifier,
    pub scoreboard: ScoreBoard,
}

/// Register extractor error handlers and all `/api/v1` routes
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(errors::json_config())
        .app_data(errors::query_config())
        .configure(configure_routes);
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(pose::configure)
            .configure(ranks::configure),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

pub(crate) fn bad_request(error: &str, message: impl ToString) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        status_code: 400,
    })
}
