use actix_web::{web, HttpResponse};
use crate::database::CatalogStore;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
}

impl HealthResponse {
    fn new(status: &str, message: &str) -> Self {
        Self {
            status: status.to_string(),
            message: message.to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Database is reachable", body = HealthResponse),
        (status = 500, description = "Database is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(db: web::Data<dyn CatalogStore>) -> HttpResponse {
    match db.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse::new(
            "ok",
            "MongoDB connection is healthy",
        )),
        Err(e) => {
            log::error!("❌ Health check failed: {}", e);
            HttpResponse::InternalServerError().json(HealthResponse::new(
                "error",
                "MongoDB connection failed",
            ))
        }
    }
}
