pub mod auth;
pub mod health;
pub mod movies;
pub mod swagger;

use crate::utils::AppError;
use actix_web::{error::JsonPayloadError, web, Either, HttpRequest, HttpResponse};

/// Body accepted as `application/json` or `application/x-www-form-urlencoded`.
pub(crate) type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

/// Registers every `/api` route plus the JSON body configuration.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/register", web::post().to(auth::register))
                .route("/login", web::post().to(auth::login))
                .route("/movies", web::get().to(movies::get_movies))
                .route("/movies", web::post().to(movies::add_movie))
                .route("/movies/genre/{genre}", web::get().to(movies::get_movies_by_genre))
                .route("/movies/{id}", web::get().to(movies::get_movie)),
        );
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid JSON body: {}", err);
    log::warn!("⚠️  {} {} - {}", req.method(), req.path(), message);

    let response = HttpResponse::BadRequest().json(serde_json::json!({
        "success": false,
        "message": message,
        "error": message,
    }));
    actix_web::error::InternalError::from_response(err, response).into()
}

pub(crate) fn log_failure(context: &str, e: &AppError) {
    if e.is_internal() {
        log::error!("❌ {}: {}", context, e);
    } else {
        log::warn!("⚠️  {}: {}", context, e);
    }
}

/// Failure body for the user endpoints: `{success: false, message}`.
pub(crate) fn user_error(e: AppError, internal_message: &str) -> HttpResponse {
    HttpResponse::build(e.status_code()).json(serde_json::json!({
        "success": false,
        "message": e.public_message(internal_message)
    }))
}

/// Failure body for the movie endpoints: `{error}`.
pub(crate) fn movie_error(e: AppError, internal_message: &str) -> HttpResponse {
    HttpResponse::build(e.status_code()).json(serde_json::json!({
        "error": e.public_message(internal_message)
    }))
}

#[cfg(test)]
pub(crate) fn test_data() -> (
    std::sync::Arc<crate::database::memory::MemoryStore>,
    web::Data<dyn crate::database::CatalogStore>,
) {
    let store = std::sync::Arc::new(crate::database::memory::MemoryStore::new());
    let shared: std::sync::Arc<dyn crate::database::CatalogStore> = store.clone();
    (store, web::Data::from(shared))
}
