use actix_web::{web, HttpResponse};
use crate::api::{log_failure, user_error, JsonOrForm};
use crate::database::CatalogStore;
use crate::services::auth_service::{
    self, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Auth",
    request_body(content = RegisterRequest, description = "JSON or form-encoded body"),
    responses(
        (status = 200, description = "Registration successful", body = RegisterResponse),
        (
            status = 400,
            description = "Missing fields, short password or email already registered"
        ),
        (status = 500, description = "Registration failed")
    )
)]
pub async fn register(
    db: web::Data<dyn CatalogStore>,
    request: JsonOrForm<RegisterRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    let email_str = request.email.as_deref().unwrap_or("N/A");
    log::info!("📝 POST /api/register - email: {}", email_str);

    match auth_service::register(db.get_ref(), &request).await {
        Ok(response) => {
            log::info!("✅ Registration successful: {}", email_str);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log_failure(&format!("Registration failed: {}", email_str), &e);
            user_error(e, "Registration failed")
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body(content = LoginRequest, description = "JSON or form-encoded body"),
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid email or password"),
        (status = 500, description = "Login failed")
    )
)]
pub async fn login(
    db: web::Data<dyn CatalogStore>,
    request: JsonOrForm<LoginRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    let email_str = request.email.as_deref().unwrap_or("N/A");
    log::info!("🔐 POST /api/login - email: {}", email_str);

    match auth_service::login(db.get_ref(), &request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", email_str);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log_failure(&format!("Login failed: {}", email_str), &e);
            user_error(e, "Login failed")
        }
    }
}
