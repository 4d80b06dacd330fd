use crate::database::CatalogStore;
use crate::models::{bson_to_json, User, UserProfile};
use crate::utils::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LENGTH: usize = 8;

// Request/Response structures
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "userId")]
    #[schema(value_type = String)]
    pub user_id: serde_json::Value,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserProfile,
}

// User registration
pub async fn register(
    store: &dyn CatalogStore,
    request: &RegisterRequest,
) -> AppResult<RegisterResponse> {
    let (Some(fullname), Some(email), Some(password)) =
        (&request.fullname, &request.email, &request.password)
    else {
        return Err(AppError::Validation(
            "Full name, email and password are required".to_string(),
        ));
    };

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AppError::Validation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        )));
    }

    if store.find_user_by_email(email).await?.is_some() {
        return Err(AppError::Conflict(
            "User already exists with this email".to_string(),
        ));
    }

    let user_id = store
        .insert_user(User::new(fullname, email, password))
        .await?;

    Ok(RegisterResponse {
        success: true,
        message: "Registration successful".to_string(),
        user_id: bson_to_json(user_id),
    })
}

// User login
pub async fn login(store: &dyn CatalogStore, request: &LoginRequest) -> AppResult<LoginResponse> {
    let invalid = || AppError::Authentication("Invalid email or password".to_string());

    let (Some(email), Some(password)) = (&request.email, &request.password) else {
        return Err(invalid());
    };

    let user = store
        .find_user_by_credentials(email, password)
        .await?
        .ok_or_else(invalid)?;

    Ok(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user: UserProfile::from(user),
    })
}
