use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie Catalog Service API",
        version = "1.0.0",
        description = "User registration/login and a movie catalog backed by MongoDB."
    ),
    paths(
        // Auth endpoints
        crate::api::auth::register,
        crate::api::auth::login,

        // Movies
        crate::api::movies::get_movies,
        crate::api::movies::get_movie,
        crate::api::movies::add_movie,
        crate::api::movies::get_movies_by_genre,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::services::auth_service::RegisterRequest,
            crate::services::auth_service::RegisterResponse,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::LoginResponse,
            crate::models::UserProfile,
            crate::services::movie_service::AddMovieResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login with email and password."),
        (name = "Movies", description = "Free-form JSON movie records."),
        (name = "Health", description = "Database reachability check."),
    )
)]
pub struct ApiDoc;
