use actix_web::{web, HttpResponse};
use crate::api::{log_failure, movie_error};
use crate::database::CatalogStore;
use crate::services::movie_service::{self, AddMovieResponse};

#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "Movies",
    responses(
        (status = 200, description = "Every movie in the catalog, as a JSON array"),
        (status = 500, description = "Failed to fetch movies")
    )
)]
pub async fn get_movies(db: web::Data<dyn CatalogStore>) -> HttpResponse {
    log::info!("🎬 GET /api/movies");

    match movie_service::list_movies(db.get_ref()).await {
        Ok(movies) => {
            log::info!("✅ Retrieved {} movies", movies.len());
            HttpResponse::Ok().json(movies)
        }
        Err(e) => {
            log_failure("Error fetching movies", &e);
            movie_error(e, "Failed to fetch movies")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    tag = "Movies",
    params(
        ("id" = String, Path, description = "Movie identifier (24 hex characters)")
    ),
    responses(
        (status = 200, description = "The movie document"),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Failed to fetch movie")
    )
)]
pub async fn get_movie(db: web::Data<dyn CatalogStore>, path: web::Path<String>) -> HttpResponse {
    let movie_id = path.into_inner();
    log::info!("🎬 GET /api/movies/{}", movie_id);

    match movie_service::get_movie(db.get_ref(), &movie_id).await {
        Ok(movie) => HttpResponse::Ok().json(movie),
        Err(e) => {
            log_failure(&format!("Error fetching movie {}", movie_id), &e);
            movie_error(e, "Failed to fetch movie")
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/movies",
    tag = "Movies",
    responses(
        (status = 201, description = "Movie added successfully", body = AddMovieResponse),
        (status = 400, description = "Body is not a JSON object"),
        (status = 500, description = "Failed to add movie")
    )
)]
pub async fn add_movie(
    db: web::Data<dyn CatalogStore>,
    body: web::Json<serde_json::Value>,
) -> HttpResponse {
    log::info!("➕ POST /api/movies");

    match movie_service::add_movie(db.get_ref(), body.into_inner()).await {
        Ok(response) => {
            log::info!("✅ Movie added: {}", response.movie_id);
            HttpResponse::Created().json(response)
        }
        Err(e) => {
            log_failure("Error adding movie", &e);
            movie_error(e, "Failed to add movie")
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/movies/genre/{genre}",
    tag = "Movies",
    params(
        ("genre" = String, Path, description = "Exact, case-sensitive genre")
    ),
    responses(
        (status = 200, description = "Movies of the genre, possibly an empty array"),
        (status = 500, description = "Failed to fetch movies by genre")
    )
)]
pub async fn get_movies_by_genre(
    db: web::Data<dyn CatalogStore>,
    path: web::Path<String>,
) -> HttpResponse {
    let genre = path.into_inner();
    log::info!("🎭 GET /api/movies/genre/{}", genre);

    match movie_service::list_movies_by_genre(db.get_ref(), &genre).await {
        Ok(movies) => {
            log::info!("✅ Retrieved {} movies for genre {}", movies.len(), genre);
            HttpResponse::Ok().json(movies)
        }
        Err(e) => {
            log_failure(&format!("Error fetching movies by genre {}", genre), &e);
            movie_error(e, "Failed to fetch movies by genre")
        }
    }
}
