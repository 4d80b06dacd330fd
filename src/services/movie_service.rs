use crate::database::CatalogStore;
use crate::models::{bson_to_json, document_to_json, movie_from_json, parse_movie_id};
use crate::utils::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AddMovieResponse {
    pub message: String,
    #[serde(rename = "movieId")]
    #[schema(value_type = String)]
    pub movie_id: Value,
}

pub async fn list_movies(store: &dyn CatalogStore) -> AppResult<Vec<Value>> {
    let movies = store.list_movies().await?;
    Ok(movies.into_iter().map(document_to_json).collect())
}

/// Identifiers that cannot be parsed are reported like missing movies.
pub async fn get_movie(store: &dyn CatalogStore, raw_id: &str) -> AppResult<Value> {
    let not_found = || AppError::NotFound("Movie not found".to_string());

    let id = parse_movie_id(raw_id).ok_or_else(not_found)?;

    store
        .find_movie(id)
        .await?
        .map(document_to_json)
        .ok_or_else(not_found)
}

pub async fn add_movie(store: &dyn CatalogStore, body: Value) -> AppResult<AddMovieResponse> {
    let movie = movie_from_json(body)?;
    let movie_id = store.insert_movie(movie).await?;

    Ok(AddMovieResponse {
        message: "Movie added successfully".to_string(),
        movie_id: bson_to_json(movie_id),
    })
}

pub async fn list_movies_by_genre(
    store: &dyn CatalogStore,
    genre: &str,
) -> AppResult<Vec<Value>> {
    let movies = store.find_movies_by_genre(genre).await?;
    Ok(movies.into_iter().map(document_to_json).collect())
}
