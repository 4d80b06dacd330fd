//! In-process `CatalogStore` used by the handler and service tests.

use super::CatalogStore;
use crate::models::{Movie, User};
use crate::utils::{AppError, AppResult};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    movies: RwLock<Vec<Movie>>,
    reachable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            movies: RwLock::new(Vec::new()),
            reachable: AtomicBool::new(true),
        }
    }

    /// Simulates losing (or regaining) the connection to the server.
    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::SeqCst);
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn movie_count(&self) -> usize {
        self.movies.read().await.len()
    }

    fn check_reachable(&self) -> AppResult<()> {
        if self.reachable.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(AppError::DatabaseError(
                "Server selection timeout: no available servers".to_string(),
            ))
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn genre_matches(movie: &Movie, genre: &str) -> bool {
    match movie.get("genre") {
        Some(Bson::String(value)) => value == genre,
        Some(Bson::Array(values)) => values
            .iter()
            .any(|v| matches!(v, Bson::String(value) if value == genre)),
        _ => false,
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.check_reachable()?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        self.check_reachable()?;
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }

    async fn insert_user(&self, mut user: User) -> AppResult<Bson> {
        self.check_reachable()?;
        let mut users = self.users.write().await;

        // Same outcome as the unique index on users(email).
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::Conflict(
                "User already exists with this email".to_string(),
            ));
        }

        let id = ObjectId::new();
        user.id = Some(id);
        users.push(user);
        Ok(Bson::ObjectId(id))
    }

    async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        self.check_reachable()?;
        Ok(self.movies.read().await.clone())
    }

    async fn find_movie(&self, id: ObjectId) -> AppResult<Option<Movie>> {
        self.check_reachable()?;
        let movies = self.movies.read().await;
        Ok(movies
            .iter()
            .find(|m| m.get_object_id("_id").ok() == Some(id))
            .cloned())
    }

    async fn insert_movie(&self, movie: Movie) -> AppResult<Bson> {
        self.check_reachable()?;
        let mut movies = self.movies.write().await;

        let id = match movie.get("_id") {
            Some(id) => id.clone(),
            None => Bson::ObjectId(ObjectId::new()),
        };

        if movies.iter().any(|m| m.get("_id") == Some(&id)) {
            return Err(AppError::DatabaseError(format!("E11000 duplicate key: {}", id)));
        }

        let mut stored = Document::new();
        stored.insert("_id", id.clone());
        for (key, value) in movie {
            if key != "_id" {
                stored.insert(key, value);
            }
        }
        movies.push(stored);

        Ok(id)
    }

    async fn find_movies_by_genre(&self, genre: &str) -> AppResult<Vec<Movie>> {
        self.check_reachable()?;
        let movies = self.movies.read().await;
        Ok(movies
            .iter()
            .filter(|m| genre_matches(m, genre))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> AppResult<()> {
        self.check_reachable()
    }

    async fn close(&self) {
        self.set_reachable(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_genre_matches_strings_and_arrays() {
        assert!(genre_matches(&doc! { "genre": "Drama" }, "Drama"));
        assert!(!genre_matches(&doc! { "genre": "Drama" }, "drama"));
        assert!(genre_matches(&doc! { "genre": ["Drama", "Crime"] }, "Crime"));
        assert!(!genre_matches(&doc! { "title": "No genre" }, "Drama"));
        assert!(!genre_matches(&doc! { "genre": 7 }, "7"));
    }

    #[tokio::test]
    async fn test_unreachable_store_fails_every_call() {
        let store = MemoryStore::new();
        store.set_reachable(false);

        assert!(store.ping().await.is_err());
        assert!(store.list_movies().await.is_err());
        assert!(store.find_user_by_email("a@b.c").await.is_err());
    }
}
