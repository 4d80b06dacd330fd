//! Storage seam between the request handlers and the document store.

mod mongo;

#[cfg(test)]
pub mod memory;

pub use mongo::MongoDB;

use crate::models::{Movie, User};
use crate::utils::AppResult;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson};

pub const USERS_COLLECTION: &str = "users";
pub const MOVIES_COLLECTION: &str = "movies";

/// Operations the handlers need from the document store.
///
/// One long-lived instance is shared by every request through
/// `web::Data<dyn CatalogStore>`.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Exact match on both fields; passwords are compared verbatim.
    async fn find_user_by_credentials(&self, email: &str, password: &str)
        -> AppResult<Option<User>>;

    /// Inserts a user and returns the generated identifier.
    ///
    /// Fails with `AppError::Conflict` when the store already holds the email.
    async fn insert_user(&self, user: User) -> AppResult<Bson>;

    async fn list_movies(&self) -> AppResult<Vec<Movie>>;

    async fn find_movie(&self, id: ObjectId) -> AppResult<Option<Movie>>;

    /// Inserts the document unchanged and returns its identifier.
    async fn insert_movie(&self, movie: Movie) -> AppResult<Bson>;

    /// Movies whose `genre` equals `genre` exactly, or whose `genre` array
    /// contains it.
    async fn find_movies_by_genre(&self, genre: &str) -> AppResult<Vec<Movie>>;

    /// Lightweight liveness check.
    async fn ping(&self) -> AppResult<()>;

    /// Releases the underlying connection. Called once at shutdown.
    async fn close(&self);
}
