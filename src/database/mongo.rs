use super::{CatalogStore, MOVIES_COLLECTION, USERS_COLLECTION};
use crate::models::{Movie, User};
use crate::utils::{AppError, AppResult};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::error::{ErrorKind, WriteError, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use std::time::Duration;

const DEFAULT_DATABASE: &str = "movie_website";
const DUPLICATE_KEY: i32 = 11000;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Connects, verifies the server answers a ping and prepares indexes.
    ///
    /// The database name comes from `database`, then from the URI path, then
    /// falls back to `movie_website`.
    pub async fn new(uri: &str, database: Option<&str>) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));
        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));

        let db_name = database
            .map(str::to_string)
            .or_else(|| client_options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        let mongodb = Self { client, db };

        mongodb.ping().await?;
        mongodb.ensure_indexes().await;

        Ok(mongodb)
    }

    /// Creates the indexes the handlers rely on.
    ///
    /// The unique `users.email` index is what keeps two concurrent
    /// registrations from both succeeding; if it cannot be built (for example
    /// because duplicates already exist) the service still starts.
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        match self.users().create_index(email_index).await {
            Ok(_) => log::info!("   ✅ Index created: users(email) unique"),
            Err(e) => log::warn!("   ⚠️  Could not create unique index on users(email): {}", e),
        }

        let genre_index = IndexModel::builder().keys(doc! { "genre": 1 }).build();

        match self.movies().create_index(genre_index).await {
            Ok(_) => log::info!("   ✅ Index created: movies(genre)"),
            Err(e) => log::debug!("   ℹ️  Index movies(genre) not created: {}", e),
        }

        log::info!("✅ Database indexes ready");
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    fn users(&self) -> Collection<User> {
        self.db.collection(USERS_COLLECTION)
    }

    fn movies(&self) -> Collection<Document> {
        self.db.collection(MOVIES_COLLECTION)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(WriteError { code: DUPLICATE_KEY, .. }))
    )
}

#[async_trait]
impl CatalogStore for MongoDB {
    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users().find_one(doc! { "email": email }).await?)
    }

    async fn find_user_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let filter = doc! {
            "email": email,
            "password": password,
        };

        Ok(self.users().find_one(filter).await?)
    }

    async fn insert_user(&self, user: User) -> AppResult<Bson> {
        match self.users().insert_one(user).await {
            Ok(result) => Ok(result.inserted_id),
            Err(e) if is_duplicate_key(&e) => Err(AppError::Conflict(
                "User already exists with this email".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        let cursor = self.movies().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_movie(&self, id: ObjectId) -> AppResult<Option<Movie>> {
        Ok(self.movies().find_one(doc! { "_id": id }).await?)
    }

    async fn insert_movie(&self, movie: Movie) -> AppResult<Bson> {
        let result = self.movies().insert_one(movie).await?;
        Ok(result.inserted_id)
    }

    async fn find_movies_by_genre(&self, genre: &str) -> AppResult<Vec<Movie>> {
        let cursor = self.movies().find(doc! { "genre": genre }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn ping(&self) -> AppResult<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
    }
}
