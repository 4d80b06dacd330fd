mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{
    middleware::{Compress, Logger},
    web, App, HttpServer,
};
use database::CatalogStore;
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    log::info!("🚀 Starting Movie Catalog Service...");

    // Initialize MongoDB connection; the service is useless without it
    let mongodb = match database::MongoDB::new(
        &config.mongodb_uri,
        config.mongodb_database.as_deref(),
    )
    .await
    {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ MongoDB connection error: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("✅ Connected to MongoDB successfully!");
    log::info!("📊 Database: {}", mongodb.database_name());

    let store: Arc<dyn CatalogStore> = Arc::new(mongodb);
    let db_data = web::Data::from(store.clone());

    let bind_address = config.bind_address();
    let allowed_origins = config.cors_allowed_origins.clone();

    log::info!("🌐 Server starting on http://{}", bind_address);
    log::info!("📡 API endpoints available at http://{}/api/", bind_address);
    log::info!("📚 Swagger UI available at: http://{}/swagger-ui/", bind_address);

    // Start HTTP server; actix stops gracefully on SIGINT/SIGTERM
    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(middleware::SecurityHeaders)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi),
            )
            .configure(api::configure)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    log::info!("🔄 Shutting down gracefully...");
    store.close().await;
    log::info!("✅ MongoDB connection closed");

    Ok(())
}
