use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use teknindo_backend::auth::middleware::JwtSecret;
use teknindo_backend::cache::{CacheConfig, RedisCache};
use teknindo_backend::create_pool;
use teknindo_backend::handlers;
use teknindo_backend::storage::StorageConfig;
use teknindo_backend::tracking::geo::GeoResolver;
use teknindo_backend::tracking::middleware::{TrackingContext, VisitorTracking};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let db = create_pool().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    let db_data = web::Data::new(db.clone());

    // Redis backs the public page-payload cache.
    let redis_url = std::env::var("REDIS_URL").expect("REDIS_URL must be set");
    let redis_cache = RedisCache::new(&redis_url)
        .await
        .expect("Failed to connect to Redis");
    let redis_data = web::Data::new(Arc::new(redis_cache));
    let cache_cfg = web::Data::new(CacheConfig::from_env());
    tracing::info!("Connected to Redis");

    let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
    let jwt_data = web::Data::new(JwtSecret(jwt_secret));

    let storage_cfg = StorageConfig::from_env();
    let storage_root = storage_cfg.root.clone();
    let storage_data = web::Data::new(storage_cfg);

    // Visitor analytics: geolocation cache plus a db handle, shared with the
    // post-response recorder tasks.
    let tracking_ctx = Arc::new(TrackingContext {
        db,
        geo: GeoResolver::from_env(),
    });

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_addr = format!("0.0.0.0:{port}");
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(VisitorTracking::new(tracking_ctx.clone()))
            .app_data(db_data.clone())
            .app_data(redis_data.clone())
            .app_data(cache_cfg.clone())
            .app_data(jwt_data.clone())
            .app_data(storage_data.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
            .service(Files::new("/storage", storage_root.clone()))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
