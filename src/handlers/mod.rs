pub mod auth;
pub mod berita;
pub mod pesanan;
pub mod portfolio;
pub mod public;
pub mod services;
pub mod uploads;
pub mod users;
pub mod visitor_logs;

use actix_web::web;

use crate::cache;

/// Drop every cached public payload after an admin mutation. Cache trouble
/// is logged, never propagated.
pub(crate) async fn invalidate_public_cache(redis: &cache::RedisCache) {
    if let Err(e) = redis.delete_pattern(cache::keys::PUBLIC_PATTERN).await {
        tracing::warn!("Failed to invalidate public cache: {e}");
    }
}

/// Map a db-layer error onto 404 for missing rows, 500 for the rest.
pub(crate) fn not_found_or_500(e: sea_orm::DbErr, context: &str) -> actix_web::HttpResponse {
    let mut status = if e.to_string().contains("not found") {
        actix_web::HttpResponse::NotFound()
    } else {
        actix_web::HttpResponse::InternalServerError()
    };
    status.json(serde_json::json!({
        "error": format!("{context}: {e}"),
    }))
}

/// Request body for bulk-destroy endpoints.
#[derive(Debug, serde::Deserialize)]
pub struct BulkIds {
    pub ids: Vec<uuid::Uuid>,
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Public site (unauthenticated, visitor-tracked) ──
    cfg.service(
        web::scope("/public")
            .route("/home", web::get().to(public::home))
            .route("/services", web::get().to(public::services))
            .route("/services/{slug}", web::get().to(public::service_detail))
            .route("/portfolios", web::get().to(public::portfolios))
            .route("/portfolios/{slug}", web::get().to(public::portfolio_detail))
            .route("/berita", web::get().to(public::berita_list))
            .route("/berita/{slug}", web::get().to(public::berita_detail))
            .route("/team", web::get().to(public::team))
            .route("/contact", web::post().to(public::contact)),
    );

    // ── Auth ──
    cfg.service(
        web::scope("/auth")
            .route("/login", web::post().to(auth::login))
            .route("/me", web::get().to(auth::me)),
    );

    // ── Admin back-office (all protected by the bearer-token extractor) ──
    cfg.service(
        web::scope("/admin")
            .service(
                web::scope("/services")
                    .route("", web::get().to(services::list))
                    .route("", web::post().to(services::create))
                    .route("/bulk-destroy", web::post().to(services::bulk_destroy))
                    .route("/{id}", web::get().to(services::show))
                    .route("/{id}", web::put().to(services::update))
                    .route("/{id}", web::delete().to(services::destroy))
                    .route("/{id}/toggle-active", web::patch().to(services::toggle_active))
                    .route(
                        "/{id}/toggle-featured",
                        web::patch().to(services::toggle_featured),
                    ),
            )
            .service(
                web::scope("/portfolios")
                    .route("", web::get().to(portfolio::list))
                    .route("", web::post().to(portfolio::create))
                    .route("/bulk-destroy", web::post().to(portfolio::bulk_destroy))
                    .route("/{id}", web::get().to(portfolio::show))
                    .route("/{id}", web::put().to(portfolio::update))
                    .route("/{id}", web::delete().to(portfolio::destroy))
                    .route(
                        "/{id}/toggle-active",
                        web::patch().to(portfolio::toggle_active),
                    )
                    .route(
                        "/{id}/toggle-featured",
                        web::patch().to(portfolio::toggle_featured),
                    ),
            )
            .service(
                web::scope("/pesanan")
                    .route("", web::get().to(pesanan::list))
                    .route("", web::post().to(pesanan::create))
                    .route("/bulk-destroy", web::post().to(pesanan::bulk_destroy))
                    .route("/bulk-status", web::post().to(pesanan::bulk_status))
                    .route("/{id}", web::get().to(pesanan::show))
                    .route("/{id}", web::put().to(pesanan::update))
                    .route("/{id}", web::delete().to(pesanan::destroy))
                    .route("/{id}/status", web::patch().to(pesanan::update_status)),
            )
            .service(
                web::scope("/berita")
                    .route("", web::get().to(berita::list))
                    .route("", web::post().to(berita::create))
                    .route("/bulk-destroy", web::post().to(berita::bulk_destroy))
                    .route("/{id}", web::get().to(berita::show))
                    .route("/{id}", web::put().to(berita::update))
                    .route("/{id}", web::delete().to(berita::destroy))
                    .route(
                        "/{id}/toggle-published",
                        web::patch().to(berita::toggle_published),
                    )
                    .route(
                        "/{id}/toggle-featured",
                        web::patch().to(berita::toggle_featured),
                    ),
            )
            .service(
                web::scope("/users")
                    .route("", web::get().to(users::list))
                    .route("", web::post().to(users::create))
                    .route("/bulk-destroy", web::post().to(users::bulk_destroy))
                    .route("/{id}", web::get().to(users::show))
                    .route("/{id}", web::put().to(users::update))
                    .route("/{id}", web::delete().to(users::destroy)),
            )
            .service(
                web::scope("/visitor-logs").route("", web::get().to(visitor_logs::list)),
            )
            .service(
                web::scope("/uploads").route("/{entity}", web::post().to(uploads::upload)),
            ),
    );
}
