use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::cache::{CacheConfig, CacheData, keys};
use crate::db::{
    berita as berita_db, pesanan as pesanan_db, portfolio as portfolio_db, services as service_db,
    users as user_db,
};
use crate::models::Paginated;
use crate::models::berita::BeritaListQuery;
use crate::models::pesanan::CreatePesanan;
use crate::models::users::TeamMember;

const HOME_BERITA_LIMIT: u64 = 3;

async fn cache_payload(redis: &CacheData, key: &str, value: &serde_json::Value, ttl_secs: u64) {
    if let Err(e) = redis.set(key, value, Some(ttl_secs)).await {
        warn!("Failed to cache {key}: {e}");
    }
}

/// GET /api/public/home — featured content for the landing page.
pub async fn home(
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    cache_cfg: web::Data<CacheConfig>,
) -> impl Responder {
    let key = keys::home();
    if let Ok(Some(cached)) = redis.get::<serde_json::Value>(&key).await {
        return HttpResponse::Ok().json(cached);
    }

    let services = service_db::get_featured_services(db.get_ref()).await;
    let portfolios = portfolio_db::get_featured_portfolios(db.get_ref()).await;
    let latest = berita_db::get_latest_published(db.get_ref(), HOME_BERITA_LIMIT).await;

    match (services, portfolios, latest) {
        (Ok(services), Ok(portfolios), Ok(latest)) => {
            let payload = serde_json::json!({
                "services": services,
                "portfolios": portfolios,
                "berita": latest,
            });
            cache_payload(&redis, &key, &payload, cache_cfg.home_ttl.as_secs()).await;
            HttpResponse::Ok().json(payload)
        }
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to build home payload: {e}"),
            }))
        }
    }
}

/// GET /api/public/services — active services in display order.
pub async fn services(
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    cache_cfg: web::Data<CacheConfig>,
) -> impl Responder {
    let key = keys::services();
    if let Ok(Some(cached)) = redis.get::<serde_json::Value>(&key).await {
        return HttpResponse::Ok().json(cached);
    }

    match service_db::get_active_services(db.get_ref()).await {
        Ok(services) => {
            let payload = serde_json::json!({ "services": services });
            cache_payload(&redis, &key, &payload, cache_cfg.list_ttl.as_secs()).await;
            HttpResponse::Ok().json(payload)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch services: {e}"),
        })),
    }
}

/// GET /api/public/services/{slug}
pub async fn service_detail(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> impl Responder {
    let slug = path.into_inner();
    match service_db::get_service_by_slug(db.get_ref(), &slug).await {
        Ok(Some(service)) => {
            // Related portfolio items belong on the service page.
            match portfolio_db::get_active_portfolios(db.get_ref(), Some(service.id)).await {
                Ok(portfolios) => HttpResponse::Ok().json(serde_json::json!({
                    "service": service,
                    "portfolios": portfolios,
                })),
                Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Failed to fetch portfolios: {e}"),
                })),
            }
        }
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Service {slug} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

#[derive(Debug, Deserialize)]
pub struct PublicPortfolioQuery {
    pub service_id: Option<Uuid>,
}

/// GET /api/public/portfolios — active items, optionally for one service.
pub async fn portfolios(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PublicPortfolioQuery>,
) -> impl Responder {
    match portfolio_db::get_active_portfolios(db.get_ref(), query.service_id).await {
        Ok(items) => HttpResponse::Ok().json(serde_json::json!({ "portfolios": items })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch portfolios: {e}"),
        })),
    }
}

/// GET /api/public/portfolios/{slug}
pub async fn portfolio_detail(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> impl Responder {
    let slug = path.into_inner();
    match portfolio_db::get_portfolio_by_slug(db.get_ref(), &slug).await {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Portfolio {slug} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/public/berita — published articles, newest first, with optional
/// category/tag filter.
pub async fn berita_list(
    db: web::Data<DatabaseConnection>,
    query: web::Query<BeritaListQuery>,
) -> impl Responder {
    match berita_db::list_published(db.get_ref(), &query).await {
        Ok((data, total)) => {
            HttpResponse::Ok().json(Paginated::new(data, total, query.page(), query.per_page()))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch berita: {e}"),
        })),
    }
}

/// GET /api/public/berita/{slug} — reading an article bumps its views
/// counter.
pub async fn berita_detail(
    db: web::Data<DatabaseConnection>,
    path: web::Path<String>,
) -> impl Responder {
    let slug = path.into_inner();
    match berita_db::read_published_by_slug(db.get_ref(), &slug).await {
        Ok(Some(article)) => HttpResponse::Ok().json(article),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Berita {slug} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// GET /api/public/team — public staff profiles.
pub async fn team(
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    cache_cfg: web::Data<CacheConfig>,
) -> impl Responder {
    let key = keys::team();
    if let Ok(Some(cached)) = redis.get::<serde_json::Value>(&key).await {
        return HttpResponse::Ok().json(cached);
    }

    match user_db::get_all_users(db.get_ref()).await {
        Ok(users) => {
            let team: Vec<TeamMember> = users.into_iter().map(TeamMember::from).collect();
            let payload = serde_json::json!({ "team": team });
            cache_payload(&redis, &key, &payload, cache_cfg.list_ttl.as_secs()).await;
            HttpResponse::Ok().json(payload)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch team: {e}"),
        })),
    }
}

/// POST /api/public/contact — the contact form opens a pesanan in `pending`.
pub async fn contact(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreatePesanan>,
) -> impl Responder {
    let input = body.into_inner();
    if input.customer_name.trim().is_empty()
        || input.customer_email.trim().is_empty()
        || input.description.trim().is_empty()
    {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Name, email, and description are required",
        }));
    }

    // Reject unknown services up front instead of surfacing an FK error.
    match service_db::get_service_by_id(db.get_ref(), input.service_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": "Unknown service",
                "field": "service_id",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    }

    match pesanan_db::insert_pesanan(db.get_ref(), input).await {
        Ok(pesanan) => HttpResponse::Created().json(serde_json::json!({
            "message": "Pesanan received",
            "code": pesanan.code,
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create pesanan: {e}"),
        })),
    }
}
