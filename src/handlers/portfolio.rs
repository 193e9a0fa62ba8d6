use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::cache::CacheData;
use crate::db::portfolio as portfolio_db;
use crate::models::Paginated;
use crate::models::portfolio::{CreatePortfolio, PortfolioListQuery, UpdatePortfolio};

use super::{BulkIds, invalidate_public_cache, not_found_or_500};

/// GET /api/admin/portfolios — paginated listing with search and filters.
pub async fn list(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<PortfolioListQuery>,
) -> impl Responder {
    match portfolio_db::list_portfolios(db.get_ref(), &query).await {
        Ok((data, total)) => {
            HttpResponse::Ok().json(Paginated::new(data, total, query.page(), query.per_page()))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch portfolios: {e}"),
        })),
    }
}

/// POST /api/admin/portfolios — create a new portfolio item.
pub async fn create(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    body: web::Json<CreatePortfolio>,
) -> impl Responder {
    let input = body.into_inner();
    if input.title.trim().is_empty() {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Title must not be empty",
            "field": "title",
        }));
    }

    match portfolio_db::insert_portfolio(db.get_ref(), input).await {
        Ok(item) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Created().json(item)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create portfolio: {e}"),
        })),
    }
}

/// GET /api/admin/portfolios/{id}
pub async fn show(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match portfolio_db::get_portfolio_by_id(db.get_ref(), id).await {
        Ok(Some(item)) => HttpResponse::Ok().json(item),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Portfolio {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/admin/portfolios/{id}
pub async fn update(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePortfolio>,
) -> impl Responder {
    let id = path.into_inner();
    match portfolio_db::update_portfolio(db.get_ref(), id, body.into_inner()).await {
        Ok(updated) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => not_found_or_500(e, "Failed to update portfolio"),
    }
}

/// PATCH /api/admin/portfolios/{id}/toggle-active
pub async fn toggle_active(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match portfolio_db::toggle_active(db.get_ref(), path.into_inner()).await {
        Ok(updated) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => not_found_or_500(e, "Failed to toggle portfolio"),
    }
}

/// PATCH /api/admin/portfolios/{id}/toggle-featured
pub async fn toggle_featured(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match portfolio_db::toggle_featured(db.get_ref(), path.into_inner()).await {
        Ok(updated) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => not_found_or_500(e, "Failed to toggle portfolio"),
    }
}

/// DELETE /api/admin/portfolios/{id}
pub async fn destroy(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match portfolio_db::delete_portfolio(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                invalidate_public_cache(redis.get_ref()).await;
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Portfolio {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Portfolio {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete portfolio: {e}"),
        })),
    }
}

/// POST /api/admin/portfolios/bulk-destroy
pub async fn bulk_destroy(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    body: web::Json<BulkIds>,
) -> impl Responder {
    match portfolio_db::bulk_delete(db.get_ref(), &body.ids).await {
        Ok(result) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(serde_json::json!({
                "deleted": result.rows_affected,
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete portfolios: {e}"),
        })),
    }
}
