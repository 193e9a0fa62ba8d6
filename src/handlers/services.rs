use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::cache::CacheData;
use crate::db::services as service_db;
use crate::models::Paginated;
use crate::models::services::{CreateService, ServiceListQuery, UpdateService};

use super::{BulkIds, invalidate_public_cache, not_found_or_500};

/// GET /api/admin/services — paginated listing with search and filters.
pub async fn list(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<ServiceListQuery>,
) -> impl Responder {
    match service_db::list_services(db.get_ref(), &query).await {
        Ok((data, total)) => {
            HttpResponse::Ok().json(Paginated::new(data, total, query.page(), query.per_page()))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch services: {e}"),
        })),
    }
}

/// POST /api/admin/services — create a new service.
pub async fn create(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    body: web::Json<CreateService>,
) -> impl Responder {
    let input = body.into_inner();
    if input.title.trim().is_empty() {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Title must not be empty",
            "field": "title",
        }));
    }

    match service_db::insert_service(db.get_ref(), input).await {
        Ok(service) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Created().json(service)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create service: {e}"),
        })),
    }
}

/// GET /api/admin/services/{id} — fetch a single service.
pub async fn show(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match service_db::get_service_by_id(db.get_ref(), id).await {
        Ok(Some(service)) => HttpResponse::Ok().json(service),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Service {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/admin/services/{id} — update a service.
pub async fn update(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateService>,
) -> impl Responder {
    let id = path.into_inner();
    match service_db::update_service(db.get_ref(), id, body.into_inner()).await {
        Ok(updated) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => not_found_or_500(e, "Failed to update service"),
    }
}

/// PATCH /api/admin/services/{id}/toggle-active
pub async fn toggle_active(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match service_db::toggle_active(db.get_ref(), path.into_inner()).await {
        Ok(updated) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => not_found_or_500(e, "Failed to toggle service"),
    }
}

/// PATCH /api/admin/services/{id}/toggle-featured
pub async fn toggle_featured(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match service_db::toggle_featured(db.get_ref(), path.into_inner()).await {
        Ok(updated) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => not_found_or_500(e, "Failed to toggle service"),
    }
}

/// DELETE /api/admin/services/{id} — related portfolios and pesanan cascade.
pub async fn destroy(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match service_db::delete_service(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                invalidate_public_cache(redis.get_ref()).await;
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("Service {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("Service {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete service: {e}"),
        })),
    }
}

/// POST /api/admin/services/bulk-destroy
pub async fn bulk_destroy(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    body: web::Json<BulkIds>,
) -> impl Responder {
    match service_db::bulk_delete(db.get_ref(), &body.ids).await {
        Ok(result) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(serde_json::json!({
                "deleted": result.rows_affected,
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete services: {e}"),
        })),
    }
}
