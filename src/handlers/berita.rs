use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::cache::CacheData;
use crate::db::berita as berita_db;
use crate::models::Paginated;
use crate::models::berita::{BeritaListQuery, CreateBerita, UpdateBerita};

use super::{BulkIds, invalidate_public_cache, not_found_or_500};

/// GET /api/admin/berita — paginated listing with search and filters.
pub async fn list(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<BeritaListQuery>,
) -> impl Responder {
    match berita_db::list_berita(db.get_ref(), &query).await {
        Ok((data, total)) => {
            HttpResponse::Ok().json(Paginated::new(data, total, query.page(), query.per_page()))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch berita: {e}"),
        })),
    }
}

/// POST /api/admin/berita — create an article authored by the caller.
pub async fn create(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    body: web::Json<CreateBerita>,
) -> impl Responder {
    let input = body.into_inner();
    if input.title.trim().is_empty() {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Title must not be empty",
            "field": "title",
        }));
    }

    match berita_db::insert_berita(db.get_ref(), input, user.0.id).await {
        Ok(article) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Created().json(article)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create berita: {e}"),
        })),
    }
}

/// GET /api/admin/berita/{id}
pub async fn show(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match berita_db::get_berita_by_id(db.get_ref(), id).await {
        Ok(Some(article)) => HttpResponse::Ok().json(article),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Berita {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/admin/berita/{id}
pub async fn update(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBerita>,
) -> impl Responder {
    let id = path.into_inner();
    match berita_db::update_berita(db.get_ref(), id, body.into_inner()).await {
        Ok(updated) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => not_found_or_500(e, "Failed to update berita"),
    }
}

/// PATCH /api/admin/berita/{id}/toggle-published
pub async fn toggle_published(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match berita_db::toggle_published(db.get_ref(), path.into_inner()).await {
        Ok(updated) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => not_found_or_500(e, "Failed to toggle berita"),
    }
}

/// PATCH /api/admin/berita/{id}/toggle-featured
pub async fn toggle_featured(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match berita_db::toggle_featured(db.get_ref(), path.into_inner()).await {
        Ok(updated) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(updated)
        }
        Err(e) => not_found_or_500(e, "Failed to toggle berita"),
    }
}

/// DELETE /api/admin/berita/{id} — soft delete.
pub async fn destroy(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match berita_db::soft_delete(db.get_ref(), id).await {
        Ok(_) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(serde_json::json!({
                "message": format!("Berita {id} deleted"),
            }))
        }
        Err(e) => not_found_or_500(e, "Failed to delete berita"),
    }
}

/// POST /api/admin/berita/bulk-destroy — soft delete many at once.
pub async fn bulk_destroy(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    body: web::Json<BulkIds>,
) -> impl Responder {
    match berita_db::bulk_soft_delete(db.get_ref(), &body.ids).await {
        Ok(deleted) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(serde_json::json!({
                "deleted": deleted,
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete berita: {e}"),
        })),
    }
}
