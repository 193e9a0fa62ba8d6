use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::cache::CacheData;
use crate::db::users as user_db;
use crate::models::Paginated;
use crate::models::users::{CreateUser, UpdateUser, UserListQuery, UserResponse};

use super::{BulkIds, invalidate_public_cache, not_found_or_500};

/// GET /api/admin/users — paginated listing with search and role filter.
pub async fn list(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<UserListQuery>,
) -> impl Responder {
    match user_db::list_users(db.get_ref(), &query).await {
        Ok((data, total)) => {
            let data: Vec<UserResponse> = data.into_iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(Paginated::new(data, total, query.page(), query.per_page()))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch users: {e}"),
        })),
    }
}

/// POST /api/admin/users — create a back-office account. Users feed the
/// public team page, so mutations drop the cached payloads.
pub async fn create(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    body: web::Json<CreateUser>,
) -> impl Responder {
    let input = body.into_inner();
    if input.username.trim().is_empty() || input.password.len() < 8 {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Username is required and password must be at least 8 characters",
        }));
    }

    let hash = match bcrypt::hash(&input.password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to hash password: {e}"),
            }));
        }
    };

    match user_db::insert_user(db.get_ref(), input, hash).await {
        Ok(user) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Created().json(UserResponse::from(user))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create user: {e}"),
        })),
    }
}

/// GET /api/admin/users/{id}
pub async fn show(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match user_db::get_user_by_id(db.get_ref(), id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(UserResponse::from(user)),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("User {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/admin/users/{id} — a supplied password is re-hashed.
pub async fn update(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateUser>,
) -> impl Responder {
    let id = path.into_inner();
    let input = body.into_inner();

    let password_hash = match input.password.as_deref() {
        Some(p) if p.len() < 8 => {
            return HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": "Password must be at least 8 characters",
                "field": "password",
            }));
        }
        Some(p) => match bcrypt::hash(p, bcrypt::DEFAULT_COST) {
            Ok(hash) => Some(hash),
            Err(e) => {
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Failed to hash password: {e}"),
                }));
            }
        },
        None => None,
    };

    match user_db::update_user(db.get_ref(), id, input, password_hash).await {
        Ok(updated) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(UserResponse::from(updated))
        }
        Err(e) => not_found_or_500(e, "Failed to update user"),
    }
}

/// DELETE /api/admin/users/{id} — a user may not delete their own account.
pub async fn destroy(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    if id == user.0.id {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "You cannot delete your own account",
        }));
    }

    match user_db::delete_user(db.get_ref(), id).await {
        Ok(result) => {
            if result.rows_affected > 0 {
                invalidate_public_cache(redis.get_ref()).await;
                HttpResponse::Ok().json(serde_json::json!({
                    "message": format!("User {id} deleted"),
                }))
            } else {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": format!("User {id} not found"),
                }))
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete user: {e}"),
        })),
    }
}

/// POST /api/admin/users/bulk-destroy — the caller's own ID is dropped from
/// the batch.
pub async fn bulk_destroy(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    redis: web::Data<CacheData>,
    body: web::Json<BulkIds>,
) -> impl Responder {
    let ids: Vec<Uuid> = body
        .ids
        .iter()
        .copied()
        .filter(|id| *id != user.0.id)
        .collect();

    match user_db::bulk_delete(db.get_ref(), &ids).await {
        Ok(result) => {
            invalidate_public_cache(redis.get_ref()).await;
            HttpResponse::Ok().json(serde_json::json!({
                "deleted": result.rows_affected,
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete users: {e}"),
        })),
    }
}
