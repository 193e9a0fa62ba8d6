use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::pesanan as pesanan_db;
use crate::db::services as service_db;
use crate::models::Paginated;
use crate::models::pesanan::{
    BulkStatus, CreatePesanan, PesananListQuery, UpdatePesanan, UpdatePesananStatus,
};

use super::{BulkIds, not_found_or_500};

/// GET /api/admin/pesanan — paginated listing with search, status, and
/// service filters.
pub async fn list(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<PesananListQuery>,
) -> impl Responder {
    match pesanan_db::list_pesanan(db.get_ref(), &query).await {
        Ok((data, total)) => {
            HttpResponse::Ok().json(Paginated::new(data, total, query.page(), query.per_page()))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch pesanan: {e}"),
        })),
    }
}

/// POST /api/admin/pesanan — create a pesanan on a customer's behalf.
pub async fn create(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<CreatePesanan>,
) -> impl Responder {
    let input = body.into_inner();
    if input.customer_name.trim().is_empty() || input.customer_email.trim().is_empty() {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": "Customer name and email are required",
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
        Ok(pesanan) => HttpResponse::Created().json(pesanan),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create pesanan: {e}"),
        })),
    }
}

/// GET /api/admin/pesanan/{id}
pub async fn show(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match pesanan_db::get_pesanan_by_id(db.get_ref(), id).await {
        Ok(Some(pesanan)) => {
            let allowed_next = pesanan.status.allowed_next();
            HttpResponse::Ok().json(serde_json::json!({
                "pesanan": pesanan,
                "allowed_next": allowed_next,
            }))
        }
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Pesanan {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PUT /api/admin/pesanan/{id} — customer fields only; status has its own
/// endpoint.
pub async fn update(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePesanan>,
) -> impl Responder {
    let id = path.into_inner();
    match pesanan_db::update_pesanan(db.get_ref(), id, body.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => not_found_or_500(e, "Failed to update pesanan"),
    }
}

/// PATCH /api/admin/pesanan/{id}/status — advance the workflow. The target
/// must be strictly later in the sequence.
pub async fn update_status(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePesananStatus>,
) -> impl Responder {
    let id = path.into_inner();
    let target = body.into_inner().status;

    let pesanan = match pesanan_db::get_pesanan_by_id(db.get_ref(), id).await {
        Ok(Some(pesanan)) => pesanan,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Pesanan {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if !pesanan.status.can_advance_to(&target) {
        return HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": format!("Cannot move pesanan from {:?} to {:?}", pesanan.status, target),
            "allowed_next": pesanan.status.allowed_next(),
        }));
    }

    match pesanan_db::update_status(db.get_ref(), pesanan, target).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update status: {e}"),
        })),
    }
}

/// POST /api/admin/pesanan/bulk-status — apply one target status to many
/// rows. Rows whose current status can't reach the target are skipped and
/// reported, not failed.
pub async fn bulk_status(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<BulkStatus>,
) -> impl Responder {
    let input = body.into_inner();
    let mut updated = 0u64;
    let mut skipped: Vec<Uuid> = Vec::new();

    for id in input.ids {
        let pesanan = match pesanan_db::get_pesanan_by_id(db.get_ref(), id).await {
            Ok(Some(pesanan)) => pesanan,
            Ok(None) => {
                skipped.push(id);
                continue;
            }
            Err(e) => {
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Database error: {e}"),
                }));
            }
        };

        if !pesanan.status.can_advance_to(&input.status) {
            skipped.push(id);
            continue;
        }

        if let Err(e) = pesanan_db::update_status(db.get_ref(), pesanan, input.status).await {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to update status: {e}"),
            }));
        }
        updated += 1;
    }

    HttpResponse::Ok().json(serde_json::json!({
        "updated": updated,
        "skipped": skipped,
    }))
}

/// DELETE /api/admin/pesanan/{id} — soft delete.
pub async fn destroy(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match pesanan_db::soft_delete(db.get_ref(), id).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "message": format!("Pesanan {id} deleted"),
        })),
        Err(e) => not_found_or_500(e, "Failed to delete pesanan"),
    }
}

/// POST /api/admin/pesanan/bulk-destroy — soft delete many at once.
pub async fn bulk_destroy(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<BulkIds>,
) -> impl Responder {
    match pesanan_db::bulk_soft_delete(db.get_ref(), &body.ids).await {
        Ok(deleted) => HttpResponse::Ok().json(serde_json::json!({
            "deleted": deleted,
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to delete pesanan: {e}"),
        })),
    }
}
