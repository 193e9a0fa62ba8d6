use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder, web};

use crate::auth::middleware::AuthenticatedUser;
use crate::storage::{self, StorageConfig, UploadError};

/// POST /api/admin/uploads/{entity} — store an image and return the
/// relative path to persist on the entity.
pub async fn upload(
    _user: AuthenticatedUser,
    config: web::Data<StorageConfig>,
    path: web::Path<String>,
    payload: Multipart,
) -> impl Responder {
    let entity = path.into_inner();
    match storage::save_image(config.get_ref(), &entity, payload).await {
        Ok(relative) => HttpResponse::Created().json(serde_json::json!({
            "path": relative,
            "url": format!("/storage/{relative}"),
        })),
        Err(e @ (UploadError::MissingFile | UploadError::UnsupportedType(_))) => {
            HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": e.to_string(),
            }))
        }
        Err(e @ UploadError::UnknownEntity(_)) => {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": e.to_string(),
            }))
        }
        Err(e @ UploadError::TooLarge) => {
            HttpResponse::PayloadTooLarge().json(serde_json::json!({
                "error": e.to_string(),
            }))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Upload failed: {e}"),
        })),
    }
}
