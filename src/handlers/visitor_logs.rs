use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::visitor_logs as log_db;
use crate::models::Paginated;
use crate::models::visitor_logs::VisitorLogListQuery;

/// GET /api/admin/visitor-logs — analytics rows, newest first.
pub async fn list(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    query: web::Query<VisitorLogListQuery>,
) -> impl Responder {
    match log_db::list_logs(db.get_ref(), &query).await {
        Ok((data, total)) => {
            HttpResponse::Ok().json(Paginated::new(data, total, query.page(), query.per_page()))
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch visitor logs: {e}"),
        })),
    }
}
