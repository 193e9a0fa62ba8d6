use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::auth::jwt;
use crate::auth::middleware::{AuthenticatedUser, JwtSecret};
use crate::db::users as user_db;
use crate::models::users::{LoginRequest, UserResponse};

/// POST /api/auth/login — verify credentials, return a bearer token and the
/// profile. Unknown identifier and wrong password answer identically.
pub async fn login(
    db: web::Data<DatabaseConnection>,
    secret: web::Data<JwtSecret>,
    body: web::Json<LoginRequest>,
) -> impl Responder {
    let input = body.into_inner();

    let user = match user_db::get_user_by_identifier(db.get_ref(), input.identifier.trim()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Invalid credentials",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    match bcrypt::verify(&input.password, &user.password) {
        Ok(true) => {}
        Ok(false) => {
            return HttpResponse::Unauthorized().json(serde_json::json!({
                "error": "Invalid credentials",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Password verification failed: {e}"),
            }));
        }
    }

    match jwt::issue_token(&user, &secret.0) {
        Ok(token) => HttpResponse::Ok().json(serde_json::json!({
            "token": token,
            "user": UserResponse::from(user),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to issue token: {e}"),
        })),
    }
}

/// GET /api/auth/me — return the currently authenticated user's profile.
pub async fn me(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(UserResponse::from(user.0))
}
