///! Validation behavior of the admin pesanan handlers, exercised against a
///! mocked database.
///!
///! Run with: `cargo test --test admin_pesanan_test`
use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use actix_web::{Responder, web};
use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::Uuid;

use teknindo_backend::auth::middleware::AuthenticatedUser;
use teknindo_backend::handlers::pesanan;
use teknindo_backend::models::pesanan::CreatePesanan;
use teknindo_backend::models::services;
use teknindo_backend::models::users::{self, Role};

fn test_admin() -> users::Model {
    users::Model {
        id: Uuid::new_v4(),
        name: "Admin".to_string(),
        username: "admin".to_string(),
        email: "admin@example.com".to_string(),
        password: "$2b$12$C6UzMDM.H6dfI/f/IKcEeO".to_string(),
        phone: None,
        role: Role::Admin,
        photo: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn pesanan_for(service_id: Uuid) -> CreatePesanan {
    CreatePesanan {
        customer_name: "Budi Santoso".to_string(),
        customer_email: "budi@example.com".to_string(),
        customer_phone: None,
        description: "Perbaikan hidrolik excavator".to_string(),
        due_date: None,
        service_id,
    }
}

fn status_of(resp: impl Responder) -> StatusCode {
    let req = TestRequest::default().to_http_request();
    resp.respond_to(&req).status()
}

#[actix_web::test]
async fn create_rejects_unknown_service_with_422() {
    // The service lookup comes back empty, so the insert must never run.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<services::Model>::new()])
        .into_connection();

    let resp = pesanan::create(
        AuthenticatedUser(test_admin()),
        web::Data::new(db),
        web::Json(pesanan_for(Uuid::new_v4())),
    )
    .await;

    assert_eq!(status_of(resp), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn create_rejects_blank_customer_with_422() {
    // Validation fails before any query, so no results need mocking.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let mut input = pesanan_for(Uuid::new_v4());
    input.customer_name = "   ".to_string();

    let resp = pesanan::create(
        AuthenticatedUser(test_admin()),
        web::Data::new(db),
        web::Json(input),
    )
    .await;

    assert_eq!(status_of(resp), StatusCode::UNPROCESSABLE_ENTITY);
}
