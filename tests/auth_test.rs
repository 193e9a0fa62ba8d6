///! Integration test for token issuance and validation.
///!
///! Tokens are minted and validated locally through the same functions the
///! server uses. No running server or database is needed.
///!
///! Run with: `cargo test --test auth_test`
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

use teknindo_backend::auth::jwt::{Claims, issue_token, validate_token};
use teknindo_backend::models::users::{Model as User, Role};

/// A fake secret for testing — never use the real one in tests committed to git.
const TEST_SECRET: &str = "test-secret-at-least-256-bits-long-for-hs256-xxxxxxx";

fn test_user() -> User {
    User {
        id: Uuid::new_v4(),
        name: "Andi Wijaya".to_string(),
        username: "andi".to_string(),
        email: "andi@example.com".to_string(),
        password: "$2b$12$notarealhash".to_string(),
        phone: Some("+62 812 0000 0000".to_string()),
        role: Role::Admin,
        photo: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

#[test]
fn test_issued_token_round_trips() {
    let user = test_user();
    let token = issue_token(&user, TEST_SECRET).expect("Failed to issue token");

    let claims = validate_token(&token, TEST_SECRET).expect("Token should be valid");

    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.username, "andi");
    assert_eq!(claims.role, "admin");
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        exp: now - 300, // expired 5 minutes ago (well past the 60s default leeway)
        iat: now - 3600,
        username: "andi".to_string(),
        role: "staff".to_string(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to encode test token");

    assert!(validate_token(&token, TEST_SECRET).is_err());
}

#[test]
fn test_wrong_secret_is_rejected() {
    let user = test_user();
    let token = issue_token(&user, TEST_SECRET).expect("Failed to issue token");

    assert!(validate_token(&token, "a-completely-different-secret-of-sufficient-len").is_err());
}

#[test]
fn test_garbage_token_is_rejected() {
    assert!(validate_token("not.a.jwt", TEST_SECRET).is_err());
}
