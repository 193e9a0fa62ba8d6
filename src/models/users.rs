use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Back-office roles, stored as lowercase strings. Flat, no hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "manager")]
    Manager,
    #[sea_orm(string_value = "head")]
    Head,
    #[sea_orm(string_value = "staff")]
    Staff,
}

/// SeaORM entity for the `users` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Bcrypt hash. Never serialized to clients — see `UserResponse`.
    #[serde(skip_serializing)]
    pub password: String,
    pub phone: Option<String>,
    pub role: Role,
    pub photo: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::berita::Entity")]
    Berita,
}

impl Related<super::berita::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Berita.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: Role,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub search: Option<String>,
    pub role: Option<Role>,
}

impl UserListQuery {
    pub fn page(&self) -> u64 {
        super::page_or_default(self.page)
    }

    pub fn per_page(&self) -> u64 {
        super::per_page_or_default(self.per_page)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Username or email address.
    pub identifier: String,
    pub password: String,
}

/// User profile as exposed over the API — no password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub photo: Option<String>,
    pub created_at: DateTimeUtc,
}

impl From<Model> for UserResponse {
    fn from(user: Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            phone: user.phone,
            role: user.role,
            photo: user.photo,
            created_at: user.created_at,
        }
    }
}

/// Slimmer profile for the public team page.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub role: Role,
    pub photo: Option<String>,
    pub phone: Option<String>,
}

impl From<Model> for TeamMember {
    fn from(user: Model) -> Self {
        Self {
            name: user.name,
            role: user.role,
            photo: user.photo,
            phone: user.phone,
        }
    }
}
