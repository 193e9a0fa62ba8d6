use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `berita` (news articles) table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "berita")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub excerpt: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: String,
    /// JSON array of tag strings.
    pub tags: Json,
    pub featured_image: Option<String>,
    /// JSON array of additional image paths.
    pub gallery: Json,
    pub is_published: bool,
    pub is_featured: bool,
    pub published_at: Option<DateTimeUtc>,
    pub views: i64,
    pub author_id: Uuid,
    pub deleted_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AuthorId",
        to = "super::users::Column::Id"
    )]
    Author,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBerita {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub category: String,
    pub tags: Option<Vec<String>>,
    pub featured_image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBerita {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured_image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BeritaListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
}

impl BeritaListQuery {
    pub fn page(&self) -> u64 {
        super::page_or_default(self.page)
    }

    pub fn per_page(&self) -> u64 {
        super::per_page_or_default(self.per_page)
    }
}
