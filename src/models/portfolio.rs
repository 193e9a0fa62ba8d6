use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `portfolios` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image: Option<String>,
    /// JSON array of additional image paths.
    pub gallery: Json,
    pub client_name: Option<String>,
    pub location: Option<String>,
    pub project_date: Option<Date>,
    pub duration: Option<String>,
    /// JSON array of technology/feature strings.
    pub technologies: Json,
    pub project_url: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub is_featured: bool,
    pub service_id: Uuid,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::services::Entity",
        from = "Column::ServiceId",
        to = "super::services::Column::Id"
    )]
    Service,
}

impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePortfolio {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub client_name: Option<String>,
    pub location: Option<String>,
    pub project_date: Option<Date>,
    pub duration: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub project_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub service_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePortfolio {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub client_name: Option<String>,
    pub location: Option<String>,
    pub project_date: Option<Date>,
    pub duration: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub project_url: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub service_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub search: Option<String>,
    pub service_id: Option<Uuid>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

impl PortfolioListQuery {
    pub fn page(&self) -> u64 {
        super::page_or_default(self.page)
    }

    pub fn per_page(&self) -> u64 {
        super::per_page_or_default(self.per_page)
    }
}
