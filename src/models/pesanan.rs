use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pesanan status, stored as a lowercase string in the database.
///
/// The workflow is a fixed linear sequence; a pesanan only ever moves
/// forward through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "verifikasi")]
    Verifikasi,
    #[sea_orm(string_value = "proses")]
    Proses,
    #[sea_orm(string_value = "approval")]
    Approval,
    #[sea_orm(string_value = "running")]
    Running,
    #[sea_orm(string_value = "selesai")]
    Selesai,
}

impl Status {
    /// The full workflow in order.
    pub const SEQUENCE: [Status; 6] = [
        Status::Pending,
        Status::Verifikasi,
        Status::Proses,
        Status::Approval,
        Status::Running,
        Status::Selesai,
    ];

    fn position(&self) -> usize {
        Self::SEQUENCE
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    /// The immediate successor, if any. `Selesai` is terminal.
    pub fn next(&self) -> Option<Status> {
        Self::SEQUENCE.get(self.position() + 1).copied()
    }

    /// A transition is legal only onto a status strictly later in the
    /// sequence.
    pub fn can_advance_to(&self, target: &Status) -> bool {
        target.position() > self.position()
    }

    /// Every status the pesanan may still advance to from here.
    pub fn allowed_next(&self) -> Vec<Status> {
        Self::SEQUENCE[self.position() + 1..].to_vec()
    }
}

/// SeaORM entity for the `pesanan` (customer orders) table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pesanan")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub due_date: Option<Date>,
    pub status: Status,
    pub service_id: Uuid,
    pub deleted_at: Option<DateTimeUtc>,
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
pub struct CreatePesanan {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub description: String,
    pub due_date: Option<Date>,
    pub service_id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePesanan {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Date>,
    pub service_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePesananStatus {
    pub status: Status,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkStatus {
    pub ids: Vec<Uuid>,
    pub status: Status,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PesananListQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub search: Option<String>,
    pub status: Option<Status>,
    pub service_id: Option<Uuid>,
}

impl PesananListQuery {
    pub fn page(&self) -> u64 {
        super::page_or_default(self.page)
    }

    pub fn per_page(&self) -> u64 {
        super::per_page_or_default(self.per_page)
    }
}
