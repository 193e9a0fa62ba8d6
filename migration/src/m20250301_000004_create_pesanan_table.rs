use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `pesanan` (orders) table and its columns.
#[derive(DeriveIden)]
enum Pesanan {
    Table,
    Id,
    Code,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    Description,
    DueDate,
    Status,
    ServiceId,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pesanan::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Pesanan::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Pesanan::Code).string().not_null().unique_key())
                    .col(ColumnDef::new(Pesanan::CustomerName).string().not_null())
                    .col(ColumnDef::new(Pesanan::CustomerEmail).string().not_null())
                    .col(ColumnDef::new(Pesanan::CustomerPhone).string())
                    .col(ColumnDef::new(Pesanan::Description).text().not_null())
                    .col(ColumnDef::new(Pesanan::DueDate).date())
                    .col(ColumnDef::new(Pesanan::Status).string().not_null())
                    .col(ColumnDef::new(Pesanan::ServiceId).uuid().not_null())
                    .col(ColumnDef::new(Pesanan::DeletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Pesanan::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Pesanan::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pesanan_service_id")
                            .from(Pesanan::Table, Pesanan::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pesanan::Table).to_owned())
            .await
    }
}
