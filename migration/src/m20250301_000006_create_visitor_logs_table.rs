use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the append-only `visitor_logs` table.
#[derive(DeriveIden)]
enum VisitorLogs {
    Table,
    Id,
    IpAddress,
    UserAgent,
    Url,
    Method,
    Referrer,
    Country,
    City,
    Region,
    Latitude,
    Longitude,
    Device,
    Browser,
    Platform,
    VisitedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VisitorLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VisitorLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VisitorLogs::IpAddress).string().not_null())
                    .col(ColumnDef::new(VisitorLogs::UserAgent).text())
                    .col(ColumnDef::new(VisitorLogs::Url).text().not_null())
                    .col(ColumnDef::new(VisitorLogs::Method).string().not_null())
                    .col(ColumnDef::new(VisitorLogs::Referrer).text())
                    .col(ColumnDef::new(VisitorLogs::Country).string())
                    .col(ColumnDef::new(VisitorLogs::City).string())
                    .col(ColumnDef::new(VisitorLogs::Region).string())
                    .col(ColumnDef::new(VisitorLogs::Latitude).double())
                    .col(ColumnDef::new(VisitorLogs::Longitude).double())
                    .col(ColumnDef::new(VisitorLogs::Device).string())
                    .col(ColumnDef::new(VisitorLogs::Browser).string())
                    .col(ColumnDef::new(VisitorLogs::Platform).string())
                    .col(
                        ColumnDef::new(VisitorLogs::VisitedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VisitorLogs::Table).to_owned())
            .await
    }
}
