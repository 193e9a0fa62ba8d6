use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Portfolios {
    Table,
    ServiceId,
}

#[derive(DeriveIden)]
enum Pesanan {
    Table,
    ServiceId,
    Status,
}

#[derive(DeriveIden)]
enum Berita {
    Table,
    Category,
    PublishedAt,
}

#[derive(DeriveIden)]
enum VisitorLogs {
    Table,
    VisitedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on portfolios.service_id for the per-service portfolio listing
        manager
            .create_index(
                Index::create()
                    .name("idx_portfolios_service_id")
                    .table(Portfolios::Table)
                    .col(Portfolios::ServiceId)
                    .to_owned(),
            )
            .await?;

        // Indexes on pesanan for the admin status filter and service lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_pesanan_service_id")
                    .table(Pesanan::Table)
                    .col(Pesanan::ServiceId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_pesanan_status")
                    .table(Pesanan::Table)
                    .col(Pesanan::Status)
                    .to_owned(),
            )
            .await?;

        // Indexes on berita for the public category filter and newest-first sort
        manager
            .create_index(
                Index::create()
                    .name("idx_berita_category")
                    .table(Berita::Table)
                    .col(Berita::Category)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_berita_published_at")
                    .table(Berita::Table)
                    .col(Berita::PublishedAt)
                    .to_owned(),
            )
            .await?;

        // Index on visitor_logs.visited_at for the admin analytics listing
        manager
            .create_index(
                Index::create()
                    .name("idx_visitor_logs_visited_at")
                    .table(VisitorLogs::Table)
                    .col(VisitorLogs::VisitedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_portfolios_service_id")
                    .table(Portfolios::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_pesanan_service_id")
                    .table(Pesanan::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_pesanan_status")
                    .table(Pesanan::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_berita_category")
                    .table(Berita::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_berita_published_at")
                    .table(Berita::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_visitor_logs_visited_at")
                    .table(VisitorLogs::Table)
                    .to_owned(),
            )
            .await
    }
}
