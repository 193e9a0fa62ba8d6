use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `berita` (news) table and its columns.
#[derive(DeriveIden)]
enum Berita {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Content,
    Category,
    Tags,
    FeaturedImage,
    Gallery,
    IsPublished,
    IsFeatured,
    PublishedAt,
    Views,
    AuthorId,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Berita::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Berita::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Berita::Title).string().not_null())
                    .col(ColumnDef::new(Berita::Slug).string().not_null().unique_key())
                    .col(ColumnDef::new(Berita::Excerpt).string())
                    .col(ColumnDef::new(Berita::Content).text().not_null())
                    .col(ColumnDef::new(Berita::Category).string().not_null())
                    .col(ColumnDef::new(Berita::Tags).json().not_null())
                    .col(ColumnDef::new(Berita::FeaturedImage).string())
                    .col(ColumnDef::new(Berita::Gallery).json().not_null())
                    .col(
                        ColumnDef::new(Berita::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Berita::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Berita::PublishedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Berita::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Berita::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Berita::DeletedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Berita::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Berita::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_berita_author_id")
                            .from(Berita::Table, Berita::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Berita::Table).to_owned())
            .await
    }
}
