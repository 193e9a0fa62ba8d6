use sea_orm::*;
use sea_orm::sea_query::Expr;
use uuid::Uuid;

use crate::models::berita::{self, BeritaListQuery, CreateBerita, UpdateBerita};
use crate::slug;

/// Find a slug not yet taken by another berita row.
async fn unique_slug(
    db: &DatabaseConnection,
    title: &str,
    exclude: Option<Uuid>,
) -> Result<String, DbErr> {
    let base = slug::slugify(title);
    let mut attempt = 1;
    loop {
        let candidate = slug::with_suffix(&base, attempt);
        let mut query = berita::Entity::find().filter(berita::Column::Slug.eq(&candidate));
        if let Some(id) = exclude {
            query = query.filter(berita::Column::Id.ne(id));
        }
        if query.one(db).await?.is_none() {
            return Ok(candidate);
        }
        attempt += 1;
    }
}

/// Insert a new berita article authored by the given user.
pub async fn insert_berita(
    db: &DatabaseConnection,
    input: CreateBerita,
    author_id: Uuid,
) -> Result<berita::Model, DbErr> {
    let slug = unique_slug(db, &input.title, None).await?;
    let is_published = input.is_published.unwrap_or(false);

    let new_berita = berita::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        slug: Set(slug),
        excerpt: Set(input.excerpt),
        content: Set(input.content),
        category: Set(input.category),
        tags: Set(super::json_list(input.tags)),
        featured_image: Set(input.featured_image),
        gallery: Set(super::json_list(input.gallery)),
        is_published: Set(is_published),
        is_featured: Set(input.is_featured.unwrap_or(false)),
        published_at: Set(is_published.then(chrono::Utc::now)),
        views: Set(0),
        author_id: Set(author_id),
        deleted_at: Set(None),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_berita.insert(db).await
}

fn live() -> Condition {
    Condition::all().add(berita::Column::DeletedAt.is_null())
}

fn filtered(q: &BeritaListQuery) -> Select<berita::Entity> {
    let mut query = berita::Entity::find().filter(live());

    if let Some(search) = q.search.as_deref().filter(|s| !s.is_empty()) {
        query = query.filter(
            Condition::any()
                .add(berita::Column::Title.contains(search))
                .add(berita::Column::Slug.contains(search)),
        );
    }
    if let Some(category) = q.category.as_deref().filter(|c| !c.is_empty()) {
        query = query.filter(berita::Column::Category.eq(category));
    }
    if let Some(tag) = q.tag.as_deref().filter(|t| !t.is_empty()) {
        // Tags live in a JSON array column; match the quoted string.
        query = query.filter(Expr::cust_with_values(
            "tags::text ILIKE ?",
            [format!("%\"{tag}\"%")],
        ));
    }
    if let Some(is_published) = q.is_published {
        query = query.filter(berita::Column::IsPublished.eq(is_published));
    }
    if let Some(is_featured) = q.is_featured {
        query = query.filter(berita::Column::IsFeatured.eq(is_featured));
    }

    query
}

fn admin_listing(q: &BeritaListQuery) -> Select<berita::Entity> {
    filtered(q).order_by_desc(berita::Column::CreatedAt)
}

/// Public listings sort by publication time, so an article published late
/// sorts by when it went live, not when it was drafted.
fn public_listing(q: &BeritaListQuery) -> Select<berita::Entity> {
    let published = BeritaListQuery {
        is_published: Some(true),
        is_featured: q.is_featured,
        ..q.clone()
    };
    filtered(&published).order_by_desc(berita::Column::PublishedAt)
}

/// Paginated admin listing, newest row first. Soft-deleted rows are always
/// excluded.
pub async fn list_berita(
    db: &DatabaseConnection,
    q: &BeritaListQuery,
) -> Result<(Vec<berita::Model>, u64), DbErr> {
    let paginator = admin_listing(q).paginate(db, q.per_page());
    let total = paginator.num_items().await?;
    let data = paginator.fetch_page(q.page() - 1).await?;
    Ok((data, total))
}

/// Paginated public listing: published only, most recently published first.
pub async fn list_published(
    db: &DatabaseConnection,
    q: &BeritaListQuery,
) -> Result<(Vec<berita::Model>, u64), DbErr> {
    let paginator = public_listing(q).paginate(db, q.per_page());
    let total = paginator.num_items().await?;
    let data = paginator.fetch_page(q.page() - 1).await?;
    Ok((data, total))
}

/// Latest published articles for the home page.
pub async fn get_latest_published(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<berita::Model>, DbErr> {
    berita::Entity::find()
        .filter(live())
        .filter(berita::Column::IsPublished.eq(true))
        .order_by_desc(berita::Column::PublishedAt)
        .limit(limit)
        .all(db)
        .await
}

/// Fetch a single live berita by ID (admin).
pub async fn get_berita_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<berita::Model>, DbErr> {
    berita::Entity::find_by_id(id).filter(live()).one(db).await
}

/// Fetch a published article by slug and bump its views counter.
pub async fn read_published_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<berita::Model>, DbErr> {
    let found = berita::Entity::find()
        .filter(live())
        .filter(berita::Column::Slug.eq(slug))
        .filter(berita::Column::IsPublished.eq(true))
        .one(db)
        .await?;

    let Some(article) = found else {
        return Ok(None);
    };

    // The increment runs in SQL; concurrent reads must not lose counts.
    berita::Entity::update_many()
        .col_expr(
            berita::Column::Views,
            Expr::col(berita::Column::Views).add(1),
        )
        .filter(berita::Column::Id.eq(article.id))
        .exec(db)
        .await?;

    Ok(Some(berita::Model {
        views: article.views + 1,
        ..article
    }))
}

/// Update an existing article. A title change regenerates the slug; turning
/// `is_published` on for the first time stamps `published_at`.
pub async fn update_berita(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateBerita,
) -> Result<berita::Model, DbErr> {
    let article = get_berita_by_id(db, id)
        .await?
        .ok_or(DbErr::RecordNotFound("Berita not found".to_string()))?;
    let already_published_at = article.published_at;

    let mut active: berita::ActiveModel = article.into();

    if let Some(title) = input.title {
        let slug = unique_slug(db, &title, Some(id)).await?;
        active.title = Set(title);
        active.slug = Set(slug);
    }
    if let Some(excerpt) = input.excerpt {
        active.excerpt = Set(Some(excerpt));
    }
    if let Some(content) = input.content {
        active.content = Set(content);
    }
    if let Some(category) = input.category {
        active.category = Set(category);
    }
    if let Some(tags) = input.tags {
        active.tags = Set(super::json_list(Some(tags)));
    }
    if let Some(featured_image) = input.featured_image {
        active.featured_image = Set(Some(featured_image));
    }
    if let Some(gallery) = input.gallery {
        active.gallery = Set(super::json_list(Some(gallery)));
    }
    if let Some(is_published) = input.is_published {
        active.is_published = Set(is_published);
        if is_published && already_published_at.is_none() {
            active.published_at = Set(Some(chrono::Utc::now()));
        }
    }
    if let Some(is_featured) = input.is_featured {
        active.is_featured = Set(is_featured);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Flip the `is_published` flag, stamping `published_at` on first publish.
pub async fn toggle_published(db: &DatabaseConnection, id: Uuid) -> Result<berita::Model, DbErr> {
    let article = get_berita_by_id(db, id)
        .await?
        .ok_or(DbErr::RecordNotFound("Berita not found".to_string()))?;

    let publishing = !article.is_published;
    let first_publish = publishing && article.published_at.is_none();
    let mut active: berita::ActiveModel = article.into();
    active.is_published = Set(publishing);
    if first_publish {
        active.published_at = Set(Some(chrono::Utc::now()));
    }
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.update(db).await
}

/// Flip the `is_featured` flag.
pub async fn toggle_featured(db: &DatabaseConnection, id: Uuid) -> Result<berita::Model, DbErr> {
    let article = get_berita_by_id(db, id)
        .await?
        .ok_or(DbErr::RecordNotFound("Berita not found".to_string()))?;

    let flipped = !article.is_featured;
    let mut active: berita::ActiveModel = article.into();
    active.is_featured = Set(flipped);
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.update(db).await
}

/// Soft-delete an article by stamping `deleted_at`.
pub async fn soft_delete(db: &DatabaseConnection, id: Uuid) -> Result<berita::Model, DbErr> {
    let article = get_berita_by_id(db, id)
        .await?
        .ok_or(DbErr::RecordNotFound("Berita not found".to_string()))?;

    let mut active: berita::ActiveModel = article.into();
    active.deleted_at = Set(Some(chrono::Utc::now()));
    active.update(db).await
}

/// Soft-delete many articles at once. Returns the number of rows stamped.
pub async fn bulk_soft_delete(db: &DatabaseConnection, ids: &[Uuid]) -> Result<u64, DbErr> {
    let result = berita::Entity::update_many()
        .col_expr(berita::Column::DeletedAt, Expr::value(chrono::Utc::now()))
        .filter(berita::Column::Id.is_in(ids.to_vec()))
        .filter(berita::Column::DeletedAt.is_null())
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sql(select: Select<berita::Entity>) -> String {
        select.build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn admin_listing_orders_by_creation_time() {
        let query = sql(admin_listing(&BeritaListQuery::default()));
        assert!(query.contains(r#"ORDER BY "berita"."created_at" DESC"#));
    }

    #[test]
    fn public_listing_orders_by_publication_time() {
        let query = sql(public_listing(&BeritaListQuery::default()));
        assert!(query.contains(r#"ORDER BY "berita"."published_at" DESC"#));
        assert!(query.contains(r#""berita"."is_published" = TRUE"#));
    }

    #[test]
    fn public_listing_keeps_caller_filters() {
        let q = BeritaListQuery {
            category: Some("wheel-loader".to_string()),
            ..Default::default()
        };
        let query = sql(public_listing(&q));
        assert!(query.contains("wheel-loader"));
        assert!(query.contains(r#""berita"."deleted_at" IS NULL"#));
    }
}
