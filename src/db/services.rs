use sea_orm::*;
use uuid::Uuid;

use crate::models::services::{self, CreateService, ServiceListQuery, UpdateService};
use crate::slug;

/// Find a slug not yet taken by another service row.
async fn unique_slug(
    db: &DatabaseConnection,
    title: &str,
    exclude: Option<Uuid>,
) -> Result<String, DbErr> {
    let base = slug::slugify(title);
    let mut attempt = 1;
    loop {
        let candidate = slug::with_suffix(&base, attempt);
        let mut query = services::Entity::find().filter(services::Column::Slug.eq(&candidate));
        if let Some(id) = exclude {
            query = query.filter(services::Column::Id.ne(id));
        }
        if query.one(db).await?.is_none() {
            return Ok(candidate);
        }
        attempt += 1;
    }
}

/// Insert a new service.
pub async fn insert_service(
    db: &DatabaseConnection,
    input: CreateService,
) -> Result<services::Model, DbErr> {
    let slug = unique_slug(db, &input.title, None).await?;

    let new_service = services::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        slug: Set(slug),
        description: Set(input.description),
        short_description: Set(input.short_description),
        icon: Set(input.icon),
        image: Set(input.image),
        features: Set(super::json_list(input.features)),
        sort_order: Set(input.sort_order.unwrap_or(0)),
        is_active: Set(input.is_active.unwrap_or(true)),
        is_featured: Set(input.is_featured.unwrap_or(false)),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_service.insert(db).await
}

/// Paginated admin listing with search and flag filters.
pub async fn list_services(
    db: &DatabaseConnection,
    q: &ServiceListQuery,
) -> Result<(Vec<services::Model>, u64), DbErr> {
    let mut query = services::Entity::find();

    if let Some(search) = q.search.as_deref().filter(|s| !s.is_empty()) {
        query = query.filter(
            Condition::any()
                .add(services::Column::Title.contains(search))
                .add(services::Column::Slug.contains(search)),
        );
    }
    if let Some(is_active) = q.is_active {
        query = query.filter(services::Column::IsActive.eq(is_active));
    }
    if let Some(is_featured) = q.is_featured {
        query = query.filter(services::Column::IsFeatured.eq(is_featured));
    }

    let paginator = query
        .order_by_asc(services::Column::SortOrder)
        .order_by_asc(services::Column::Title)
        .paginate(db, q.per_page());
    let total = paginator.num_items().await?;
    let data = paginator.fetch_page(q.page() - 1).await?;
    Ok((data, total))
}

/// Active services in display order, for the public site.
pub async fn get_active_services(db: &DatabaseConnection) -> Result<Vec<services::Model>, DbErr> {
    services::Entity::find()
        .filter(services::Column::IsActive.eq(true))
        .order_by_asc(services::Column::SortOrder)
        .all(db)
        .await
}

/// Active featured services for the home page.
pub async fn get_featured_services(db: &DatabaseConnection) -> Result<Vec<services::Model>, DbErr> {
    services::Entity::find()
        .filter(services::Column::IsActive.eq(true))
        .filter(services::Column::IsFeatured.eq(true))
        .order_by_asc(services::Column::SortOrder)
        .all(db)
        .await
}

/// Fetch a single service by ID.
pub async fn get_service_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<services::Model>, DbErr> {
    services::Entity::find_by_id(id).one(db).await
}

/// Fetch a single active service by slug (public detail page).
pub async fn get_service_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<services::Model>, DbErr> {
    services::Entity::find()
        .filter(services::Column::Slug.eq(slug))
        .filter(services::Column::IsActive.eq(true))
        .one(db)
        .await
}

/// Update an existing service. A title change regenerates the slug.
pub async fn update_service(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateService,
) -> Result<services::Model, DbErr> {
    let service = services::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Service not found".to_string()))?;

    let mut active: services::ActiveModel = service.into();

    if let Some(title) = input.title {
        let slug = unique_slug(db, &title, Some(id)).await?;
        active.title = Set(title);
        active.slug = Set(slug);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(short_description) = input.short_description {
        active.short_description = Set(Some(short_description));
    }
    if let Some(icon) = input.icon {
        active.icon = Set(Some(icon));
    }
    if let Some(image) = input.image {
        active.image = Set(Some(image));
    }
    if let Some(features) = input.features {
        active.features = Set(super::json_list(Some(features)));
    }
    if let Some(sort_order) = input.sort_order {
        active.sort_order = Set(sort_order);
    }
    if let Some(is_active) = input.is_active {
        active.is_active = Set(is_active);
    }
    if let Some(is_featured) = input.is_featured {
        active.is_featured = Set(is_featured);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Flip the `is_active` flag.
pub async fn toggle_active(db: &DatabaseConnection, id: Uuid) -> Result<services::Model, DbErr> {
    let service = services::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Service not found".to_string()))?;

    let flipped = !service.is_active;
    let mut active: services::ActiveModel = service.into();
    active.is_active = Set(flipped);
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.update(db).await
}

/// Flip the `is_featured` flag.
pub async fn toggle_featured(db: &DatabaseConnection, id: Uuid) -> Result<services::Model, DbErr> {
    let service = services::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Service not found".to_string()))?;

    let flipped = !service.is_featured;
    let mut active: services::ActiveModel = service.into();
    active.is_featured = Set(flipped);
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.update(db).await
}

/// Delete a service by ID. Portfolios and pesanan cascade in the database.
pub async fn delete_service(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    services::Entity::delete_by_id(id).exec(db).await
}

/// Delete many services at once.
pub async fn bulk_delete(db: &DatabaseConnection, ids: &[Uuid]) -> Result<DeleteResult, DbErr> {
    services::Entity::delete_many()
        .filter(services::Column::Id.is_in(ids.to_vec()))
        .exec(db)
        .await
}
