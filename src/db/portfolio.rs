use sea_orm::*;
use uuid::Uuid;

use crate::models::portfolio::{self, CreatePortfolio, PortfolioListQuery, UpdatePortfolio};
use crate::slug;

/// Find a slug not yet taken by another portfolio row.
async fn unique_slug(
    db: &DatabaseConnection,
    title: &str,
    exclude: Option<Uuid>,
) -> Result<String, DbErr> {
    let base = slug::slugify(title);
    let mut attempt = 1;
    loop {
        let candidate = slug::with_suffix(&base, attempt);
        let mut query = portfolio::Entity::find().filter(portfolio::Column::Slug.eq(&candidate));
        if let Some(id) = exclude {
            query = query.filter(portfolio::Column::Id.ne(id));
        }
        if query.one(db).await?.is_none() {
            return Ok(candidate);
        }
        attempt += 1;
    }
}

/// Insert a new portfolio item.
pub async fn insert_portfolio(
    db: &DatabaseConnection,
    input: CreatePortfolio,
) -> Result<portfolio::Model, DbErr> {
    let slug = unique_slug(db, &input.title, None).await?;

    let new_portfolio = portfolio::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        slug: Set(slug),
        description: Set(input.description),
        image: Set(input.image),
        gallery: Set(super::json_list(input.gallery)),
        client_name: Set(input.client_name),
        location: Set(input.location),
        project_date: Set(input.project_date),
        duration: Set(input.duration),
        technologies: Set(super::json_list(input.technologies)),
        project_url: Set(input.project_url),
        sort_order: Set(input.sort_order.unwrap_or(0)),
        is_active: Set(input.is_active.unwrap_or(true)),
        is_featured: Set(input.is_featured.unwrap_or(false)),
        service_id: Set(input.service_id),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_portfolio.insert(db).await
}

/// Paginated admin listing with search and filters.
pub async fn list_portfolios(
    db: &DatabaseConnection,
    q: &PortfolioListQuery,
) -> Result<(Vec<portfolio::Model>, u64), DbErr> {
    let mut query = portfolio::Entity::find();

    if let Some(search) = q.search.as_deref().filter(|s| !s.is_empty()) {
        query = query.filter(
            Condition::any()
                .add(portfolio::Column::Title.contains(search))
                .add(portfolio::Column::ClientName.contains(search))
                .add(portfolio::Column::Location.contains(search)),
        );
    }
    if let Some(service_id) = q.service_id {
        query = query.filter(portfolio::Column::ServiceId.eq(service_id));
    }
    if let Some(is_active) = q.is_active {
        query = query.filter(portfolio::Column::IsActive.eq(is_active));
    }
    if let Some(is_featured) = q.is_featured {
        query = query.filter(portfolio::Column::IsFeatured.eq(is_featured));
    }

    let paginator = query
        .order_by_asc(portfolio::Column::SortOrder)
        .order_by_desc(portfolio::Column::CreatedAt)
        .paginate(db, q.per_page());
    let total = paginator.num_items().await?;
    let data = paginator.fetch_page(q.page() - 1).await?;
    Ok((data, total))
}

/// Active portfolio items in display order, optionally per service.
pub async fn get_active_portfolios(
    db: &DatabaseConnection,
    service_id: Option<Uuid>,
) -> Result<Vec<portfolio::Model>, DbErr> {
    let mut query = portfolio::Entity::find().filter(portfolio::Column::IsActive.eq(true));
    if let Some(service_id) = service_id {
        query = query.filter(portfolio::Column::ServiceId.eq(service_id));
    }
    query
        .order_by_asc(portfolio::Column::SortOrder)
        .all(db)
        .await
}

/// Active featured portfolio items for the home page.
pub async fn get_featured_portfolios(
    db: &DatabaseConnection,
) -> Result<Vec<portfolio::Model>, DbErr> {
    portfolio::Entity::find()
        .filter(portfolio::Column::IsActive.eq(true))
        .filter(portfolio::Column::IsFeatured.eq(true))
        .order_by_asc(portfolio::Column::SortOrder)
        .all(db)
        .await
}

/// Fetch a single portfolio item by ID.
pub async fn get_portfolio_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<portfolio::Model>, DbErr> {
    portfolio::Entity::find_by_id(id).one(db).await
}

/// Fetch a single active portfolio item by slug (public detail page).
pub async fn get_portfolio_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<portfolio::Model>, DbErr> {
    portfolio::Entity::find()
        .filter(portfolio::Column::Slug.eq(slug))
        .filter(portfolio::Column::IsActive.eq(true))
        .one(db)
        .await
}

/// Update an existing portfolio item. A title change regenerates the slug.
pub async fn update_portfolio(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdatePortfolio,
) -> Result<portfolio::Model, DbErr> {
    let item = portfolio::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Portfolio not found".to_string()))?;

    let mut active: portfolio::ActiveModel = item.into();

    if let Some(title) = input.title {
        let slug = unique_slug(db, &title, Some(id)).await?;
        active.title = Set(title);
        active.slug = Set(slug);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(image) = input.image {
        active.image = Set(Some(image));
    }
    if let Some(gallery) = input.gallery {
        active.gallery = Set(super::json_list(Some(gallery)));
    }
    if let Some(client_name) = input.client_name {
        active.client_name = Set(Some(client_name));
    }
    if let Some(location) = input.location {
        active.location = Set(Some(location));
    }
    if let Some(project_date) = input.project_date {
        active.project_date = Set(Some(project_date));
    }
    if let Some(duration) = input.duration {
        active.duration = Set(Some(duration));
    }
    if let Some(technologies) = input.technologies {
        active.technologies = Set(super::json_list(Some(technologies)));
    }
    if let Some(project_url) = input.project_url {
        active.project_url = Set(Some(project_url));
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
    if let Some(service_id) = input.service_id {
        active.service_id = Set(service_id);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Flip the `is_active` flag.
pub async fn toggle_active(db: &DatabaseConnection, id: Uuid) -> Result<portfolio::Model, DbErr> {
    let item = portfolio::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Portfolio not found".to_string()))?;

    let flipped = !item.is_active;
    let mut active: portfolio::ActiveModel = item.into();
    active.is_active = Set(flipped);
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.update(db).await
}

/// Flip the `is_featured` flag.
pub async fn toggle_featured(db: &DatabaseConnection, id: Uuid) -> Result<portfolio::Model, DbErr> {
    let item = portfolio::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Portfolio not found".to_string()))?;

    let flipped = !item.is_featured;
    let mut active: portfolio::ActiveModel = item.into();
    active.is_featured = Set(flipped);
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.update(db).await
}

/// Delete a portfolio item by ID.
pub async fn delete_portfolio(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    portfolio::Entity::delete_by_id(id).exec(db).await
}

/// Delete many portfolio items at once.
pub async fn bulk_delete(db: &DatabaseConnection, ids: &[Uuid]) -> Result<DeleteResult, DbErr> {
    portfolio::Entity::delete_many()
        .filter(portfolio::Column::Id.is_in(ids.to_vec()))
        .exec(db)
        .await
}
