use sea_orm::*;
use uuid::Uuid;

use crate::models::visitor_logs::{self, VisitorLogListQuery};
use crate::tracking::agent::AgentInfo;
use crate::tracking::geo::GeoInfo;
use crate::tracking::VisitMeta;

/// Append a visitor log row. Geo fields are absent for private IPs or
/// failed lookups.
pub async fn insert_log(
    db: &DatabaseConnection,
    meta: &VisitMeta,
    agent: &AgentInfo,
    geo: Option<&GeoInfo>,
) -> Result<visitor_logs::Model, DbErr> {
    let new_log = visitor_logs::ActiveModel {
        id: Set(Uuid::new_v4()),
        ip_address: Set(meta.ip.clone()),
        user_agent: Set(meta.user_agent.clone()),
        url: Set(meta.url.clone()),
        method: Set(meta.method.clone()),
        referrer: Set(meta.referrer.clone()),
        country: Set(geo.and_then(|g| g.country.clone())),
        city: Set(geo.and_then(|g| g.city.clone())),
        region: Set(geo.and_then(|g| g.region.clone())),
        latitude: Set(geo.and_then(|g| g.lat)),
        longitude: Set(geo.and_then(|g| g.lon)),
        device: Set(Some(agent.device.clone())),
        browser: Set(Some(agent.browser.clone())),
        platform: Set(Some(agent.platform.clone())),
        visited_at: Set(chrono::Utc::now()),
    };

    new_log.insert(db).await
}

/// Paginated admin listing, newest first.
pub async fn list_logs(
    db: &DatabaseConnection,
    q: &VisitorLogListQuery,
) -> Result<(Vec<visitor_logs::Model>, u64), DbErr> {
    let mut query = visitor_logs::Entity::find();

    if let Some(country) = q.country.as_deref().filter(|c| !c.is_empty()) {
        query = query.filter(visitor_logs::Column::Country.eq(country));
    }

    let paginator = query
        .order_by_desc(visitor_logs::Column::VisitedAt)
        .paginate(db, q.per_page());
    let total = paginator.num_items().await?;
    let data = paginator.fetch_page(q.page() - 1).await?;
    Ok((data, total))
}
