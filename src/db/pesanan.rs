use sea_orm::sea_query::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::pesanan::{self, CreatePesanan, PesananListQuery, Status, UpdatePesanan};

/// Build a human-readable pesanan code: `PSN-YYYYMMDD-XXXX`.
fn generate_code(now: chrono::DateTime<chrono::Utc>) -> String {
    let suffix: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(4)
        .collect::<String>()
        .to_uppercase();
    format!("PSN-{}-{}", now.format("%Y%m%d"), suffix)
}

/// Find a code not yet taken. Collisions on the 4-char suffix are unlikely
/// but cheap to check.
async fn unique_code(db: &DatabaseConnection) -> Result<String, DbErr> {
    let now = chrono::Utc::now();
    loop {
        let candidate = generate_code(now);
        let taken = pesanan::Entity::find()
            .filter(pesanan::Column::Code.eq(&candidate))
            .one(db)
            .await?
            .is_some();
        if !taken {
            return Ok(candidate);
        }
    }
}

/// Insert a new pesanan in `Pending` with a generated code.
pub async fn insert_pesanan(
    db: &DatabaseConnection,
    input: CreatePesanan,
) -> Result<pesanan::Model, DbErr> {
    let code = unique_code(db).await?;

    let new_pesanan = pesanan::ActiveModel {
        id: Set(Uuid::new_v4()),
        code: Set(code),
        customer_name: Set(input.customer_name),
        customer_email: Set(input.customer_email),
        customer_phone: Set(input.customer_phone),
        description: Set(input.description),
        due_date: Set(input.due_date),
        status: Set(Status::Pending),
        service_id: Set(input.service_id),
        deleted_at: Set(None),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_pesanan.insert(db).await
}

/// Paginated admin listing. Soft-deleted rows are always excluded.
pub async fn list_pesanan(
    db: &DatabaseConnection,
    q: &PesananListQuery,
) -> Result<(Vec<pesanan::Model>, u64), DbErr> {
    let mut query = pesanan::Entity::find().filter(pesanan::Column::DeletedAt.is_null());

    if let Some(search) = q.search.as_deref().filter(|s| !s.is_empty()) {
        query = query.filter(
            Condition::any()
                .add(pesanan::Column::Code.contains(search))
                .add(pesanan::Column::CustomerName.contains(search))
                .add(pesanan::Column::CustomerEmail.contains(search)),
        );
    }
    if let Some(status) = q.status {
        query = query.filter(pesanan::Column::Status.eq(status));
    }
    if let Some(service_id) = q.service_id {
        query = query.filter(pesanan::Column::ServiceId.eq(service_id));
    }

    let paginator = query
        .order_by_desc(pesanan::Column::CreatedAt)
        .paginate(db, q.per_page());
    let total = paginator.num_items().await?;
    let data = paginator.fetch_page(q.page() - 1).await?;
    Ok((data, total))
}

/// Fetch a single live pesanan by ID.
pub async fn get_pesanan_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<pesanan::Model>, DbErr> {
    pesanan::Entity::find_by_id(id)
        .filter(pesanan::Column::DeletedAt.is_null())
        .one(db)
        .await
}

/// Update pesanan customer fields. Status changes go through
/// `update_status` so transition legality stays in one place.
pub async fn update_pesanan(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdatePesanan,
) -> Result<pesanan::Model, DbErr> {
    let row = get_pesanan_by_id(db, id)
        .await?
        .ok_or(DbErr::RecordNotFound("Pesanan not found".to_string()))?;

    let mut active: pesanan::ActiveModel = row.into();

    if let Some(customer_name) = input.customer_name {
        active.customer_name = Set(customer_name);
    }
    if let Some(customer_email) = input.customer_email {
        active.customer_email = Set(customer_email);
    }
    if let Some(customer_phone) = input.customer_phone {
        active.customer_phone = Set(Some(customer_phone));
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(due_date) = input.due_date {
        active.due_date = Set(Some(due_date));
    }
    if let Some(service_id) = input.service_id {
        active.service_id = Set(service_id);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Set the status of a pesanan. Legality is checked by the caller against
/// the current row.
pub async fn update_status(
    db: &DatabaseConnection,
    row: pesanan::Model,
    status: Status,
) -> Result<pesanan::Model, DbErr> {
    let mut active: pesanan::ActiveModel = row.into();
    active.status = Set(status);
    active.updated_at = Set(Some(chrono::Utc::now()));
    active.update(db).await
}

/// Soft-delete a pesanan by stamping `deleted_at`.
pub async fn soft_delete(db: &DatabaseConnection, id: Uuid) -> Result<pesanan::Model, DbErr> {
    let row = get_pesanan_by_id(db, id)
        .await?
        .ok_or(DbErr::RecordNotFound("Pesanan not found".to_string()))?;

    let mut active: pesanan::ActiveModel = row.into();
    active.deleted_at = Set(Some(chrono::Utc::now()));
    active.update(db).await
}

/// Soft-delete many pesanan at once. Returns the number of rows stamped.
pub async fn bulk_soft_delete(db: &DatabaseConnection, ids: &[Uuid]) -> Result<u64, DbErr> {
    let result = pesanan::Entity::update_many()
        .col_expr(pesanan::Column::DeletedAt, Expr::value(chrono::Utc::now()))
        .filter(pesanan::Column::Id.is_in(ids.to_vec()))
        .filter(pesanan::Column::DeletedAt.is_null())
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::generate_code;

    #[test]
    fn code_has_the_documented_shape() {
        let now = "2026-08-30T10:00:00Z".parse().unwrap();
        let code = generate_code(now);

        let parts: Vec<&str> = code.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "PSN");
        assert_eq!(parts[1], "20260830");
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn codes_differ_between_calls() {
        let now = chrono::Utc::now();
        assert_ne!(generate_code(now), generate_code(now));
    }
}
