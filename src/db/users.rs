use sea_orm::*;
use uuid::Uuid;

use crate::models::users::{self, CreateUser, UpdateUser, UserListQuery};

/// Insert a new back-office user. `password` must already be a bcrypt hash.
pub async fn insert_user(
    db: &DatabaseConnection,
    input: CreateUser,
    password_hash: String,
) -> Result<users::Model, DbErr> {
    let new_user = users::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        username: Set(input.username),
        email: Set(input.email),
        password: Set(password_hash),
        phone: Set(input.phone),
        role: Set(input.role),
        photo: Set(input.photo),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_user.insert(db).await
}

/// Paginated admin listing with search and role filter.
pub async fn list_users(
    db: &DatabaseConnection,
    q: &UserListQuery,
) -> Result<(Vec<users::Model>, u64), DbErr> {
    let mut query = users::Entity::find();

    if let Some(search) = q.search.as_deref().filter(|s| !s.is_empty()) {
        query = query.filter(
            Condition::any()
                .add(users::Column::Name.contains(search))
                .add(users::Column::Username.contains(search))
                .add(users::Column::Email.contains(search)),
        );
    }
    if let Some(role) = q.role {
        query = query.filter(users::Column::Role.eq(role));
    }

    let paginator = query
        .order_by_asc(users::Column::Name)
        .paginate(db, q.per_page());
    let total = paginator.num_items().await?;
    let data = paginator.fetch_page(q.page() - 1).await?;
    Ok((data, total))
}

/// All users, for the public team page.
pub async fn get_all_users(db: &DatabaseConnection) -> Result<Vec<users::Model>, DbErr> {
    users::Entity::find()
        .order_by_asc(users::Column::Name)
        .all(db)
        .await
}

/// Fetch a single user by ID.
pub async fn get_user_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Fetch a user by username or email, for login.
pub async fn get_user_by_identifier(
    db: &DatabaseConnection,
    identifier: &str,
) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find()
        .filter(
            Condition::any()
                .add(users::Column::Username.eq(identifier))
                .add(users::Column::Email.eq(identifier)),
        )
        .one(db)
        .await
}

/// Update an existing user. `password_hash` is the new bcrypt hash when the
/// caller wants a password change.
pub async fn update_user(
    db: &DatabaseConnection,
    id: Uuid,
    input: UpdateUser,
    password_hash: Option<String>,
) -> Result<users::Model, DbErr> {
    let user = users::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("User not found".to_string()))?;

    let mut active: users::ActiveModel = user.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(username) = input.username {
        active.username = Set(username);
    }
    if let Some(email) = input.email {
        active.email = Set(email);
    }
    if let Some(hash) = password_hash {
        active.password = Set(hash);
    }
    if let Some(phone) = input.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(role) = input.role {
        active.role = Set(role);
    }
    if let Some(photo) = input.photo {
        active.photo = Set(Some(photo));
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Delete a user by ID. Authored berita cascade in the database.
pub async fn delete_user(db: &DatabaseConnection, id: Uuid) -> Result<DeleteResult, DbErr> {
    users::Entity::delete_by_id(id).exec(db).await
}

/// Delete many users at once.
pub async fn bulk_delete(db: &DatabaseConnection, ids: &[Uuid]) -> Result<DeleteResult, DbErr> {
    users::Entity::delete_many()
        .filter(users::Column::Id.is_in(ids.to_vec()))
        .exec(db)
        .await
}
