//! User Field Repository

use super::{RepoError, RepoResult};
use crate::utils::validation::validate_user_field;
use shared::ErrorCode;
use shared::models::{FieldType, MAX_USER_FIELDS, UserField, UserFieldCreate, UserFieldUpdate};
use sqlx::{SqliteConnection, SqlitePool};

const SELECT_FIELDS: &str = "SELECT id, name, description, field_type, editable, required, show_on_profile, show_on_user_card, searchable, position, options FROM user_fields";

#[derive(Debug, sqlx::FromRow)]
struct UserFieldRow {
    id: i64,
    name: String,
    description: String,
    field_type: String,
    editable: bool,
    required: bool,
    show_on_profile: bool,
    show_on_user_card: bool,
    searchable: bool,
    position: i32,
    options: String,
}

impl TryFrom<UserFieldRow> for UserField {
    type Error = RepoError;

    fn try_from(row: UserFieldRow) -> Result<Self, Self::Error> {
        let field_type: FieldType = row.field_type.parse().map_err(RepoError::Database)?;
        Ok(UserField {
            id: Some(row.id),
            name: row.name,
            description: row.description,
            field_type,
            editable: row.editable,
            required: row.required,
            show_on_profile: row.show_on_profile,
            show_on_user_card: row.show_on_user_card,
            searchable: row.searchable,
            position: row.position,
            options: serde_json::from_str(&row.options)?,
        })
    }
}

/// All fields, ordered by position (ties by id)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<UserField>> {
    let rows = sqlx::query_as::<_, UserFieldRow>(&format!("{SELECT_FIELDS} ORDER BY position, id"))
        .fetch_all(pool)
        .await?;
    rows.into_iter().map(UserField::try_from).collect()
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<UserField>> {
    let mut conn = pool.acquire().await?;
    load(&mut conn, id).await
}

async fn load(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<UserField>> {
    let row = sqlx::query_as::<_, UserFieldRow>(&format!("{SELECT_FIELDS} WHERE id = ?"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    row.map(UserField::try_from).transpose()
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_fields")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

fn reject_invalid(field: &UserField) -> RepoResult<()> {
    let errors = validate_user_field(field);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(RepoError::Validation(errors))
    }
}

/// Create a field; without a position it is placed after the last one
///
/// Refused with [`ErrorCode::UserFieldLimitReached`] once
/// [`MAX_USER_FIELDS`] fields exist. The count check is part of the insert
/// statement, so concurrent creates cannot overshoot the limit.
pub async fn create(pool: &SqlitePool, data: UserFieldCreate) -> RepoResult<UserField> {
    let mut tx = pool.begin().await?;

    let position = match data.position {
        Some(p) => p,
        None => {
            let max: Option<i32> = sqlx::query_scalar("SELECT MAX(position) FROM user_fields")
                .fetch_one(&mut *tx)
                .await?;
            max.map_or(1, |m| m + 1)
        }
    };

    let field = UserField {
        id: None,
        name: data.name,
        description: data.description,
        field_type: data.field_type,
        editable: data.editable,
        required: data.required,
        show_on_profile: data.show_on_profile,
        show_on_user_card: data.show_on_user_card,
        searchable: data.searchable,
        position,
        options: data.options,
    };
    reject_invalid(&field)?;

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    let inserted = sqlx::query(
        "INSERT INTO user_fields (id, name, description, field_type, editable, required, show_on_profile, show_on_user_card, searchable, position, options, created_at, updated_at)
         SELECT ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?12
         WHERE (SELECT COUNT(*) FROM user_fields) < ?13",
    )
    .bind(id)
    .bind(&field.name)
    .bind(&field.description)
    .bind(field.field_type.as_str())
    .bind(field.editable)
    .bind(field.required)
    .bind(field.show_on_profile)
    .bind(field.show_on_user_card)
    .bind(field.searchable)
    .bind(field.position)
    .bind(serde_json::to_string(&field.options)?)
    .bind(now)
    .bind(MAX_USER_FIELDS as i64)
    .execute(&mut *tx)
    .await?;

    if inserted.rows_affected() == 0 {
        tracing::debug!(max = MAX_USER_FIELDS, "User field limit reached");
        return Err(RepoError::Rejected(
            ErrorCode::UserFieldLimitReached,
            vec![format!("You can only have {MAX_USER_FIELDS} user fields")],
        ));
    }

    let created = load(&mut tx, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user field".into()))?;
    tx.commit().await?;

    tracing::info!(id = id, name = %created.name, position = created.position, "User field created");
    Ok(created)
}

/// Apply a partial update and write the whole row back
pub async fn update(pool: &SqlitePool, id: i64, data: UserFieldUpdate) -> RepoResult<UserField> {
    let mut field = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User field {id} not found")))?;
    field.apply(&data);
    reject_invalid(&field)?;

    let rows = sqlx::query(
        "UPDATE user_fields SET name = ?1, description = ?2, field_type = ?3, editable = ?4, required = ?5, show_on_profile = ?6, show_on_user_card = ?7, searchable = ?8, position = ?9, options = ?10, updated_at = ?11 WHERE id = ?12",
    )
    .bind(&field.name)
    .bind(&field.description)
    .bind(field.field_type.as_str())
    .bind(field.editable)
    .bind(field.required)
    .bind(field.show_on_profile)
    .bind(field.show_on_user_card)
    .bind(field.searchable)
    .bind(field.position)
    .bind(serde_json::to_string(&field.options)?)
    .bind(shared::util::now_millis())
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User field {id} not found")));
    }

    tracing::debug!(id = id, position = field.position, "User field updated");
    Ok(field)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM user_fields WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User field {id} not found")));
    }
    tracing::info!(id = id, "User field deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    fn create_data(name: &str) -> UserFieldCreate {
        UserFieldCreate {
            name: name.to_string(),
            description: String::new(),
            field_type: FieldType::Text,
            editable: true,
            required: false,
            show_on_profile: true,
            show_on_user_card: false,
            searchable: false,
            position: None,
            options: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_create_appends_after_last_position() {
        let pool = test_pool().await;
        let first = create(&pool, create_data("Pronouns")).await.unwrap();
        let second = create(&pool, create_data("Company")).await.unwrap();

        assert_eq!(first.position, 1);
        assert_eq!(second.position, 2);
        assert!(first.editable);
        assert!(!first.required);
    }

    #[tokio::test]
    async fn test_find_all_orders_by_position() {
        let pool = test_pool().await;
        let mut late = create_data("Late");
        late.position = Some(9);
        create(&pool, late).await.unwrap();
        let mut early = create_data("Early");
        early.position = Some(3);
        create(&pool, early).await.unwrap();

        let names: Vec<_> = find_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["Early", "Late"]);
    }

    #[tokio::test]
    async fn test_options_round_trip_through_json_column() {
        let pool = test_pool().await;
        let mut data = create_data("Shirt size");
        data.field_type = FieldType::Dropdown;
        data.options = vec!["S".into(), "M".into(), "L".into()];

        let field = create(&pool, data).await.unwrap();
        let loaded = find_by_id(&pool, field.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(loaded.field_type, FieldType::Dropdown);
        assert_eq!(loaded.options, vec!["S", "M", "L"]);
    }

    #[tokio::test]
    async fn test_invalid_create_is_rejected() {
        let pool = test_pool().await;
        let err = create(&pool, create_data("")).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        assert_eq!(count(&pool).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_refused_at_limit() {
        let pool = test_pool().await;
        for i in 0..MAX_USER_FIELDS {
            create(&pool, create_data(&format!("Field {i}"))).await.unwrap();
        }

        let err = create(&pool, create_data("One too many")).await.unwrap_err();
        assert!(matches!(err, RepoError::Rejected(ErrorCode::UserFieldLimitReached, _)));
        assert_eq!(count(&pool).await.unwrap(), MAX_USER_FIELDS as i64);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_stop_at_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fields.db");
        let pool = DbService::new(path.to_str().unwrap()).await.unwrap().pool;

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..MAX_USER_FIELDS + 10 {
            let pool = pool.clone();
            let mut data = create_data(&format!("Field {i}"));
            data.position = Some(i as i32);
            tasks.spawn(async move { create(&pool, data).await });
        }

        let mut created = 0;
        let mut refused = 0;
        while let Some(result) = tasks.join_next().await {
            match result.unwrap() {
                Ok(_) => created += 1,
                Err(RepoError::Rejected(ErrorCode::UserFieldLimitReached, _)) => refused += 1,
                Err(other) => panic!("unexpected error: {other:?}"),
            }
        }

        assert_eq!(created, MAX_USER_FIELDS);
        assert_eq!(refused, 10);
        assert_eq!(count(&pool).await.unwrap(), MAX_USER_FIELDS as i64);
    }

    #[tokio::test]
    async fn test_update_position_only() {
        let pool = test_pool().await;
        let field = create(&pool, create_data("Pronouns")).await.unwrap();
        let id = field.id.unwrap();

        let updated = update(&pool, id, UserFieldUpdate::position(7)).await.unwrap();
        assert_eq!(updated.position, 7);
        assert_eq!(updated.name, "Pronouns");

        let err = update(&pool, id + 1, UserFieldUpdate::position(1))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = test_pool().await;
        let field = create(&pool, create_data("Pronouns")).await.unwrap();
        delete(&pool, field.id.unwrap()).await.unwrap();
        assert_eq!(count(&pool).await.unwrap(), 0);
        assert!(matches!(
            delete(&pool, field.id.unwrap()).await.unwrap_err(),
            RepoError::NotFound(_)
        ));
    }
}
