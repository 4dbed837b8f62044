//! Color Scheme Repository
//!
//! A scheme is one `color_schemes` row plus its `color_scheme_colors`
//! rows, kept in insertion order. Creates and updates are validated in
//! full before anything is written, inside a single transaction.

use super::{RepoError, RepoResult};
use crate::utils::validation::validate_color_scheme;
use shared::ErrorCode;
use shared::models::{
    BASE_SCHEME_ID, BuiltinPalette, ColorInput, ColorScheme, ColorSchemeColor, ColorSchemeParams,
    base_palette, builtin_palette,
};
use sqlx::{SqliteConnection, SqlitePool};
use std::collections::{HashMap, HashSet};

#[derive(Debug, sqlx::FromRow)]
struct SchemeRow {
    id: i64,
    name: String,
    base_scheme_id: Option<String>,
    user_selectable: bool,
}

#[derive(Debug, sqlx::FromRow)]
struct ColorRow {
    color_scheme_id: i64,
    name: String,
    hex: String,
}

fn palette_of(base_scheme_id: Option<&str>) -> &'static BuiltinPalette {
    base_scheme_id
        .and_then(builtin_palette)
        .unwrap_or_else(base_palette)
}

fn to_model(row: SchemeRow, colors: Vec<ColorRow>) -> ColorScheme {
    let palette = palette_of(row.base_scheme_id.as_deref());
    ColorScheme {
        id: Some(row.id),
        name: row.name,
        is_base: false,
        base_scheme_id: row.base_scheme_id,
        user_selectable: row.user_selectable,
        colors: colors
            .into_iter()
            .map(|c| ColorSchemeColor {
                default_hex: palette.hex_for(&c.name).map(str::to_string),
                name: c.name,
                hex: c.hex,
            })
            .collect(),
    }
}

/// All stored schemes, in creation order
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ColorScheme>> {
    let rows = sqlx::query_as::<_, SchemeRow>(
        "SELECT id, name, base_scheme_id, user_selectable FROM color_schemes ORDER BY created_at, id",
    )
    .fetch_all(pool)
    .await?;

    let colors = sqlx::query_as::<_, ColorRow>(
        "SELECT color_scheme_id, name, hex FROM color_scheme_colors ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let mut by_scheme: HashMap<i64, Vec<ColorRow>> = HashMap::new();
    for color in colors {
        by_scheme.entry(color.color_scheme_id).or_default().push(color);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let colors = by_scheme.remove(&row.id).unwrap_or_default();
            to_model(row, colors)
        })
        .collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ColorScheme>> {
    let mut conn = pool.acquire().await?;
    load(&mut conn, id).await
}

/// Number of stored schemes
pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM color_schemes")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

async fn load(conn: &mut SqliteConnection, id: i64) -> RepoResult<Option<ColorScheme>> {
    let row = sqlx::query_as::<_, SchemeRow>(
        "SELECT id, name, base_scheme_id, user_selectable FROM color_schemes WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    let colors = sqlx::query_as::<_, ColorRow>(
        "SELECT color_scheme_id, name, hex FROM color_scheme_colors WHERE color_scheme_id = ? ORDER BY id",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(Some(to_model(row, colors)))
}

async fn name_taken(
    conn: &mut SqliteConnection,
    name: &str,
    except_id: Option<i64>,
) -> RepoResult<bool> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM color_schemes WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(matches!(existing, Some(id) if Some(id) != except_id))
}

fn check_unique_color_names(errors: &mut Vec<String>, inputs: &[ColorInput]) {
    let mut seen = HashSet::new();
    for input in inputs {
        if !seen.insert(input.name.as_str()) {
            errors.push(format!("Color '{}' is listed more than once", input.name));
        }
    }
}

const NAME_TAKEN: &str = "Name has already been taken";

fn unknown_base_scheme(id: &str) -> RepoError {
    RepoError::Rejected(
        ErrorCode::BaseSchemeNotFound,
        vec![format!("Base scheme '{id}' does not exist")],
    )
}

/// Merge submitted colors into `colors` by name: existing names get the new
/// hex, unknown names are appended.
fn merge_colors(colors: &mut Vec<ColorSchemeColor>, inputs: &[ColorInput]) {
    for input in inputs {
        match colors.iter_mut().find(|c| c.name == input.name) {
            Some(existing) => existing.hex = input.hex.clone(),
            None => colors.push(ColorSchemeColor {
                name: input.name.clone(),
                hex: input.hex.clone(),
                default_hex: None,
            }),
        }
    }
}

async fn insert_colors(
    conn: &mut SqliteConnection,
    scheme_id: i64,
    colors: &[ColorSchemeColor],
) -> RepoResult<()> {
    for color in colors {
        sqlx::query(
            "INSERT INTO color_scheme_colors (color_scheme_id, name, hex) VALUES (?1, ?2, ?3)
             ON CONFLICT (color_scheme_id, name) DO UPDATE SET hex = excluded.hex",
        )
        .bind(scheme_id)
        .bind(&color.name)
        .bind(&color.hex)
        .execute(&mut *conn)
        .await?;
    }
    Ok(())
}

/// Create a scheme, seeding every color the base palette defines
///
/// Submitted colors override the palette's hex by name; names the palette
/// does not know are appended after the palette colors.
pub async fn create(pool: &SqlitePool, params: ColorSchemeParams) -> RepoResult<ColorScheme> {
    let name = params.name.unwrap_or_default();
    let base_scheme_id = params
        .base_scheme_id
        .unwrap_or_else(|| BASE_SCHEME_ID.to_string());

    let palette = builtin_palette(&base_scheme_id)
        .ok_or_else(|| unknown_base_scheme(&base_scheme_id))?;

    let mut colors: Vec<ColorSchemeColor> = palette
        .colors
        .iter()
        .map(|(n, hex)| ColorSchemeColor {
            name: n.to_string(),
            hex: hex.to_string(),
            default_hex: None,
        })
        .collect();
    merge_colors(&mut colors, &params.colors);

    let mut errors = validate_color_scheme(&name, &colors);
    check_unique_color_names(&mut errors, &params.colors);
    if !errors.is_empty() {
        return Err(RepoError::Validation(errors));
    }

    let mut tx = pool.begin().await?;
    if name_taken(&mut tx, &name, None).await? {
        return Err(RepoError::Duplicate(NAME_TAKEN.to_string()));
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO color_schemes (id, name, base_scheme_id, user_selectable, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
    )
    .bind(id)
    .bind(&name)
    .bind(&base_scheme_id)
    .bind(params.user_selectable.unwrap_or(false))
    .bind(now)
    .execute(&mut *tx)
    .await?;

    insert_colors(&mut tx, id, &colors).await?;

    let scheme = load(&mut tx, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create color scheme".into()))?;
    tx.commit().await?;

    tracing::info!(id = id, name = %scheme.name, "Color scheme created");
    Ok(scheme)
}

/// Update a scheme, merging colors by name
///
/// The merged result is validated before the first write; on any failure
/// the transaction is dropped and the stored scheme is left untouched.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    params: ColorSchemeParams,
) -> RepoResult<ColorScheme> {
    let mut tx = pool.begin().await?;

    let current = load(&mut tx, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Color scheme {id} not found")))?;

    let name = params.name.unwrap_or(current.name);
    let base_scheme_id = match params.base_scheme_id {
        Some(base) if builtin_palette(&base).is_none() => {
            return Err(unknown_base_scheme(&base));
        }
        Some(base) => Some(base),
        None => current.base_scheme_id,
    };
    let user_selectable = params.user_selectable.unwrap_or(current.user_selectable);

    let mut colors = current.colors;
    merge_colors(&mut colors, &params.colors);

    let mut errors = validate_color_scheme(&name, &colors);
    check_unique_color_names(&mut errors, &params.colors);
    if !errors.is_empty() {
        tracing::debug!(id = id, ?errors, "Color scheme update rejected");
        return Err(RepoError::Validation(errors));
    }
    if name_taken(&mut tx, &name, Some(id)).await? {
        return Err(RepoError::Duplicate(NAME_TAKEN.to_string()));
    }

    sqlx::query(
        "UPDATE color_schemes SET name = ?1, base_scheme_id = ?2, user_selectable = ?3, updated_at = ?4 WHERE id = ?5",
    )
    .bind(&name)
    .bind(&base_scheme_id)
    .bind(user_selectable)
    .bind(shared::util::now_millis())
    .bind(id)
    .execute(&mut *tx)
    .await?;

    insert_colors(&mut tx, id, &colors).await?;

    let scheme = load(&mut tx, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to update color scheme".into()))?;
    tx.commit().await?;

    tracing::info!(id = id, name = %scheme.name, "Color scheme updated");
    Ok(scheme)
}

/// Delete a scheme and its colors
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM color_scheme_colors WHERE color_scheme_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    let rows = sqlx::query("DELETE FROM color_schemes WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Color scheme {id} not found")));
    }

    tx.commit().await?;
    tracing::info!(id = id, "Color scheme deleted");
    Ok(())
}
