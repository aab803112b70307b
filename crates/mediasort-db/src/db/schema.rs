//! Schema contract for the tables the sorter reads
//!
//! Instead of reflecting table layouts, the records declare the columns they
//! need and the contract is checked once at connect time.

use std::collections::HashSet;

use mediasort_core::AppError;
use sqlx::PgPool;

pub const SCHEMA: &str = "public";
pub const ASSETS_TABLE: &str = "assets";
pub const USERS_TABLE: &str = "users";

/// Columns read from `assets`
pub const ASSET_COLUMNS: &[&str] = &[
    "fileCreatedAt",
    "originalPath",
    "originalFileName",
    "type",
    "ownerId",
];

/// Columns read from `users`
pub const USER_COLUMNS: &[&str] = &["id", "name"];

/// Required `table.column` names absent from `present`.
pub fn missing_columns(present: &[(String, String)]) -> Vec<String> {
    let present: HashSet<(&str, &str)> = present
        .iter()
        .map(|(table, column)| (table.as_str(), column.as_str()))
        .collect();

    [(ASSETS_TABLE, ASSET_COLUMNS), (USERS_TABLE, USER_COLUMNS)]
        .into_iter()
        .flat_map(|(table, columns)| columns.iter().map(move |column| (table, *column)))
        .filter(|key| !present.contains(key))
        .map(|(table, column)| format!("{}.{}", table, column))
        .collect()
}

/// Fail with `AppError::Schema` listing every required column that is missing
#[tracing::instrument(skip(pool), fields(db.schema = SCHEMA))]
pub async fn verify_schema(pool: &PgPool) -> Result<(), AppError> {
    let present = sqlx::query_as::<_, (String, String)>(
        r#"
        SELECT table_name::text, column_name::text
        FROM information_schema.columns
        WHERE table_schema::text = $1 AND table_name::text = ANY($2)
        "#,
    )
    .bind(SCHEMA)
    .bind(vec![ASSETS_TABLE.to_string(), USERS_TABLE.to_string()])
    .fetch_all(pool)
    .await?;

    let missing = missing_columns(&present);
    if !missing.is_empty() {
        return Err(AppError::Schema(format!(
            "missing columns in schema '{}': {}",
            SCHEMA,
            missing.join(", ")
        )));
    }

    tracing::debug!(columns = present.len(), "Schema contract satisfied");
    Ok(())
}
