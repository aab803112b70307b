use mediasort_core::{models::Asset, AppError};
use sqlx::{PgPool, Postgres};

/// Repository for reading asset records
#[derive(Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Every asset, ordered by creation time (oldest first)
    #[tracing::instrument(skip(self), fields(db.table = "assets", db.operation = "select"))]
    pub async fn fetch_assets(&self) -> Result<Vec<Asset>, AppError> {
        let assets = sqlx::query_as::<Postgres, Asset>(
            r#"
            SELECT
                "fileCreatedAt"::timestamptz AS file_created_at,
                "originalPath" AS original_path,
                "originalFileName" AS original_file_name,
                "type"::text AS asset_type,
                "ownerId"::text AS owner_id
            FROM public.assets
            ORDER BY "fileCreatedAt" ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::info!(count = assets.len(), "Fetched assets");
        Ok(assets)
    }
}
