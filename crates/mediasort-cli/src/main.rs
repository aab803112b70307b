//! mediasort: copy media assets from the asset database into
//! `<type root>/<owner>/<YYYY-MM>/` folders.
//!
//! Takes no arguments. Settings are read from the environment (or `.env`):
//! DBUSER, DBPASS, DBHOST, DBPORT, DBNAME, BASE_TARGET_PATH_IMAGES,
//! BASE_TARGET_PATH_VIDEOS and SOURCE_BASE_PATH.

use std::sync::Arc;

use anyhow::Context;
use mediasort_cli::init_tracing;
use mediasort_core::SorterConfig;
use mediasort_db::{AssetRepository, UserRepository};
use mediasort_services::AssetSorter;
use mediasort_storage::LocalStorage;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SorterConfig::from_env().context("Invalid configuration")?;

    let pool = mediasort_db::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    let mut sorter = AssetSorter::from_config(
        &config,
        Arc::new(AssetRepository::new(pool.clone())),
        Arc::new(UserRepository::new(pool.clone())),
        Arc::new(LocalStorage::new()),
    );

    let summary = sorter.run().await.context("Sorting run aborted")?;
    if summary.failures() > 0 {
        tracing::warn!(
            failures = summary.failures(),
            "Some assets could not be copied; they will be retried on the next run"
        );
    }

    pool.close().await;
    Ok(())
}
