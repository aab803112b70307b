//! Test helpers: a throwaway Postgres with the tables the sorter reads.
//!
//! Needs a Docker daemon. Run with `cargo test -p mediasort-db --test repository_test`.

use std::time::Duration;

use mediasort_core::DatabaseConfig;
use mediasort_db::connect_options;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::runners::AsyncRunner;
use testcontainers::ContainerAsync;
use testcontainers_modules::postgres::Postgres;

pub const JANE_ID: &str = "7f3c2a1e-5b4d-4c6e-9f8a-1b2c3d4e5f60";
pub const BOB_ID: &str = "0a9b8c7d-6e5f-4a3b-8c2d-1e0f9a8b7c6d";

/// Layout of the asset catalogue, including columns the sorter ignores
const CATALOGUE_SQL: &str = r#"
CREATE TYPE assets_type_enum AS ENUM ('IMAGE', 'VIDEO', 'AUDIO', 'OTHER');

CREATE TABLE users (
    id uuid PRIMARY KEY,
    email varchar NOT NULL DEFAULT '',
    name varchar NOT NULL
);

CREATE TABLE assets (
    "deviceAssetId" varchar NOT NULL DEFAULT '',
    "ownerId" uuid NOT NULL REFERENCES users (id),
    "type" assets_type_enum NOT NULL,
    "originalPath" varchar NOT NULL,
    "fileCreatedAt" timestamptz NOT NULL,
    "originalFileName" varchar NOT NULL
);
"#;

/// Isolated database; the container lives as long as this value.
pub struct TestDb {
    pub config: DatabaseConfig,
    pub pool: PgPool,
    pub _container: ContainerAsync<Postgres>,
}

/// Start Postgres and create the `users` and `assets` tables.
pub async fn setup_test_db() -> TestDb {
    let container = Postgres::default()
        .start()
        .await
        .expect("Failed to start postgres container");

    let config = DatabaseConfig {
        user: "postgres".to_string(),
        password: "postgres".to_string(),
        host: container.get_host().await.unwrap().to_string(),
        port: container.get_host_port_ipv4(5432).await.unwrap(),
        name: "postgres".to_string(),
    };

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .connect_with(connect_options(&config))
        .await
        .expect("Failed to connect to test database");

    sqlx::raw_sql(CATALOGUE_SQL)
        .execute(&pool)
        .await
        .expect("Failed to create catalogue tables");

    TestDb {
        config,
        pool,
        _container: container,
    }
}

pub async fn insert_user(pool: &PgPool, id: &str, name: &str) {
    sqlx::query("INSERT INTO users (id, name) VALUES ($1::uuid, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to insert user");
}

pub async fn insert_asset(
    pool: &PgPool,
    owner_id: &str,
    asset_type: &str,
    original_path: &str,
    file_created_at: &str,
) {
    let file_name = original_path.rsplit('/').next().unwrap_or(original_path);
    sqlx::query(
        r#"
        INSERT INTO assets ("ownerId", "type", "originalPath", "fileCreatedAt", "originalFileName")
        VALUES ($1::uuid, $2::assets_type_enum, $3, $4::timestamptz, $5)
        "#,
    )
    .bind(owner_id)
    .bind(asset_type)
    .bind(original_path)
    .bind(file_created_at)
    .bind(file_name)
    .execute(pool)
    .await
    .expect("Failed to insert asset");
}
