use mediasort_core::{models::User, AppError};
use sqlx::{PgPool, Postgres};

/// Repository for reading asset owners
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get a user by ID, failing with `NotFound` if there is none
    #[tracing::instrument(
        skip(self),
        fields(db.table = "users", db.operation = "select", db.record_id = %id)
    )]
    pub async fn fetch_user(&self, id: &str) -> Result<User, AppError> {
        // Comparing as text keeps ids opaque (uuid or text columns alike) at the cost of
        // the primary-key index; only the first lookup per owner reaches this query.
        let user = sqlx::query_as::<Postgres, User>(
            "SELECT id::text AS id, name FROM public.users WHERE id::text = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or_else(|| AppError::NotFound(format!("user {}", id)))
    }
}
