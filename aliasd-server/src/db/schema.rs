//! Startup schema for the aliases table

use sqlx::PgPool;

/// Create the `aliases` table and its unique name index if they are missing.
///
/// Safe to run against a database where both already exist. The index is
/// created separately so tables from deployments that predate it gain the
/// constraint; this fails if such a table already holds duplicate names.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring aliases schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS aliases (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            text TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS aliases_name_key ON aliases (name)")
        .execute(pool)
        .await?;

    tracing::info!("Aliases schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ensure_schema_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        ensure_schema(&pool).await.expect("first run failed");
        ensure_schema(&pool).await.expect("second run failed");

        let (exists,): (bool,) = sqlx::query_as("SELECT to_regclass('aliases') IS NOT NULL")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert!(exists);
    }
}
