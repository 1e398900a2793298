//! Table definitions for the users-location service

use common::error::{DatabaseError, DatabaseResult};
use sqlx::PgPool;
use tracing::info;

const CREATE_LOCATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS locations (
        id BIGSERIAL PRIMARY KEY,
        place TEXT NOT NULL,
        description TEXT NOT NULL,
        latitude DOUBLE PRECISION NOT NULL,
        longitude DOUBLE PRECISION NOT NULL
    )
"#;

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        password TEXT NOT NULL,
        location_id BIGINT NOT NULL REFERENCES locations (id)
    )
"#;

/// Create the `locations` and `users` tables if they are missing
pub async fn ensure_schema(pool: &PgPool) -> DatabaseResult<()> {
    for statement in [CREATE_LOCATIONS, CREATE_USERS] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(DatabaseError::Schema)?;
    }

    info!("Database schema ready");
    Ok(())
}
