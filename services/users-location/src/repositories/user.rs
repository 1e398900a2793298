//! PostgreSQL user repository

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool, Row, postgres::PgRow};
use tracing::debug;

use super::UserRepository;
use crate::models::{Location, NewUser, User, UserWithLocation};

// LEFT JOIN so a dangling location_id still yields the user row.
const SELECT_USER_WITH_LOCATION: &str = r#"
    SELECT u.id, u.first_name, u.last_name, u.email, u.password, u.location_id,
           l.id AS joined_location_id, l.place, l.description, l.latitude, l.longitude
    FROM users u
    LEFT JOIN locations l ON l.id = u.location_id
"#;

/// User repository backed by the `users` table
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn user_with_location(row: &PgRow) -> Result<UserWithLocation, sqlx::Error> {
    let user = User {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        password: row.try_get("password")?,
        location_id: row.try_get("location_id")?,
    };

    let location = match row.try_get::<Option<i64>, _>("joined_location_id")? {
        Some(id) => Some(Location {
            id,
            place: row.try_get("place")?,
            description: row.try_get("description")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
        }),
        None => None,
    };

    Ok(UserWithLocation { user, location })
}

pub(super) async fn insert_user<'e, E>(
    executor: E,
    user: &NewUser,
    location_id: i64,
) -> sqlx::Result<User>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (first_name, last_name, email, password, location_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, first_name, last_name, email, password, location_id
        "#,
    )
    .bind(&user.first_name)
    .bind(&user.last_name)
    .bind(&user.email)
    .bind(&user.password)
    .bind(location_id)
    .fetch_one(executor)
    .await
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn save(&self, user: &NewUser, location_id: i64) -> Result<User> {
        debug!("Saving user: {}", user.email);

        Ok(insert_user(&self.pool, user, location_id).await?)
    }

    async fn find_all(&self) -> Result<Vec<UserWithLocation>> {
        let rows = sqlx::query(&format!("{SELECT_USER_WITH_LOCATION} ORDER BY u.id"))
            .fetch_all(&self.pool)
            .await?;

        let users = rows
            .iter()
            .map(user_with_location)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserWithLocation>> {
        debug!("Finding user by ID: {}", id);

        let row = sqlx::query(&format!("{SELECT_USER_WITH_LOCATION} WHERE u.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(user_with_location).transpose()?)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
