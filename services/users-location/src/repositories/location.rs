//! PostgreSQL location repository

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use tracing::debug;

use super::{LocationRepository, user::insert_user};
use crate::models::{Location, NewLocation, NewUser, User};

/// Location repository backed by the `locations` table
#[derive(Clone)]
pub struct PgLocationRepository {
    pool: PgPool,
}

impl PgLocationRepository {
    /// Create a new location repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert_location<'e, E>(executor: E, location: &NewLocation) -> sqlx::Result<Location>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Location>(
        r#"
        INSERT INTO locations (place, description, latitude, longitude)
        VALUES ($1, $2, $3, $4)
        RETURNING id, place, description, latitude, longitude
        "#,
    )
    .bind(&location.place)
    .bind(&location.description)
    .bind(location.latitude)
    .bind(location.longitude)
    .fetch_one(executor)
    .await
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn save(&self, location: &NewLocation) -> Result<Location> {
        debug!("Saving location: {}", location.place);

        Ok(insert_location(&self.pool, location).await?)
    }

    async fn save_with_users(
        &self,
        location: &NewLocation,
        users: &[NewUser],
    ) -> Result<(Location, Vec<User>)> {
        debug!(
            "Saving location {} with {} users",
            location.place,
            users.len()
        );

        // Dropping the transaction on an early return rolls it back.
        let mut tx = self.pool.begin().await?;

        let location = insert_location(&mut *tx, location).await?;
        let mut saved = Vec::with_capacity(users.len());
        for user in users {
            saved.push(insert_user(&mut *tx, user, location.id).await?);
        }

        tx.commit().await?;
        Ok((location, saved))
    }
}
