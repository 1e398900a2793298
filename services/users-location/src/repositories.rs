//! Repositories for database operations

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{Location, NewLocation, NewUser, User, UserWithLocation};

pub mod location;
#[cfg(test)]
pub mod memory;
pub mod user;

pub use location::PgLocationRepository;
pub use user::PgUserRepository;

/// Storage operations for locations
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Insert a location and return it with its assigned id
    async fn save(&self, location: &NewLocation) -> Result<Location>;

    /// Insert a location and users referencing it, all or nothing
    async fn save_with_users(
        &self,
        location: &NewLocation,
        users: &[NewUser],
    ) -> Result<(Location, Vec<User>)>;
}

/// Storage operations for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user living at `location_id` and return it with its assigned id
    async fn save(&self, user: &NewUser, location_id: i64) -> Result<User>;

    /// Get all users joined to their locations, ordered by user id
    async fn find_all(&self) -> Result<Vec<UserWithLocation>>;

    /// Find a user, joined to its location, by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<UserWithLocation>>;

    /// Number of stored users
    async fn count(&self) -> Result<i64>;
}
