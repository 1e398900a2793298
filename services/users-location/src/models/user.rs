//! User entity and its joined form

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Location;

/// User entity, stored in the `users` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    // Plain text, as loaded by the seed fixture. Never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    pub location_id: i64,
}

/// New user creation payload; the location is chosen at insert time
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// A user together with the location its `location_id` points at.
///
/// `location` is `None` when the referenced row does not exist, which the
/// mapper reports as a data-integrity fault.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithLocation {
    pub user: User,
    pub location: Option<Location>,
}
