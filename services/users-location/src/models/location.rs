//! Location entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Location entity, stored in the `locations` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: i64,
    pub place: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// New location creation payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLocation {
    pub place: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
}
