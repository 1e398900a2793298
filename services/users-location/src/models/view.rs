//! Flattened user/location projection returned by the API

use serde::{Deserialize, Serialize};

/// Response body for the `/users-location` routes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLocationView {
    pub user_id: i64,
    pub email: String,
    pub place: String,
    pub longitude: f64,
    pub latitude: f64,
}
