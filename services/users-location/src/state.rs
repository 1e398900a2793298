//! Application state shared across handlers

use std::sync::Arc;

use crate::service::UserLocationService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_location_service: Arc<UserLocationService>,
}

impl AppState {
    pub fn new(user_location_service: UserLocationService) -> Self {
        Self {
            user_location_service: Arc::new(user_location_service),
        }
    }
}
