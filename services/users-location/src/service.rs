//! Query service combining the user repository with the view mapper

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::{
    mapper::{MappingError, to_view},
    models::UserLocationView,
    repositories::UserRepository,
};

/// Errors returned by [`UserLocationService`]
#[derive(Error, Debug)]
pub enum ServiceError {
    /// No user with the requested id
    #[error("user {0} not found")]
    NotFound(i64),

    /// A stored user could not be mapped
    #[error("data integrity error: {0}")]
    DataIntegrity(#[from] MappingError),

    /// The repository failed
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Read-only access to user/location views
pub struct UserLocationService {
    users: Arc<dyn UserRepository>,
}

impl UserLocationService {
    /// Create a new service over the given user repository
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Map every stored user, keeping repository order
    pub async fn list_all_views(&self) -> Result<Vec<UserLocationView>, ServiceError> {
        let records = self.users.find_all().await?;
        debug!(count = records.len(), "Mapping users to views");

        let views = records
            .iter()
            .map(to_view)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(views)
    }

    /// Map a single user, failing with [`ServiceError::NotFound`] for unknown ids
    pub async fn get_view_by_id(&self, id: i64) -> Result<UserLocationView, ServiceError> {
        let record = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;

        Ok(to_view(&record)?)
    }
}
