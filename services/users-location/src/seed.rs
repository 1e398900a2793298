//! Demo fixture loaded at startup

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

use crate::{
    models::{NewLocation, NewUser},
    repositories::{LocationRepository, UserRepository},
};

/// When the startup fixture is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedMode {
    /// Insert on every start, duplicating rows on restart
    Always,
    /// Insert only when no user exists yet
    #[default]
    IfEmpty,
    /// Never insert
    Never,
}

/// Result of a [`seed`] run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { location_id: i64, user_ids: Vec<i64> },
    Skipped,
}

fn fixture_location() -> NewLocation {
    NewLocation {
        place: "St Petersburg".to_string(),
        description: "St Petersburg is  a great place to live".to_string(),
        latitude: 30.6,
        longitude: 40.5,
    }
}

fn fixture_users() -> [NewUser; 2] {
    [
        NewUser {
            first_name: "Paul".to_string(),
            last_name: "Ryan".to_string(),
            email: "paul@ryan.com".to_string(),
            password: "secret".to_string(),
        },
        NewUser {
            first_name: "Elton".to_string(),
            last_name: "John".to_string(),
            email: "john@elton.com".to_string(),
            password: "s3cr3t".to_string(),
        },
    ]
}

/// Insert one location and two users referencing it, according to `mode`
pub async fn seed(
    mode: SeedMode,
    locations: &dyn LocationRepository,
    users: &dyn UserRepository,
) -> Result<SeedOutcome> {
    let should_seed = match mode {
        SeedMode::Always => true,
        SeedMode::IfEmpty => users.count().await? == 0,
        SeedMode::Never => false,
    };

    if !should_seed {
        debug!(?mode, "Seed condition not met");
        return Ok(SeedOutcome::Skipped);
    }

    // One call so a failed user insert leaves no location behind.
    let (location, saved) = locations
        .save_with_users(&fixture_location(), &fixture_users())
        .await?;

    Ok(SeedOutcome::Seeded {
        location_id: location.id,
        user_ids: saved.iter().map(|user| user.id).collect(),
    })
}
