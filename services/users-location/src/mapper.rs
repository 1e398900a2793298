//! Entity to view mapping

use thiserror::Error;

use crate::models::{UserLocationView, UserWithLocation};

/// Raised when a stored user cannot be projected into a view
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// The user's `location_id` does not resolve to a location
    #[error("user {user_id} has no location")]
    MissingLocation { user_id: i64 },
}

/// Flatten a user and its location into a [`UserLocationView`]
pub fn to_view(record: &UserWithLocation) -> Result<UserLocationView, MappingError> {
    let user = &record.user;
    let location = record
        .location
        .as_ref()
        .ok_or(MappingError::MissingLocation { user_id: user.id })?;

    Ok(UserLocationView {
        user_id: user.id,
        email: user.email.clone(),
        place: location.place.clone(),
        longitude: location.longitude,
        latitude: location.latitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Location, User};

    fn record(location: Option<Location>) -> UserWithLocation {
        UserWithLocation {
            user: User {
                id: 3,
                first_name: "Elton".to_string(),
                last_name: "John".to_string(),
                email: "john@elton.com".to_string(),
                password: "s3cr3t".to_string(),
                location_id: 1,
            },
            location,
        }
    }

    fn st_petersburg() -> Location {
        Location {
            id: 1,
            place: "St Petersburg".to_string(),
            description: "St Petersburg is  a great place to live".to_string(),
            latitude: 30.6,
            longitude: 40.5,
        }
    }

    #[test]
    fn test_to_view_copies_user_and_location_fields() {
        let view = to_view(&record(Some(st_petersburg()))).unwrap();

        assert_eq!(view.user_id, 3);
        assert_eq!(view.email, "john@elton.com");
        assert_eq!(view.place, "St Petersburg");
        assert_eq!(view.latitude, 30.6);
        assert_eq!(view.longitude, 40.5);
    }

    #[test]
    fn test_to_view_is_repeatable() {
        let input = record(Some(st_petersburg()));

        let first = to_view(&input).unwrap();
        let second = to_view(&input).unwrap();

        assert_eq!(first, second);
        assert_eq!(input, record(Some(st_petersburg())));
    }

    #[test]
    fn test_to_view_without_location_fails() {
        let err = to_view(&record(None)).unwrap_err();
        assert_eq!(err, MappingError::MissingLocation { user_id: 3 });
    }
}
