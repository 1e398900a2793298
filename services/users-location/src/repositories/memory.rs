//! In-memory repositories for tests

use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use super::{LocationRepository, UserRepository};
use crate::models::{Location, NewLocation, NewUser, User, UserWithLocation};

#[derive(Default)]
struct Tables {
    locations: Vec<Location>,
    users: Vec<User>,
    next_id: i64,
    reject_user_emails: Vec<String>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn insert_location(&mut self, location: &NewLocation) -> Location {
        let location = Location {
            id: self.next_id(),
            place: location.place.clone(),
            description: location.description.clone(),
            latitude: location.latitude,
            longitude: location.longitude,
        };
        self.locations.push(location.clone());
        location
    }

    // Builds the row without storing it, so callers can stage several inserts.
    fn new_user(&mut self, user: &NewUser, location_id: i64) -> Result<User> {
        if !self.locations.iter().any(|l| l.id == location_id) {
            return Err(anyhow!("location {} does not exist", location_id));
        }
        if self.reject_user_emails.contains(&user.email) {
            return Err(anyhow!("insert rejected for {}", user.email));
        }
        Ok(User {
            id: self.next_id(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            location_id,
        })
    }

    fn join(&self, user: &User) -> UserWithLocation {
        UserWithLocation {
            user: user.clone(),
            location: self
                .locations
                .iter()
                .find(|location| location.id == user.location_id)
                .cloned(),
        }
    }
}

/// Shared store implementing both repositories
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    fn tables(&self) -> Result<std::sync::MutexGuard<'_, Tables>> {
        self.tables.lock().map_err(|_| anyhow!("store lock poisoned"))
    }

    /// Make every later insert of a user with `email` fail
    pub fn reject_user_email(&self, email: &str) {
        self.tables.lock().unwrap().reject_user_emails.push(email.to_string());
    }

    /// Number of stored locations
    pub fn location_count(&self) -> usize {
        self.tables.lock().unwrap().locations.len()
    }

    /// Insert a user whose `location_id` points at no location
    pub fn insert_orphan_user(&self, email: &str) -> i64 {
        let mut tables = self.tables.lock().unwrap();
        let id = tables.next_id();
        tables.users.push(User {
            id,
            first_name: "Orphan".to_string(),
            last_name: "User".to_string(),
            email: email.to_string(),
            password: String::new(),
            location_id: -1,
        });
        id
    }
}

#[async_trait]
impl LocationRepository for InMemoryStore {
    async fn save(&self, location: &NewLocation) -> Result<Location> {
        Ok(self.tables()?.insert_location(location))
    }

    async fn save_with_users(
        &self,
        location: &NewLocation,
        users: &[NewUser],
    ) -> Result<(Location, Vec<User>)> {
        let mut tables = self.tables()?;
        let saved_locations = tables.locations.len();

        let location = tables.insert_location(location);
        let mut saved = Vec::with_capacity(users.len());
        for user in users {
            match tables.new_user(user, location.id) {
                Ok(user) => saved.push(user),
                Err(e) => {
                    tables.locations.truncate(saved_locations);
                    return Err(e);
                }
            }
        }

        tables.users.extend(saved.iter().cloned());
        Ok((location, saved))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn save(&self, user: &NewUser, location_id: i64) -> Result<User> {
        let mut tables = self.tables()?;
        let user = tables.new_user(user, location_id)?;
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<UserWithLocation>> {
        let tables = self.tables()?;
        Ok(tables.users.iter().map(|user| tables.join(user)).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UserWithLocation>> {
        let tables = self.tables()?;
        Ok(tables
            .users
            .iter()
            .find(|user| user.id == id)
            .map(|user| tables.join(user)))
    }

    async fn count(&self) -> Result<i64> {
        Ok(self.tables()?.users.len() as i64)
    }
}
