//! In-memory implementation of the [`UserRegistry`] port.
//!
//! The registry owns the only copy of every record. A single `RwLock` guards
//! the collection so each operation observes and mutates it atomically:
//! duplicate detection and insertion happen under one write guard, as do
//! lookup and mutation for updates and deletes.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Datelike;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, error, info};

use crate::domain::ports::UserRegistry;
use crate::domain::{Error, Login, NewUser, User, UserPatch, age_in};

/// Process-local user registry backed by an insertion-ordered `Vec`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use user_registry::domain::InMemoryUserRegistry;
///
/// let registry = InMemoryUserRegistry::new(Arc::new(DefaultClock));
/// # let _ = registry;
/// ```
pub struct InMemoryUserRegistry {
    users: RwLock<Vec<User>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserRegistry {
    /// Create an empty registry deriving ages from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            clock,
        }
    }

    fn age_for(&self, birth_year: i32) -> Result<i32, Error> {
        let current_year = self.clock.local().year();
        age_in(current_year, birth_year).map_err(Error::from)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, Error> {
        self.users.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, Error> {
        self.users.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> Error {
    error!("user registry lock poisoned");
    Error::internal("user registry lock poisoned")
}

fn position(users: &[User], login: &Login) -> Option<usize> {
    users.iter().position(|user| user.login() == login)
}

fn not_found(login: &Login) -> Error {
    debug!(login = %login, "user not found");
    Error::not_found("user not found").with_details(json!({ "login": login.as_ref() }))
}

#[async_trait]
impl UserRegistry for InMemoryUserRegistry {
    async fn add(&self, user: NewUser) -> Result<User, Error> {
        let NewUser {
            login,
            name,
            surname,
            birth_year,
        } = user;

        let mut users = self.write()?;
        if position(&users, &login).is_some() {
            debug!(login = %login, "duplicate login rejected");
            return Err(
                Error::duplicate_key("a user with this login already exists")
                    .with_details(json!({ "login": login.as_ref() })),
            );
        }
        let age = self.age_for(birth_year)?;

        let record = User::new(login, name, surname, age);
        users.push(record.clone());
        info!(login = %record.login(), age, "user registered");
        Ok(record)
    }

    async fn get(&self, login: &Login) -> Result<User, Error> {
        let users = self.read()?;
        position(&users, login)
            .and_then(|index| users.get(index))
            .cloned()
            .ok_or_else(|| not_found(login))
    }

    async fn update(&self, login: &Login, patch: UserPatch) -> Result<User, Error> {
        if patch.is_empty() {
            debug!(login = %login, "empty patch leaves record untouched");
            return self.get(login).await;
        }
        let UserPatch {
            name,
            surname,
            birth_year,
        } = patch;
        let age = birth_year.map(|year| self.age_for(year)).transpose()?;

        let mut users = self.write()?;
        let record = position(&users, login)
            .and_then(|index| users.get_mut(index))
            .ok_or_else(|| not_found(login))?;
        record.apply(name, surname, age);
        info!(login = %login, "user updated");
        Ok(record.clone())
    }

    async fn delete(&self, login: &Login) -> Result<Login, Error> {
        let mut users = self.write()?;
        let index = position(&users, login).ok_or_else(|| not_found(login))?;
        let removed = users.remove(index);
        info!(login = %login, remaining = users.len(), "user deleted");
        Ok(removed.login().clone())
    }

    async fn list(&self) -> Result<Vec<User>, Error> {
        Ok(self.read()?.clone())
    }
}
