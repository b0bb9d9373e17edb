//! Driving port for user registry use-cases.
//!
//! Inbound adapters call this port to add, read, update, delete and list user
//! records without knowing where the records live.

use async_trait::async_trait;

use crate::domain::{Error, Login, NewUser, User, UserPatch};

/// Domain use-case port for the user registry.
///
/// Every method is an atomic unit with respect to the other methods on the
/// same implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistry: Send + Sync {
    /// Register a new user.
    ///
    /// Fails with [`crate::domain::ErrorCode::DuplicateKey`] when the login is
    /// already registered.
    async fn add(&self, user: NewUser) -> Result<User, Error>;

    /// Fetch a user by login.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn get(&self, login: &Login) -> Result<User, Error>;

    /// Overwrite the fields present in `patch` and return the updated record.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn update(&self, login: &Login, patch: UserPatch) -> Result<User, Error>;

    /// Remove a user and return the login that was deleted.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn delete(&self, login: &Login) -> Result<Login, Error>;

    /// Return every user in insertion order.
    async fn list(&self) -> Result<Vec<User>, Error>;
}
