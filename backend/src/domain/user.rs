//! User record model.
//!
//! A record is keyed by its [`Login`]. The birth year supplied on creation or
//! update is only used to derive [`User::age`] and is never stored.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Error;

/// Validation errors returned when constructing user values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The login was empty or only whitespace.
    #[error("login must not be empty")]
    EmptyLogin,
    /// The birth year lies so far from the current year that the age overflows.
    #[error("birth year {birth_year} cannot be converted to an age in {current_year}")]
    AgeOutOfRange {
        /// Birth year supplied by the caller.
        birth_year: i32,
        /// Year reported by the clock.
        current_year: i32,
    },
}

impl From<UserValidationError> for Error {
    fn from(err: UserValidationError) -> Self {
        let (field, code) = match err {
            UserValidationError::EmptyLogin => ("login", "empty_login"),
            UserValidationError::AgeOutOfRange { .. } => ("birth_year", "age_out_of_range"),
        };
        Error::invalid_request(err.to_string())
            .with_details(json!({ "field": field, "code": code }))
    }
}

/// Unique, case-sensitive user login.
///
/// # Examples
/// ```
/// use user_registry::domain::Login;
///
/// let login = Login::new("alice").expect("valid login");
/// assert_eq!(login.as_ref(), "alice");
/// assert!(Login::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Login(String);

impl Login {
    /// Validate and construct a [`Login`].
    pub fn new(login: impl Into<String>) -> Result<Self, UserValidationError> {
        let login = login.into();
        if login.trim().is_empty() {
            return Err(UserValidationError::EmptyLogin);
        }
        Ok(Self(login))
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Login> for String {
    fn from(value: Login) -> Self {
        value.0
    }
}

impl TryFrom<String> for Login {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Derive an age from a birth year relative to `current_year`.
///
/// # Examples
/// ```
/// use user_registry::domain::age_in;
///
/// assert_eq!(age_in(2024, 1990), Ok(34));
/// ```
pub fn age_in(current_year: i32, birth_year: i32) -> Result<i32, UserValidationError> {
    current_year
        .checked_sub(birth_year)
        .ok_or(UserValidationError::AgeOutOfRange {
            birth_year,
            current_year,
        })
}

/// Registered user record.
///
/// ## Invariants
/// - `login` is non-empty and never changes after creation.
/// - `age` is derived from a birth year at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    login: Login,
    name: String,
    surname: String,
    age: i32,
}

impl User {
    /// Build a record from validated components.
    #[must_use]
    pub fn new(
        login: Login,
        name: impl Into<String>,
        surname: impl Into<String>,
        age: i32,
    ) -> Self {
        Self {
            login,
            name: name.into(),
            surname: surname.into(),
            age,
        }
    }

    /// Unique login.
    #[must_use]
    pub fn login(&self) -> &Login {
        &self.login
    }

    /// Given name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Family name.
    #[must_use]
    pub fn surname(&self) -> &str {
        self.surname.as_str()
    }

    /// Age in years at the time of the last write that supplied a birth year.
    #[must_use]
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Apply a patch whose birth year has already been converted to an age.
    pub(crate) fn apply(
        &mut self,
        name: Option<String>,
        surname: Option<String>,
        age: Option<i32>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(surname) = surname {
            self.surname = surname;
        }
        if let Some(age) = age {
            self.age = age;
        }
    }
}

/// Input for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Unique login for the new record.
    pub login: Login,
    /// Given name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Birth year used to derive the stored age.
    pub birth_year: i32,
}

/// Partial update for an existing user. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// Replacement given name.
    pub name: Option<String>,
    /// Replacement family name.
    pub surname: Option<String>,
    /// Birth year used to recompute the stored age.
    pub birth_year: Option<i32>,
}

impl UserPatch {
    /// Whether the patch carries no changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.surname.is_none() && self.birth_year.is_none()
    }
}
