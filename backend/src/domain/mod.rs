//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed user record, the registry port used by
//! inbound adapters, and the in-memory service implementing it. Types here
//! stay transport agnostic; HTTP concerns live in `inbound::http`.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - User / Login / NewUser / UserPatch: user record and its inputs.
//! - InMemoryUserRegistry: process-local implementation of
//!   `ports::UserRegistry`.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_registry_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Login, NewUser, User, UserPatch, UserValidationError, age_in};
pub use self::user_registry_service::InMemoryUserRegistry;
