//! Account-service API client for the lectern platform.
//!
//! The navigation core treats the backend as an opaque collaborator: any
//! stable call that returns a bearer token, a position label, and an
//! expiry-in-seconds integer at login will do. This crate provides that
//! call surface (the [`AuthApi`] trait) and an HTTP implementation
//! against the platform's account-service gateway.

mod client;
mod error;
mod types;

pub use client::{AccountServiceClient, AuthApi};
pub use error::ApiError;
pub use types::{LoginRequest, LoginResponse, RolePosition};
