//! Core domain types and utilities for the lectern platform client.
//!
//! This crate provides the foundational identifier types and error handling
//! shared by the session, routing, and API crates.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{AccountId, RoleId};
