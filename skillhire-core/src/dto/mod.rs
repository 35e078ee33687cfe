//! Data Transfer Objects for the REST API
//!
//! Request and response bodies exchanged with the backend. Domain entities
//! that the backend returns as-is live in `crate::domain`.

pub mod assessment;
pub mod auth;
pub mod employer;
pub mod github;
pub mod repository;
