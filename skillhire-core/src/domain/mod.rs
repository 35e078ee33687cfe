//! Core domain types
//!
//! These types mirror the resources served by the SkillHire backend. They are
//! read-only from the client's point of view: the backend owns every state
//! transition, the client only observes.

pub mod assessment;
pub mod employer;
pub mod id;
pub mod profile;
pub mod repository;
pub mod user;

pub use id::ResourceId;
pub use repository::{AnalysisStatus, LinkedRepository, TrackedJob};
