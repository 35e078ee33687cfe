//! SkillHire Core
//!
//! Core types shared by the SkillHire client crates.
//!
//! This crate contains:
//! - Domain types: backend resources (repositories, profiles, assessments, etc.)
//! - DTOs: request and response bodies exchanged with the REST API

pub mod domain;
pub mod dto;
