//! # parma-core
//!
//! Core types and error types for Parma.
//!
//! This crate provides the foundational types shared across all Parma crates:
//! - Entity structs for the catalog domain (attractions, categories, reviews)
//! - The display-language selector for the bilingual fields
//!
//! Error types live with their domains: `ApiError` in `parma-api`,
//! `ConfigError` in `parma-config`.

pub mod entities;
pub mod lang;

pub use entities::{Attraction, Category, NewReview, Review};
pub use lang::Lang;
