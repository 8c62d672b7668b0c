//! Shared types and errors for Kontor.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe record references
//! - Application-wide error types

pub mod error;
pub mod types;

pub use error::{AppError, AppResult};
