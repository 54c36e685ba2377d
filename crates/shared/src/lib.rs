//! Shared types, errors, and configuration for Estratosfera.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management
//! - Session token (JWT) handling

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtError, JwtService};
