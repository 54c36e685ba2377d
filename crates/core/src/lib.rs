//! Core business logic for Estratosfera.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies.
//!
//! # Modules
//!
//! - `auth` - Password hashing for the admin account
//! - `cleaner` - Client display-name normalization rules

pub mod auth;
pub mod cleaner;
