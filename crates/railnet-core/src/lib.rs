//! railnet core: shared errors, name normalization, geodesy and province names.
//!
//! This crate provides the foundational types used across all railnet crates.
//! It has no internal railnet dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`names`]: Station name normalization for matching track endpoints
//! - [`geo`]: Great-circle distances and nearest-point search
//! - [`provinces`]: English province code to Chinese name table

pub mod error;
pub mod geo;
pub mod names;
pub mod provinces;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use geo::{Coordinates, haversine_km, nearest};
pub use names::normalize_name;
pub use provinces::{chinese_name, display_name};
