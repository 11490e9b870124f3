//! Vintry Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the Vintry project.
//!
//! # Overview
//!
//! This crate provides common functionality used across all Vintry workspace
//! members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Types**: Shared domain types (wine type, quality bounds)
//! - **Logging**: Centralized tracing initialization
//!
//! # Example
//!
//! ```no_run
//! use vintry_common::types::WineType;
//!
//! let tag = WineType::Red;
//! println!("Loading {} wines", tag);
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{Result, VintryError};
pub use types::WineType;
