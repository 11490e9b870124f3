//! Vintry Server Library
//!
//! HTTP service over the wine quality dataset.
//!
//! # Overview
//!
//! - **API Endpoints**: CRUD for wine records plus a derived statistic
//!   backed by a database stored function
//! - **Database**: PostgreSQL via SQLx, schema applied from `migrations/`
//! - **Configuration**: one [`config::Config`] built at process start
//! - **Middleware**: CORS and request tracing
//!
//! # Architecture
//!
//! Features follow a CQRS vertical-slice layout: each operation lives in its
//! own module under `features/wines/{commands,queries}` with its own
//! validation and error enum, wired to axum handlers in `routes.rs`.
//! Commands are the write path (create, update, delete); queries are the
//! read path (get, list, average quality).
//!
//! # Example
//!
//! ```no_run
//! use vintry_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod features;
pub mod middleware;
pub mod models;
