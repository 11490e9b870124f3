//! Vintry Ingest Library
//!
//! One-shot CSV-to-database loader for the wine quality dataset.
//!
//! The pipeline has three stages:
//!
//! - [`record`]: normalizes one raw delimited row into a [`record::WineRecord`]
//! - [`reader`]: streams a `;`-delimited file and collects validated records
//! - [`loader`]: truncates prior data, reads both source files concurrently,
//!   and performs a single transactional bulk insert
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use vintry_ingest::loader::{self, LoaderConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = LoaderConfig::from_env()?;
//!     let inserted = loader::run(
//!         &config,
//!         Path::new("./data/winequality-red.csv"),
//!         Path::new("./data/winequality-white.csv"),
//!     )
//!     .await?;
//!     println!("loaded {} records", inserted);
//!     Ok(())
//! }
//! ```

pub mod loader;
pub mod reader;
pub mod record;

pub use loader::{LoadError, LoaderConfig};
pub use record::WineRecord;
