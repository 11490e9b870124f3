//! Feature modules implementing the Vintry API
//!
//! Each feature is a vertical slice with its own commands (write path),
//! queries (read path), and route wiring.

pub mod wines;

use axum::Router;
use sqlx::PgPool;

/// Creates the API router with all feature routes mounted
pub fn router(db: PgPool) -> Router<()> {
    Router::new().nest("/wines", wines::wines_routes().with_state(db))
}
