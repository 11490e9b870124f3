//! Get wine query

use sqlx::PgPool;

use crate::models::Wine;

/// Query for a single wine record by id
#[derive(Debug, Clone)]
pub struct GetWineQuery {
    pub id: i32,
}

/// Errors that can occur when fetching a wine record
#[derive(Debug, thiserror::Error)]
pub enum GetWineError {
    #[error("Wine with id {0} not found")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handles the get wine query
#[tracing::instrument(skip(pool), fields(id = query.id))]
pub async fn handle(pool: PgPool, query: GetWineQuery) -> Result<Wine, GetWineError> {
    sqlx::query_as::<_, Wine>("SELECT * FROM wines WHERE id = $1")
        .bind(query.id)
        .fetch_optional(&pool)
        .await?
        .ok_or(GetWineError::NotFound(query.id))
}
