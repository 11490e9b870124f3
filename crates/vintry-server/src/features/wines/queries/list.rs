//! List wines query

use serde::Deserialize;
use sqlx::PgPool;

use crate::api::response::PaginationMeta;
use crate::models::Wine;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 1000;

/// Query for a paginated wine listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListWinesQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug)]
pub struct ListWinesResponse {
    pub items: Vec<Wine>,
    pub pagination: PaginationMeta,
}

/// Errors that can occur when listing wine records
#[derive(Debug, thiserror::Error)]
pub enum ListWinesError {
    #[error("Page must be greater than 0")]
    InvalidPage,
    #[error("Limit must be between 1 and {MAX_LIMIT}")]
    InvalidLimit,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ListWinesQuery {
    pub fn validate(&self) -> Result<(), ListWinesError> {
        if let Some(page) = self.page {
            if page < 1 {
                return Err(ListWinesError::InvalidPage);
            }
        }
        if let Some(limit) = self.limit {
            if !(1..=MAX_LIMIT).contains(&limit) {
                return Err(ListWinesError::InvalidLimit);
            }
        }
        Ok(())
    }

    fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

/// Handles the list wines query
#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: ListWinesQuery,
) -> Result<ListWinesResponse, ListWinesError> {
    query.validate()?;

    let page = query.page();
    let limit = query.limit();
    let offset = (page - 1) * limit;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM wines")
        .fetch_one(&pool)
        .await?;

    let items = sqlx::query_as::<_, Wine>(
        "SELECT * FROM wines ORDER BY id ASC LIMIT $1 OFFSET $2",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(&pool)
    .await?;

    Ok(ListWinesResponse {
        items,
        pagination: PaginationMeta::new(page, limit, total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_defaults() {
        let query = ListWinesQuery::default();
        assert!(query.validate().is_ok());
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_validation_invalid_page() {
        let query = ListWinesQuery {
            page: Some(0),
            limit: None,
        };
        assert!(matches!(query.validate(), Err(ListWinesError::InvalidPage)));
    }

    #[test]
    fn test_validation_invalid_limit() {
        let query = ListWinesQuery {
            page: Some(1),
            limit: Some(0),
        };
        assert!(matches!(query.validate(), Err(ListWinesError::InvalidLimit)));

        let query = ListWinesQuery {
            page: Some(1),
            limit: Some(MAX_LIMIT + 1),
        };
        assert!(matches!(query.validate(), Err(ListWinesError::InvalidLimit)));
    }
}
