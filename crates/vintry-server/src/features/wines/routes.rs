//! Wine API routes
//!
//! Wires the commands and queries to axum HTTP handlers.
//!
//! # Route Structure
//!
//! - `GET /api/wines` - List wines with pagination
//! - `GET /api/wines/:id` - Get a single wine by id
//! - `POST /api/wines` - Create a new wine record
//! - `PUT /api/wines/:id` - Partially update a wine record
//! - `DELETE /api/wines/:id` - Delete a wine record
//! - `GET /api/wines/stats/average-quality` - Average quality at or above a
//!   minimum alcohol level (database stored function)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;

use crate::api::response::{ApiResponse, ErrorResponse};

use super::commands::{
    self, CreateWineCommand, CreateWineError, DeleteWineCommand, DeleteWineError,
    UpdateWineCommand, UpdateWineError,
};
use super::queries::{
    self, AverageQualityError, AverageQualityQuery, GetWineError, GetWineQuery, ListWinesError,
    ListWinesQuery,
};

/// Creates the wines router with all routes configured
pub fn wines_routes() -> Router<PgPool> {
    Router::new()
        .route("/", get(list_wines).post(create_wine))
        .route("/stats/average-quality", get(average_quality))
        .route(
            "/:id",
            get(get_wine).put(update_wine).delete(delete_wine),
        )
}

/// List wines with pagination
///
/// `GET /api/wines?page=1&limit=100`
#[tracing::instrument(skip(pool, query), fields(page = ?query.page, limit = ?query.limit))]
async fn list_wines(
    State(pool): State<PgPool>,
    Query(query): Query<ListWinesQuery>,
) -> Result<Response, WinesApiError> {
    let response = queries::list::handle(pool, query).await?;

    tracing::debug!(
        count = response.items.len(),
        total = response.pagination.total,
        "Wines listed via API"
    );

    let meta = json!({ "pagination": response.pagination });
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_meta(response.items, meta)),
    )
        .into_response())
}

/// Get a single wine by id
///
/// `GET /api/wines/:id`
#[tracing::instrument(skip(pool))]
async fn get_wine(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<Response, WinesApiError> {
    let wine = queries::get::handle(pool, GetWineQuery { id }).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(wine))).into_response())
}

/// Create a new wine record
///
/// `POST /api/wines`
#[tracing::instrument(skip(pool, command), fields(wine_type = %command.wine_type))]
async fn create_wine(
    State(pool): State<PgPool>,
    Json(command): Json<CreateWineCommand>,
) -> Result<Response, WinesApiError> {
    let wine = commands::create::handle(pool, command).await?;

    tracing::info!(id = wine.id, "Wine created via API");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(wine))).into_response())
}

/// Partially update an existing wine record
///
/// `PUT /api/wines/:id`
#[tracing::instrument(skip(pool, command))]
async fn update_wine(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(mut command): Json<UpdateWineCommand>,
) -> Result<Response, WinesApiError> {
    // Set id from path parameter
    command.id = id;

    let wine = commands::update::handle(pool, command).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(wine))).into_response())
}

/// Delete a wine record
///
/// `DELETE /api/wines/:id`
#[tracing::instrument(skip(pool))]
async fn delete_wine(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<Response, WinesApiError> {
    commands::delete::handle(pool, DeleteWineCommand { id }).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Average quality for wines at or above a minimum alcohol level
///
/// `GET /api/wines/stats/average-quality?min_alcohol=10.5`
#[tracing::instrument(skip(pool, query), fields(min_alcohol = ?query.min_alcohol))]
async fn average_quality(
    State(pool): State<PgPool>,
    Query(query): Query<AverageQualityQuery>,
) -> Result<Response, WinesApiError> {
    let response = queries::average_quality::handle(pool, query).await?;
    Ok((StatusCode::OK, Json(ApiResponse::success(response))).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for wine API endpoints
#[derive(Debug, thiserror::Error)]
enum WinesApiError {
    #[error(transparent)]
    Create(#[from] CreateWineError),
    #[error(transparent)]
    Update(#[from] UpdateWineError),
    #[error(transparent)]
    Delete(#[from] DeleteWineError),
    #[error(transparent)]
    Get(#[from] GetWineError),
    #[error(transparent)]
    List(#[from] ListWinesError),
    #[error(transparent)]
    AverageQuality(#[from] AverageQualityError),
}

impl WinesApiError {
    /// HTTP status and machine-readable code for each failure class.
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            WinesApiError::Create(CreateWineError::QualityOutOfRange)
            | WinesApiError::Update(UpdateWineError::QualityOutOfRange)
            | WinesApiError::Update(UpdateWineError::NoFieldsToUpdate)
            | WinesApiError::List(ListWinesError::InvalidPage)
            | WinesApiError::List(ListWinesError::InvalidLimit)
            | WinesApiError::AverageQuality(AverageQualityError::InvalidMinAlcohol) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            },
            WinesApiError::Update(UpdateWineError::NotFound(_))
            | WinesApiError::Delete(DeleteWineError::NotFound(_))
            | WinesApiError::Get(GetWineError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            },
            WinesApiError::Create(CreateWineError::Database(_))
            | WinesApiError::Update(UpdateWineError::Database(_))
            | WinesApiError::Delete(DeleteWineError::Database(_))
            | WinesApiError::Get(GetWineError::Database(_))
            | WinesApiError::List(ListWinesError::Database(_))
            | WinesApiError::AverageQuality(AverageQualityError::Database(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            },
        }
    }
}

impl IntoResponse for WinesApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Database error in wines API: {}", self);
            "A database error occurred".to_string()
        } else {
            self.to_string()
        };

        let error = ErrorResponse::new(code, message);
        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_structure() {
        let router = wines_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }

    #[test]
    fn test_not_found_classifies_as_404() {
        let err = WinesApiError::Get(GetWineError::NotFound(7));
        let (status, code) = err.classify();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "NOT_FOUND");
    }

    #[test]
    fn test_validation_classifies_as_400() {
        let err = WinesApiError::Create(CreateWineError::QualityOutOfRange);
        let (status, code) = err.classify();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "VALIDATION_ERROR");
    }
}
