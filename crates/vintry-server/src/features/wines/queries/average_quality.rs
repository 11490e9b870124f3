//! Average quality query
//!
//! Delegates the aggregation to the database-side routine
//! `calculate_average_quality(min_alcohol)`.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Query for the average quality of wines at or above an alcohol level
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AverageQualityQuery {
    pub min_alcohol: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AverageQualityResponse {
    pub average_quality: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Errors that can occur when computing the average quality
#[derive(Debug, thiserror::Error)]
pub enum AverageQualityError {
    #[error("min_alcohol must be a finite number")]
    InvalidMinAlcohol,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AverageQualityQuery {
    pub fn validate(&self) -> Result<(), AverageQualityError> {
        if let Some(min_alcohol) = self.min_alcohol {
            if !min_alcohol.is_finite() {
                return Err(AverageQualityError::InvalidMinAlcohol);
            }
        }
        Ok(())
    }

    fn min_alcohol(&self) -> f64 {
        self.min_alcohol.unwrap_or(0.0)
    }
}

/// Handles the average quality query
#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: AverageQualityQuery,
) -> Result<AverageQualityResponse, AverageQualityError> {
    query.validate()?;

    let average: Option<f64> =
        sqlx::query_scalar("SELECT calculate_average_quality($1) AS average_quality")
            .bind(query.min_alcohol())
            .fetch_one(&pool)
            .await?;

    Ok(match average {
        Some(value) => AverageQualityResponse {
            average_quality: Some((value * 100.0).round() / 100.0),
            message: None,
        },
        None => AverageQualityResponse {
            average_quality: None,
            message: Some("No wines found matching the criteria.".to_string()),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_accepts_defaults() {
        let query = AverageQualityQuery::default();
        assert!(query.validate().is_ok());
        assert_eq!(query.min_alcohol(), 0.0);
    }

    #[test]
    fn test_validation_rejects_non_finite() {
        let query = AverageQualityQuery {
            min_alcohol: Some(f64::NAN),
        };
        assert!(matches!(
            query.validate(),
            Err(AverageQualityError::InvalidMinAlcohol)
        ));

        let query = AverageQualityQuery {
            min_alcohol: Some(f64::INFINITY),
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_response_serializes_null_average_with_message() {
        let response = AverageQualityResponse {
            average_quality: None,
            message: Some("No wines found matching the criteria.".to_string()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["average_quality"].is_null());
        assert!(json["message"].is_string());
    }
}
