//! Create wine command

use serde::Deserialize;
use sqlx::PgPool;
use vintry_common::types::{quality_in_range, QUALITY_MAX, QUALITY_MIN};
use vintry_common::WineType;

use crate::models::Wine;

/// Command to create a new wine record.
///
/// Identity and timestamps are assigned by the database; all measurement
/// fields are optional and stored as NULL when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWineCommand {
    pub wine_type: WineType,
    pub fixed_acidity: Option<f64>,
    pub volatile_acidity: Option<f64>,
    pub citric_acid: Option<f64>,
    pub residual_sugar: Option<f64>,
    pub chlorides: Option<f64>,
    pub free_sulfur_dioxide: Option<f64>,
    pub total_sulfur_dioxide: Option<f64>,
    pub density: Option<f64>,
    pub ph: Option<f64>,
    pub sulphates: Option<f64>,
    pub alcohol: Option<f64>,
    pub quality: i16,
}

/// Errors that can occur when creating a wine record
#[derive(Debug, thiserror::Error)]
pub enum CreateWineError {
    #[error("Quality must be between {QUALITY_MIN} and {QUALITY_MAX}")]
    QualityOutOfRange,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CreateWineCommand {
    pub fn validate(&self) -> Result<(), CreateWineError> {
        if !quality_in_range(self.quality) {
            return Err(CreateWineError::QualityOutOfRange);
        }
        Ok(())
    }
}

/// Handles the create wine command
#[tracing::instrument(skip(pool, command), fields(wine_type = %command.wine_type))]
pub async fn handle(pool: PgPool, command: CreateWineCommand) -> Result<Wine, CreateWineError> {
    command.validate()?;

    let wine = sqlx::query_as::<_, Wine>(
        r#"
        INSERT INTO wines (
            wine_type, fixed_acidity, volatile_acidity, citric_acid, residual_sugar,
            chlorides, free_sulfur_dioxide, total_sulfur_dioxide, density, ph,
            sulphates, alcohol, quality
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING *
        "#,
    )
    .bind(command.wine_type)
    .bind(command.fixed_acidity)
    .bind(command.volatile_acidity)
    .bind(command.citric_acid)
    .bind(command.residual_sugar)
    .bind(command.chlorides)
    .bind(command.free_sulfur_dioxide)
    .bind(command.total_sulfur_dioxide)
    .bind(command.density)
    .bind(command.ph)
    .bind(command.sulphates)
    .bind(command.alcohol)
    .bind(command.quality)
    .fetch_one(&pool)
    .await?;

    Ok(wine)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(quality: i16) -> CreateWineCommand {
        CreateWineCommand {
            wine_type: WineType::Red,
            fixed_acidity: Some(7.4),
            volatile_acidity: Some(0.7),
            citric_acid: Some(0.0),
            residual_sugar: Some(1.9),
            chlorides: Some(0.076),
            free_sulfur_dioxide: Some(11.0),
            total_sulfur_dioxide: Some(34.0),
            density: Some(0.9978),
            ph: Some(3.51),
            sulphates: Some(0.56),
            alcohol: Some(9.4),
            quality,
        }
    }

    #[test]
    fn test_validation_accepts_bounds() {
        assert!(command(0).validate().is_ok());
        assert!(command(10).validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_out_of_range_quality() {
        assert!(matches!(
            command(11).validate(),
            Err(CreateWineError::QualityOutOfRange)
        ));
        assert!(matches!(
            command(-1).validate(),
            Err(CreateWineError::QualityOutOfRange)
        ));
    }
}
