//! Update wine command
//!
//! Partial update: only fields present in the request body change; others
//! keep their stored values. The existing row is fetched first and merged
//! with the patch into one fixed parameterized UPDATE, so no SQL fragment
//! is ever built from request field names.

use serde::Deserialize;
use sqlx::PgPool;
use vintry_common::types::{quality_in_range, QUALITY_MAX, QUALITY_MIN};
use vintry_common::WineType;

use crate::models::Wine;

/// Patch for an existing wine record.
///
/// `id` comes from the request path, not the body. At least one other field
/// must be provided.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWineCommand {
    #[serde(skip)]
    pub id: i32,
    pub wine_type: Option<WineType>,
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
    pub quality: Option<i16>,
}

/// Errors that can occur when updating a wine record
#[derive(Debug, thiserror::Error)]
pub enum UpdateWineError {
    #[error("No fields provided for update")]
    NoFieldsToUpdate,
    #[error("Quality must be between {QUALITY_MIN} and {QUALITY_MAX}")]
    QualityOutOfRange,
    #[error("Wine with id {0} not found")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl UpdateWineCommand {
    pub fn validate(&self) -> Result<(), UpdateWineError> {
        if self.wine_type.is_none()
            && self.fixed_acidity.is_none()
            && self.volatile_acidity.is_none()
            && self.citric_acid.is_none()
            && self.residual_sugar.is_none()
            && self.chlorides.is_none()
            && self.free_sulfur_dioxide.is_none()
            && self.total_sulfur_dioxide.is_none()
            && self.density.is_none()
            && self.ph.is_none()
            && self.sulphates.is_none()
            && self.alcohol.is_none()
            && self.quality.is_none()
        {
            return Err(UpdateWineError::NoFieldsToUpdate);
        }
        if let Some(quality) = self.quality {
            if !quality_in_range(quality) {
                return Err(UpdateWineError::QualityOutOfRange);
            }
        }
        Ok(())
    }
}

/// Handles the update wine command
#[tracing::instrument(skip(pool, command), fields(id = command.id))]
pub async fn handle(pool: PgPool, command: UpdateWineCommand) -> Result<Wine, UpdateWineError> {
    command.validate()?;

    let existing = sqlx::query_as::<_, Wine>("SELECT * FROM wines WHERE id = $1")
        .bind(command.id)
        .fetch_optional(&pool)
        .await?
        .ok_or(UpdateWineError::NotFound(command.id))?;

    let wine = sqlx::query_as::<_, Wine>(
        r#"
        UPDATE wines
        SET wine_type = $2, fixed_acidity = $3, volatile_acidity = $4, citric_acid = $5,
            residual_sugar = $6, chlorides = $7, free_sulfur_dioxide = $8,
            total_sulfur_dioxide = $9, density = $10, ph = $11, sulphates = $12,
            alcohol = $13, quality = $14
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(command.id)
    .bind(command.wine_type.unwrap_or(existing.wine_type))
    .bind(command.fixed_acidity.or(existing.fixed_acidity))
    .bind(command.volatile_acidity.or(existing.volatile_acidity))
    .bind(command.citric_acid.or(existing.citric_acid))
    .bind(command.residual_sugar.or(existing.residual_sugar))
    .bind(command.chlorides.or(existing.chlorides))
    .bind(command.free_sulfur_dioxide.or(existing.free_sulfur_dioxide))
    .bind(command.total_sulfur_dioxide.or(existing.total_sulfur_dioxide))
    .bind(command.density.or(existing.density))
    .bind(command.ph.or(existing.ph))
    .bind(command.sulphates.or(existing.sulphates))
    .bind(command.alcohol.or(existing.alcohol))
    .bind(command.quality.unwrap_or(existing.quality))
    .fetch_one(&pool)
    .await?;

    tracing::info!(id = wine.id, "Wine updated");
    Ok(wine)
}
