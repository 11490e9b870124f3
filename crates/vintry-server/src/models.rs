//! Database row models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vintry_common::WineType;

/// One stored wine observation.
///
/// Identity and timestamps are assigned by the database; measurement fields
/// are nullable (the loader stores NULL for empty or unparseable values).
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Wine {
    pub id: i32,
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
