//! Row normalization
//!
//! Converts one raw delimited-file record into a canonical [`WineRecord`]:
//! snake_case keys, numeric coercion, null for empty values, and quality
//! validation. Pure per-row transformation; the only side effect is the
//! warning emitted for unparseable values.

use std::collections::BTreeMap;

use tracing::warn;
use vintry_common::types::{QUALITY_MAX, QUALITY_MIN};
use vintry_common::WineType;

/// One accepted observation, ready for insertion.
///
/// Measurement fields are `Option<f64>` so a source column that is empty or
/// absent is stored as NULL, never omitted. Identity and timestamps are
/// assigned by the database on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct WineRecord {
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

/// Why a normalized row was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    #[error("quality is missing or not numeric")]
    QualityMissing,
    #[error("quality {0} is not an integer in [{QUALITY_MIN}, {QUALITY_MAX}]")]
    QualityOutOfRange(f64),
}

/// A raw row after key/value normalization, before validation.
#[derive(Debug, Clone)]
pub struct NormalizedRow {
    wine_type: WineType,
    values: BTreeMap<String, Option<f64>>,
}

/// Lowercases a column header and replaces spaces with underscores.
pub fn normalize_key(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_")
}

/// Normalizes one raw record (header/value pairs) under a wine-type tag.
///
/// Empty values become `None`. A non-empty value that does not parse as a
/// finite number is recovered field-locally: a warning is emitted and the
/// field becomes `None`. The row itself is never rejected here.
pub fn normalize_row<'a, I>(fields: I, wine_type: WineType) -> NormalizedRow
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut values = BTreeMap::new();
    for (key, raw) in fields {
        let key = normalize_key(key);
        let value = if raw.is_empty() {
            None
        } else {
            match raw.parse::<f64>() {
                Ok(v) if v.is_finite() => Some(v),
                _ => {
                    warn!(
                        wine_type = %wine_type,
                        key = %key,
                        value = raw,
                        "could not parse numeric value, setting to null"
                    );
                    None
                },
            }
        };
        values.insert(key, value);
    }
    NormalizedRow { wine_type, values }
}

impl NormalizedRow {
    fn take(&mut self, key: &str) -> Option<f64> {
        self.values.remove(key).flatten()
    }

    /// Validates quality and produces the canonical record.
    ///
    /// Measurement columns absent from the source header come out as `None`,
    /// which is how missing columns are backfilled with NULL.
    pub fn into_record(mut self) -> Result<WineRecord, RowError> {
        let quality = self.take("quality").ok_or(RowError::QualityMissing)?;
        if quality.fract() != 0.0
            || quality < f64::from(QUALITY_MIN)
            || quality > f64::from(QUALITY_MAX)
        {
            return Err(RowError::QualityOutOfRange(quality));
        }

        Ok(WineRecord {
            wine_type: self.wine_type,
            fixed_acidity: self.take("fixed_acidity"),
            volatile_acidity: self.take("volatile_acidity"),
            citric_acid: self.take("citric_acid"),
            residual_sugar: self.take("residual_sugar"),
            chlorides: self.take("chlorides"),
            free_sulfur_dioxide: self.take("free_sulfur_dioxide"),
            total_sulfur_dioxide: self.take("total_sulfur_dioxide"),
            density: self.take("density"),
            ph: self.take("ph"),
            sulphates: self.take("sulphates"),
            alcohol: self.take("alcohol"),
            quality: quality as i16,
        })
    }
}
