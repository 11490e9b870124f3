//! Common types used across Vintry

use serde::{Deserialize, Serialize};

/// Inclusive bounds for a valid quality rating.
pub const QUALITY_MIN: i16 = 0;
pub const QUALITY_MAX: i16 = 10;

/// Returns true when `quality` lies within the accepted rating range.
pub fn quality_in_range(quality: i16) -> bool {
    (QUALITY_MIN..=QUALITY_MAX).contains(&quality)
}

/// Provenance tag for a wine record.
///
/// Assigned by the loader from which source file a row came, not derived
/// from file contents. Stored as the Postgres enum `wine_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "wine_type", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum WineType {
    Red,
    White,
}

impl WineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WineType::Red => "red",
            WineType::White => "white",
        }
    }
}

impl std::fmt::Display for WineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WineType {
    type Err = crate::VintryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red" => Ok(WineType::Red),
            "white" => Ok(WineType::White),
            other => Err(crate::VintryError::Parse(format!(
                "invalid wine type: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wine_type_round_trip() {
        assert_eq!("red".parse::<WineType>().unwrap(), WineType::Red);
        assert_eq!("WHITE".parse::<WineType>().unwrap(), WineType::White);
        assert!("rose".parse::<WineType>().is_err());
        assert_eq!(WineType::Red.to_string(), "red");
    }

    #[test]
    fn test_wine_type_serde_lowercase() {
        assert_eq!(serde_json::to_string(&WineType::White).unwrap(), "\"white\"");
        let parsed: WineType = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(parsed, WineType::Red);
    }

    #[test]
    fn test_quality_bounds() {
        assert!(quality_in_range(0));
        assert!(quality_in_range(10));
        assert!(!quality_in_range(-1));
        assert!(!quality_in_range(11));
    }
}
