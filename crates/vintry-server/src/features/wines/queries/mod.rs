pub mod average_quality;
pub mod get;
pub mod list;

pub use average_quality::{AverageQualityError, AverageQualityQuery, AverageQualityResponse};
pub use get::{GetWineError, GetWineQuery};
pub use list::{ListWinesError, ListWinesQuery, ListWinesResponse};
