pub mod commands;
pub mod queries;
pub mod routes;

pub use commands::{
    CreateWineCommand, CreateWineError, DeleteWineCommand, DeleteWineError, UpdateWineCommand,
    UpdateWineError,
};

pub use queries::{
    AverageQualityError, AverageQualityQuery, AverageQualityResponse, GetWineError, GetWineQuery,
    ListWinesError, ListWinesQuery, ListWinesResponse,
};

pub use routes::wines_routes;
