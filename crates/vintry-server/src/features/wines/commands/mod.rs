pub mod create;
pub mod delete;
pub mod update;

pub use create::{CreateWineCommand, CreateWineError};
pub use delete::{DeleteWineCommand, DeleteWineError};
pub use update::{UpdateWineCommand, UpdateWineError};
