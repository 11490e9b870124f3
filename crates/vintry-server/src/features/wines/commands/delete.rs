//! Delete wine command

use sqlx::PgPool;

/// Command to delete a wine record by id
#[derive(Debug, Clone)]
pub struct DeleteWineCommand {
    pub id: i32,
}

/// Errors that can occur when deleting a wine record
#[derive(Debug, thiserror::Error)]
pub enum DeleteWineError {
    #[error("Wine with id {0} not found")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Handles the delete wine command
#[tracing::instrument(skip(pool), fields(id = command.id))]
pub async fn handle(pool: PgPool, command: DeleteWineCommand) -> Result<(), DeleteWineError> {
    let result = sqlx::query("DELETE FROM wines WHERE id = $1")
        .bind(command.id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DeleteWineError::NotFound(command.id));
    }

    tracing::info!(id = command.id, "Wine deleted");
    Ok(())
}
