use business::domain::errors::RepositoryError;

/// Maps failures of INSERT statements, turning unique violations into
/// `RepositoryError::Duplicated`.
pub(crate) fn write_error(error: sqlx::Error) -> RepositoryError {
    match error.as_database_error() {
        Some(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        _ => {
            tracing::error!("Database write failed: {}", error);
            RepositoryError::DatabaseError
        }
    }
}
