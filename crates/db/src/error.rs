use studymood_core::error::CoreError;

/// Error type for catalog service operations.
///
/// `Database` covers failures of the store call itself (connection loss,
/// timeouts); domain outcomes (not found, validation, conflict) arrive as
/// `Core` variants.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for service return values.
pub type ServiceResult<T> = Result<T, ServiceError>;
