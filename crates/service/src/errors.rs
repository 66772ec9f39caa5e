use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A field failed its constraint.
    #[error("validation error: {0}")]
    Validation(String),
    /// A required input was absent.
    #[error("missing data: {0}")]
    MissingData(String),
    /// A foreign key in the input points at nothing.
    #[error("reference not found: {0}")]
    ReferenceNotFound(String),
    /// The addressed entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Message without the variant prefix, suitable for a response body.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m)
            | Self::MissingData(m)
            | Self::ReferenceNotFound(m)
            | Self::NotFound(m)
            | Self::Conflict(m)
            | Self::Db(m) => m,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => Self::Validation(m),
            ModelError::Db(m) => Self::Db(m),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        ModelError::from(e).into()
    }
}
