use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Tag on `DbErr::Custom` messages raised by our own validators. Other
/// `Custom` errors stay database errors.
const VALIDATION_TAG: &str = "[validation] ";

/// `before_save` hooks can only fail with `DbErr`; validation failures travel
/// as a tagged `DbErr::Custom`.
impl From<ModelError> for DbErr {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => DbErr::Custom(format!("{VALIDATION_TAG}{msg}")),
            ModelError::Db(msg) => DbErr::Custom(msg),
        }
    }
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e {
            DbErr::Custom(msg) => match msg.strip_prefix(VALIDATION_TAG) {
                Some(bare) => ModelError::Validation(bare.to_string()),
                None => ModelError::Db(msg),
            },
            other => ModelError::Db(other.to_string()),
        }
    }
}
