use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("duplicate key: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<FieldErrors> for ModelError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}
