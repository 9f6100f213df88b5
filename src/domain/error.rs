use thiserror::Error;

/// Errors raised by the domain, mapper, repository and service layers
///
/// "Not found" is absent from the read/update/toggle paths:
/// those return `Ok(None)`. `NotFound` is only raised by strict operations
/// that require the record to exist.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        Self::storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_error_message() {
        let error = DomainError::conflict("Username 'admin' already exists");
        assert_eq!(
            error.to_string(),
            "Conflict: Username 'admin' already exists"
        );
    }

    #[test]
    fn validation_error_message() {
        let error = DomainError::validation("id must not be empty");
        assert_eq!(error.to_string(), "Validation error: id must not be empty");
    }

    #[test]
    fn sqlx_error_becomes_storage() {
        let error: DomainError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, DomainError::Storage { .. }));
    }
}
