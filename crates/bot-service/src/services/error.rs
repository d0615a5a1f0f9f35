//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use bot_common::AppError;
use bot_core::DomainError;

/// Service layer error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Domain rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Application error (auth, config, etc.)
    #[error(transparent)]
    App(#[from] AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_validation() || e.is_state_conflict() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::App(e) => e.status_code(),
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Internal(msg) => AppError::Internal(anyhow::anyhow!(msg)),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use bot_core::value_objects::BotStatus;

    #[test]
    fn test_not_found_error() {
        let err = ServiceError::from(DomainError::AuditLogNotFound(123));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_AUDIT_LOG");
        assert_eq!(err.to_string(), "Audit log not found: 123");
    }

    #[test]
    fn test_rejected_transition_is_bad_request() {
        let err = ServiceError::from(DomainError::InvalidTransition {
            command: "start",
            current: BotStatus::Running,
        });
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_STATUS_TRANSITION");
    }

    #[test]
    fn test_duplicate_email_is_conflict() {
        let err = ServiceError::from(DomainError::EmailAlreadyExists);
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn test_internal_error() {
        let err = ServiceError::internal("missing dependency");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_convert_to_app_error() {
        let app_err: AppError = ServiceError::from(DomainError::BotNotFound(456)).into();
        assert_eq!(app_err.status_code(), 404);
        assert_eq!(app_err.error_code(), "UNKNOWN_BOT");

        let app_err: AppError = ServiceError::App(AppError::InvalidCredentials).into();
        assert_eq!(app_err.status_code(), 401);
    }
}
