//! Authentication error types.

use catdesk_core::error::CatdeskError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username, wrong password, and disabled account all
    /// collapse here — callers cannot enumerate usernames.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid or expired verification code")]
    InvalidVerificationCode,

    #[error("operation requires an admin session")]
    NotPermitted,

    #[error("credential store unreachable: {0}")]
    StoreUnavailable(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AuthError {
    /// Message suitable for inline display next to the login form.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "Incorrect username or password.",
            AuthError::InvalidVerificationCode => {
                "The verification code is wrong or has expired."
            }
            AuthError::NotPermitted => "Only an administrator can do that.",
            AuthError::StoreUnavailable(_) => {
                "Cannot reach the user database. Check that the database \
                 is running and that the host, port, and credentials in \
                 the connection settings are correct."
            }
            AuthError::Unexpected(_) => "Something went wrong. Please try again.",
        }
    }
}

impl From<AuthError> for CatdeskError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::InvalidVerificationCode => {
                CatdeskError::AuthenticationFailed {
                    reason: err.to_string(),
                }
            }
            AuthError::NotPermitted => CatdeskError::AuthorizationDenied {
                reason: err.to_string(),
            },
            AuthError::StoreUnavailable(msg) => CatdeskError::Database(msg),
            AuthError::Unexpected(msg) => CatdeskError::Internal(msg),
        }
    }
}
