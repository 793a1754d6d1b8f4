use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are deliberately collapsed into one variant:
/// callers must not be able to tell an expired token from a tampered one.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    Encoding(String),

    #[error("Token is invalid or expired")]
    Invalid,
}
