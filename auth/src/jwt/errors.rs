use thiserror::Error;

/// Error type for token operations.
///
/// Verification ends in exactly one of `Malformed`, `SignatureInvalid` or
/// `Expired`, checked in that order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    SignatureInvalid,

    #[error("Token is expired")]
    Expired,
}
