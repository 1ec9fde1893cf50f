//! Error types for AEGIS operations.

use core::fmt;

/// Result type alias for AEGIS operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Recoverable errors.
///
/// Misuse that can only come from a bug at the call site (an oversized nonce,
/// aliased buffers, using a stream after it was finalized) panics instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Invalid key length for the selected variant.
    InvalidKeyLength,

    /// Nonce longer than the variant's nonce length.
    InvalidNonceLength,

    /// Invalid tag length (must be 16 or 32 bytes), or a wiped context.
    InvalidTagLength,

    /// Ciphertext shorter than the authentication tag.
    Truncated,

    /// Authentication tag verification failed.
    AuthenticationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeyLength => write!(f, "invalid key length"),
            Error::InvalidNonceLength => write!(f, "invalid nonce length"),
            Error::InvalidTagLength => write!(f, "invalid tag length (must be 16 or 32 bytes)"),
            Error::Truncated => write!(f, "ciphertext too short"),
            Error::AuthenticationFailed => write!(f, "message authentication failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
