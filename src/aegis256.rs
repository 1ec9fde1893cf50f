//! AEGIS-256: 256-bit key, 256-bit nonce, 128-bit rate.
//!
//! Nonces are large enough to be generated at random.

use crate::primitive;

/// Key length in bytes.
pub const KEY_LENGTH: usize = 32;

/// Nonce length in bytes.
pub const NONCE_LENGTH: usize = 32;

/// One-shot AEGIS-256 context.
pub type Aegis256 = crate::Aead<primitive::Aegis256>;

/// Incremental AEGIS-256 encryption.
pub type Encrypter = crate::Encrypter<primitive::Aegis256>;

/// Incremental AEGIS-256 decryption.
pub type Decrypter = crate::Decrypter<primitive::Aegis256>;
