//! AEGIS-128L: 128-bit key, 128-bit nonce, 256-bit rate.
//!
//! The fastest variant on CPUs with AES instructions. Nonces are short
//! enough that they should not be chosen at random for a long-lived key;
//! use a counter, or [`crate::aegis256`].

use crate::primitive;

/// Key length in bytes.
pub const KEY_LENGTH: usize = 16;

/// Nonce length in bytes.
pub const NONCE_LENGTH: usize = 16;

/// One-shot AEGIS-128L context.
pub type Aegis128L = crate::Aead<primitive::Aegis128L>;

/// Incremental AEGIS-128L encryption.
pub type Encrypter = crate::Encrypter<primitive::Aegis128L>;

/// Incremental AEGIS-128L decryption.
pub type Decrypter = crate::Decrypter<primitive::Aegis128L>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;

    #[test]
    fn test_lengths_agree() {
        assert_eq!(KEY_LENGTH, primitive::Aegis128L::KEY_LENGTH);
        assert_eq!(NONCE_LENGTH, primitive::Aegis128L::NONCE_LENGTH);
    }

    #[test]
    fn test_hello_world() {
        let aead = Aegis128L::new(&[0u8; KEY_LENGTH], 16).unwrap();
        let nonce = [0u8; NONCE_LENGTH];

        let ciphertext = aead.seal(&nonce, b"hello, world!", b"");
        assert_eq!(
            hex::encode(&ciphertext),
            "29bbfc6cc899c479421ad700f86b6cace68a6cc8c472c6873b1fdbe3d6"
        );

        let plaintext = aead.open(&nonce, &ciphertext, b"").unwrap();
        assert_eq!(plaintext, b"hello, world!");
    }
}
