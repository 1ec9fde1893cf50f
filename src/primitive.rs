//! The seam between the safe AEAD layer and a block-transform engine.
//!
//! Everything in [`crate::Aead`], [`crate::Encrypter`] and
//! [`crate::Decrypter`] is written against these two traits. The crate ships
//! portable implementations for [`Aegis128L`] and [`Aegis256`]; another
//! implementation (for example a binding to a native library) can be plugged
//! in by implementing [`Primitive`] for a marker type.
//!
//! Implementations are trusted: they receive buffers whose lengths have
//! already been validated, and are expected to run in constant time and to
//! write nowhere but into the buffers they are given.

use crate::engine::{self, Engine};
use zeroize::Zeroize;

/// A primitive-level failure (a non-zero status code).
///
/// On decryption this means the tag did not verify. On encryption it means
/// the engine is not usable in this environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failure;

/// Incremental state of one encryption or decryption.
///
/// A state is bound to a key, a nonce and associated data at `init`, and is
/// driven through any number of updates followed by exactly one final call.
/// Updates transform `buf` in place; the length of a single update is
/// arbitrary and need not be a multiple of the engine's rate.
pub trait StreamState: Sized {
    /// Initializes a state. `nonce` and `key` have the variant's exact lengths.
    fn init(ad: &[u8], nonce: &[u8], key: &[u8]) -> Self;

    /// Encrypts `buf` in place.
    fn encrypt_update(&mut self, buf: &mut [u8]);

    /// Writes the authentication tag; `tag.len()` is 16 or 32.
    fn encrypt_final(&mut self, tag: &mut [u8]);

    /// Decrypts `buf` in place.
    fn decrypt_update(&mut self, buf: &mut [u8]);

    /// Verifies the authentication tag in constant time.
    fn decrypt_final(&mut self, tag: &[u8]) -> Result<(), Failure>;
}

/// An AEGIS variant.
pub trait Primitive {
    /// Human readable name of the variant.
    const NAME: &'static str;

    /// Key length in bytes.
    const KEY_LENGTH: usize;

    /// Nonce length in bytes.
    const NONCE_LENGTH: usize;

    /// Incremental state.
    type State: StreamState;

    /// Whether the engine passed its start-up checks.
    fn ready() -> bool {
        true
    }

    /// One-shot encryption of `buf` in place, writing the tag into `tag`.
    fn encrypt(
        buf: &mut [u8],
        tag: &mut [u8],
        ad: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> Result<(), Failure> {
        if !Self::ready() {
            return Err(Failure);
        }
        let mut state = Self::State::init(ad, nonce, key);
        state.encrypt_update(buf);
        state.encrypt_final(tag);
        Ok(())
    }

    /// One-shot decryption of `buf` in place, verifying `tag`.
    ///
    /// On failure `buf` is zeroized so that unverified plaintext never
    /// escapes.
    fn decrypt(
        buf: &mut [u8],
        tag: &[u8],
        ad: &[u8],
        nonce: &[u8],
        key: &[u8],
    ) -> Result<(), Failure> {
        let mut state = Self::State::init(ad, nonce, key);
        state.decrypt_update(buf);
        let result = state.decrypt_final(tag);
        if result.is_err() {
            buf.zeroize();
        }
        result
    }
}

/// AEGIS-128L: 128-bit key, 128-bit nonce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aegis128L {}

impl Primitive for Aegis128L {
    const NAME: &'static str = "AEGIS-128L";
    const KEY_LENGTH: usize = 16;
    const NONCE_LENGTH: usize = 16;

    type State = Engine<engine::aegis128l::State>;

    fn ready() -> bool {
        engine::init()
    }
}

/// AEGIS-256: 256-bit key, 256-bit nonce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aegis256 {}

impl Primitive for Aegis256 {
    const NAME: &'static str = "AEGIS-256";
    const KEY_LENGTH: usize = 32;
    const NONCE_LENGTH: usize = 32;

    type State = Engine<engine::aegis256::State>;

    fn ready() -> bool {
        engine::init()
    }
}
