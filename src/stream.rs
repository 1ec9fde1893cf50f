//! Incremental encryption and decryption.
//!
//! An [`Encrypter`] or [`Decrypter`] is bound to one key, nonce and
//! associated data. It accepts any number of chunks and is then finalized
//! exactly once. Chunk boundaries do not affect the result: the
//! concatenated output of an [`Encrypter`] followed by its tag is identical
//! to what [`Aead::seal`](crate::Aead::seal) produces for the whole message.
//!
//! Using a stream after `finalize`, or finalizing it twice, is a bug in the
//! caller and panics.

use crate::error::{Error, Result};
use crate::primitive::{Primitive, StreamState};
use crate::utils::{grow_buffer, is_valid_tag_length, pad_nonce};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

fn init_state<P: Primitive>(
    key: &[u8],
    nonce: &[u8],
    ad: &[u8],
    tag_length: usize,
) -> Result<P::State> {
    if key.len() != P::KEY_LENGTH {
        return Err(Error::InvalidKeyLength);
    }
    let nonce = pad_nonce(nonce, P::NONCE_LENGTH).ok_or(Error::InvalidNonceLength)?;
    if !is_valid_tag_length(tag_length) {
        return Err(Error::InvalidTagLength);
    }
    Ok(P::State::init(ad, &nonce[..P::NONCE_LENGTH], key))
}

/// Incremental authenticated encryption.
///
/// ```rust
/// use aegis_aead::aegis128l::{Aegis128L, Encrypter};
///
/// let key = [0x42u8; 16];
/// let nonce = [0x01u8; 16];
///
/// let mut encrypter = Encrypter::new(&key, &nonce, b"header", 16)?;
/// let mut ciphertext = encrypter.encrypt(b"hello, ");
/// ciphertext.extend_from_slice(&encrypter.encrypt(b"world!"));
/// ciphertext.extend_from_slice(&encrypter.finalize());
///
/// let aead = Aegis128L::new(&key, 16)?;
/// assert_eq!(ciphertext, aead.seal(&nonce, b"hello, world!", b"header"));
/// # Ok::<(), aegis_aead::Error>(())
/// ```
pub struct Encrypter<P: Primitive> {
    state: P::State,
    tag_length: usize,
    finalized: bool,
}

impl<P: Primitive> Encrypter<P> {
    /// Starts an encryption.
    ///
    /// The key must be exactly `P::KEY_LENGTH` bytes. The nonce may be
    /// shorter than `P::NONCE_LENGTH`, in which case it is zero-padded. The
    /// tag length must be 16 or 32.
    pub fn new(key: &[u8], nonce: &[u8], ad: &[u8], tag_length: usize) -> Result<Self> {
        Ok(Encrypter {
            state: init_state::<P>(key, nonce, ad, tag_length)?,
            tag_length,
            finalized: false,
        })
    }

    /// Tag length in bytes.
    pub fn tag_length(&self) -> usize {
        self.tag_length
    }

    /// Whether [`finalize`](Encrypter::finalize) has been called.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    #[inline]
    fn ensure_active(&self) {
        if self.finalized {
            panic!("aegis: encrypt called after finalize");
        }
    }

    /// Encrypts a chunk, returning ciphertext of the same length.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Vec<u8> {
        self.ensure_active();
        if plaintext.is_empty() {
            return Vec::new();
        }
        let mut ciphertext = plaintext.to_vec();
        self.state.encrypt_update(&mut ciphertext);
        ciphertext
    }

    /// Encrypts a chunk and appends the ciphertext to `dst`, returning the
    /// appended bytes.
    ///
    /// Spare capacity in `dst` is used directly when there is enough of it.
    pub fn encrypt_into<'a>(&mut self, dst: &'a mut Vec<u8>, plaintext: &[u8]) -> &'a [u8] {
        self.ensure_active();
        let tail = grow_buffer(dst, plaintext.len());
        if !plaintext.is_empty() {
            tail.copy_from_slice(plaintext);
            self.state.encrypt_update(tail);
        }
        tail
    }

    /// Encrypts a chunk in place.
    pub fn encrypt_in_place(&mut self, buf: &mut [u8]) {
        self.ensure_active();
        if !buf.is_empty() {
            self.state.encrypt_update(buf);
        }
    }

    /// Completes the encryption and returns the authentication tag.
    pub fn finalize(&mut self) -> Vec<u8> {
        if self.finalized {
            panic!("aegis: finalize called twice");
        }
        self.finalized = true;
        let mut tag = vec![0u8; self.tag_length];
        self.state.encrypt_final(&mut tag);
        tag
    }
}

impl<P: Primitive> fmt::Debug for Encrypter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encrypter")
            .field("variant", &P::NAME)
            .field("tag_length", &self.tag_length)
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}

/// Incremental authenticated decryption.
///
/// Plaintext returned by `decrypt*` has not been authenticated yet and must
/// not be used until [`finalize`](Decrypter::finalize) returns `Ok`. If finalization fails, every chunk returned so far must be
/// discarded: it may have been forged. The decrypter cannot take back memory
/// it already handed out, so this is the caller's responsibility.
pub struct Decrypter<P: Primitive> {
    state: P::State,
    tag_length: usize,
    finalized: bool,
}

impl<P: Primitive> Decrypter<P> {
    /// Starts a decryption. Parameters must match those used to encrypt.
    pub fn new(key: &[u8], nonce: &[u8], ad: &[u8], tag_length: usize) -> Result<Self> {
        Ok(Decrypter {
            state: init_state::<P>(key, nonce, ad, tag_length)?,
            tag_length,
            finalized: false,
        })
    }

    /// Tag length in bytes.
    pub fn tag_length(&self) -> usize {
        self.tag_length
    }

    /// Whether [`finalize`](Decrypter::finalize) has been called.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    #[inline]
    fn ensure_active(&self) {
        if self.finalized {
            panic!("aegis: decrypt called after finalize");
        }
    }

    /// Decrypts a chunk, returning unverified plaintext of the same length.
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Vec<u8> {
        self.ensure_active();
        if ciphertext.is_empty() {
            return Vec::new();
        }
        let mut plaintext = ciphertext.to_vec();
        self.state.decrypt_update(&mut plaintext);
        plaintext
    }

    /// Decrypts a chunk and appends the unverified plaintext to `dst`,
    /// returning the appended bytes.
    pub fn decrypt_into<'a>(&mut self, dst: &'a mut Vec<u8>, ciphertext: &[u8]) -> &'a [u8] {
        self.ensure_active();
        let tail = grow_buffer(dst, ciphertext.len());
        if !ciphertext.is_empty() {
            tail.copy_from_slice(ciphertext);
            self.state.decrypt_update(tail);
        }
        tail
    }

    /// Decrypts a chunk in place.
    pub fn decrypt_in_place(&mut self, buf: &mut [u8]) {
        self.ensure_active();
        if !buf.is_empty() {
            self.state.decrypt_update(buf);
        }
    }

    /// Verifies the authentication tag.
    ///
    /// The decrypter is finalized even when this returns an error.
    pub fn finalize(&mut self, tag: &[u8]) -> Result<()> {
        if self.finalized {
            panic!("aegis: finalize called twice");
        }
        self.finalized = true;
        if tag.len() != self.tag_length {
            return Err(Error::InvalidTagLength);
        }
        self.state
            .decrypt_final(tag)
            .map_err(|_| Error::AuthenticationFailed)
    }
}

impl<P: Primitive> fmt::Debug for Decrypter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decrypter")
            .field("variant", &P::NAME)
            .field("tag_length", &self.tag_length)
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}
