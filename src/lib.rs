//! # AEGIS authenticated encryption
//!
//! This crate provides AEGIS-128L and AEGIS-256, as specified in the
//! IETF CFRG draft, behind an API that checks what the underlying block
//! transform cannot check for itself.
//!
//! ## Features
//!
//! - **One-shot sealing and opening** into caller-provided buffers, reusing
//!   spare capacity instead of allocating
//! - **In-place operation**, including output and input living in a single
//!   buffer, with partial aliasing rejected at the call boundary
//! - **Incremental encryption and decryption** with a strict
//!   update-then-finalize life cycle
//! - **128-bit or 256-bit tags**, nonces shorter than the variant's nonce
//!   length zero-padded on the right
//! - **Key wiping** that the optimizer cannot remove
//! - **No-std Compatible**: only `alloc` is required
//!
//! ## Usage
//!
//! ```rust
//! use aegis_aead::aegis128l::Aegis128L;
//!
//! let key = [0u8; 16];      // 128-bit key
//! let nonce = [0u8; 16];    // 128-bit nonce
//! let aead = Aegis128L::new(&key, 16)?;
//!
//! let ciphertext = aead.seal(&nonce, b"hello, world!", b"");
//! let plaintext = aead.open(&nonce, &ciphertext, b"")?;
//! assert_eq!(plaintext, b"hello, world!");
//! # Ok::<(), aegis_aead::Error>(())
//! ```
//!
//! ## Errors and panics
//!
//! Data that may come from a peer (a truncated ciphertext, a forged tag, a
//! tag of the wrong length) is reported through [`Error`]. Mistakes that can
//! only be bugs in the calling code (an oversized nonce, output buffers
//! partially overlapping inputs, sealing with a wiped context, using a stream
//! after it was finalized) panic with an `aegis:` message.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

extern crate alloc;

mod aead;
mod engine;
mod error;
mod overlap;
mod stream;
mod utils;

pub mod aegis128l;
pub mod aegis256;
pub mod primitive;

#[cfg(test)]
mod tests;

pub use aead::Aead;
pub use engine::init;
pub use error::{Error, Result};
pub use overlap::{any_overlap, inexact_overlap};
pub use stream::{Decrypter, Encrypter};
pub use utils::grow_buffer;
