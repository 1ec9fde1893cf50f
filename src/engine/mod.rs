//! Portable AEGIS engine.
//!
//! Each variant only provides its permutation (state layout, update
//! function, keystream and finalization). Buffering of partial blocks,
//! associated data absorption and length accounting live in [`Engine`],
//! which is shared by all variants and implements
//! [`StreamState`](crate::primitive::StreamState).

pub mod aegis128l;
pub mod aegis256;

use crate::primitive::{Failure, StreamState};
use crate::utils::{is_valid_tag_length, MAX_KEY_LENGTH, MAX_NONCE_LENGTH, MAX_TAG_LENGTH};
use aes::hazmat::cipher_round;
use aes::Block;
use core::sync::atomic::{AtomicU8, Ordering};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fibonacci sequence modulo 256.
pub(crate) const C0: [u8; 16] = [
    0x00, 0x01, 0x01, 0x02, 0x03, 0x05, 0x08, 0x0d, 0x15, 0x22, 0x37, 0x59, 0x90, 0xe9, 0x79, 0x62,
];
pub(crate) const C1: [u8; 16] = [
    0xdb, 0x3d, 0x18, 0x55, 0x6d, 0xc2, 0x2f, 0xf1, 0x20, 0x11, 0x31, 0x42, 0x73, 0xb5, 0x28, 0xdd,
];

/// Largest rate among the supported variants.
const MAX_RATE: usize = 32;

/// One AES encryption round: MixColumns(ShiftRows(SubBytes(input))) ^ round_key.
///
/// Hardware acceleration is selected at runtime by the `aes` crate.
#[inline]
pub(crate) fn aes_round(input: &[u8; 16], round_key: &[u8; 16]) -> [u8; 16] {
    let mut block = Block::clone_from_slice(input);
    cipher_round(&mut block, &Block::clone_from_slice(round_key));
    let mut out = [0u8; 16];
    out.copy_from_slice(&block);
    out
}

#[inline]
pub(crate) fn xor(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    let mut result = [0u8; 16];
    for i in 0..16 {
        result[i] = a[i] ^ b[i];
    }
    result
}

#[inline]
pub(crate) fn and(a: &[u8; 16], b: &[u8; 16]) -> [u8; 16] {
    let mut result = [0u8; 16];
    for i in 0..16 {
        result[i] = a[i] & b[i];
    }
    result
}

/// Length block `LE64(ad_len_bits) || LE64(msg_len_bits)` used by finalization.
#[inline]
pub(crate) fn length_block(ad_len_bits: u64, msg_len_bits: u64) -> [u8; 16] {
    let mut t = [0u8; 16];
    t[..8].copy_from_slice(&ad_len_bits.to_le_bytes());
    t[8..].copy_from_slice(&msg_len_bits.to_le_bytes());
    t
}

/// The variant-specific part of an AEGIS cipher.
pub trait Permutation {
    /// Key length in bytes.
    const KEY_LENGTH: usize;
    /// Nonce length in bytes.
    const NONCE_LENGTH: usize;
    /// Bytes absorbed per update.
    const RATE: usize;

    /// Initializes the state from a key and a nonce.
    fn new(key: &[u8], nonce: &[u8]) -> Self;

    /// Absorbs one block of `RATE` bytes.
    fn absorb(&mut self, block: &[u8]);

    /// Writes the `RATE` bytes of keystream for the next block.
    fn keystream(&self, out: &mut [u8]);

    /// Writes a 16 or 32 byte tag.
    fn finalize(&mut self, ad_len_bits: u64, msg_len_bits: u64, tag: &mut [u8]);
}

/// Streaming AEGIS state over any [`Permutation`].
///
/// The keystream of a block only depends on the state before that block is
/// absorbed, so input is transformed as soon as it arrives and only the
/// plaintext of the current partial block is kept until the block fills up.
pub struct Engine<P: Permutation> {
    permutation: P,
    pending: [u8; MAX_RATE],
    keystream: [u8; MAX_RATE],
    pos: usize,
    ad_len: u64,
    msg_len: u64,
}

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

impl<P: Permutation> Engine<P> {
    fn process(&mut self, buf: &mut [u8], direction: Direction) {
        let rate = P::RATE;
        let mut i = 0;
        while i < buf.len() {
            if self.pos == 0 {
                self.permutation.keystream(&mut self.keystream[..rate]);
            }
            let n = (rate - self.pos).min(buf.len() - i);
            for (j, byte) in buf[i..i + n].iter_mut().enumerate() {
                let ks = self.keystream[self.pos + j];
                self.pending[self.pos + j] = match direction {
                    Direction::Encrypt => {
                        let m = *byte;
                        *byte ^= ks;
                        m
                    }
                    Direction::Decrypt => {
                        *byte ^= ks;
                        *byte
                    }
                };
            }
            self.pos += n;
            i += n;
            if self.pos == rate {
                self.permutation.absorb(&self.pending[..rate]);
                self.pos = 0;
            }
        }
        self.msg_len += buf.len() as u64;
    }

    fn finish(&mut self, tag: &mut [u8]) {
        if self.pos > 0 {
            self.pending[self.pos..P::RATE].fill(0);
            self.permutation.absorb(&self.pending[..P::RATE]);
            self.pos = 0;
        }
        self.permutation.finalize(self.ad_len * 8, self.msg_len * 8, tag);
        self.pending.zeroize();
        self.keystream.zeroize();
    }
}

impl<P: Permutation> StreamState for Engine<P> {
    fn init(ad: &[u8], nonce: &[u8], key: &[u8]) -> Self {
        debug_assert_eq!(key.len(), P::KEY_LENGTH);
        debug_assert_eq!(nonce.len(), P::NONCE_LENGTH);

        let mut engine = Engine {
            permutation: P::new(key, nonce),
            pending: [0u8; MAX_RATE],
            keystream: [0u8; MAX_RATE],
            pos: 0,
            ad_len: ad.len() as u64,
            msg_len: 0,
        };

        let mut chunks = ad.chunks_exact(P::RATE);
        for block in chunks.by_ref() {
            engine.permutation.absorb(block);
        }
        let rest = chunks.remainder();
        if !rest.is_empty() {
            let mut block = [0u8; MAX_RATE];
            block[..rest.len()].copy_from_slice(rest);
            engine.permutation.absorb(&block[..P::RATE]);
        }
        engine
    }

    fn encrypt_update(&mut self, buf: &mut [u8]) {
        self.process(buf, Direction::Encrypt);
    }

    fn encrypt_final(&mut self, tag: &mut [u8]) {
        debug_assert!(is_valid_tag_length(tag.len()));
        self.finish(tag);
    }

    fn decrypt_update(&mut self, buf: &mut [u8]) {
        self.process(buf, Direction::Decrypt);
    }

    fn decrypt_final(&mut self, tag: &[u8]) -> Result<(), Failure> {
        if !is_valid_tag_length(tag.len()) {
            return Err(Failure);
        }
        let mut expected = [0u8; MAX_TAG_LENGTH];
        self.finish(&mut expected[..tag.len()]);
        let valid: bool = expected[..tag.len()].ct_eq(tag).into();
        expected.zeroize();
        if valid {
            Ok(())
        } else {
            Err(Failure)
        }
    }
}

impl<P: Permutation> Drop for Engine<P> {
    fn drop(&mut self) {
        self.pending.zeroize();
        self.keystream.zeroize();
    }
}

impl<P: Permutation + ZeroizeOnDrop> ZeroizeOnDrop for Engine<P> {}

/// Self-test states.
const SELF_TEST_UNKNOWN: u8 = 0;
const SELF_TEST_PASSED: u8 = 1;
const SELF_TEST_FAILED: u8 = 2;

/// Cached self-test outcome.
static SELF_TEST: AtomicU8 = AtomicU8::new(SELF_TEST_UNKNOWN);

/// Runs the engine self test once and reports whether it passed.
///
/// Idempotent and cheap after the first call. It is invoked lazily by the
/// first encryption, but can be called up front to move that cost out of
/// the first request. Encryption refuses to run if the test failed.
pub fn init() -> bool {
    let state = match SELF_TEST.load(Ordering::Acquire) {
        SELF_TEST_UNKNOWN => {
            let detected = if self_test() {
                SELF_TEST_PASSED
            } else {
                SELF_TEST_FAILED
            };
            SELF_TEST.store(detected, Ordering::Release);
            detected
        }
        known => known,
    };
    state == SELF_TEST_PASSED
}

#[cold]
fn self_test() -> bool {
    round_trip::<aegis128l::State>() && round_trip::<aegis256::State>()
}

/// Encrypts and decrypts a message spanning several partial updates.
fn round_trip<P: Permutation>() -> bool {
    let key = [0x5au8; MAX_KEY_LENGTH];
    let nonce = [0xa5u8; MAX_NONCE_LENGTH];
    let (key, nonce) = (&key[..P::KEY_LENGTH], &nonce[..P::NONCE_LENGTH]);
    let ad = b"aegis self test";

    let mut msg = [0u8; 67];
    for (i, byte) in msg.iter_mut().enumerate() {
        *byte = i as u8;
    }

    let mut buf = msg;
    let mut tag = [0u8; 16];
    let mut encrypter = Engine::<P>::init(ad, nonce, key);
    encrypter.encrypt_update(&mut buf[..5]);
    encrypter.encrypt_update(&mut buf[5..]);
    encrypter.encrypt_final(&mut tag);
    if buf == msg {
        return false;
    }

    let mut decrypter = Engine::<P>::init(ad, nonce, key);
    decrypter.decrypt_update(&mut buf[..40]);
    decrypter.decrypt_update(&mut buf[40..]);
    decrypter.decrypt_final(&tag).is_ok() && buf == msg
}
