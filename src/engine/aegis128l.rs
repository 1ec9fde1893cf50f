//! AEGIS-128L permutation: eight 128-bit blocks, 256-bit rate.

use super::{aes_round, and, length_block, xor, Permutation, C0, C1};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// AEGIS-128L state.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct State {
    blocks: [[u8; 16]; 8],
}

impl State {
    /// Core update function, absorbing two message blocks.
    #[inline]
    fn update(&mut self, m0: &[u8; 16], m1: &[u8; 16]) {
        let s = &self.blocks;
        self.blocks = [
            aes_round(&s[7], &xor(&s[0], m0)),
            aes_round(&s[0], &s[1]),
            aes_round(&s[1], &s[2]),
            aes_round(&s[2], &s[3]),
            aes_round(&s[3], &xor(&s[4], m1)),
            aes_round(&s[4], &s[5]),
            aes_round(&s[5], &s[6]),
            aes_round(&s[6], &s[7]),
        ];
    }

    /// XOR of `blocks[range]`.
    #[inline]
    fn fold(&self, range: core::ops::Range<usize>) -> [u8; 16] {
        self.blocks[range]
            .iter()
            .fold([0u8; 16], |acc, block| xor(&acc, block))
    }
}

#[inline]
fn halves(block: &[u8]) -> ([u8; 16], [u8; 16]) {
    let mut t0 = [0u8; 16];
    let mut t1 = [0u8; 16];
    t0.copy_from_slice(&block[..16]);
    t1.copy_from_slice(&block[16..32]);
    (t0, t1)
}

impl Permutation for State {
    const KEY_LENGTH: usize = 16;
    const NONCE_LENGTH: usize = 16;
    const RATE: usize = 32;

    fn new(key: &[u8], nonce: &[u8]) -> Self {
        let mut k = [0u8; 16];
        let mut n = [0u8; 16];
        k.copy_from_slice(key);
        n.copy_from_slice(nonce);

        let kn = xor(&k, &n);
        let mut state = State {
            blocks: [
                kn,
                C1,
                C0,
                C1,
                kn,
                xor(&k, &C0),
                xor(&k, &C1),
                xor(&k, &C0),
            ],
        };
        for _ in 0..10 {
            state.update(&n, &k);
        }
        k.zeroize();
        state
    }

    #[inline]
    fn absorb(&mut self, block: &[u8]) {
        let (t0, t1) = halves(block);
        self.update(&t0, &t1);
    }

    #[inline]
    fn keystream(&self, out: &mut [u8]) {
        let s = &self.blocks;
        let z0 = xor(&xor(&s[6], &s[1]), &and(&s[2], &s[3]));
        let z1 = xor(&xor(&s[2], &s[5]), &and(&s[6], &s[7]));
        out[..16].copy_from_slice(&z0);
        out[16..32].copy_from_slice(&z1);
    }

    fn finalize(&mut self, ad_len_bits: u64, msg_len_bits: u64, tag: &mut [u8]) {
        let t = xor(&self.blocks[2], &length_block(ad_len_bits, msg_len_bits));
        for _ in 0..7 {
            self.update(&t, &t);
        }

        if tag.len() == 16 {
            tag.copy_from_slice(&self.fold(0..7));
        } else {
            tag[..16].copy_from_slice(&self.fold(0..4));
            tag[16..].copy_from_slice(&self.fold(4..8));
        }
    }
}
