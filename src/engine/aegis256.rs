//! AEGIS-256 permutation: six 128-bit blocks, 128-bit rate.

use super::{aes_round, and, length_block, xor, Permutation, C0, C1};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// AEGIS-256 state.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct State {
    blocks: [[u8; 16]; 6],
}

impl State {
    /// Core update function, absorbing one message block.
    #[inline]
    fn update(&mut self, m: &[u8; 16]) {
        let s = &self.blocks;
        self.blocks = [
            aes_round(&s[5], &xor(&s[0], m)),
            aes_round(&s[0], &s[1]),
            aes_round(&s[1], &s[2]),
            aes_round(&s[2], &s[3]),
            aes_round(&s[3], &s[4]),
            aes_round(&s[4], &s[5]),
        ];
    }
}

#[inline]
fn block(bytes: &[u8]) -> [u8; 16] {
    let mut b = [0u8; 16];
    b.copy_from_slice(bytes);
    b
}

impl Permutation for State {
    const KEY_LENGTH: usize = 32;
    const NONCE_LENGTH: usize = 32;
    const RATE: usize = 16;

    fn new(key: &[u8], nonce: &[u8]) -> Self {
        let mut k0 = block(&key[..16]);
        let mut k1 = block(&key[16..32]);
        let n0 = block(&nonce[..16]);
        let n1 = block(&nonce[16..32]);
        let mut k0n0 = xor(&k0, &n0);
        let mut k1n1 = xor(&k1, &n1);

        let mut state = State {
            blocks: [k0n0, k1n1, C1, C0, xor(&k0, &C0), xor(&k1, &C1)],
        };
        for _ in 0..4 {
            state.update(&k0);
            state.update(&k1);
            state.update(&k0n0);
            state.update(&k1n1);
        }

        k0.zeroize();
        k1.zeroize();
        k0n0.zeroize();
        k1n1.zeroize();
        state
    }

    #[inline]
    fn absorb(&mut self, bytes: &[u8]) {
        self.update(&block(bytes));
    }

    #[inline]
    fn keystream(&self, out: &mut [u8]) {
        let s = &self.blocks;
        let z = xor(&xor(&xor(&s[1], &s[4]), &s[5]), &and(&s[2], &s[3]));
        out[..16].copy_from_slice(&z);
    }

    fn finalize(&mut self, ad_len_bits: u64, msg_len_bits: u64, tag: &mut [u8]) {
        let t = xor(&self.blocks[3], &length_block(ad_len_bits, msg_len_bits));
        for _ in 0..7 {
            self.update(&t);
        }

        let s = &self.blocks;
        if tag.len() == 16 {
            let all = s.iter().fold([0u8; 16], |acc, b| xor(&acc, b));
            tag.copy_from_slice(&all);
        } else {
            tag[..16].copy_from_slice(&xor(&xor(&s[0], &s[1]), &s[2]));
            tag[16..].copy_from_slice(&xor(&xor(&s[3], &s[4]), &s[5]));
        }
    }
}
