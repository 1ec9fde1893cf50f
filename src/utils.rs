//! Buffer and parameter helpers shared by the one-shot and streaming APIs.

use alloc::vec::Vec;
use core::ops::Range;

/// Largest nonce among the supported variants.
pub(crate) const MAX_NONCE_LENGTH: usize = 32;

/// Largest key among the supported variants.
pub(crate) const MAX_KEY_LENGTH: usize = 32;

/// Largest authentication tag.
pub(crate) const MAX_TAG_LENGTH: usize = 32;

/// Extends `buffer` by `extra` bytes and returns the new tail.
///
/// Spare capacity is reused in place when there is enough of it, so the
/// storage does not move and nothing is allocated. Otherwise a buffer of
/// exactly `len + extra` bytes is allocated and the existing content copied
/// over. Either way the original content is preserved as the prefix and the
/// returned tail is the last `extra` bytes, zero-filled.
pub fn grow_buffer(buffer: &mut Vec<u8>, extra: usize) -> &mut [u8] {
    let len = buffer.len();
    if buffer.capacity() - len < extra {
        let mut grown = Vec::with_capacity(len + extra);
        grown.extend_from_slice(buffer);
        *buffer = grown;
    }
    buffer.resize(len + extra, 0);
    &mut buffer[len..]
}

#[inline]
pub(crate) fn is_valid_tag_length(tag_length: usize) -> bool {
    tag_length == 16 || tag_length == 32
}

/// Right-pads `nonce` with zeros to `nonce_length` bytes.
///
/// Returns `None` if the nonce is longer than `nonce_length`.
#[inline]
pub(crate) fn pad_nonce(nonce: &[u8], nonce_length: usize) -> Option<[u8; MAX_NONCE_LENGTH]> {
    debug_assert!(nonce_length <= MAX_NONCE_LENGTH);
    if nonce.len() > nonce_length {
        return None;
    }
    let mut padded = [0u8; MAX_NONCE_LENGTH];
    padded[..nonce.len()].copy_from_slice(nonce);
    Some(padded)
}

/// Same as [`pad_nonce`], panicking on an oversized nonce.
#[inline]
pub(crate) fn expect_nonce(nonce: &[u8], nonce_length: usize) -> [u8; MAX_NONCE_LENGTH] {
    match pad_nonce(nonce, nonce_length) {
        Some(padded) => padded,
        None => panic!("aegis: invalid nonce length"),
    }
}

/// Panics unless `range` lies within a buffer of `len` bytes.
#[inline]
pub(crate) fn check_range(range: &Range<usize>, len: usize, what: &str) {
    if range.start > range.end || range.end > len {
        panic!("aegis: {what} range {range:?} out of bounds for buffer of length {len}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_grow_in_place() {
        let mut buffer = Vec::with_capacity(50);
        buffer.extend((0..10).map(|i| i as u8));
        let before = buffer.as_ptr();

        let tail = grow_buffer(&mut buffer, 20);
        assert_eq!(tail.len(), 20);
        assert!(tail.iter().all(|&b| b == 0));

        assert_eq!(buffer.as_ptr(), before);
        assert_eq!(buffer.len(), 30);
        assert!(buffer[..10].iter().enumerate().all(|(i, &b)| b == i as u8));
    }

    #[test]
    fn test_grow_with_allocation() {
        let mut buffer = vec![0xaau8, 0xbb, 0xcc];
        buffer.shrink_to_fit();
        let before = buffer.as_ptr();

        grow_buffer(&mut buffer, 1000)[..2].copy_from_slice(&[1, 2]);
        assert_ne!(buffer.as_ptr(), before);
        assert_eq!(buffer.len(), 1003);
        assert!(buffer.capacity() >= 1003);
        assert_eq!(&buffer[..5], &[0xaa, 0xbb, 0xcc, 1, 2]);
    }

    #[test]
    fn test_grow_empty() {
        let mut buffer = Vec::new();
        let tail = grow_buffer(&mut buffer, 16);
        tail.fill(0x42);
        assert_eq!(buffer, vec![0x42; 16]);
    }

    #[test]
    fn test_grow_by_zero() {
        let mut buffer = vec![1u8, 2, 3];
        assert!(grow_buffer(&mut buffer, 0).is_empty());
        assert_eq!(buffer, [1, 2, 3]);
    }

    #[test]
    fn test_pad_nonce() {
        let padded = pad_nonce(&[1, 2, 3], 16).unwrap();
        assert_eq!(&padded[..3], &[1, 2, 3]);
        assert!(padded[3..].iter().all(|&b| b == 0));

        assert!(pad_nonce(&[0u8; 16], 16).is_some());
        assert!(pad_nonce(&[0u8; 17], 16).is_none());
        assert!(pad_nonce(&[], 32).is_some());
    }

    #[test]
    #[should_panic(expected = "aegis: invalid nonce length")]
    fn test_expect_nonce_too_long() {
        expect_nonce(&[0u8; 33], 32);
    }

    #[test]
    fn test_tag_lengths() {
        assert!(is_valid_tag_length(16));
        assert!(is_valid_tag_length(32));
        assert!(!is_valid_tag_length(0));
        assert!(!is_valid_tag_length(24));
    }
}
