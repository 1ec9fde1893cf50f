//! Buffer aliasing checks.
//!
//! Only addresses and lengths are compared, never content. Two views that
//! start at the same address are an exact overlap, which is how in-place
//! operation is expressed and is always allowed.

use alloc::vec::Vec;

/// Address range covered by a byte view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    start: usize,
    len: usize,
}

impl Span {
    pub(crate) const EMPTY: Span = Span { start: 0, len: 0 };

    /// Span of a slice.
    #[inline]
    pub(crate) fn of(x: &[u8]) -> Self {
        Span {
            start: x.as_ptr() as usize,
            len: x.len(),
        }
    }

    /// Span of the region `grow_buffer(buffer, extra)` would hand out.
    ///
    /// Empty when the grower would allocate, as fresh storage aliases nothing.
    #[inline]
    pub(crate) fn spare(buffer: &Vec<u8>, extra: usize) -> Self {
        if buffer.capacity() - buffer.len() < extra {
            return Span::EMPTY;
        }
        Span {
            start: buffer.as_ptr() as usize + buffer.len(),
            len: extra,
        }
    }

    #[inline]
    fn end(self) -> usize {
        self.start + self.len
    }

    pub(crate) fn any_overlap(self, other: Span) -> bool {
        self.len != 0 && other.len != 0 && self.start < other.end() && other.start < self.end()
    }

    pub(crate) fn inexact_overlap(self, other: Span) -> bool {
        self.start != other.start && self.any_overlap(other)
    }
}

/// Reports whether `x` and `y` share memory at any index.
///
/// Returns `false` if either view is empty.
pub fn any_overlap(x: &[u8], y: &[u8]) -> bool {
    Span::of(x).any_overlap(Span::of(y))
}

/// Reports whether `x` and `y` share memory at any non-corresponding index.
///
/// Views starting at the same address are not an inexact overlap, whatever
/// their lengths. Returns `false` if either view is empty.
pub fn inexact_overlap(x: &[u8], y: &[u8]) -> bool {
    Span::of(x).inexact_overlap(Span::of(y))
}

/// Panics with the standard message if `output` inexactly overlaps `input`.
#[inline]
pub(crate) fn assert_disjoint(output: Span, input: &[u8], what: &str) {
    if output.inexact_overlap(Span::of(input)) {
        panic!("aegis: invalid buffer overlap of output and {what}");
    }
}
