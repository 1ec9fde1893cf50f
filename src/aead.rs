//! One-shot authenticated encryption.

use crate::error::{Error, Result};
use crate::overlap::{assert_disjoint, Span};
use crate::primitive::Primitive;
use crate::stream::{Decrypter, Encrypter};
use crate::utils::{
    check_range, expect_nonce, grow_buffer, is_valid_tag_length, MAX_KEY_LENGTH,
    MAX_NONCE_LENGTH, MAX_TAG_LENGTH,
};
use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::ops::Range;
use zeroize::Zeroize;

/// An AEGIS key bound to a tag length.
///
/// Seal and open take `&self`, so one context can be shared between threads.
/// [`wipe`](Aead::wipe) needs `&mut self` and therefore cannot race with them.
///
/// # Panics
///
/// Sealing panics on caller bugs: a nonce longer than the variant's nonce
/// length, an output region that partially overlaps an input, or a wiped
/// context. Opening panics on the first two; a wiped context is reported as
/// [`Error::InvalidTagLength`].
pub struct Aead<P: Primitive> {
    key: [u8; MAX_KEY_LENGTH],
    tag_length: usize,
    _primitive: PhantomData<fn() -> P>,
}

impl<P: Primitive> Aead<P> {
    /// Key length in bytes.
    pub const KEY_LENGTH: usize = P::KEY_LENGTH;

    /// Nonce length in bytes.
    pub const NONCE_LENGTH: usize = P::NONCE_LENGTH;

    /// Creates a context from a key and a tag length (16 or 32).
    pub fn new(key: &[u8], tag_length: usize) -> Result<Self> {
        if key.len() != P::KEY_LENGTH {
            return Err(Error::InvalidKeyLength);
        }
        if !is_valid_tag_length(tag_length) {
            return Err(Error::InvalidTagLength);
        }
        let mut stored = [0u8; MAX_KEY_LENGTH];
        stored[..key.len()].copy_from_slice(key);
        Ok(Aead {
            key: stored,
            tag_length,
            _primitive: PhantomData,
        })
    }

    /// Key length in bytes.
    pub fn key_length(&self) -> usize {
        P::KEY_LENGTH
    }

    /// Nonce length in bytes. Shorter nonces are zero-padded on the right.
    pub fn nonce_length(&self) -> usize {
        P::NONCE_LENGTH
    }

    /// Tag length in bytes, which is also the ciphertext overhead.
    ///
    /// Zero once the context has been wiped.
    pub fn tag_length(&self) -> usize {
        self.tag_length
    }

    /// Whether [`wipe`](Aead::wipe) has been called.
    pub fn is_wiped(&self) -> bool {
        self.tag_length == 0
    }

    #[inline]
    fn key(&self) -> &[u8] {
        &self.key[..P::KEY_LENGTH]
    }

    #[inline]
    fn seal_tag_length(&self) -> usize {
        if !is_valid_tag_length(self.tag_length) {
            panic!("aegis: invalid tag length");
        }
        self.tag_length
    }

    #[inline]
    fn run_encrypt(&self, buf: &mut [u8], tag: &mut [u8], ad: &[u8], nonce: &[u8]) {
        if P::encrypt(buf, tag, ad, &nonce[..P::NONCE_LENGTH], self.key()).is_err() {
            panic!("aegis: encryption failed");
        }
    }

    /// Encrypts `plaintext` and appends ciphertext and tag to `dst`.
    ///
    /// # Arguments
    ///
    /// * `dst` - Output vector; its existing content is kept as a prefix
    /// * `nonce` - Up to `NONCE_LENGTH` bytes, zero-padded on the right
    /// * `plaintext` - The data to encrypt
    /// * `ad` - Associated data (not encrypted, but authenticated)
    ///
    /// Spare capacity in `dst` is used directly when there is enough of it.
    /// Otherwise `dst` is reallocated to exactly the required length.
    ///
    /// # Security
    ///
    /// - The nonce MUST NOT be reused with the same key
    /// - Nonces longer than `NONCE_LENGTH` panic instead of being truncated
    ///
    /// # Example
    ///
    /// ```rust
    /// use aegis_aead::aegis256::Aegis256;
    ///
    /// let aead = Aegis256::new(&[0u8; 32], 32)?;
    /// let mut packet = b"HDR:".to_vec();
    /// aead.seal_to(&mut packet, &[1u8; 32], b"payload", b"HDR:");
    /// assert_eq!(packet.len(), 4 + 7 + 32);
    /// # Ok::<(), aegis_aead::Error>(())
    /// ```
    pub fn seal_to(&self, dst: &mut Vec<u8>, nonce: &[u8], plaintext: &[u8], ad: &[u8]) {
        let nonce = expect_nonce(nonce, P::NONCE_LENGTH);
        let tag_length = self.seal_tag_length();
        let out_len = plaintext.len() + tag_length;

        let out = Span::spare(dst, out_len);
        assert_disjoint(out, plaintext, "plaintext");
        assert_disjoint(out, ad, "additional data");

        let tail = grow_buffer(dst, out_len);
        let (buf, tag) = tail.split_at_mut(plaintext.len());
        buf.copy_from_slice(plaintext);
        self.run_encrypt(buf, tag, ad, &nonce);
    }

    /// Encrypts `plaintext` into a new vector holding ciphertext and tag.
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8], ad: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        self.seal_to(&mut out, nonce, plaintext, ad);
        out
    }

    /// Encrypts the content of `buffer` in place and appends the tag.
    pub fn seal_in_place(&self, buffer: &mut Vec<u8>, nonce: &[u8], ad: &[u8]) {
        let nonce = expect_nonce(nonce, P::NONCE_LENGTH);
        let tag_length = self.seal_tag_length();

        let len = buffer.len();
        grow_buffer(buffer, tag_length);
        let (buf, tag) = buffer.split_at_mut(len);
        self.run_encrypt(buf, tag, ad, &nonce);
    }

    /// Encrypts `buffer[plaintext]` and writes ciphertext and tag at
    /// `buffer[dst..]`, returning the range written.
    ///
    /// The output may start exactly where the plaintext starts (in-place
    /// encryption). Any other overlap of the output with the plaintext or the
    /// associated data panics, as does a region outside the buffer.
    pub fn seal_within(
        &self,
        buffer: &mut [u8],
        dst: usize,
        nonce: &[u8],
        plaintext: Range<usize>,
        ad: Range<usize>,
    ) -> Range<usize> {
        let nonce = expect_nonce(nonce, P::NONCE_LENGTH);
        let tag_length = self.seal_tag_length();
        check_range(&plaintext, buffer.len(), "plaintext");
        check_range(&ad, buffer.len(), "additional data");
        let pt_len = plaintext.len();
        let out = dst..dst + pt_len + tag_length;
        check_range(&out, buffer.len(), "output");

        let out_span = Span::of(&buffer[out.clone()]);
        assert_disjoint(out_span, &buffer[plaintext.clone()], "plaintext");
        assert_disjoint(out_span, &buffer[ad.clone()], "additional data");

        let ad_copy = shared_ad(buffer, &out, &ad);
        buffer.copy_within(plaintext, dst);
        let (out_buf, ad_view) = split_output(buffer, out.clone(), ad, ad_copy.as_deref());
        let (buf, tag) = out_buf.split_at_mut(pt_len);
        self.run_encrypt(buf, tag, ad_view, &nonce);
        out
    }

    #[inline]
    fn open_tag_length(
        &self,
        nonce: &[u8],
        ciphertext_len: usize,
    ) -> Result<([u8; MAX_NONCE_LENGTH], usize)> {
        let nonce = expect_nonce(nonce, P::NONCE_LENGTH);
        if !is_valid_tag_length(self.tag_length) {
            return Err(Error::InvalidTagLength);
        }
        if ciphertext_len < self.tag_length {
            return Err(Error::Truncated);
        }
        Ok((nonce, self.tag_length))
    }

    /// Verifies and decrypts `ciphertext`, appending the plaintext to `dst`.
    ///
    /// # Arguments
    ///
    /// * `dst` - Output vector; its existing content is kept as a prefix
    /// * `nonce` - The nonce used to seal (must match encryption)
    /// * `ciphertext` - Ciphertext followed by the tag
    /// * `ad` - Associated data (must match encryption)
    ///
    /// # Returns
    ///
    /// `Truncated` if `ciphertext` is shorter than the tag,
    /// `AuthenticationFailed` if the tag does not verify, and
    /// `InvalidTagLength` on a wiped context.
    ///
    /// # Security
    ///
    /// - If tag verification fails, `dst` is restored to its original length
    ///   and no plaintext is left in it
    /// - Tag comparison is performed in constant time
    ///
    /// # Example
    ///
    /// ```rust
    /// use aegis_aead::aegis128l::Aegis128L;
    ///
    /// let aead = Aegis128L::new(&[0u8; 16], 16)?;
    /// let sealed = aead.seal(&[2u8; 16], b"secret", b"");
    ///
    /// let mut out = Vec::new();
    /// aead.open_to(&mut out, &[2u8; 16], &sealed, b"")?;
    /// assert_eq!(out, b"secret");
    /// # Ok::<(), aegis_aead::Error>(())
    /// ```
    pub fn open_to(
        &self,
        dst: &mut Vec<u8>,
        nonce: &[u8],
        ciphertext: &[u8],
        ad: &[u8],
    ) -> Result<()> {
        let (nonce, tag_length) = self.open_tag_length(nonce, ciphertext.len())?;
        let out_len = ciphertext.len() - tag_length;

        let out = Span::spare(dst, out_len);
        assert_disjoint(out, ciphertext, "ciphertext");
        assert_disjoint(out, ad, "additional data");

        let original_len = dst.len();
        let (body, tag) = ciphertext.split_at(out_len);
        let buf = grow_buffer(dst, out_len);
        buf.copy_from_slice(body);
        if P::decrypt(buf, tag, ad, &nonce[..P::NONCE_LENGTH], self.key()).is_err() {
            dst.truncate(original_len);
            return Err(Error::AuthenticationFailed);
        }
        Ok(())
    }

    /// Verifies and decrypts `ciphertext` into a new vector.
    pub fn open(&self, nonce: &[u8], ciphertext: &[u8], ad: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.open_to(&mut out, nonce, ciphertext, ad)?;
        Ok(out)
    }

    /// Verifies and decrypts `buffer` (ciphertext followed by the tag) in
    /// place, leaving only the plaintext.
    ///
    /// The buffer is cleared if authentication fails.
    pub fn open_in_place(&self, buffer: &mut Vec<u8>, nonce: &[u8], ad: &[u8]) -> Result<()> {
        let (nonce, tag_length) = self.open_tag_length(nonce, buffer.len())?;
        let out_len = buffer.len() - tag_length;

        let (buf, tag) = buffer.split_at_mut(out_len);
        if P::decrypt(buf, tag, ad, &nonce[..P::NONCE_LENGTH], self.key()).is_err() {
            buffer.clear();
            return Err(Error::AuthenticationFailed);
        }
        buffer.truncate(out_len);
        Ok(())
    }

    /// Verifies and decrypts `buffer[ciphertext]` (ciphertext followed by the
    /// tag), writing the plaintext at `buffer[dst..]` and returning the range
    /// written.
    ///
    /// Overlap rules are those of [`seal_within`](Aead::seal_within). On
    /// failure the output region is zeroized.
    pub fn open_within(
        &self,
        buffer: &mut [u8],
        dst: usize,
        nonce: &[u8],
        ciphertext: Range<usize>,
        ad: Range<usize>,
    ) -> Result<Range<usize>> {
        check_range(&ciphertext, buffer.len(), "ciphertext");
        check_range(&ad, buffer.len(), "additional data");
        let (nonce, tag_length) = self.open_tag_length(nonce, ciphertext.len())?;
        let out_len = ciphertext.len() - tag_length;
        let out = dst..dst + out_len;
        check_range(&out, buffer.len(), "output");

        let out_span = Span::of(&buffer[out.clone()]);
        assert_disjoint(out_span, &buffer[ciphertext.clone()], "ciphertext");
        assert_disjoint(out_span, &buffer[ad.clone()], "additional data");

        let mut tag = [0u8; MAX_TAG_LENGTH];
        tag[..tag_length].copy_from_slice(&buffer[ciphertext.end - tag_length..ciphertext.end]);
        let ad_copy = shared_ad(buffer, &out, &ad);
        buffer.copy_within(ciphertext.start..ciphertext.end - tag_length, dst);
        let (buf, ad_view) = split_output(buffer, out.clone(), ad, ad_copy.as_deref());
        let result = P::decrypt(
            buf,
            &tag[..tag_length],
            ad_view,
            &nonce[..P::NONCE_LENGTH],
            self.key(),
        );
        if result.is_err() {
            buf.zeroize();
            return Err(Error::AuthenticationFailed);
        }
        Ok(out)
    }

    /// Starts an incremental encryption under this context's key.
    pub fn encrypter(&self, nonce: &[u8], ad: &[u8]) -> Result<Encrypter<P>> {
        Encrypter::new(self.key(), nonce, ad, self.tag_length)
    }

    /// Starts an incremental decryption under this context's key.
    pub fn decrypter(&self, nonce: &[u8], ad: &[u8]) -> Result<Decrypter<P>> {
        Decrypter::new(self.key(), nonce, ad, self.tag_length)
    }

    /// Erases the key and disables the context.
    ///
    /// Calling this more than once is harmless. Afterwards sealing panics and
    /// every other operation fails with [`Error::InvalidTagLength`].
    ///
    /// # Security
    ///
    /// - The key is overwritten with volatile writes that the optimizer
    ///   cannot remove
    /// - Clones made before the wipe keep their own copy of the key
    ///
    /// # Example
    ///
    /// ```rust
    /// use aegis_aead::{aegis128l::Aegis128L, Error};
    ///
    /// let mut aead = Aegis128L::new(&[0u8; 16], 16)?;
    /// aead.wipe();
    /// assert!(aead.is_wiped());
    /// assert_eq!(aead.open(&[0u8; 16], &[0u8; 16], b""), Err(Error::InvalidTagLength));
    /// # Ok::<(), aegis_aead::Error>(())
    /// ```
    pub fn wipe(&mut self) {
        self.key.zeroize();
        self.tag_length = 0;
    }
}

impl<P: Primitive> Clone for Aead<P> {
    fn clone(&self) -> Self {
        Aead {
            key: self.key,
            tag_length: self.tag_length,
            _primitive: PhantomData,
        }
    }
}

impl<P: Primitive> Drop for Aead<P> {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl<P: Primitive> zeroize::ZeroizeOnDrop for Aead<P> {}

impl<P: Primitive> fmt::Debug for Aead<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aead")
            .field("variant", &P::NAME)
            .field("tag_length", &self.tag_length)
            .finish_non_exhaustive()
    }
}

/// Snapshot of the associated data when it starts where the output does.
///
/// Such AD is overwritten by the output, so it is read before anything is
/// written. Any other overlap has already been rejected.
fn shared_ad(buffer: &[u8], out: &Range<usize>, ad: &Range<usize>) -> Option<Vec<u8>> {
    let (out_span, ad_span) = (Span::of(&buffer[out.clone()]), Span::of(&buffer[ad.clone()]));
    out_span
        .any_overlap(ad_span)
        .then(|| buffer[ad.clone()].to_vec())
}

/// Splits `buffer` into the writable output region and a view of the
/// associated data, which must not overlap it unless `ad_copy` holds it.
fn split_output<'a>(
    buffer: &'a mut [u8],
    out: Range<usize>,
    ad: Range<usize>,
    ad_copy: Option<&'a [u8]>,
) -> (&'a mut [u8], &'a [u8]) {
    if let Some(copy) = ad_copy {
        return (&mut buffer[out], copy);
    }
    if ad.is_empty() {
        return (&mut buffer[out], &[][..]);
    }
    if out.is_empty() {
        return (Default::default(), &buffer[ad]);
    }
    if ad.end <= out.start {
        let (head, tail) = buffer.split_at_mut(out.start);
        (&mut tail[..out.len()], &head[ad])
    } else {
        let (head, tail) = buffer.split_at_mut(out.end);
        (&mut head[out.start..], &tail[ad.start - out.end..ad.end - out.end])
    }
}
