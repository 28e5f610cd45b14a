//! Non-cryptographic checksum traits.

use core::fmt::Debug;

/// Streaming checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc32};
///
/// // One-shot
/// let crc = Crc32::checksum(b"123456789");
///
/// // Streaming: any chunking yields the same value.
/// let mut hasher = Crc32::new();
/// hasher.update(b"12345");
/// hasher.update(b"6789");
/// assert_eq!(hasher.finalize(), crc);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must not change the state, so it can be called mid-stream
/// - `reset()` must restore the hasher to its initial state
/// - `update(A); update(B)` must be indistinguishable from `update(A ‖ B)`
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher with the default initial value.
  #[must_use]
  fn new() -> Self;

  /// Resume from a previously finalized value.
  ///
  /// `with_initial(crc(A))` followed by `update(B)` finalizes to `crc(A ‖ B)`.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Fold more bytes into the running checksum.
  fn update(&mut self, data: &[u8]);

  /// Update with multiple non-contiguous buffers, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// The checksum of everything seen so far.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }
}

/// Checksums that can be joined without revisiting the data.
///
/// ```text
/// crc(A ‖ B) = crc(A) · x^(8·len(B)) mod G(x)  ⊕  crc(B)
/// ```
///
/// The exponentiation uses square-and-multiply, so combining is O(log len(B)).
/// Useful when article parts are decoded on different workers and the
/// whole-file CRC must be derived from the per-part values.
pub trait ChecksumCombine: Checksum {
  /// Given `crc_a = crc(A)` and `crc_b = crc(B)`, compute `crc(A ‖ B)`.
  #[must_use]
  fn combine(crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}
