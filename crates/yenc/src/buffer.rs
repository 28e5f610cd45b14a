//! Growable output buffer for decoded bytes.

use crate::codec::Codec;
use crate::state::DecodeState;

/// Owned, growable byte buffer that decoders append into.
///
/// ```
/// use yenc::{Codec, DecodeBuffer, DecodeState};
///
/// let codec = Codec::portable();
/// let mut buf = DecodeBuffer::new();
/// let mut state = DecodeState::plain();
/// buf.decode_from(&codec, b"kk=", &mut state);
/// buf.decode_from(&codec, &[0x41], &mut state);
/// assert_eq!(buf.as_slice(), &[0x41, 0x41, 0xD7]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeBuffer {
  bytes: Vec<u8>,
}

impl DecodeBuffer {
  #[must_use]
  pub const fn new() -> Self {
    Self { bytes: Vec::new() }
  }

  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      bytes: Vec::with_capacity(capacity),
    }
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.bytes.len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  #[inline]
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.bytes.capacity()
  }

  #[inline]
  #[must_use]
  pub fn as_slice(&self) -> &[u8] {
    &self.bytes
  }

  /// Drop the contents, keeping the allocation.
  #[inline]
  pub fn clear(&mut self) {
    self.bytes.clear();
  }

  pub fn append(&mut self, data: &[u8]) {
    self.reserve(self.bytes.len() + data.len(), false);
    self.bytes.extend_from_slice(data);
  }

  /// Ensure room for at least `capacity` bytes in total.
  ///
  /// A non-exact reserve grows to at least 1.5x the current capacity so
  /// repeated small appends stay amortized.
  pub fn reserve(&mut self, capacity: usize, exact: bool) {
    let current = self.bytes.capacity();
    if capacity <= current {
      return;
    }
    let target = if exact {
      capacity
    } else {
      capacity.max(current.saturating_mul(3) / 2)
    };
    self.bytes.reserve_exact(target - self.bytes.len());
  }

  /// Take over `bytes` as the buffer's contents, dropping the old ones.
  pub fn bind(&mut self, bytes: Vec<u8>) {
    self.bytes = bytes;
  }

  /// Hand the contents back, leaving the buffer empty.
  #[must_use]
  pub fn unbind(&mut self) -> Vec<u8> {
    std::mem::take(&mut self.bytes)
  }

  /// Decode `src` with `codec` and append the output.
  ///
  /// Returns the number of bytes appended.
  pub fn decode_from(&mut self, codec: &Codec, src: &[u8], state: &mut DecodeState) -> usize {
    let start = self.bytes.len();
    self.reserve(start + src.len(), false);
    self.bytes.resize(start + src.len(), 0);
    let written = codec.decode(src, &mut self.bytes[start..], state);
    self.bytes.truncate(start + written);
    written
  }
}

impl From<Vec<u8>> for DecodeBuffer {
  fn from(bytes: Vec<u8>) -> Self {
    Self { bytes }
  }
}

impl From<DecodeBuffer> for Vec<u8> {
  fn from(buf: DecodeBuffer) -> Self {
    buf.bytes
  }
}

impl AsRef<[u8]> for DecodeBuffer {
  fn as_ref(&self) -> &[u8] {
    &self.bytes
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reserve_grows_by_half() {
    let mut buf = DecodeBuffer::with_capacity(100);
    let cap = buf.capacity();
    buf.reserve(cap + 1, false);
    assert!(buf.capacity() >= cap * 3 / 2);
  }

  #[test]
  fn test_reserve_exact() {
    let mut buf = DecodeBuffer::with_capacity(100);
    buf.reserve(101, true);
    assert!(buf.capacity() >= 101);
    let before = buf.capacity();
    buf.reserve(50, true);
    assert_eq!(buf.capacity(), before);
  }

  #[test]
  fn test_bind_unbind() {
    let mut buf = DecodeBuffer::new();
    buf.append(b"abc");
    buf.bind(vec![1, 2]);
    assert_eq!(buf.as_slice(), &[1, 2]);
    assert_eq!(buf.unbind(), vec![1, 2]);
    assert!(buf.is_empty());
  }

  #[test]
  fn test_decode_from_truncates_to_output() {
    let codec = Codec::portable();
    let mut buf = DecodeBuffer::from(vec![7]);
    let mut state = DecodeState::nntp();
    let n = buf.decode_from(&codec, b".k\r\n=", &mut state);
    assert_eq!(n, 1);
    assert_eq!(buf.as_slice(), &[7, 0x41]);
    assert!(state.is_pending_escape());
  }

  #[test]
  fn test_clear_keeps_capacity() {
    let mut buf = DecodeBuffer::new();
    buf.append(&[0; 64]);
    let cap = buf.capacity();
    buf.clear();
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.capacity(), cap);
  }
}
