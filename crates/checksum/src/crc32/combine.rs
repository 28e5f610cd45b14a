//! GF(2) matrix combination of finished CRC-32 values.
//!
//! For reflected CRCs:
//!
//! ```text
//! crc(A ‖ B) = crc(A) · x^(8·len(B)) mod G(x)  ⊕  crc(B)
//! ```
//!
//! The init/xorout terms cancel, so finished values combine directly.

// Loop indices are bounded by the array size (0..32).
#![allow(clippy::indexing_slicing)]

use super::tables::POLY;

/// A 32×32 GF(2) matrix; element `i` is column `i`.
#[derive(Clone, Copy)]
pub struct Gf2Matrix32([u32; 32]);

impl Gf2Matrix32 {
  /// The identity matrix.
  #[must_use]
  pub const fn identity() -> Self {
    let mut m = [0u32; 32];
    let mut i = 0;
    while i < 32 {
      m[i] = 1 << i;
      i += 1;
    }
    Self(m)
  }

  /// Multiply by a column vector.
  #[inline]
  #[must_use]
  pub const fn mul_vec(self, vec: u32) -> u32 {
    let mut result = 0u32;
    let mut i = 0;
    while i < 32 {
      if vec & (1 << i) != 0 {
        result ^= self.0[i];
      }
      i += 1;
    }
    result
  }

  /// `self · other`.
  #[must_use]
  pub const fn mul_mat(self, other: Self) -> Self {
    let mut result = [0u32; 32];
    let mut i = 0;
    while i < 32 {
      result[i] = self.mul_vec(other.0[i]);
      i += 1;
    }
    Self(result)
  }

  /// `self · self`.
  #[inline]
  #[must_use]
  pub const fn square(self) -> Self {
    self.mul_mat(self)
  }

  /// The effect of appending one zero bit to a reflected CRC register.
  #[must_use]
  pub const fn shift1(poly: u32) -> Self {
    let mut m = [0u32; 32];
    m[0] = poly;
    let mut j = 1;
    while j < 32 {
      m[j] = 1 << (j - 1);
      j += 1;
    }
    Self(m)
  }

  /// The effect of appending one zero byte.
  #[must_use]
  pub const fn shift8(poly: u32) -> Self {
    Self::shift1(poly).square().square().square()
  }
}

const SHIFT8: Gf2Matrix32 = Gf2Matrix32::shift8(POLY);

/// Compute `crc(A ‖ B)` from `crc(A)`, `crc(B)` and `len(B)` in O(log len(B)).
///
/// ```
/// use checksum::{Checksum, Crc32, crc32::combine};
///
/// let (a, b) = b"123456789".split_at(4);
/// assert_eq!(combine(Crc32::checksum(a), Crc32::checksum(b), b.len()), 0xCBF4_3926);
/// ```
#[must_use]
pub const fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
  let mut mat = SHIFT8;
  let mut acc = Gf2Matrix32::identity();
  let mut remaining = len_b;

  while remaining > 0 {
    if remaining & 1 != 0 {
      acc = acc.mul_mat(mat);
    }
    mat = mat.square();
    remaining >>= 1;
  }

  acc.mul_vec(crc_a) ^ crc_b
}
