//! Table-less bitwise CRC-32.
//!
//! Roughly a hundred times slower than the other kernels. Kept as the
//! [`KernelTier::Reference`](backend::KernelTier::Reference) oracle for tests
//! and fuzzing; it is never a dispatch candidate.
//!
//! ```
//! use checksum::crc32::reference;
//!
//! assert_eq!(reference::update(!0, b"123456789") ^ !0, 0xCBF4_3926);
//! ```

use super::tables::POLY;

/// Fold `data` into the raw (pre-inverted) CRC register.
#[must_use]
pub fn update(mut crc: u32, data: &[u8]) -> u32 {
  for &byte in data {
    crc = update_byte(crc, byte);
  }
  crc
}

/// One byte, branchless: `mask` is all ones when the low bit is set.
#[inline]
#[must_use]
pub const fn update_byte(mut crc: u32, byte: u8) -> u32 {
  crc ^= byte as u32;
  let mut i = 0;
  while i < 8 {
    let mask = 0u32.wrapping_sub(crc & 1);
    crc = (crc >> 1) ^ (POLY & mask);
    i += 1;
  }
  crc
}
