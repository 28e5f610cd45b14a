//! Portable slice-by-8 CRC-32.
//!
//! XORs the register into the first four bytes of each 8-byte chunk and
//! combines eight table lookups, one per byte position. Tails are handled a
//! byte at a time with the first table.

// Table indices are masked to 0..=255; the outer index is a constant below 8.
#![allow(clippy::indexing_slicing)]

use super::tables::TABLES;

/// Fold `data` into the raw (pre-inverted) CRC register.
#[inline]
#[must_use]
pub fn slice8(mut crc: u32, data: &[u8]) -> u32 {
  let (chunks, remainder) = data.as_chunks::<8>();

  for chunk in chunks {
    let lo = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) ^ crc;
    let hi = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);

    crc = TABLES[7][(lo & 0xFF) as usize]
      ^ TABLES[6][((lo >> 8) & 0xFF) as usize]
      ^ TABLES[5][((lo >> 16) & 0xFF) as usize]
      ^ TABLES[4][(lo >> 24) as usize]
      ^ TABLES[3][(hi & 0xFF) as usize]
      ^ TABLES[2][((hi >> 8) & 0xFF) as usize]
      ^ TABLES[1][((hi >> 16) & 0xFF) as usize]
      ^ TABLES[0][(hi >> 24) as usize];
  }

  bytewise(crc, remainder)
}

/// Byte-at-a-time table lookup.
#[inline]
#[must_use]
pub fn bytewise(mut crc: u32, data: &[u8]) -> u32 {
  for &byte in data {
    crc = TABLES[0][((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8);
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::crc32::reference;

  #[test]
  fn test_check_value() {
    assert_eq!(slice8(!0, b"123456789") ^ !0, 0xCBF4_3926);
    assert_eq!(bytewise(!0, b"123456789") ^ !0, 0xCBF4_3926);
  }

  #[test]
  fn test_matches_reference_all_lengths() {
    let data: [u8; 67] = core::array::from_fn(|i| (i as u8).wrapping_mul(31).wrapping_add(7));
    for len in 0..=data.len() {
      assert_eq!(slice8(!0, &data[..len]), reference::update(!0, &data[..len]), "len={len}");
    }
  }
}
