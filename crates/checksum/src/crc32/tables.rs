//! Const-fn slice-by-8 table generation.

// Loop indices are bounded by the array sizes (0..256, 0..8).
#![allow(clippy::indexing_slicing)]

/// Reflected CRC-32/ISO-HDLC polynomial.
pub const POLY: u32 = 0xEDB8_8320;

/// Generate a single lookup table entry by bit-at-a-time reduction.
#[must_use]
pub const fn table_entry(poly: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    if crc & 1 != 0 {
      crc = (crc >> 1) ^ poly;
    } else {
      crc >>= 1;
    }
    i += 1;
  }
  crc
}

/// Generate the 8 tables for slice-by-8.
///
/// `tables[k][i]` is the CRC contribution of byte `i` followed by `k` zero bytes.
#[must_use]
pub const fn generate_tables_8(poly: u32) -> [[u32; 256]; 8] {
  let mut tables = [[0u32; 256]; 8];

  let mut i = 0usize;
  while i < 256 {
    tables[0][i] = table_entry(poly, i as u8);
    i += 1;
  }

  let mut k = 1usize;
  while k < 8 {
    i = 0;
    while i < 256 {
      let prev = tables[k - 1][i];
      tables[k][i] = tables[0][(prev & 0xFF) as usize] ^ (prev >> 8);
      i += 1;
    }
    k += 1;
  }

  tables
}

/// Compile-time tables for [`POLY`].
pub static TABLES: [[u32; 256]; 8] = generate_tables_8(POLY);
