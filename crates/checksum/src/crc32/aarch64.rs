//! aarch64 CRC32 extension kernel.

use core::arch::aarch64::{__crc32b, __crc32d, __crc32h, __crc32w};

/// Fold `data` into the raw (pre-inverted) CRC register, 8 bytes per instruction.
///
/// # Safety
///
/// Caller must ensure the CRC32 extension is available.
#[target_feature(enable = "crc")]
pub unsafe fn crc32_arm(mut crc: u32, data: &[u8]) -> u32 {
  let (words, rest) = data.as_chunks::<8>();
  let (halves, rest) = rest.as_chunks::<4>();
  let (pairs, bytes) = rest.as_chunks::<2>();

  // SAFETY: target_feature ensures the CRC32 instructions are available.
  unsafe {
    for word in words {
      crc = __crc32d(crc, u64::from_le_bytes(*word));
    }
    for half in halves {
      crc = __crc32w(crc, u32::from_le_bytes(*half));
    }
    for pair in pairs {
      crc = __crc32h(crc, u16::from_le_bytes(*pair));
    }
    for &byte in bytes {
      crc = __crc32b(crc, byte);
    }
  }

  crc
}

/// Safe wrapper; only reachable through a candidate gated on `CRC_READY`.
#[inline]
pub fn crc32_arm_safe(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: Dispatcher verifies the CRC32 extension before selecting this kernel.
  unsafe { crc32_arm(crc, data) }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::crc32::reference;

  #[test]
  fn test_arm_crc_matches_reference() {
    if !platform::caps().has(platform::caps::aarch64::CRC_READY) {
      return;
    }
    let data: [u8; 100] = core::array::from_fn(|i| (i as u8) ^ 0x5C);
    for len in 0..=data.len() {
      assert_eq!(crc32_arm_safe(!0, &data[..len]), reference::update(!0, &data[..len]), "len={len}");
    }
    assert_eq!(crc32_arm_safe(!0, b"123456789") ^ !0, 0xCBF4_3926);
  }
}
