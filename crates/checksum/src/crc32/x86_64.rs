//! x86_64 PCLMULQDQ folding kernel.
//!
//! Folds four 128-bit lanes by 512 bits per step, collapses them to one
//! lane, folds the remainder 128 bits at a time, then reduces 128 → 64 → 32
//! bits with a Barrett reduction for the bit-reflected polynomial.
//!
//! Inputs shorter than [`FOLD_MIN_LEN`] and the trailing `< 16` bytes go
//! through the portable slice-by-8 kernel.

use core::arch::x86_64::{
  __m128i, _mm_and_si128, _mm_clmulepi64_si128, _mm_cvtsi32_si128, _mm_extract_epi32, _mm_loadu_si128,
  _mm_set_epi32, _mm_set_epi64x, _mm_srli_si128, _mm_xor_si128,
};

use super::portable;

// ─────────────────────────────────────────────────────────────────────────────
// Folding Constants (x^n mod P, bit-reflected, 33-bit)
// ─────────────────────────────────────────────────────────────────────────────

/// x^(4·128+32) mod P
const K1: i64 = 0x1_5444_2BD4;
/// x^(4·128-32) mod P
const K2: i64 = 0x1_C6E4_1596;
/// x^(128+32) mod P
const K3: i64 = 0x1_7519_97D0;
/// x^(128-32) mod P
const K4: i64 = 0x0_CCAA_009E;
/// x^64 mod P
const K5: i64 = 0x1_63CD_6124;
/// P(x), bit-reflected
const P_X: i64 = 0x1_DB71_0641;
/// floor(x^64 / P(x)), bit-reflected
const U_PRIME: i64 = 0x1_F701_1641;

/// Below this length folding setup costs more than it saves.
pub const FOLD_MIN_LEN: usize = 128;

#[inline]
#[target_feature(enable = "sse2,pclmulqdq")]
unsafe fn fold(a: __m128i, b: __m128i, keys: __m128i) -> __m128i {
  // SAFETY: target_feature ensures PCLMULQDQ is available
  unsafe {
    let lo = _mm_clmulepi64_si128(a, keys, 0x00);
    let hi = _mm_clmulepi64_si128(a, keys, 0x11);
    _mm_xor_si128(_mm_xor_si128(b, lo), hi)
  }
}

#[inline]
#[target_feature(enable = "sse2")]
unsafe fn load(block: &[u8; 16]) -> __m128i {
  // SAFETY: `block` is exactly 16 readable bytes; the load is unaligned.
  unsafe { _mm_loadu_si128(block.as_ptr().cast()) }
}

/// Fold `data` into the raw (pre-inverted) CRC register.
///
/// # Safety
///
/// Caller must ensure PCLMULQDQ and SSE4.1 are available.
#[target_feature(enable = "sse2,sse4.1,pclmulqdq")]
pub unsafe fn crc32_pclmul(crc: u32, data: &[u8]) -> u32 {
  if data.len() < FOLD_MIN_LEN {
    return portable::slice8(crc, data);
  }

  let (blocks, tail) = data.as_chunks::<16>();
  let [b3, b2, b1, b0, rest @ ..] = blocks else {
    return portable::slice8(crc, data);
  };

  // SAFETY: target_feature ensures every intrinsic below is available, and
  // all loads read whole 16-byte blocks borrowed from `data`.
  let c = unsafe {
    let mut x3 = _mm_xor_si128(load(b3), _mm_cvtsi32_si128(crc as i32));
    let mut x2 = load(b2);
    let mut x1 = load(b1);
    let mut x0 = load(b0);

    let (quads, singles) = rest.as_chunks::<4>();

    let k1k2 = _mm_set_epi64x(K2, K1);
    for [c3, c2, c1, c0] in quads {
      x3 = fold(x3, load(c3), k1k2);
      x2 = fold(x2, load(c2), k1k2);
      x1 = fold(x1, load(c1), k1k2);
      x0 = fold(x0, load(c0), k1k2);
    }

    let k3k4 = _mm_set_epi64x(K4, K3);
    let mut x = fold(x3, x2, k3k4);
    x = fold(x, x1, k3k4);
    x = fold(x, x0, k3k4);

    for block in singles {
      x = fold(x, load(block), k3k4);
    }

    // 128 → 64 bits.
    let low32 = _mm_set_epi32(0, 0, 0, !0);
    let x = _mm_xor_si128(_mm_clmulepi64_si128(x, k3k4, 0x10), _mm_srli_si128(x, 8));
    let x = _mm_xor_si128(
      _mm_clmulepi64_si128(_mm_and_si128(x, low32), _mm_set_epi64x(0, K5), 0x00),
      _mm_srli_si128(x, 4),
    );

    // Barrett reduction 64 → 32 bits; the reflected result sits in lane 1.
    let pu = _mm_set_epi64x(U_PRIME, P_X);
    let t1 = _mm_clmulepi64_si128(_mm_and_si128(x, low32), pu, 0x10);
    let t2 = _mm_clmulepi64_si128(_mm_and_si128(t1, low32), pu, 0x00);
    _mm_extract_epi32(_mm_xor_si128(x, t2), 1) as u32
  };

  portable::slice8(c, tail)
}

/// Safe wrapper; only reachable through a candidate gated on `PCLMUL_READY`.
#[inline]
pub fn crc32_pclmul_safe(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: Dispatcher verifies PCLMULQDQ and SSE4.1 before selecting this kernel.
  unsafe { crc32_pclmul(crc, data) }
}
