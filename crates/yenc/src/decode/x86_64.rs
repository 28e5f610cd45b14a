//! SSE2 and AVX2 decoders.

use core::arch::x86_64::{
  __m128i, __m256i, _mm_cmpeq_epi8, _mm_loadu_si128, _mm_movemask_epi8, _mm_or_si128, _mm_set1_epi8,
  _mm_storeu_si128, _mm_sub_epi8, _mm256_cmpeq_epi8, _mm256_loadu_si256, _mm256_movemask_epi8, _mm256_or_si256,
  _mm256_set1_epi8, _mm256_storeu_si256, _mm256_sub_epi8,
};

use super::check_capacity;
use crate::state::{Carry, DecodeState, ESCAPE, Mode, OFFSET, decode_scalar};

/// Whether a block starting in `carry` may take the bulk path.
#[inline(always)]
const fn bulk_allowed<const NNTP: bool>(carry: Carry) -> bool {
  matches!(carry, Carry::Mid) || (!NNTP && matches!(carry, Carry::LineStart))
}

// ─────────────────────────────────────────────────────────────────────────────
// SSE2 (16 bytes per step)
// ─────────────────────────────────────────────────────────────────────────────

#[target_feature(enable = "sse2")]
unsafe fn sse2<const NNTP: bool>(src: &[u8], dst: &mut [u8], mut carry: Carry) -> (usize, Carry) {
  let mut written = 0;
  let (blocks, tail) = src.as_chunks::<16>();

  // SAFETY: target_feature ensures SSE2. Loads read one whole borrowed block;
  // stores write into a 16-byte subslice of `dst` obtained with `get_mut`.
  unsafe {
    let eq = _mm_set1_epi8(ESCAPE as i8);
    let cr = _mm_set1_epi8(b'\r' as i8);
    let lf = _mm_set1_epi8(b'\n' as i8);
    let offset = _mm_set1_epi8(OFFSET as i8);

    for block in blocks {
      let mut rest: &[u8] = block;

      if bulk_allowed::<NNTP>(carry)
        && let Some(out) = dst.get_mut(written..written + 16)
      {
        let v: __m128i = _mm_loadu_si128(block.as_ptr().cast());
        let special = _mm_or_si128(_mm_or_si128(_mm_cmpeq_epi8(v, eq), _mm_cmpeq_epi8(v, cr)), _mm_cmpeq_epi8(v, lf));
        let clean = (_mm_movemask_epi8(special) as u32).trailing_zeros().min(16) as usize;

        _mm_storeu_si128(out.as_mut_ptr().cast(), _mm_sub_epi8(v, offset));
        if clean > 0 {
          written += clean;
          carry = Carry::Mid;
        }
        rest = block.split_at(clean).1;
      }

      (written, carry) = decode_scalar::<NNTP>(rest, dst, written, carry);
    }
  }

  decode_scalar::<NNTP>(tail, dst, written, carry)
}

#[track_caller]
pub(super) fn decode_sse2(src: &[u8], dst: &mut [u8], state: &mut DecodeState) -> usize {
  check_capacity(src, dst);
  // SAFETY: Dispatcher verifies SSE2 before selecting this kernel.
  let (written, carry) = unsafe {
    match state.mode() {
      Mode::Plain => sse2::<false>(src, dst, state.carry()),
      Mode::Nntp => sse2::<true>(src, dst, state.carry()),
    }
  };
  state.set_carry(carry);
  written
}

// ─────────────────────────────────────────────────────────────────────────────
// AVX2 (32 bytes per step)
// ─────────────────────────────────────────────────────────────────────────────

#[target_feature(enable = "avx2")]
unsafe fn avx2<const NNTP: bool>(src: &[u8], dst: &mut [u8], mut carry: Carry) -> (usize, Carry) {
  let mut written = 0;
  let (blocks, tail) = src.as_chunks::<32>();

  // SAFETY: target_feature ensures AVX2. Loads read one whole borrowed block;
  // stores write into a 32-byte subslice of `dst` obtained with `get_mut`.
  unsafe {
    let eq = _mm256_set1_epi8(ESCAPE as i8);
    let cr = _mm256_set1_epi8(b'\r' as i8);
    let lf = _mm256_set1_epi8(b'\n' as i8);
    let offset = _mm256_set1_epi8(OFFSET as i8);

    for block in blocks {
      let mut rest: &[u8] = block;

      if bulk_allowed::<NNTP>(carry)
        && let Some(out) = dst.get_mut(written..written + 32)
      {
        let v: __m256i = _mm256_loadu_si256(block.as_ptr().cast());
        let special = _mm256_or_si256(
          _mm256_or_si256(_mm256_cmpeq_epi8(v, eq), _mm256_cmpeq_epi8(v, cr)),
          _mm256_cmpeq_epi8(v, lf),
        );
        let clean = (_mm256_movemask_epi8(special) as u32).trailing_zeros() as usize;

        _mm256_storeu_si256(out.as_mut_ptr().cast(), _mm256_sub_epi8(v, offset));
        if clean > 0 {
          written += clean;
          carry = Carry::Mid;
        }
        rest = block.split_at(clean).1;
      }

      (written, carry) = decode_scalar::<NNTP>(rest, dst, written, carry);
    }
  }

  decode_scalar::<NNTP>(tail, dst, written, carry)
}

#[track_caller]
pub(super) fn decode_avx2(src: &[u8], dst: &mut [u8], state: &mut DecodeState) -> usize {
  check_capacity(src, dst);
  // SAFETY: Dispatcher verifies AVX2 (with OS YMM support) before selecting this kernel.
  let (written, carry) = unsafe {
    match state.mode() {
      Mode::Plain => avx2::<false>(src, dst, state.carry()),
      Mode::Nntp => avx2::<true>(src, dst, state.carry()),
    }
  };
  state.set_carry(carry);
  written
}
