//! NEON decoder.

use core::arch::aarch64::{
  vceqq_u8, vdupq_n_u8, vget_lane_u64, vld1q_u8, vorrq_u8, vreinterpret_u64_u8, vreinterpretq_u16_u8, vshrn_n_u16,
  vst1q_u8, vsubq_u8,
};

use super::check_capacity;
use crate::state::{Carry, DecodeState, ESCAPE, Mode, OFFSET, decode_scalar};

#[target_feature(enable = "neon")]
unsafe fn neon<const NNTP: bool>(src: &[u8], dst: &mut [u8], mut carry: Carry) -> (usize, Carry) {
  let mut written = 0;
  let (blocks, tail) = src.as_chunks::<16>();

  // SAFETY: target_feature ensures NEON. Loads read one whole borrowed block;
  // stores write into a 16-byte subslice of `dst` obtained with `get_mut`.
  unsafe {
    let eq = vdupq_n_u8(ESCAPE);
    let cr = vdupq_n_u8(b'\r');
    let lf = vdupq_n_u8(b'\n');
    let offset = vdupq_n_u8(OFFSET);

    for block in blocks {
      let mut rest: &[u8] = block;

      let bulk = matches!(carry, Carry::Mid) || (!NNTP && matches!(carry, Carry::LineStart));
      if bulk && let Some(out) = dst.get_mut(written..written + 16) {
        let v = vld1q_u8(block.as_ptr());
        let special = vorrq_u8(vorrq_u8(vceqq_u8(v, eq), vceqq_u8(v, cr)), vceqq_u8(v, lf));
        // Narrow each 0x00/0xFF lane to a nibble: 64-bit mask, 4 bits per byte.
        let mask = vget_lane_u64::<0>(vreinterpret_u64_u8(vshrn_n_u16::<4>(vreinterpretq_u16_u8(special))));
        let clean = (mask.trailing_zeros() as usize / 4).min(16);

        vst1q_u8(out.as_mut_ptr(), vsubq_u8(v, offset));
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
pub(super) fn decode_neon(src: &[u8], dst: &mut [u8], state: &mut DecodeState) -> usize {
  check_capacity(src, dst);
  // SAFETY: Dispatcher verifies NEON before selecting this kernel.
  let (written, carry) = unsafe {
    match state.mode() {
      Mode::Plain => neon::<false>(src, dst, state.carry()),
      Mode::Nntp => neon::<true>(src, dst, state.carry()),
    }
  };
  state.set_carry(carry);
  written
}
