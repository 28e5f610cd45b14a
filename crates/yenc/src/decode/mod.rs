//! Decoder kernels and their candidate list.
//!
//! | Kernel | Requires | Bytes per step |
//! |--------|----------|----------------|
//! | `x86_64/avx2` | AVX2 (OS-enabled) | 32 |
//! | `x86_64/sse2` | SSE2 | 16 |
//! | `aarch64/neon` | NEON | 16 |
//! | `portable` | nothing | 1 |
//!
//! Vector kernels bulk-convert a block only while the carry is inside a
//! line and only up to the block's first `=`, `\r` or `\n`. Everything else
//! runs through the same byte step as the portable kernel, so output and
//! final carry are identical across kernels.

mod portable;

#[cfg(target_arch = "x86_64")]
mod x86_64;

#[cfg(target_arch = "aarch64")]
mod aarch64;

use backend::{Candidate, KernelTier, Selected, candidates};
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use platform::caps;
use platform::Caps;

use crate::state::DecodeState;

/// Decoder kernel signature.
///
/// Decodes `src` into the front of `dst`, updates `state`, and returns the
/// number of bytes written. Bytes of `dst` past that count are unspecified.
///
/// # Panics
///
/// Every kernel panics if `dst.len() < src.len()`.
pub type DecodeFn = fn(src: &[u8], dst: &mut [u8], state: &mut DecodeState) -> usize;

/// Name of the portable kernel.
pub const PORTABLE_NAME: &str = "portable";

#[cfg(target_arch = "x86_64")]
const CANDIDATES: &[Candidate<DecodeFn>] = candidates![
  "x86_64/avx2" => caps::x86::AVX2_READY, KernelTier::Wide => x86_64::decode_avx2 as DecodeFn,
  "x86_64/sse2" => caps::x86::SSE2, KernelTier::Vector => x86_64::decode_sse2,
  "portable"    => Caps::NONE, KernelTier::Portable => portable::decode,
];

#[cfg(target_arch = "aarch64")]
const CANDIDATES: &[Candidate<DecodeFn>] = candidates![
  "aarch64/neon" => caps::aarch64::NEON, KernelTier::Vector => aarch64::decode_neon as DecodeFn,
  "portable"     => Caps::NONE, KernelTier::Portable => portable::decode,
];

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
const CANDIDATES: &[Candidate<DecodeFn>] = candidates![
  "portable" => Caps::NONE, KernelTier::Portable => portable::decode as DecodeFn,
];

/// Every decoder compiled for this architecture, most specialized first.
///
/// The last entry is always the portable kernel.
#[inline]
#[must_use]
pub fn candidates() -> &'static [Candidate<DecodeFn>] {
  CANDIDATES
}

/// Pick the most specialized decoder `caps` permits.
#[inline]
#[must_use]
pub fn select(caps: Caps) -> Selected<DecodeFn> {
  backend::select(caps, CANDIDATES)
}

/// The portable decoder, callable without a dispatch table.
///
/// ```
/// use yenc::{DecodeState, decode};
///
/// let mut state = DecodeState::plain();
/// let mut out = [0u8; 3];
/// let n = decode::portable(&[0x6B, 0x3D, 0x41], &mut out, &mut state);
/// assert_eq!(&out[..n], &[0x41, 0xD7]);
/// ```
pub fn portable(src: &[u8], dst: &mut [u8], state: &mut DecodeState) -> usize {
  portable::decode(src, dst, state)
}

#[inline]
#[track_caller]
fn check_capacity(src: &[u8], dst: &[u8]) {
  assert!(
    dst.len() >= src.len(),
    "decode output buffer too small: {} bytes for {} input bytes",
    dst.len(),
    src.len()
  );
}
