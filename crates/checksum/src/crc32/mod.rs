//! CRC-32/ISO-HDLC kernels, state, and dispatch.
//!
//! # Properties
//!
//! - **Polynomial**: 0x04C11DB7 (normal), 0xEDB88320 (reflected)
//! - **Initial value**: 0xFFFFFFFF
//! - **Final XOR**: 0xFFFFFFFF
//! - **Check** (`"123456789"`): 0xCBF43926
//!
//! # Layers
//!
//! - Raw kernels: `fn(register, &[u8]) -> register` over the pre-inverted register
//! - [`Crc32Kernel`]: the init/update/finish triple a dispatch table stores
//! - [`Crc32`]: a [`Checksum`] hasher using the process-wide selection

mod combine;
mod portable;
pub mod reference;
mod tables;

#[cfg(target_arch = "x86_64")]
mod x86_64;

#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(test)]
mod proptests;

use backend::{Candidate, KernelTier, Selected, candidates};
pub use combine::combine;
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use platform::caps;
use platform::Caps;
pub use tables::POLY;
use traits::{Checksum, ChecksumCombine};

// ─────────────────────────────────────────────────────────────────────────────
// State
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque CRC-32 accumulator.
///
/// Owned by the caller and threaded through [`Crc32Kernel`] calls for one
/// stream. Plain data: it can be copied, dropped mid-stream, or resumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Crc32State {
  reg: u32,
}

impl Crc32State {
  /// A freshly initialized accumulator.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { reg: !0 }
  }

  /// Resume from a finished CRC of the bytes already seen.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self { reg: crc ^ !0 }
  }

  /// The finished CRC of everything folded in so far.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> u32 {
    self.reg ^ !0
  }
}

impl Default for Crc32State {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernel Triple
// ─────────────────────────────────────────────────────────────────────────────

/// One CRC-32 implementation as an init/update/finish triple.
///
/// Every kernel uses the same [`Crc32State`] layout, so
/// `finish(update(update(init, A), B)) == finish(update(init, A ‖ B))`
/// holds for every kernel and every split, and states are interchangeable
/// between kernels.
#[derive(Clone, Copy, Debug)]
pub struct Crc32Kernel {
  /// Reset the accumulator to the start-of-stream value.
  pub init: fn(&mut Crc32State),
  /// Fold more bytes into the accumulator.
  pub update: fn(&mut Crc32State, &[u8]),
  /// Apply the final inversion and return the standard value.
  pub finish: fn(&Crc32State) -> u32,
}

impl Crc32Kernel {
  /// One-shot CRC of `data` with this kernel.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u32 {
    let mut state = Crc32State::new();
    (self.init)(&mut state);
    (self.update)(&mut state, data);
    (self.finish)(&state)
  }
}

fn init(state: &mut Crc32State) {
  *state = Crc32State::new();
}

fn finish(state: &Crc32State) -> u32 {
  state.value()
}

fn update_portable(state: &mut Crc32State, data: &[u8]) {
  state.reg = portable::slice8(state.reg, data);
}

#[cfg(target_arch = "x86_64")]
fn update_pclmul(state: &mut Crc32State, data: &[u8]) {
  state.reg = x86_64::crc32_pclmul_safe(state.reg, data);
}

#[cfg(target_arch = "aarch64")]
fn update_arm(state: &mut Crc32State, data: &[u8]) {
  state.reg = aarch64::crc32_arm_safe(state.reg, data);
}

/// Slice-by-8 triple. Always available.
pub const PORTABLE: Crc32Kernel = Crc32Kernel {
  init,
  update: update_portable,
  finish,
};

#[cfg(target_arch = "x86_64")]
const PCLMUL: Crc32Kernel = Crc32Kernel {
  init,
  update: update_pclmul,
  finish,
};

#[cfg(target_arch = "aarch64")]
const ARM_CRC: Crc32Kernel = Crc32Kernel {
  init,
  update: update_arm,
  finish,
};

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

/// Name of the portable kernel.
pub const PORTABLE_NAME: &str = "portable/slice8";

#[cfg(target_arch = "x86_64")]
const CANDIDATES: &[Candidate<Crc32Kernel>] = candidates![
  "x86_64/pclmul"   => caps::x86::PCLMUL_READY, KernelTier::Folding => PCLMUL,
  "portable/slice8" => Caps::NONE, KernelTier::Portable => PORTABLE,
];

#[cfg(target_arch = "aarch64")]
const CANDIDATES: &[Candidate<Crc32Kernel>] = candidates![
  "aarch64/crc"     => caps::aarch64::CRC_READY, KernelTier::HwCrc => ARM_CRC,
  "portable/slice8" => Caps::NONE, KernelTier::Portable => PORTABLE,
];

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
const CANDIDATES: &[Candidate<Crc32Kernel>] = candidates![
  "portable/slice8" => Caps::NONE, KernelTier::Portable => PORTABLE,
];

/// Every kernel compiled for this architecture, most specialized first.
///
/// The last entry is always the portable kernel.
#[inline]
#[must_use]
pub fn candidates() -> &'static [Candidate<Crc32Kernel>] {
  CANDIDATES
}

/// Pick the most specialized kernel `caps` permits.
///
/// Deterministic and total: [`Caps::NONE`] selects the portable kernel.
#[inline]
#[must_use]
pub fn select(caps: Caps) -> Selected<Crc32Kernel> {
  backend::select(caps, CANDIDATES)
}

/// The kernel for this process's detected capabilities.
///
/// Selected once and cached with `std`; re-selected from compile-time
/// capabilities on every call without it.
#[inline]
#[must_use]
pub fn dispatched() -> Selected<Crc32Kernel> {
  #[cfg(feature = "std")]
  {
    static SELECTED: std::sync::OnceLock<Selected<Crc32Kernel>> = std::sync::OnceLock::new();
    *SELECTED.get_or_init(|| select(platform::caps()))
  }

  #[cfg(not(feature = "std"))]
  {
    select(platform::caps())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Checksum Hasher
// ─────────────────────────────────────────────────────────────────────────────

/// CRC-32 hasher using the best kernel for this machine.
///
/// For callers that do not hold a dispatch table. The decode pipeline uses
/// the triple stored in its codec instead; both produce identical values.
///
/// # Example
///
/// ```
/// use checksum::{Checksum, ChecksumCombine, Crc32};
///
/// let crc = Crc32::checksum(b"hello world");
/// assert_eq!(crc, 0x0D4A_1185);
///
/// let (a, b) = b"hello world".split_at(5);
/// assert_eq!(Crc32::combine(Crc32::checksum(a), Crc32::checksum(b), b.len()), crc);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Crc32 {
  state: Crc32State,
}

impl Crc32 {
  /// Resume from a previously finished CRC value.
  #[inline]
  #[must_use]
  pub const fn resume(crc: u32) -> Self {
    Self {
      state: Crc32State::resume(crc),
    }
  }

  /// Name of the kernel this hasher dispatches to.
  #[must_use]
  pub fn backend_name() -> &'static str {
    dispatched().name
  }

  /// The underlying accumulator.
  #[inline]
  #[must_use]
  pub const fn state(&self) -> Crc32State {
    self.state
  }
}

impl Checksum for Crc32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;

  #[inline]
  fn new() -> Self {
    Self {
      state: Crc32State::new(),
    }
  }

  #[inline]
  fn with_initial(initial: u32) -> Self {
    Self::resume(initial)
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    (dispatched().func.update)(&mut self.state, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    self.state.value()
  }

  #[inline]
  fn reset(&mut self) {
    self.state = Crc32State::new();
  }
}

impl ChecksumCombine for Crc32 {
  fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
    combine(crc_a, crc_b, len_b)
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::vec::Vec;

  use super::*;

  const CHECK: u32 = 0xCBF4_3926;

  #[test]
  fn test_check_value() {
    assert_eq!(Crc32::checksum(b"123456789"), CHECK);
  }

  #[test]
  fn test_empty() {
    assert_eq!(Crc32::checksum(b""), 0);
    assert_eq!(Crc32State::new().value(), 0);
  }

  #[test]
  fn test_every_candidate_matches_check() {
    let detected = platform::caps();
    for c in candidates().iter().filter(|c| detected.has(c.requires)) {
      let got = c.func.checksum(b"123456789");
      assert_eq!(got, CHECK, "{}: got {got:#010X}, expected {CHECK:#010X}", c.name);
    }
  }

  #[test]
  fn test_select_none_is_portable() {
    let s = select(Caps::NONE);
    assert_eq!(s.name, PORTABLE_NAME);
    assert_eq!(s.tier, KernelTier::Portable);
    assert!(!s.is_accelerated());
  }

  #[test]
  fn test_candidates_end_with_portable() {
    let last = candidates().last().map(|c| (c.name, c.requires));
    assert_eq!(last, Some((PORTABLE_NAME, Caps::NONE)));
  }

  #[test]
  #[cfg(target_arch = "x86_64")]
  fn test_pclmul_requires_sse41() {
    use platform::caps::x86;
    assert_eq!(select(x86::SSE2 | x86::PCLMULQDQ).name, PORTABLE_NAME);
    assert_eq!(select(x86::SSE2 | x86::PCLMULQDQ | x86::SSE41).name, "x86_64/pclmul");
  }

  #[test]
  #[cfg(target_arch = "aarch64")]
  fn test_arm_crc_selected_with_crc_cap() {
    assert_eq!(select(caps::aarch64::CRC).name, "aarch64/crc");
    assert_eq!(select(caps::aarch64::NEON).name, PORTABLE_NAME);
  }

  #[test]
  fn test_ten_thousand_bytes_one_call_vs_ten() {
    let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    let detected = platform::caps();
    for c in candidates().iter().filter(|c| detected.has(c.requires)) {
      let k = c.func;
      let mut one = Crc32State::new();
      (k.init)(&mut one);
      (k.update)(&mut one, &data);

      let mut ten = Crc32State::new();
      (k.init)(&mut ten);
      for chunk in data.chunks(1_000) {
        (k.update)(&mut ten, chunk);
      }
      assert_eq!((k.finish)(&one), (k.finish)(&ten), "{}", c.name);
    }
  }

  #[test]
  fn test_state_interchangeable_between_kernels() {
    let data: Vec<u8> = (0..4096u32).map(|i| (i * 7) as u8).collect();
    let (a, b) = data.split_at(1500);
    let detected = platform::caps();
    let best = select(detected).func;

    let mut state = Crc32State::new();
    (PORTABLE.update)(&mut state, a);
    (best.update)(&mut state, b);
    assert_eq!((best.finish)(&state), PORTABLE.checksum(&data));
  }

  #[test]
  fn test_resume() {
    let mut h = Crc32::with_initial(Crc32::checksum(b"12345"));
    h.update(b"6789");
    assert_eq!(h.finalize(), CHECK);
  }

  #[test]
  fn test_finalize_is_idempotent_and_reset() {
    let mut h = Crc32::new();
    h.update(b"1234");
    assert_eq!(h.finalize(), h.finalize());
    h.update(b"56789");
    assert_eq!(h.finalize(), CHECK);
    h.reset();
    assert_eq!(h.finalize(), 0);
  }

  #[test]
  fn test_update_vectored() {
    let mut h = Crc32::new();
    h.update_vectored(&[b"123", b"", b"456789"]);
    assert_eq!(h.finalize(), CHECK);
  }

  #[test]
  fn test_backend_name_is_a_candidate() {
    let name = Crc32::backend_name();
    assert!(candidates().iter().any(|c| c.name == name), "{name}");
  }
}
