//! Kernel dispatch: candidate lists and selection.
//!
//! - [`Candidate`]: a kernel with capability requirements
//! - [`Selected`]: the result of kernel selection
//! - [`select`]: choose the best kernel from a candidate list
//!
//! # Design
//!
//! Every algorithm lists its kernels from most to least specialized, ending
//! with a portable kernel that requires [`Caps::NONE`]. Selection walks the
//! list once and returns the first entry the capabilities permit, so the
//! result is a pure function of the capability set.
//!
//! Selection happens once per process (or once per explicitly built codec);
//! afterwards a call through [`Selected::func`] is a single indirect call.

use platform::Caps;

use crate::tier::KernelTier;

// ─────────────────────────────────────────────────────────────────────────────
// Core Types
// ─────────────────────────────────────────────────────────────────────────────

/// A candidate kernel with capability requirements.
///
/// Candidates are ordered from best to worst. The dispatcher selects the
/// first candidate whose requirements are satisfied by the detected capabilities.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<F> {
  /// Human-readable name for diagnostics (e.g., "x86_64/pclmul").
  pub name: &'static str,
  /// Required CPU capabilities. Must be a subset of detected caps.
  pub requires: Caps,
  /// Acceleration tier.
  pub tier: KernelTier,
  /// The kernel.
  pub func: F,
}

impl<F> Candidate<F> {
  /// Create a new candidate.
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, requires: Caps, tier: KernelTier, func: F) -> Self {
    Self {
      name,
      requires,
      tier,
      func,
    }
  }
}

/// The result of kernel selection.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  /// Human-readable name of the selected kernel.
  pub name: &'static str,
  /// Acceleration tier of the selected kernel.
  pub tier: KernelTier,
  /// The selected kernel.
  pub func: F,
}

impl<F> Selected<F> {
  /// Create a new selected result.
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, tier: KernelTier, func: F) -> Self {
    Self { name, tier, func }
  }

  /// Whether the selected kernel depends on an optional ISA extension.
  #[inline]
  #[must_use]
  pub const fn is_accelerated(&self) -> bool {
    self.tier.is_accelerated()
  }
}

/// Select the best kernel from a candidate list.
///
/// Returns the first candidate whose `requires` is satisfied by `caps`.
///
/// # Panics
///
/// Panics if `candidates` is empty or no candidate matches. The last
/// candidate must always require [`Caps::NONE`].
#[inline]
#[must_use]
pub fn select<F: Copy>(caps: Caps, candidates: &[Candidate<F>]) -> Selected<F> {
  for candidate in candidates {
    if caps.has(candidate.requires) {
      return Selected::new(candidate.name, candidate.tier, candidate.func);
    }
  }

  panic!("no matching kernel: candidate list must end with a portable fallback");
}

/// Build a `&[Candidate]` slice.
///
/// ```
/// use backend::{KernelTier, candidates};
/// use platform::caps::Caps;
///
/// fn portable(data: &[u8]) -> usize { data.len() }
///
/// let list = candidates![
///   "portable" => Caps::NONE, KernelTier::Portable => portable as fn(&[u8]) -> usize,
/// ];
/// assert_eq!(list.len(), 1);
/// ```
#[macro_export]
macro_rules! candidates {
  ($($name:literal => $requires:expr, $tier:expr => $func:expr),+ $(,)?) => {
    &[$($crate::dispatch::Candidate::new($name, $requires, $tier, $func)),+]
  };
}
