//! CPU capability representation.
//!
//! [`Caps`] is a 64-bit bitset. Each bit corresponds to one ISA extension
//! that some decoder or CRC kernel depends on.
//!
//! # Bit Layout
//!
//! - Bits 0-31: x86/x86_64 features
//! - Bits 32-63: aarch64/arm features
//!
//! # Usage
//!
//! ```
//! use platform::caps::{Caps, aarch64, x86};
//!
//! let c = x86::SSE2 | x86::AVX2;
//! assert!(c.has(x86::AVX2));
//! assert!(!c.has(x86::PCLMUL_READY));
//! assert!(c.has(Caps::NONE));
//! assert!(!c.has(aarch64::NEON));
//! ```

use core::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Core Capability Type
// ─────────────────────────────────────────────────────────────────────────────

/// CPU capabilities: a feature bitset.
///
/// `Caps` is `Copy`, `Send`, and `Sync`. It is computed once per process and
/// then passed by value.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(u64);

impl Caps {
  /// No features. Every portable kernel requires exactly this.
  pub const NONE: Self = Self(0);

  /// Create a capability set with a single bit set.
  #[inline]
  #[must_use]
  pub const fn bit(bit: u8) -> Self {
    debug_assert!(bit < 64);
    Self(1u64 << bit)
  }

  /// Raw bit representation.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u64 {
    self.0
  }

  /// Returns `true` if every feature in `required` is present in `self`.
  #[inline]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    self.0 & required.0 == required.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Intersection of two capability sets.
  #[inline]
  #[must_use]
  pub const fn intersection(self, other: Self) -> Self {
    Self(self.0 & other.0)
  }

  /// Returns `true` if no features are set.
  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Number of features set.
  #[inline]
  #[must_use]
  pub const fn count(self) -> u32 {
    self.0.count_ones()
  }

  /// Iterate the names of the individual features present in this set.
  pub fn names(self) -> impl Iterator<Item = &'static str> {
    NAMES.iter().filter(move |(cap, _)| self.has(*cap)).map(|&(_, name)| name)
  }
}

impl core::ops::BitOr for Caps {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self {
    self.union(rhs)
  }
}

impl core::ops::BitAnd for Caps {
  type Output = Self;

  #[inline]
  fn bitand(self, rhs: Self) -> Self {
    self.intersection(rhs)
  }
}

impl core::ops::BitOrAssign for Caps {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    self.0 |= rhs.0;
  }
}

impl fmt::Debug for Caps {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.names()).finish()
  }
}

/// Space-separated feature names, or `none`.
impl fmt::Display for Caps {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_empty() {
      return f.write_str("none");
    }
    let mut first = true;
    for name in self.names() {
      if !first {
        f.write_str(" ")?;
      }
      f.write_str(name)?;
      first = false;
    }
    Ok(())
  }
}

const NAMES: &[(Caps, &str)] = &[
  (x86::SSE2, "sse2"),
  (x86::SSSE3, "ssse3"),
  (x86::SSE41, "sse4.1"),
  (x86::PCLMULQDQ, "pclmulqdq"),
  (x86::AVX2, "avx2"),
  (aarch64::NEON, "neon"),
  (aarch64::CRC, "crc"),
  (aarch64::PMULL, "pmull"),
];

// ─────────────────────────────────────────────────────────────────────────────
// Architecture Identification
// ─────────────────────────────────────────────────────────────────────────────

/// Target architecture enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Arch {
  /// x86_64 / AMD64
  X86_64,
  /// 32-bit x86
  X86,
  /// AArch64 / ARM64
  Aarch64,
  /// 32-bit ARM
  Arm,
  /// Anything else: only portable kernels are registered.
  Other,
}

impl Arch {
  /// The architecture this binary was compiled for.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    #[cfg(target_arch = "x86_64")]
    {
      Self::X86_64
    }
    #[cfg(target_arch = "x86")]
    {
      Self::X86
    }
    #[cfg(target_arch = "aarch64")]
    {
      Self::Aarch64
    }
    #[cfg(target_arch = "arm")]
    {
      Self::Arm
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64", target_arch = "arm")))]
    {
      Self::Other
    }
  }

  /// Human-readable architecture name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::X86 => "x86",
      Self::Aarch64 => "aarch64",
      Self::Arm => "arm",
      Self::Other => "other",
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// x86/x86_64 Features (bits 0-31)
// ─────────────────────────────────────────────────────────────────────────────

/// x86/x86_64 feature bits.
pub mod x86 {
  use super::Caps;

  /// SSE2 (CPUID.1:EDX[26]). Baseline on x86_64.
  pub const SSE2: Caps = Caps::bit(0);
  /// SSSE3 (CPUID.1:ECX[9]).
  pub const SSSE3: Caps = Caps::bit(1);
  /// SSE4.1 (CPUID.1:ECX[19]).
  pub const SSE41: Caps = Caps::bit(2);
  /// PCLMULQDQ (CPUID.1:ECX[1]).
  pub const PCLMULQDQ: Caps = Caps::bit(3);
  /// AVX2 (CPUID.7.0:EBX[5]), only reported when the OS saves YMM state.
  pub const AVX2: Caps = Caps::bit(4);

  /// Everything the PCLMULQDQ CRC folding kernel needs.
  pub const PCLMUL_READY: Caps = PCLMULQDQ.union(SSE41);
  /// Everything the 256-bit decoder needs.
  pub const AVX2_READY: Caps = AVX2.union(SSE2);
}

// ─────────────────────────────────────────────────────────────────────────────
// aarch64/arm Features (bits 32-63)
// ─────────────────────────────────────────────────────────────────────────────

/// aarch64/arm feature bits.
pub mod aarch64 {
  use super::Caps;

  /// Advanced SIMD (`neon` on arm, `asimd` on aarch64).
  pub const NEON: Caps = Caps::bit(32);
  /// ARMv8 CRC32 instructions.
  pub const CRC: Caps = Caps::bit(33);
  /// Polynomial multiply long.
  pub const PMULL: Caps = Caps::bit(34);

  /// Everything the hardware CRC kernel needs.
  pub const CRC_READY: Caps = CRC;
}
