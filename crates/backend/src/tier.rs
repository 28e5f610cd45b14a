//! Kernel acceleration tiers.
//!
//! | Tier | Name | Used by |
//! |------|------|---------|
//! | 0 | Reference | bitwise CRC, test oracle only |
//! | 1 | Portable | slice-by-8 CRC, byte-at-a-time decoder |
//! | 2 | HwCrc | ARMv8 `crc32` instructions |
//! | 3 | Folding | PCLMULQDQ carry-less folding |
//! | 4 | Vector | 128-bit decoders (SSE2, NEON) |
//! | 5 | Wide | 256-bit decoder (AVX2) |

use core::fmt;

/// Kernel acceleration tier.
///
/// Tiers implement `Ord` with higher tiers being "greater", so
/// `tier > KernelTier::Portable` asks "is this hardware-accelerated?".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum KernelTier {
  /// Tier 0: bit-at-a-time reference implementation.
  #[default]
  Reference = 0,

  /// Tier 1: table-driven or byte-at-a-time code with no ISA requirements.
  Portable = 1,

  /// Tier 2: dedicated checksum instructions.
  HwCrc = 2,

  /// Tier 3: carry-less multiply folding.
  Folding = 3,

  /// Tier 4: 128-bit SIMD byte processing.
  Vector = 4,

  /// Tier 5: 256-bit SIMD byte processing.
  Wide = 5,
}

impl KernelTier {
  /// Convert to numeric value.
  #[inline]
  #[must_use]
  pub const fn as_u8(self) -> u8 {
    self as u8
  }

  /// Human-readable tier name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Reference => "reference",
      Self::Portable => "portable",
      Self::HwCrc => "hwcrc",
      Self::Folding => "folding",
      Self::Vector => "vector",
      Self::Wide => "wide",
    }
  }

  /// Whether kernels of this tier depend on an optional ISA extension.
  #[inline]
  #[must_use]
  pub const fn is_accelerated(self) -> bool {
    matches!(self, Self::HwCrc | Self::Folding | Self::Vector | Self::Wide)
  }
}

impl fmt::Display for KernelTier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
