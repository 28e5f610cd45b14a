//! Capability detection.
//!
//! [`probe()`] queries the hardware and OS every time it is called.
//! [`caps()`] runs it once and caches the result in a `OnceLock` (std) or
//! falls back to the compile-time set (no_std).

use crate::caps::Caps;

#[cfg(target_arch = "x86_64")]
mod x86;

#[cfg(any(target_arch = "aarch64", target_arch = "arm"))]
mod arm;

mod cpuinfo;
pub use cpuinfo::parse_cpuinfo;


// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Detected CPU capabilities, probed once per process.
///
/// With `std` the first call runs [`probe()`] and every later call returns the
/// cached value. Without `std` only compile-time features are reported.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  #[cfg(feature = "std")]
  {
    static CAPS: std::sync::OnceLock<Caps> = std::sync::OnceLock::new();
    *CAPS.get_or_init(probe)
  }

  #[cfg(not(feature = "std"))]
  {
    probe()
  }
}

/// Query the running CPU and OS for supported features, bypassing the cache.
///
/// Never fails: anything that cannot be determined is reported as absent.
#[must_use]
pub fn probe() -> Caps {
  if cfg!(miri) {
    return Caps::NONE;
  }
  caps_static() | runtime()
}

/// Features guaranteed by the compilation target (`-C target-feature`, `-C target-cpu`).
#[inline]
#[must_use]
pub const fn caps_static() -> Caps {
  #[allow(unused_mut)]
  let mut bits = Caps::NONE;

  #[cfg(target_feature = "sse2")]
  {
    bits = bits.union(crate::caps::x86::SSE2);
  }
  #[cfg(target_feature = "ssse3")]
  {
    bits = bits.union(crate::caps::x86::SSSE3);
  }
  #[cfg(target_feature = "sse4.1")]
  {
    bits = bits.union(crate::caps::x86::SSE41);
  }
  #[cfg(target_feature = "pclmulqdq")]
  {
    bits = bits.union(crate::caps::x86::PCLMULQDQ);
  }
  #[cfg(target_feature = "avx2")]
  {
    bits = bits.union(crate::caps::x86::AVX2);
  }
  #[cfg(target_feature = "neon")]
  {
    bits = bits.union(crate::caps::aarch64::NEON);
  }
  #[cfg(target_feature = "crc")]
  {
    bits = bits.union(crate::caps::aarch64::CRC);
  }
  // PMULL ships with the AES extension on aarch64.
  #[cfg(all(target_arch = "aarch64", target_feature = "aes"))]
  {
    bits = bits.union(crate::caps::aarch64::PMULL);
  }

  bits
}

#[inline]
fn runtime() -> Caps {
  #[cfg(target_arch = "x86_64")]
  {
    x86::detect()
  }

  #[cfg(any(target_arch = "aarch64", target_arch = "arm"))]
  {
    arm::detect()
  }

  #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "arm")))]
  {
    Caps::NONE
  }
}
