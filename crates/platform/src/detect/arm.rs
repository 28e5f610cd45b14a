//! aarch64/arm detection.
//!
//! User code cannot execute the ID register reads directly, so on Linux and
//! Android the kernel's `/proc/cpuinfo` feature list is the source of truth.
//! Elsewhere only compile-time features are reported.

use crate::caps::Caps;

#[cfg(all(feature = "std", any(target_os = "linux", target_os = "android")))]
pub(super) fn detect() -> Caps {
  std::fs::read_to_string("/proc/cpuinfo")
    .map(|text| super::parse_cpuinfo(&text))
    .unwrap_or(Caps::NONE)
}

#[cfg(not(all(feature = "std", any(target_os = "linux", target_os = "android"))))]
pub(super) fn detect() -> Caps {
  Caps::NONE
}
