//! `/proc/cpuinfo` feature-list parsing.

use crate::caps::{Caps, aarch64};

/// Extract ARM features from the text of `/proc/cpuinfo`.
///
/// Only lines whose key starts with `Features` (case-insensitive) are
/// considered. Their value is split on whitespace and matched token by token:
///
/// | Token            | Feature                |
/// |------------------|------------------------|
/// | `neon`, `asimd`  | [`aarch64::NEON`]      |
/// | `crc32`          | [`aarch64::CRC`]       |
/// | `pmull`          | [`aarch64::PMULL`]     |
///
/// Anything else, including garbage input, yields [`Caps::NONE`].
///
/// # Example
///
/// ```
/// use platform::caps::aarch64;
///
/// let caps = platform::parse_cpuinfo("processor : 0\nFeatures : fp asimd crc32\n");
/// assert!(caps.has(aarch64::NEON | aarch64::CRC));
/// assert!(!caps.has(aarch64::PMULL));
/// ```
#[must_use]
pub fn parse_cpuinfo(text: &str) -> Caps {
  let mut caps = Caps::NONE;

  for line in text.lines() {
    let Some((key, value)) = line.split_once(':') else {
      continue;
    };
    let key = key.trim_start();
    let is_features = key
      .get(..8)
      .is_some_and(|prefix| prefix.eq_ignore_ascii_case("features"));
    if !is_features {
      continue;
    }

    for token in value.split_ascii_whitespace() {
      match token {
        "neon" | "asimd" => caps |= aarch64::NEON,
        "crc32" => caps |= aarch64::CRC,
        "pmull" => caps |= aarch64::PMULL,
        _ => {}
      }
    }
  }

  caps
}
