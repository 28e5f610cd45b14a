//! Programmatic dispatch configuration.
//!
//! The application decides where these values come from (CLI flag,
//! environment, config file); this crate only parses and applies them.
//!
//! ```
//! use yenc::config::{DispatchConfig, Force};
//!
//! let config = DispatchConfig {
//!   decode: "portable".parse().unwrap(),
//!   crc: Force::Auto,
//! };
//! assert_eq!(config.to_string(), "decode=portable crc=auto");
//! ```

use core::fmt;
use core::str::FromStr;

use platform::Caps;
use thiserror::Error;

/// Per-function override of the automatic selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Force {
  /// Most specialized kernel the detected capabilities permit.
  #[default]
  Auto,
  /// Always the portable kernel.
  Portable,
}

impl Force {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Portable => "portable",
    }
  }

  /// Capabilities the selector may use under this override.
  #[inline]
  #[must_use]
  pub const fn clamp(self, caps: Caps) -> Caps {
    match self {
      Self::Auto => caps,
      Self::Portable => Caps::NONE,
    }
  }
}

impl fmt::Display for Force {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// An unrecognized [`Force`] value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown kernel override `{value}` (expected `auto` or `portable`)")]
pub struct ParseForceError {
  value: String,
}

impl ParseForceError {
  /// The rejected input.
  #[must_use]
  pub fn value(&self) -> &str {
    &self.value
  }
}

impl FromStr for Force {
  type Err = ParseForceError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("auto") {
      Ok(Self::Auto)
    } else if s.eq_ignore_ascii_case("portable") {
      Ok(Self::Portable)
    } else {
      Err(ParseForceError { value: s.to_owned() })
    }
  }
}

/// Selection overrides for the decoder and the CRC kernel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DispatchConfig {
  pub decode: Force,
  pub crc: Force,
}

impl DispatchConfig {
  /// Portable kernels for both functions.
  pub const PORTABLE: Self = Self {
    decode: Force::Portable,
    crc: Force::Portable,
  };
}

impl fmt::Display for DispatchConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "decode={} crc={}", self.decode, self.crc)
  }
}

#[cfg(test)]
mod tests {
  use platform::caps::x86;

  use super::*;

  #[test]
  fn test_parse_is_case_insensitive() {
    assert_eq!("AUTO".parse::<Force>(), Ok(Force::Auto));
    assert_eq!(" Portable ".parse::<Force>(), Ok(Force::Portable));
  }

  #[test]
  fn test_parse_rejects_unknown() {
    let err = "avx512".parse::<Force>().unwrap_err();
    assert_eq!(err.value(), "avx512");
    assert_eq!(
      err.to_string(),
      "unknown kernel override `avx512` (expected `auto` or `portable`)"
    );
  }

  #[test]
  fn test_clamp() {
    let caps = x86::SSE2 | x86::AVX2;
    assert_eq!(Force::Auto.clamp(caps), caps);
    assert_eq!(Force::Portable.clamp(caps), Caps::NONE);
  }

  #[test]
  fn test_display_round_trips() {
    for f in [Force::Auto, Force::Portable] {
      assert_eq!(f.to_string().parse::<Force>(), Ok(f));
    }
    assert_eq!(DispatchConfig::default().to_string(), "decode=auto crc=auto");
  }
}
