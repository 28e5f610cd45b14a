//! The dispatch table: one decoder and one CRC-32 triple.

use core::fmt;

use backend::Selected;
use checksum::crc32::{self, Crc32Kernel, Crc32State};
use platform::{Arch, Caps};

use crate::config::DispatchConfig;
use crate::decode::{self, DecodeFn};
use crate::state::DecodeState;

/// Immutable strategy object holding the selected kernels.
///
/// Built once per process by [`crate::init_dispatch`], or directly with
/// [`Codec::for_caps`] when a caller wants to inject its own selection.
/// Every method is a single indirect call; nothing is re-probed.
///
/// ```
/// use platform::Caps;
/// use yenc::{Codec, Crc32State, DecodeState};
///
/// let codec = Codec::for_caps(Caps::NONE);
/// assert!(!codec.decode_accelerated());
///
/// let mut state = DecodeState::plain();
/// let mut out = [0u8; 3];
/// let n = codec.decode(&[0x6B, 0x3D, 0x41], &mut out, &mut state);
/// assert_eq!(&out[..n], &[0x41, 0xD7]);
///
/// let mut crc = Crc32State::new();
/// codec.crc_init(&mut crc);
/// codec.crc_update(&mut crc, b"123456789");
/// assert_eq!(codec.crc_finish(&crc), 0xCBF4_3926);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Codec {
  caps: Caps,
  config: DispatchConfig,
  decoder: Selected<DecodeFn>,
  crc: Selected<Crc32Kernel>,
}

impl Codec {
  /// Select the best kernels `caps` permits.
  #[must_use]
  pub fn for_caps(caps: Caps) -> Self {
    Self::with_config(caps, DispatchConfig::default())
  }

  /// Select kernels for `caps`, subject to per-function overrides.
  #[must_use]
  pub fn with_config(caps: Caps, config: DispatchConfig) -> Self {
    Self {
      caps,
      config,
      decoder: decode::select(config.decode.clamp(caps)),
      crc: crc32::select(config.crc.clamp(caps)),
    }
  }

  /// Portable kernels only.
  #[must_use]
  pub fn portable() -> Self {
    Self::for_caps(Caps::NONE)
  }

  /// Select for this machine's capabilities without publishing anything.
  #[must_use]
  pub fn detect() -> Self {
    Self::for_caps(platform::caps())
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Decode
  // ───────────────────────────────────────────────────────────────────────────

  /// Decode `src` into the front of `dst`, returning the number of bytes written.
  ///
  /// `state` carries partial escapes, line breaks and line-start position
  /// from the previous call on the same stream.
  ///
  /// # Panics
  ///
  /// If `dst.len() < src.len()`.
  #[inline]
  #[track_caller]
  pub fn decode(&self, src: &[u8], dst: &mut [u8], state: &mut DecodeState) -> usize {
    (self.decoder.func)(src, dst, state)
  }

  // ───────────────────────────────────────────────────────────────────────────
  // CRC-32
  // ───────────────────────────────────────────────────────────────────────────

  #[inline]
  pub fn crc_init(&self, state: &mut Crc32State) {
    (self.crc.func.init)(state);
  }

  #[inline]
  pub fn crc_update(&self, state: &mut Crc32State, data: &[u8]) {
    (self.crc.func.update)(state, data);
  }

  #[inline]
  #[must_use]
  pub fn crc_finish(&self, state: &Crc32State) -> u32 {
    (self.crc.func.finish)(state)
  }

  /// One-shot CRC-32 of `data`.
  #[inline]
  #[must_use]
  pub fn crc32(&self, data: &[u8]) -> u32 {
    self.crc.func.checksum(data)
  }

  // ───────────────────────────────────────────────────────────────────────────
  // Diagnostics
  // ───────────────────────────────────────────────────────────────────────────

  /// Whether the decoder uses a vector ISA extension.
  #[inline]
  #[must_use]
  pub const fn decode_accelerated(&self) -> bool {
    self.decoder.is_accelerated()
  }

  /// Whether the CRC kernel uses a hardware CRC or carry-less multiply.
  #[inline]
  #[must_use]
  pub const fn crc_accelerated(&self) -> bool {
    self.crc.is_accelerated()
  }

  #[inline]
  #[must_use]
  pub const fn decoder_name(&self) -> &'static str {
    self.decoder.name
  }

  #[inline]
  #[must_use]
  pub const fn crc_name(&self) -> &'static str {
    self.crc.name
  }

  /// The capabilities this codec was built for.
  #[inline]
  #[must_use]
  pub const fn caps(&self) -> Caps {
    self.caps
  }

  #[inline]
  #[must_use]
  pub const fn config(&self) -> DispatchConfig {
    self.config
  }
}

impl fmt::Display for Codec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "decode={} crc={} ({})",
      self.decoder.name,
      self.crc.name,
      Arch::current()
    )
  }
}
