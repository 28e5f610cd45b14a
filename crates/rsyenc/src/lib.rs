//! Runtime-dispatched yEnc decoding and CRC-32 verification.
//!
//! `rsyenc` decodes yEnc article bodies and checksums the result with the
//! fastest kernels the running CPU supports. Kernels are chosen once per
//! process; afterwards every call is a single indirect jump.
//!
//! # Quick Start
//!
//! ```
//! use rsyenc::{DecodeState, Mode};
//!
//! // Select kernels once, early in `main`.
//! let codec = rsyenc::init_dispatch();
//!
//! let mut state = DecodeState::new(Mode::Plain);
//! let mut out = [0u8; 3];
//! let n = codec.decode(&[0x6B, 0x3D, 0x41], &mut out, &mut state);
//! assert_eq!(&out[..n], &[0x41, 0xD7]);
//! assert!(state.finish().is_ok());
//! ```
//!
//! # Free Functions
//!
//! [`decode`], [`crc32`] and [`crc32_update`] go through the published codec
//! and initialize it on first use.
//!
//! ```
//! let mut state = rsyenc::DecodeState::plain();
//! let mut out = vec![0u8; 4];
//! let n = rsyenc::decode(b"kk\r\n", &mut out, &mut state);
//! assert_eq!(rsyenc::crc32(&out[..n]), rsyenc::crc32_update(rsyenc::crc32(&[0x41]), &[0x41]));
//! ```
//!
//! # Diagnostics
//!
//! ```
//! let codec = rsyenc::init_dispatch();
//! println!("{codec} caps=[{}]", rsyenc::caps());
//! ```

// =============================================================================
// Codec
// =============================================================================

pub use yenc::{
  Carry, Codec, Crc32State, DecodeBuffer, DecodeError, DecodeState, Decoded, DispatchConfig, Force, Mode,
  StreamDecoder, codec, config, init_dispatch, init_dispatch_with, try_codec, verify_crc32,
};

// =============================================================================
// Checksums
// =============================================================================

pub use checksum::{Checksum, ChecksumCombine, Crc32, Crc32Kernel};

/// CRC-32 building blocks: kernel candidates, `combine`, the bitwise reference.
pub mod crc32 {
  pub use checksum::crc32::{PORTABLE, PORTABLE_NAME, candidates, combine, reference, select};
}

/// Decoder candidates and the portable decoder.
pub mod decode {
  pub use yenc::decode::{DecodeFn, PORTABLE_NAME, candidates, portable, select};
}

// =============================================================================
// Platform
// =============================================================================

pub use platform::{Arch, Caps, caps};

// =============================================================================
// Free Functions
// =============================================================================

/// Decode with the process-wide codec, initializing it if needed.
///
/// # Panics
///
/// If `dst.len() < src.len()`.
#[inline]
#[track_caller]
pub fn decode(src: &[u8], dst: &mut [u8], state: &mut DecodeState) -> usize {
  init_dispatch().decode(src, dst, state)
}

/// One-shot CRC-32 with the process-wide codec.
#[inline]
#[must_use]
pub fn crc32(data: &[u8]) -> u32 {
  init_dispatch().crc32(data)
}

/// Extend a finished CRC-32 with more bytes.
#[inline]
#[must_use]
pub fn crc32_update(crc: u32, data: &[u8]) -> u32 {
  let codec = init_dispatch();
  let mut state = Crc32State::resume(crc);
  codec.crc_update(&mut state, data);
  codec.crc_finish(&state)
}
