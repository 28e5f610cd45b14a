//! Process-wide publication of the [`Codec`].
//!
//! ```text
//! Uninitialized ──init_dispatch()──▶ Fixed (immutable for the process lifetime)
//! ```
//!
//! Publication goes through a `OnceLock`, so racing initializers agree on
//! one winner and readers never take a lock.

use std::sync::OnceLock;

use crate::codec::Codec;
use crate::config::DispatchConfig;

static CODEC: OnceLock<Codec> = OnceLock::new();

/// Probe the CPU once, select kernels, and publish the codec.
///
/// Later calls return the already-published codec.
pub fn init_dispatch() -> &'static Codec {
  init_dispatch_with(DispatchConfig::default())
}

/// [`init_dispatch`] with selection overrides.
///
/// Only the first call's config takes effect. A later call with a different
/// config logs a warning and returns the codec already published.
pub fn init_dispatch_with(config: DispatchConfig) -> &'static Codec {
  let mut fresh = false;
  let codec = CODEC.get_or_init(|| {
    fresh = true;
    Codec::with_config(platform::caps(), config)
  });

  if fresh {
    tracing::info!(
      decoder = codec.decoder_name(),
      decode_accelerated = codec.decode_accelerated(),
      crc = codec.crc_name(),
      crc_accelerated = codec.crc_accelerated(),
      caps = %codec.caps(),
      %config,
      "yEnc dispatch initialized"
    );
  } else if codec.config() != config {
    tracing::warn!(
      requested = %config,
      active = %codec.config(),
      "yEnc dispatch already initialized; ignoring new config"
    );
  }

  codec
}

/// The published codec.
///
/// # Panics
///
/// If [`init_dispatch`] has not run yet.
#[track_caller]
pub fn codec() -> &'static Codec {
  match CODEC.get() {
    Some(codec) => codec,
    None => panic!("yenc::codec() called before yenc::init_dispatch()"),
  }
}

/// The published codec, or `None` before [`init_dispatch`].
#[inline]
#[must_use]
pub fn try_codec() -> Option<&'static Codec> {
  CODEC.get()
}
