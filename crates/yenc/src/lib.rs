//! yEnc decoding with runtime kernel dispatch.
//!
//! A [`Codec`] pairs the fastest decoder and CRC-32 kernel the running CPU
//! supports. It is selected once by [`init_dispatch`] and shared by every
//! worker as `&'static Codec`; nothing is written after publication.
//!
//! Chunked input is handled by threading a [`DecodeState`] between calls.
//! It remembers a pending `=` escape, a `\r` whose `\n` is still to come,
//! and (for raw NNTP bodies) whether the next byte starts a line.
//!
//! # Quick Start
//!
//! ```
//! use yenc::{Crc32State, DecodeState};
//!
//! let codec = yenc::init_dispatch();
//!
//! let mut state = DecodeState::nntp();
//! let mut crc = Crc32State::new();
//! codec.crc_init(&mut crc);
//!
//! let mut out = vec![0u8; 64];
//! let mut len = 0;
//! for chunk in [&b"..kk="[..], &[0x41, b'\r'][..], &b"\nk"[..]] {
//!   let n = codec.decode(chunk, &mut out[len..], &mut state);
//!   codec.crc_update(&mut crc, &out[len..len + n]);
//!   len += n;
//! }
//! state.finish()?;
//!
//! assert_eq!(&out[..len], &[0x04, 0x41, 0x41, 0xD7, 0x41]);
//! assert_eq!(codec.crc_finish(&crc), codec.crc32(&out[..len]));
//! # Ok::<(), yenc::DecodeError>(())
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod buffer;
mod codec;
pub mod config;
pub mod decode;
mod dispatch;
mod error;
mod state;
mod stream;

pub use buffer::DecodeBuffer;
pub use checksum::Crc32State;
pub use codec::Codec;
pub use config::{DispatchConfig, Force};
pub use decode::DecodeFn;
pub use dispatch::{codec, init_dispatch, init_dispatch_with, try_codec};
pub use error::{DecodeError, verify_crc32};
pub use state::{Carry, DecodeState, ESCAPE, ESCAPE_OFFSET, Mode, OFFSET};
pub use stream::{Decoded, StreamDecoder};
