//! One-article streaming decode with running CRC-32.

use checksum::Crc32State;

use crate::buffer::DecodeBuffer;
use crate::codec::Codec;
use crate::error::{DecodeError, verify_crc32};
use crate::state::{DecodeState, Mode};

/// Decoded bytes of one stream and their CRC-32.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoded {
  pub data: Vec<u8>,
  pub crc32: u32,
}

/// Decodes chunks as they arrive and checksums the output.
///
/// ```
/// use yenc::{Codec, Mode, StreamDecoder};
///
/// let codec = Codec::detect();
/// let mut stream = StreamDecoder::new(&codec, Mode::Plain);
/// stream.feed(&[0x6B, 0x3D]);
/// stream.feed(&[0x41]);
/// let decoded = stream.finish().unwrap();
/// assert_eq!(decoded.data, [0x41, 0xD7]);
/// assert_eq!(decoded.crc32, codec.crc32(&[0x41, 0xD7]));
/// ```
#[derive(Debug)]
pub struct StreamDecoder<'a> {
  codec: &'a Codec,
  state: DecodeState,
  crc: Crc32State,
  buffer: DecodeBuffer,
}

impl<'a> StreamDecoder<'a> {
  #[must_use]
  pub fn new(codec: &'a Codec, mode: Mode) -> Self {
    Self::with_buffer(codec, mode, DecodeBuffer::new())
  }

  /// Decode into `buffer`, reusing its allocation. Existing contents are dropped.
  #[must_use]
  pub fn with_buffer(codec: &'a Codec, mode: Mode, mut buffer: DecodeBuffer) -> Self {
    buffer.clear();
    let mut crc = Crc32State::new();
    codec.crc_init(&mut crc);
    Self {
      codec,
      state: DecodeState::new(mode),
      crc,
      buffer,
    }
  }

  /// Decode `chunk` and fold its output into the running CRC.
  ///
  /// Returns the number of bytes this chunk produced.
  pub fn feed(&mut self, chunk: &[u8]) -> usize {
    let start = self.buffer.len();
    let written = self.buffer.decode_from(self.codec, chunk, &mut self.state);
    self.codec.crc_update(&mut self.crc, &self.buffer.as_slice()[start..]);
    written
  }

  /// Bytes decoded so far.
  #[inline]
  #[must_use]
  pub fn decoded(&self) -> &[u8] {
    self.buffer.as_slice()
  }

  #[inline]
  #[must_use]
  pub const fn state(&self) -> DecodeState {
    self.state
  }

  /// CRC-32 of the bytes decoded so far.
  #[inline]
  #[must_use]
  pub fn crc32(&self) -> u32 {
    self.codec.crc_finish(&self.crc)
  }

  /// End the stream.
  ///
  /// # Errors
  ///
  /// [`DecodeError::TruncatedEscape`] if the last chunk ended on an escape marker.
  pub fn finish(mut self) -> Result<Decoded, DecodeError> {
    if let Err(err) = self.state.finish() {
      tracing::debug!(decoded = self.buffer.len(), "stream truncated inside escape");
      return Err(err);
    }
    let crc32 = self.crc32();
    Ok(Decoded {
      data: self.buffer.unbind(),
      crc32,
    })
  }

  /// End the stream and check the result against the article's CRC-32.
  ///
  /// # Errors
  ///
  /// [`DecodeError::TruncatedEscape`] as for [`finish`](Self::finish), or
  /// [`DecodeError::CrcMismatch`] if the checksum differs.
  pub fn finish_verified(self, expected: u32) -> Result<Decoded, DecodeError> {
    let decoded = self.finish()?;
    if let Err(err) = verify_crc32(expected, decoded.crc32) {
      tracing::debug!(
        expected,
        actual = decoded.crc32,
        len = decoded.data.len(),
        "CRC32 mismatch"
      );
      return Err(err);
    }
    Ok(decoded)
  }
}
