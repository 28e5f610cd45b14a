//! Error types for stream classification.
//!
//! Decoding itself never fails; these describe what the caller learns at the
//! end of a stream.

use thiserror::Error;

/// End-of-stream classification failures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
  /// The stream ended between an escape marker and its payload byte.
  #[error("stream ended inside an escape sequence")]
  TruncatedEscape,

  /// The decoded bytes do not match the CRC32 carried by the article.
  #[error("CRC32 mismatch: expected {expected:#010x}, computed {actual:#010x}")]
  CrcMismatch { expected: u32, actual: u32 },
}

/// Compare a computed CRC32 against the expected one.
///
/// # Errors
///
/// [`DecodeError::CrcMismatch`] when the values differ.
///
/// ```
/// use yenc::{DecodeError, verify_crc32};
///
/// assert!(verify_crc32(0xCBF4_3926, 0xCBF4_3926).is_ok());
/// assert_eq!(
///   verify_crc32(1, 2),
///   Err(DecodeError::CrcMismatch { expected: 1, actual: 2 })
/// );
/// ```
#[inline]
pub const fn verify_crc32(expected: u32, actual: u32) -> Result<(), DecodeError> {
  if expected == actual {
    Ok(())
  } else {
    Err(DecodeError::CrcMismatch { expected, actual })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages() {
    assert_eq!(
      DecodeError::TruncatedEscape.to_string(),
      "stream ended inside an escape sequence"
    );
    assert_eq!(
      DecodeError::CrcMismatch {
        expected: 0xCBF4_3926,
        actual: 0x1,
      }
      .to_string(),
      "CRC32 mismatch: expected 0xcbf43926, computed 0x00000001"
    );
  }
}
