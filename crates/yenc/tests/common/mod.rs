//! Test-only yEnc encoder used to generate decoder inputs.

#![allow(dead_code)]

use yenc::{ESCAPE, ESCAPE_OFFSET, Mode, OFFSET};

/// Encode `data` as a yEnc body with CRLF line breaks every `line_len` output bytes.
///
/// Escapes NUL, LF, CR and `=`. With [`Mode::Nntp`] a `.` that would start a
/// line is dot-stuffed (doubled) the way an NNTP server would.
pub fn encode(data: &[u8], line_len: usize, mode: Mode) -> Vec<u8> {
  let mut out = Vec::with_capacity(data.len() * 2);
  let mut col = 0;
  for &byte in data {
    let shifted = byte.wrapping_add(OFFSET);
    let (escaped, value) = match shifted {
      0 | b'\n' | b'\r' | ESCAPE => (true, shifted.wrapping_add(ESCAPE_OFFSET)),
      _ => (false, shifted),
    };

    if col == 0 && mode == Mode::Nntp && !escaped && value == b'.' {
      out.push(b'.');
    }
    if escaped {
      out.push(ESCAPE);
      col += 1;
    }
    out.push(value);
    col += 1;

    if col >= line_len {
      out.extend_from_slice(b"\r\n");
      col = 0;
    }
  }
  out
}

/// Decode `src` in one call with `codec`.
pub fn decode_all(codec: &yenc::Codec, src: &[u8], state: &mut yenc::DecodeState) -> Vec<u8> {
  let mut out = vec![0u8; src.len()];
  let n = codec.decode(src, &mut out, state);
  out.truncate(n);
  out
}

/// Deterministic pseudo-random bytes.
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
  let mut x = seed | 1;
  (0..len)
    .map(|_| {
      x ^= x << 13;
      x ^= x >> 17;
      x ^= x << 5;
      x as u8
    })
    .collect()
}
