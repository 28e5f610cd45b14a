//! Byte-at-a-time decoder.

use super::check_capacity;
use crate::state::{DecodeState, Mode, decode_scalar};

#[track_caller]
pub(super) fn decode(src: &[u8], dst: &mut [u8], state: &mut DecodeState) -> usize {
  check_capacity(src, dst);
  let (written, carry) = match state.mode() {
    Mode::Plain => decode_scalar::<false>(src, dst, 0, state.carry()),
    Mode::Nntp => decode_scalar::<true>(src, dst, 0, state.carry()),
  };
  state.set_carry(carry);
  written
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::state::Carry;

  fn run(src: &[u8], state: &mut DecodeState) -> Vec<u8> {
    let mut out = vec![0u8; src.len()];
    let n = decode(src, &mut out, state);
    out.truncate(n);
    out
  }

  #[test]
  fn test_escape_pair_decodes_to_one_byte() {
    let mut state = DecodeState::plain();
    assert_eq!(run(&[0x6B, 0x3D, 0x41], &mut state), [0x41, 0xD7]);
    assert!(!state.is_pending_escape());
  }

  #[test]
  fn test_crlf_stripped() {
    let mut state = DecodeState::plain();
    assert_eq!(run(b"kk\r\nkk\r\n", &mut state), [0x41; 4]);
    assert_eq!(state.carry(), Carry::LineStart);
  }

  #[test]
  fn test_nntp_dot_unstuffing() {
    // "..k" at line start: first dot removed, second dot is data.
    let mut state = DecodeState::nntp();
    assert_eq!(run(b"..k\r\n.k", &mut state), [b'.'.wrapping_sub(42), 0x41, 0x41]);
  }

  #[test]
  fn test_plain_keeps_leading_dot() {
    let mut state = DecodeState::plain();
    assert_eq!(run(b".k", &mut state), [b'.'.wrapping_sub(42), 0x41]);
  }

  #[test]
  fn test_trailing_escape_is_carried() {
    let mut state = DecodeState::plain();
    assert_eq!(run(b"k=", &mut state), [0x41]);
    assert!(state.is_pending_escape());
    assert_eq!(run(&[0x41], &mut state), [0xD7]);
    assert!(!state.is_pending_escape());
  }

  #[test]
  fn test_empty_input() {
    let mut state = DecodeState::with_carry(Mode::Nntp, Carry::Escape);
    assert!(run(b"", &mut state).is_empty());
    assert!(state.is_pending_escape());
  }

  #[test]
  #[should_panic(expected = "too small")]
  fn test_short_output_panics() {
    let mut out = [0u8; 2];
    let _ = decode(b"kkk", &mut out, &mut DecodeState::plain());
  }
}
