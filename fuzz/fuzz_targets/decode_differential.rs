//! Every decoder the machine can run must agree with the portable one,
//! from every starting carry.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use yenc::{Carry, DecodeState, Mode, decode};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  nntp: bool,
  carry: u8,
}

fuzz_target!(|input: Input| {
  let mode = if input.nntp { Mode::Nntp } else { Mode::Plain };
  let carry = match input.carry % 4 {
    0 => Carry::LineStart,
    1 => Carry::Mid,
    2 => Carry::Escape,
    _ => Carry::Cr,
  };
  let initial = DecodeState::with_carry(mode, carry);
  let src = &input.data;

  let mut want_state = initial;
  let mut want = vec![0u8; src.len()];
  let n = decode::portable(src, &mut want, &mut want_state);
  want.truncate(n);

  let detected = platform::caps();
  for candidate in decode::candidates().iter().filter(|c| detected.has(c.requires)) {
    let mut state = initial;
    let mut got = vec![0u8; src.len()];
    let m = (candidate.func)(src, &mut got, &mut state);
    got.truncate(m);
    assert_eq!(got, want, "{} output mismatch", candidate.name);
    assert_eq!(state, want_state, "{} state mismatch", candidate.name);
  }
});
