//! Decoder equivalence, chunking invariance and round-trip properties.

mod common;

use common::{decode_all, encode};
use platform::Caps;
use proptest::prelude::*;
use yenc::{Carry, Codec, DecodeState, Mode, decode};

fn arb_mode() -> impl Strategy<Value = Mode> {
  prop_oneof![Just(Mode::Plain), Just(Mode::Nntp)]
}

fn arb_carry() -> impl Strategy<Value = Carry> {
  prop_oneof![
    Just(Carry::LineStart),
    Just(Carry::Mid),
    Just(Carry::Escape),
    Just(Carry::Cr),
  ]
}

/// Bytes biased towards the characters that drive the state machine.
fn arb_wire() -> impl Strategy<Value = Vec<u8>> {
  let byte = prop_oneof![
    4 => any::<u8>(),
    1 => Just(b'='),
    1 => Just(b'\r'),
    1 => Just(b'\n'),
    1 => Just(b'.'),
  ];
  prop::collection::vec(byte, 0..2048)
}

fn arb_splits(len: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, 0..12).prop_map(move |mut splits| {
    splits.sort_unstable();
    splits.push(len);
    splits.dedup();
    splits
  })
}

fn wire_and_splits() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
  arb_wire().prop_flat_map(|data| {
    let len = data.len();
    (Just(data), arb_splits(len))
  })
}

/// Non-empty data and a position inside it.
fn data_and_position() -> impl Strategy<Value = (Vec<u8>, usize)> {
  prop::collection::vec(any::<u8>(), 1..512).prop_flat_map(|data| {
    let len = data.len();
    (Just(data), 0..len)
  })
}

fn decode_chunked(codec: &Codec, src: &[u8], splits: &[usize], state: &mut DecodeState) -> Vec<u8> {
  let mut out = Vec::new();
  let mut prev = 0;
  for &split in splits {
    out.extend(decode_all(codec, &src[prev..split], state));
    prev = split;
  }
  out
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(400))]

  #[test]
  fn every_decoder_matches_portable(src in arb_wire(), mode in arb_mode(), carry in arb_carry()) {
    let initial = DecodeState::with_carry(mode, carry);

    let mut want_state = initial;
    let mut want = vec![0u8; src.len()];
    let n = decode::portable(&src, &mut want, &mut want_state);
    want.truncate(n);

    let detected = platform::caps();
    for candidate in decode::candidates().iter().filter(|c| detected.has(c.requires)) {
      let mut state = initial;
      let mut got = vec![0u8; src.len()];
      let m = (candidate.func)(&src, &mut got, &mut state);
      got.truncate(m);
      prop_assert_eq!(&got, &want, "{}", candidate.name);
      prop_assert_eq!(state, want_state, "{}", candidate.name);
    }
  }

  #[test]
  fn chunking_does_not_change_output((src, splits) in wire_and_splits(), mode in arb_mode()) {
    for codec in [Codec::detect(), Codec::for_caps(Caps::NONE)] {
      let mut one = DecodeState::new(mode);
      let whole = decode_all(&codec, &src, &mut one);

      let mut chunked = DecodeState::new(mode);
      let pieces = decode_chunked(&codec, &src, &splits, &mut chunked);

      prop_assert_eq!(&pieces, &whole, "{}", codec);
      prop_assert_eq!(chunked, one, "{}", codec);
    }
  }

  #[test]
  fn crc_chunking_does_not_change_value(data in prop::collection::vec(any::<u8>(), 0..8192), chunk in 1usize..=1500) {
    let codec = Codec::detect();
    let mut state = yenc::Crc32State::new();
    codec.crc_init(&mut state);
    for piece in data.chunks(chunk) {
      codec.crc_update(&mut state, piece);
    }
    let reference = crc_fast::checksum(crc_fast::CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(codec.crc_finish(&state), reference);
  }

  #[test]
  fn encoded_data_round_trips(
    data in prop::collection::vec(any::<u8>(), 0..4096),
    line_len in 1usize..200,
    mode in arb_mode(),
  ) {
    let encoded = encode(&data, line_len, mode);
    for codec in [Codec::detect(), Codec::for_caps(Caps::NONE)] {
      let mut state = DecodeState::new(mode);
      let decoded = decode_all(&codec, &encoded, &mut state);
      prop_assert_eq!(&decoded, &data, "{}", codec);
      prop_assert!(state.finish().is_ok());
    }
  }

  #[test]
  fn split_right_after_escape((data, at) in data_and_position()) {
    // Force an escape at `at`, then split between the marker and its payload.
    let mut src: Vec<u8> = data.iter().map(|&b| if b == b'=' { b'k' } else { b }).collect();
    src.insert(at, b'=');
    let codec = Codec::detect();

    let mut one = DecodeState::plain();
    let whole = decode_all(&codec, &src, &mut one);

    let mut split = DecodeState::plain();
    let mut pieces = decode_all(&codec, &src[..=at], &mut split);
    prop_assert!(split.is_pending_escape());
    pieces.extend(decode_all(&codec, &src[at + 1..], &mut split));

    prop_assert_eq!(pieces, whole);
    prop_assert_eq!(split, one);
  }
}
