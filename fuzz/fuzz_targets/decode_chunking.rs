//! Decoding in arbitrary chunks must match decoding in one call.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use yenc::{Codec, DecodeState, Mode};

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  nntp: bool,
  /// Chunk sizes for successive decode calls.
  chunk_sizes: Vec<u8>,
}

fn decode_all(codec: &Codec, src: &[u8], state: &mut DecodeState) -> Vec<u8> {
  let mut out = vec![0u8; src.len()];
  let n = codec.decode(src, &mut out, state);
  out.truncate(n);
  out
}

fuzz_target!(|input: Input| {
  let mode = if input.nntp { Mode::Nntp } else { Mode::Plain };
  let codec = Codec::detect();
  let data = &input.data;

  let mut one = DecodeState::new(mode);
  let expected = decode_all(&codec, data, &mut one);
  assert!(expected.len() <= data.len());

  let mut state = DecodeState::new(mode);
  let mut got = Vec::with_capacity(expected.len());
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      usize::from(input.chunk_sizes[chunk_idx % input.chunk_sizes.len()]).max(1)
    };
    let end = (offset + chunk_size).min(data.len());
    got.extend(decode_all(&codec, &data[offset..end], &mut state));
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(got, expected, "chunked decode mismatch");
  assert_eq!(state, one, "chunked decode state mismatch");
});
