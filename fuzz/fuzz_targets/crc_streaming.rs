//! Streaming CRC-32 through every kernel must match a one-shot reference.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Crc32State, crc32};
use crc_fast::CrcAlgorithm;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates.
  chunk_sizes: Vec<usize>,
  split: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let expected = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, data) as u32;

  let detected = platform::caps();
  for candidate in crc32::candidates().iter().filter(|c| detected.has(c.requires)) {
    let k = candidate.func;
    let mut state = Crc32State::new();
    (k.init)(&mut state);

    let mut offset = 0;
    let mut chunk_idx = 0;
    while offset < data.len() {
      let chunk_size = if input.chunk_sizes.is_empty() {
        1
      } else {
        (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 4096).max(1)
      };
      let end = (offset + chunk_size).min(data.len());
      (k.update)(&mut state, &data[offset..end]);
      offset = end;
      chunk_idx += 1;
    }

    assert_eq!((k.finish)(&state), expected, "{} streaming mismatch", candidate.name);
  }

  let split = if data.is_empty() { 0 } else { input.split % (data.len() + 1) };
  let (a, b) = data.split_at(split);
  let combined = crc32::combine(crc32::PORTABLE.checksum(a), crc32::PORTABLE.checksum(b), b.len());
  assert_eq!(combined, expected, "combine mismatch at {split}");
});
