extern crate std;

use std::vec::Vec;

use crc_fast::CrcAlgorithm;
use proptest::prelude::*;

use super::*;

fn available() -> impl Iterator<Item = &'static Candidate<Crc32Kernel>> {
  let detected = platform::caps();
  candidates().iter().filter(move |c| detected.has(c.requires))
}

proptest! {
  #[test]
  fn portable_matches_reference(data in proptest::collection::vec(any::<u8>(), 0..=2048)) {
    prop_assert_eq!(portable::slice8(!0, &data), reference::update(!0, &data));
  }

  #[test]
  fn every_kernel_matches_portable(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let expected = PORTABLE.checksum(&data);
    for c in available() {
      prop_assert_eq!(c.func.checksum(&data), expected, "{}", c.name);
    }
  }

  // ─────────────────────────────────────────────────────────────────────────────
  // Cross-validation against crc-fast-rust
  // ─────────────────────────────────────────────────────────────────────────────

  #[test]
  fn crc32_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    let reference = crc_fast::checksum(CrcAlgorithm::Crc32IsoHdlc, &data) as u32;
    prop_assert_eq!(Crc32::checksum(&data), reference);
  }

  #[test]
  fn crc32_streaming_matches_crc_fast_rust(data in proptest::collection::vec(any::<u8>(), 0..=4096), chunk in 1usize..=257) {
    let mut ours = Crc32::new();
    let mut reference = crc_fast::Digest::new(CrcAlgorithm::Crc32IsoHdlc);

    for part in data.chunks(chunk) {
      ours.update(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.finalize(), reference.finalize() as u32);
  }

  #[test]
  fn combine_matches_concatenation(a in proptest::collection::vec(any::<u8>(), 0..=600), b in proptest::collection::vec(any::<u8>(), 0..=600)) {
    let whole: Vec<u8> = a.iter().chain(b.iter()).copied().collect();
    prop_assert_eq!(combine(Crc32::checksum(&a), Crc32::checksum(&b), b.len()), Crc32::checksum(&whole));
  }
}
