//! The portable kernel is always reachable and always correct.
//!
//! Forcing an empty capability set must select `portable/slice8`; on machines
//! with accelerated kernels the results must still agree bit for bit.

use checksum::{
  Checksum, Crc32, Crc32State,
  crc32::{self, PORTABLE, PORTABLE_NAME},
};
use platform::Caps;

const CHECK_STRING: &[u8] = b"123456789";
const CRC32_CHECK: u32 = 0xCBF4_3926;

#[test]
fn empty_caps_select_portable() {
  let selected = crc32::select(Caps::NONE);
  assert_eq!(selected.name, PORTABLE_NAME);
  assert!(!selected.is_accelerated());

  let result = selected.func.checksum(CHECK_STRING);
  assert_eq!(result, CRC32_CHECK, "got {result:#010X}, expected {CRC32_CHECK:#010X}");
}

#[test]
fn dispatched_produces_correct_result() {
  let result = Crc32::checksum(CHECK_STRING);
  assert_eq!(result, CRC32_CHECK, "got {result:#010X}, expected {CRC32_CHECK:#010X}");
}

#[test]
fn portable_and_dispatched_agree_on_large_input() {
  let data: Vec<u8> = (0..1_048_576u32).map(|i| (i ^ (i >> 9)) as u8).collect();
  assert_eq!(PORTABLE.checksum(&data), Crc32::checksum(&data));
}

#[test]
fn ten_updates_of_one_thousand_equal_one_update() {
  let data: Vec<u8> = (0..10_000u32).map(|i| (i.wrapping_mul(97) >> 3) as u8).collect();

  for kernel in [crc32::select(Caps::NONE).func, crc32::dispatched().func] {
    let mut one = Crc32State::new();
    (kernel.init)(&mut one);
    (kernel.update)(&mut one, &data);

    let mut ten = Crc32State::new();
    (kernel.init)(&mut ten);
    for chunk in data.chunks(1_000) {
      (kernel.update)(&mut ten, chunk);
    }

    assert_eq!((kernel.finish)(&one), (kernel.finish)(&ten));
  }
}

#[test]
fn init_resets_a_used_state() {
  let mut state = Crc32State::new();
  (PORTABLE.update)(&mut state, b"garbage");
  (PORTABLE.init)(&mut state);
  (PORTABLE.update)(&mut state, CHECK_STRING);
  assert_eq!((PORTABLE.finish)(&state), CRC32_CHECK);
}
