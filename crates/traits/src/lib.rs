//! Streaming checksum traits.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | Incremental checksum over an arbitrarily chunked byte stream |
//! | [`ChecksumCombine`] | `crc(A ‖ B)` from `crc(A)`, `crc(B)` and `len(B)` |
//!
//! Both are implemented by `checksum::Crc32`, which verifies decoded yEnc
//! articles against the `crc32=`/`pcrc32=` trailer values.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;

pub use checksum::{Checksum, ChecksumCombine};
