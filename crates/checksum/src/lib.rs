//! CRC-32/ISO-HDLC for yEnc article verification.
//!
//! yEnc trailers carry `crc32=`/`pcrc32=` values computed with the standard
//! reflected CRC-32 (polynomial `0xEDB88320`, init and xorout `0xFFFFFFFF`).
//! This crate computes it with:
//!
//! | Kernel | Requires | Tier |
//! |--------|----------|------|
//! | `portable/slice8` | nothing | Portable |
//! | `x86_64/pclmul` | PCLMULQDQ + SSE4.1 | Folding |
//! | `aarch64/crc` | ARMv8 CRC32 | HwCrc |
//!
//! All kernels share one [`Crc32State`] and the [`Crc32Kernel`] triple
//! (init, update, finish), so a state can be carried across calls and the
//! finished value never depends on which kernel or chunking produced it.
//!
//! # Quick Start
//!
//! ```
//! use checksum::{Checksum, Crc32};
//!
//! assert_eq!(Crc32::checksum(b"123456789"), 0xCBF4_3926);
//!
//! let mut hasher = Crc32::new();
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), 0xCBF4_3926);
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod crc32;

pub use crc32::{Crc32, Crc32Kernel, Crc32State};
pub use traits::{Checksum, ChecksumCombine};
