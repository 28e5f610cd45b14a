//! CPU capability probe for the yEnc codec core.
//!
//! This crate answers one question: which optional instruction-set extensions
//! can the decoder and CRC kernels legally use on this machine?
//!
//! # Core Types
//!
//! - [`Caps`]: a bitset of detected features
//! - [`Arch`]: the architecture this binary was compiled for
//!
//! # Main Entry Point
//!
//! ```
//! use platform::caps::x86;
//!
//! let caps = platform::caps();
//! if caps.has(x86::PCLMUL_READY) {
//!   // carry-less multiply CRC folding is available
//! }
//! ```
//!
//! # Design
//!
//! 1. **Probe once**: [`caps()`] runs [`probe()`] on first use and caches the result.
//! 2. **Absent by default**: a missing or unreadable detection source reports the feature as absent.
//! 3. **Compile-time union**: features enabled with `-C target-feature` are always reported.
//! 4. **Miri-safe**: under Miri, the probe reports [`Caps::NONE`].
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod caps;
mod detect;

pub use caps::{Arch, Caps};
pub use detect::{caps, caps_static, parse_cpuinfo, probe};
