//! Kernel selection primitives for the yEnc codec core.
//!
//! - **Dispatch**: [`Candidate`] lists, ordered best to worst, resolved against a
//!   [`Caps`] set by [`select`]
//! - **Tiers**: [`KernelTier`] classifies each kernel for diagnostics
//!
//! # Usage
//!
//! Algorithm crates register kernels as an ordered list of `Candidate`s.
//! Use the [`candidates!`] macro for concise syntax:
//!
//! ```
//! use backend::{KernelTier, candidates, select};
//! use platform::caps::{Caps, x86};
//!
//! fn wide(x: u32) -> u32 { x }
//! fn portable(x: u32) -> u32 { x }
//!
//! let chosen = select(x86::SSE2, candidates![
//!   "x86_64/avx2" => x86::AVX2_READY, KernelTier::Wide => wide as fn(u32) -> u32,
//!   "portable"    => Caps::NONE, KernelTier::Portable   => portable,
//! ]);
//! assert_eq!(chosen.name, "portable");
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod dispatch;
pub mod tier;

pub use dispatch::{Candidate, Selected, select};
// Re-export platform types for convenience.
pub use platform::{Arch, Caps};
pub use tier::KernelTier;
