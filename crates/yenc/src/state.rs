//! Decode carry state and the byte-level transition function.
//!
//! Encoding artifacts that can straddle a chunk boundary:
//!
//! | Artifact | Carried as |
//! |----------|------------|
//! | `=` escape whose payload is in the next chunk | [`Carry::Escape`] |
//! | `\r` whose `\n` is in the next chunk | [`Carry::Cr`] |
//! | line start, for NNTP dot-unstuffing | [`Carry::LineStart`] |
//!
//! Every decoder kernel reduces to [`step`] for bytes it does not bulk-convert,
//! which is what makes the kernels interchangeable.

use crate::error::DecodeError;

/// yEnc escape marker.
pub const ESCAPE: u8 = b'=';
/// Shift applied to every transported byte.
pub const OFFSET: u8 = 42;
/// Extra shift applied to the byte after [`ESCAPE`].
pub const ESCAPE_OFFSET: u8 = 64;

/// How line starts are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
  /// The body has already been unstuffed; a leading `.` is data.
  #[default]
  Plain,
  /// Raw NNTP article body: a `.` at the start of a line is dot-stuffing
  /// and is removed.
  Nntp,
}

/// Position of the decoder relative to encoding artifacts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Carry {
  /// Start of stream, or just after `\r\n`.
  #[default]
  LineStart,
  /// Inside a line.
  Mid,
  /// The previous byte was an unconsumed `=`.
  Escape,
  /// The previous byte was `\r`.
  Cr,
}

/// Carry state threaded by the caller between decode calls on one stream.
///
/// Plain data: reset it with [`DecodeState::reset`] (or construct a new one)
/// at the start of every independent stream, never share it between threads,
/// and drop it whenever the stream is abandoned.
///
/// ```
/// use yenc::{Carry, DecodeState, Mode};
///
/// let state = DecodeState::nntp();
/// assert_eq!(state.mode(), Mode::Nntp);
/// assert_eq!(state.carry(), Carry::LineStart);
/// assert!(!state.is_pending_escape());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecodeState {
  mode: Mode,
  carry: Carry,
}

impl DecodeState {
  /// Start-of-stream state for `mode`.
  #[inline]
  #[must_use]
  pub const fn new(mode: Mode) -> Self {
    Self {
      mode,
      carry: Carry::LineStart,
    }
  }

  /// Start-of-stream state for an already unstuffed body.
  #[inline]
  #[must_use]
  pub const fn plain() -> Self {
    Self::new(Mode::Plain)
  }

  /// Start-of-stream state for a raw NNTP body.
  #[inline]
  #[must_use]
  pub const fn nntp() -> Self {
    Self::new(Mode::Nntp)
  }

  /// A state positioned at `carry`, e.g. to resume a persisted stream.
  #[inline]
  #[must_use]
  pub const fn with_carry(mode: Mode, carry: Carry) -> Self {
    Self { mode, carry }
  }

  #[inline]
  #[must_use]
  pub const fn mode(&self) -> Mode {
    self.mode
  }

  #[inline]
  #[must_use]
  pub const fn carry(&self) -> Carry {
    self.carry
  }

  /// `true` if the last byte seen was an escape marker still waiting for its payload.
  #[inline]
  #[must_use]
  pub const fn is_pending_escape(&self) -> bool {
    matches!(self.carry, Carry::Escape)
  }

  /// Back to start-of-stream, keeping the mode.
  #[inline]
  pub fn reset(&mut self) {
    self.carry = Carry::LineStart;
  }

  /// Classify the end of a stream.
  ///
  /// # Errors
  ///
  /// [`DecodeError::TruncatedEscape`] if the stream ended between an escape
  /// marker and its payload.
  #[inline]
  pub const fn finish(self) -> Result<(), DecodeError> {
    if self.is_pending_escape() {
      Err(DecodeError::TruncatedEscape)
    } else {
      Ok(())
    }
  }

  #[inline]
  pub(crate) fn set_carry(&mut self, carry: Carry) {
    self.carry = carry;
  }
}

/// Advance by one input byte, returning the next carry and the decoded byte, if any.
///
/// With `NNTP == false` a line start behaves like the middle of a line.
#[inline(always)]
pub(crate) const fn step<const NNTP: bool>(carry: Carry, byte: u8) -> (Carry, Option<u8>) {
  match (carry, byte) {
    // A line break cancels a dangling escape.
    (Carry::Escape, b'\r') => (Carry::Cr, None),
    (Carry::Escape, b'\n') => (Carry::Mid, None),
    (Carry::Escape, _) => (Carry::Mid, Some(byte.wrapping_sub(OFFSET + ESCAPE_OFFSET))),
    (Carry::LineStart, b'.') if NNTP => (Carry::Mid, None),
    (_, ESCAPE) => (Carry::Escape, None),
    (_, b'\r') => (Carry::Cr, None),
    (Carry::Cr, b'\n') => (Carry::LineStart, None),
    (_, b'\n') => (Carry::Mid, None),
    (_, _) => (Carry::Mid, Some(byte.wrapping_sub(OFFSET))),
  }
}

/// Byte-at-a-time decode of `src` into `dst[written..]`.
///
/// Shared by the portable kernel and by the vector kernels for the bytes
/// they cannot bulk-convert. Returns the new output length and carry.
#[inline(always)]
pub(crate) fn decode_scalar<const NNTP: bool>(
  src: &[u8],
  dst: &mut [u8],
  mut written: usize,
  mut carry: Carry,
) -> (usize, Carry) {
  for &byte in src {
    let (next, decoded) = step::<NNTP>(carry, byte);
    carry = next;
    if let Some(value) = decoded
      && let Some(slot) = dst.get_mut(written)
    {
      *slot = value;
      written += 1;
    }
  }
  (written, carry)
}
