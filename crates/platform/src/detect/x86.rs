//! x86_64 detection via CPUID.
//!
//! 32-bit x86 builds report compile-time features only.

use core::arch::x86_64::{__cpuid, __cpuid_count, _xgetbv};

use crate::caps::{Caps, x86};

/// XCR0 bits 1 (SSE state) and 2 (AVX state).
const XCR0_XMM_YMM: u64 = 0b110;

/// Read leaves 1 and 7 and translate them into [`Caps`].
///
/// AVX2 is reported only when OSXSAVE is set and XCR0 says the OS saves YMM
/// registers on context switch. XGETBV requires `unsafe` and is only executed
/// after OSXSAVE has been confirmed.
#[allow(unsafe_code)]
pub(super) fn detect() -> Caps {
  let max_leaf = __cpuid(0).eax;
  let leaf1 = __cpuid(1);
  let mut caps = Caps::NONE;

  if leaf1.edx & (1 << 26) != 0 {
    caps |= x86::SSE2;
  }
  if leaf1.ecx & (1 << 9) != 0 {
    caps |= x86::SSSE3;
  }
  if leaf1.ecx & (1 << 19) != 0 {
    caps |= x86::SSE41;
  }
  if leaf1.ecx & (1 << 1) != 0 {
    caps |= x86::PCLMULQDQ;
  }

  let osxsave = leaf1.ecx & (1 << 27) != 0;
  let os_avx = osxsave && {
    // SAFETY: OSXSAVE is set, so XGETBV with XCR0 is a valid instruction.
    let xcr0 = unsafe { _xgetbv(0) };
    xcr0 & XCR0_XMM_YMM == XCR0_XMM_YMM
  };

  if max_leaf >= 7 {
    let leaf7 = __cpuid_count(7, 0);
    if os_avx && leaf7.ebx & (1 << 5) != 0 {
      caps |= x86::AVX2;
    }
  }

  caps
}
