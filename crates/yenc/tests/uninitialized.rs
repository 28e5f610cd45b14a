//! Accessors before publication. Kept alone in its own binary so no other
//! test can initialize the process-wide codec first.

#[test]
fn accessors_before_init() {
  assert!(yenc::try_codec().is_none());

  let panic = std::panic::catch_unwind(yenc::codec).unwrap_err();
  let message = panic.downcast_ref::<&str>().copied().unwrap_or_default();
  assert_eq!(message, "yenc::codec() called before yenc::init_dispatch()");

  let codec = yenc::init_dispatch();
  assert!(std::ptr::eq(yenc::codec(), codec));
}
