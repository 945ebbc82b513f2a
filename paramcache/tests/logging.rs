//! Installs a process-global subscriber, so it lives in its own test binary.

use paramcache::{init_json_tracing, init_tracing};

#[test]
fn test_second_init_is_harmless() {
    assert!(init_tracing(false));
    assert!(!init_tracing(true));
    assert!(!init_json_tracing(true));
}
