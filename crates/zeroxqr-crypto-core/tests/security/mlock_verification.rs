//! `mlock` status of secret buffers and core-dump disabling.
//!
//! Platform-specific; containers often have a zero mlock quota, so lock
//! failure is reported rather than asserted.

use zeroxqr_crypto_core::memory::{disable_core_dumps, SecretBuffer};

#[cfg(unix)]
#[test]
fn secret_buffer_reports_mlock_status() {
    let buf = SecretBuffer::new(b"mlock test data").expect("allocation should succeed");
    eprintln!("mlock status: {}", buf.is_mlocked());
}

#[test]
fn locked_buffer_still_exposes_its_data() {
    let buf = SecretBuffer::new(&[0xAB; 4096]).expect("allocation should succeed");
    assert!(buf.expose().iter().all(|&b| b == 0xAB));
}

#[cfg(unix)]
#[test]
fn disable_core_dumps_sets_rlimit_zero() {
    disable_core_dumps().expect("disable_core_dumps should succeed");

    let mut limit = libc::rlimit {
        rlim_cur: 1,
        rlim_max: 1,
    };
    let ret = unsafe { libc::getrlimit(libc::RLIMIT_CORE, &raw mut limit) };
    assert_eq!(ret, 0, "getrlimit failed");
    assert_eq!(limit.rlim_cur, 0, "RLIMIT_CORE soft limit should be 0");
    assert_eq!(limit.rlim_max, 0, "RLIMIT_CORE hard limit should be 0");
}
