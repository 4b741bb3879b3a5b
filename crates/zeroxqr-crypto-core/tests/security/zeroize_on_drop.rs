//! Secret buffers leave no recognizable trace after drop.
//!
//! Reads freed memory, which is undefined behavior; treat these as
//! best-effort smoke tests and run them under the debug profile only. The
//! allocator may reuse the block for its own metadata, so the check is for
//! the sentinel pattern, not for all zeros.

use zeroxqr_crypto_core::kdf::derive;
use zeroxqr_crypto_core::memory::SecretBuffer;

const SENTINEL: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

fn sentinel_survives_drop(len: usize) -> bool {
    let data: Vec<u8> = SENTINEL.iter().copied().cycle().take(len).collect();
    let (ptr, len) = {
        let buf = SecretBuffer::new(&data).expect("allocation should succeed");
        let exposed = buf.expose();
        assert_eq!(&exposed[..4], &SENTINEL);
        (exposed.as_ptr(), exposed.len())
    };

    // SAFETY: none; see module docs.
    unsafe {
        let slice = std::slice::from_raw_parts(ptr, len);
        slice.windows(4).any(|w| w == SENTINEL)
    }
}

#[test]
fn secret_buffer_sentinel_not_found_after_drop() {
    assert!(!sentinel_survives_drop(512), "sentinel found after drop");
}

#[test]
fn large_secret_buffer_sentinel_not_found_after_drop() {
    assert!(!sentinel_survives_drop(65_536), "sentinel found in 64 KB buffer after drop");
}

#[test]
fn derived_key_is_wrapped_and_masked() {
    let key = derive(b"password", &[0x5A; 32]).expect("derive should succeed");
    assert_eq!(key.len(), 32);
    assert_eq!(format!("{key:?}"), "SecretBuffer(***)");
    assert_eq!(format!("{key}"), "SecretBuffer(***)");
}
