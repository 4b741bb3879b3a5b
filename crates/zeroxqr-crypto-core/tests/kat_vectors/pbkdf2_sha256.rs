//! PBKDF2-HMAC-SHA256 known-answer vectors (RFC 7914 §11 and the
//! commonly published RFC 6070-style SHA-256 vector).

use zeroxqr_crypto_core::kdf::derive_key;

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn rfc7914_passwd_salt_one_iteration() {
    let key = derive_key(b"passwd", b"salt", 1, 512).expect("derive should succeed");
    assert_eq!(
        hex(key.expose()),
        "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
         49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783"
    );
}

#[test]
fn password_salt_one_iteration_256_bits() {
    let key = derive_key(b"password", b"salt", 1, 256).expect("derive should succeed");
    assert_eq!(
        hex(key.expose()),
        "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
    );
}

#[test]
fn shorter_output_is_prefix_of_longer() {
    let long = derive_key(b"passwd", b"salt", 1, 512).expect("derive should succeed");
    let short = derive_key(b"passwd", b"salt", 1, 128).expect("derive should succeed");
    assert_eq!(short.expose(), &long.expose()[..16]);
}
