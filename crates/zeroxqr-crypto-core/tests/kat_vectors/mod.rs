mod aes_gcm;
mod checksum;
mod pbkdf2_sha256;
