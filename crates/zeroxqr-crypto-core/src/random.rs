//! Secure random byte sources for salts, nonces, and generated passwords.
//!
//! The engine never reaches for a hidden global: it is handed a
//! [`SecureRandom`] implementation. Production code uses [`OsRandom`];
//! tests can inject [`SeededRandom`] for reproducible fixtures.

use std::sync::Mutex;

use rand::rngs::{OsRng, StdRng};
use rand::{CryptoRng, RngCore, SeedableRng};

use crate::error::CryptoError;

/// A source of cryptographically secure random bytes.
///
/// Implementations must be safe to share between threads: callers may run
/// encryptions concurrently on one engine.
pub trait SecureRandom: Send + Sync {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Random`] if the source cannot produce bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

/// The operating system CSPRNG (`getrandom` via [`OsRng`]).
///
/// Stateless; every call goes straight to the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| CryptoError::Random(format!("CSPRNG fill failed: {e}")))
    }
}

/// Deterministic generator seeded from a `u64`.
///
/// **Not for production.** Two instances with the same seed produce the same
/// stream, which is exactly what fixtures want and exactly what an encryptor
/// must never do.
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl std::fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SeededRandom(..)")
    }
}

impl SecureRandom for SeededRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| CryptoError::Random("seeded generator lock poisoned".into()))?;
        rng.fill_bytes(dest);
        Ok(())
    }
}

impl<R: SecureRandom + ?Sized> SecureRandom for &R {
    fn fill(&self, dest: &mut [u8]) -> Result<(), CryptoError> {
        (**self).fill(dest)
    }
}

/// Draw a fixed-size array from `rng`.
pub(crate) fn random_array<const N: usize, R: SecureRandom + ?Sized>(
    rng: &R,
) -> Result<[u8; N], CryptoError> {
    let mut out = [0u8; N];
    rng.fill(&mut out)?;
    Ok(out)
}

/// Bridges a [`SecureRandom`] into `rand`'s `RngCore`, so `rand`'s
/// sampling (`gen_range`, `SliceRandom`) can draw from it.
///
/// `RngCore::fill_bytes` cannot fail. When the source does, the first error
/// is kept and the buffer is zeroed; callers must check [`finish`](Self::finish)
/// before using anything drawn.
pub(crate) struct RngAdapter<'a, R: ?Sized> {
    source: &'a R,
    error: Option<CryptoError>,
}

impl<'a, R: SecureRandom + ?Sized> RngAdapter<'a, R> {
    pub(crate) const fn new(source: &'a R) -> Self {
        Self {
            source,
            error: None,
        }
    }

    /// The first error the source reported, if any.
    pub(crate) fn finish(self) -> Result<(), CryptoError> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<R: SecureRandom + ?Sized> RngCore for RngAdapter<'_, R> {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_le_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_le_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.source.fill(dest) {
            dest.fill(0);
            self.error.get_or_insert(e);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.source.fill(dest).map_err(rand::Error::new)
    }
}

impl<R: SecureRandom + ?Sized> CryptoRng for RngAdapter<'_, R> {}
