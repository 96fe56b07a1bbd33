//! Test helpers and deterministic random data for `xxh_merkle`.
//!
//! Shared by the `tests/*` files. It provides:
//! - A tiny, dependency-free PRNG (XorShift64) with deterministic seeding
//! - Helpers to generate random leaf inputs
//! - Every `Config` combination, for sweeping tests
//! - Opt-in tracing output (`RUST_LOG=xxh_merkle=trace cargo test`)

use std::env;

use xxh_merkle::{Config, Digest};

#[allow(dead_code)]
pub const DEFAULT_TEST_SEED: u64 = 0xA11C_1A9E_C0FF_EE42;

/// Minimal, fast, deterministic PRNG (XorShift64).
/// Not cryptographically secure, only for tests/benches.
#[derive(Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    #[inline]
    pub fn new(seed: u64) -> Self {
        // Avoid the all-zero lockup state.
        let s = if seed == 0 { DEFAULT_TEST_SEED } else { seed };
        Self { state: s }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Fill `buf` with pseudo-random bytes.
    #[inline]
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(8) {
            let word = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

/// Seed from env (`TEST_SEED`), or fallback to DEFAULT_TEST_SEED.
/// Accepts decimal or `0x` hex values.
#[allow(dead_code)]
pub fn seed_from_env() -> u64 {
    match env::var("TEST_SEED") {
        Ok(s) => {
            let s = s.trim();
            if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                u64::from_str_radix(hex, 16).unwrap_or(DEFAULT_TEST_SEED)
            } else {
                s.parse::<u64>().unwrap_or(DEFAULT_TEST_SEED)
            }
        }
        Err(_) => DEFAULT_TEST_SEED,
    }
}

/// Convenience: construct an RNG from `TEST_SEED` (or default).
#[allow(dead_code)]
pub fn rng_from_env() -> XorShift64 {
    XorShift64::new(seed_from_env())
}

/// Deterministic bytes of length `len`.
#[allow(dead_code)]
pub fn random_bytes(len: usize, rng: &mut XorShift64) -> Vec<u8> {
    let mut v = vec![0u8; len];
    rng.fill_bytes(&mut v);
    v
}

/// `n` random 32-byte inputs.
#[allow(dead_code)]
pub fn random_inputs(n: usize, rng: &mut XorShift64) -> Vec<Vec<u8>> {
    (0..n).map(|_| random_bytes(32, rng)).collect()
}

/// Copy of `d` with `mask` XORed into byte `at`.
#[allow(dead_code)]
pub fn flip_byte(d: &Digest, at: usize, mask: u8) -> Digest {
    let mut bytes = d.to_vec();
    bytes[at] ^= mask;
    Digest::from_slice(&bytes).expect("same width as the original")
}

/// All four `(xxh128, domain_separation)` combinations.
#[allow(dead_code)]
pub fn all_configs() -> [Config; 4] {
    [
        Config::new(false, false),
        Config::new(false, true),
        Config::new(true, false),
        Config::new(true, true),
    ]
}

/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod selfcheck {
    use super::*;

    #[test]
    fn xorshift_is_deterministic() {
        let mut a = XorShift64::new(1);
        let mut b = XorShift64::new(1);
        assert_eq!(a.next_u64(), b.next_u64());
        let mut buf = [0u8; 13];
        a.fill_bytes(&mut buf);
        let mut buf2 = [0u8; 13];
        b.fill_bytes(&mut buf2);
        assert_eq!(buf, buf2);
    }

    #[test]
    fn random_inputs_shape() {
        let mut rng = XorShift64::new(7);
        let v = random_inputs(5, &mut rng);
        assert_eq!(v.len(), 5);
        assert!(v.iter().all(|x| x.len() == 32));
        assert_ne!(v[0], v[1]);
    }
}
