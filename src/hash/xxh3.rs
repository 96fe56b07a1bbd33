//! XXH3 fingerprint backends.
//!
//! Thin [`Fingerprint`] wrappers around the streaming `xxhash_rust::xxh3::Xxh3`
//! state. Streaming and one-shot XXH3 agree byte for byte, which is what lets
//! node hashing feed `tag`, `left` and `right` separately.

use xxhash_rust::xxh3::Xxh3;

use super::{Digest, Fingerprint};
use crate::error::{MerkleError, MerkleResult};

/// XXH3 64-bit; digest is the fingerprint in little-endian order.
pub struct Xxh3_64(Xxh3);

/// XXH3 128-bit; digest is high half then low half, big-endian.
pub struct Xxh3_128(Xxh3);

impl core::fmt::Debug for Xxh3_64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Xxh3_64")
    }
}

impl core::fmt::Debug for Xxh3_128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Xxh3_128")
    }
}

#[inline]
fn to_digest(bytes: &[u8]) -> MerkleResult<Digest> {
    Digest::from_slice(bytes).ok_or(MerkleError::HashComputationFailed("digest wider than node buffer"))
}

impl Fingerprint for Xxh3_64 {
    const OUTPUT_LEN: usize = 8;

    #[inline]
    fn new() -> Self {
        Self(Xxh3::new())
    }

    #[inline]
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    #[inline]
    fn finalize(self) -> MerkleResult<Digest> {
        to_digest(&self.0.digest().to_le_bytes())
    }
}

impl Fingerprint for Xxh3_128 {
    const OUTPUT_LEN: usize = 16;

    #[inline]
    fn new() -> Self {
        Self(Xxh3::new())
    }

    #[inline]
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    #[inline]
    fn finalize(self) -> MerkleResult<Digest> {
        to_digest(&self.0.digest128().to_be_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xxhash_rust::xxh3::{xxh3_128, xxh3_64};

    #[test]
    fn matches_upstream_one_shot() {
        let msgs: [&[u8]; 4] = [b"", b"a", b"merkle", &[0x5a; 300]];
        for msg in msgs {
            let d64 = Xxh3_64::hash(msg).unwrap();
            assert_eq!(d64.as_bytes(), &xxh3_64(msg).to_le_bytes());

            let d128 = Xxh3_128::hash(msg).unwrap();
            assert_eq!(d128.as_bytes(), &xxh3_128(msg).to_be_bytes());
        }
    }

    #[test]
    fn xxh128_layout_is_high_then_low() {
        let v = xxh3_128(b"layout");
        let d = Xxh3_128::hash(b"layout").unwrap();
        let hi = (v >> 64) as u64;
        let lo = v as u64;
        assert_eq!(&d.as_bytes()[..8], &hi.to_be_bytes());
        assert_eq!(&d.as_bytes()[8..], &lo.to_be_bytes());
    }

    #[test]
    fn split_feed_equals_concat() {
        // Cross the 240-byte short-input boundary on purpose.
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let parts = [&data[..1], &data[1..241], &data[241..]];
        assert_eq!(Xxh3_64::hash_many(parts).unwrap(), Xxh3_64::hash(&data).unwrap());
        assert_eq!(Xxh3_128::hash_many(parts).unwrap(), Xxh3_128::hash(&data).unwrap());
    }
}
