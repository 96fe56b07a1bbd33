//! Hash abstraction for tree nodes.
//!
//! This module provides:
//! - [`Digest`]: a small inline buffer holding one node hash (8 or 16 bytes).
//! - [`Fingerprint`]: a streaming hash trait with one-shot helpers.
//! - [`HashFunction`]: the per-tree choice between the two XXH3 widths.
//!
//! ### Output layout
//! - XXH3-64 digests are the `u64` fingerprint in **little-endian** order.
//! - XXH3-128 digests are the high half then the low half, each
//!   **big-endian** (i.e. the `u128` in big-endian order).
//!
//! Both are fast, non-cryptographic fingerprints. Do not rely on them for
//! collision resistance against an adversary.

use core::fmt;

pub mod xxh3;

pub use self::xxh3::{Xxh3_128, Xxh3_64};

use crate::error::{MerkleError, MerkleResult};

/// Largest digest any backend produces (XXH3-128).
pub const MAX_DIGEST_LEN: usize = 16;

/// One node hash, stored inline.
///
/// Bytes past `len` are always zero, so the derived `Eq`/`Hash` only ever
/// see the meaningful prefix plus the width. A 64-bit digest never equals a
/// 128-bit one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest {
    len: u8,
    bytes: [u8; MAX_DIGEST_LEN],
}

impl Digest {
    /// Copy `bytes` into a digest. Returns `None` if longer than
    /// [`MAX_DIGEST_LEN`].
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > MAX_DIGEST_LEN {
            return None;
        }
        let mut out = [0u8; MAX_DIGEST_LEN];
        out[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            len: bytes.len() as u8,
            bytes: out,
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Owned copy of the bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Lowercase hex of the meaningful bytes.
    pub fn to_hex(&self) -> String {
        const HEX: &[u8; 16] = b"0123456789abcdef";
        let mut s = String::with_capacity(self.len() * 2);
        for &b in self.as_bytes() {
            s.push(HEX[(b >> 4) as usize] as char);
            s.push(HEX[(b & 0x0f) as usize] as char);
        }
        s
    }
}

impl AsRef<[u8]> for Digest {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;
        let buf = <serde_bytes::ByteBuf as serde::Deserialize>::deserialize(deserializer)?;
        Digest::from_slice(&buf).ok_or_else(|| D::Error::invalid_length(buf.len(), &"at most 16 bytes"))
    }
}

/// Minimal interface for a streaming fingerprint.
///
/// Feeding parts with `update` must give the same digest as hashing their
/// concatenation once; the tree relies on that to avoid building
/// `tag || left || right` buffers.
pub trait Fingerprint: Sized + fmt::Debug {
    /// Digest width in bytes.
    const OUTPUT_LEN: usize;

    fn new() -> Self;

    /// Feed additional bytes.
    fn update(&mut self, data: &[u8]);

    /// Finalize and return the digest. Consumes `self`.
    fn finalize(self) -> MerkleResult<Digest>;

    /// One-shot convenience over `new` + `update` + `finalize`.
    #[inline]
    fn hash(data: &[u8]) -> MerkleResult<Digest> {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }

    /// Hash several chunks as if concatenated.
    #[inline]
    fn hash_many<'a, I>(parts: I) -> MerkleResult<Digest>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut h = Self::new();
        for p in parts {
            h.update(p);
        }
        h.finalize()
    }
}

/// Which fingerprint a tree is built with. Chosen once per tree from
/// [`Config::xxh128`](crate::Config::xxh128).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HashFunction {
    /// XXH3 64-bit, 8-byte little-endian digest.
    Xxh3_64,
    /// XXH3 128-bit, 16-byte big-endian digest.
    Xxh3_128,
}

impl HashFunction {
    /// Digest width in bytes.
    #[inline]
    pub const fn output_len(self) -> usize {
        match self {
            HashFunction::Xxh3_64 => Xxh3_64::OUTPUT_LEN,
            HashFunction::Xxh3_128 => Xxh3_128::OUTPUT_LEN,
        }
    }

    #[inline]
    pub fn hash(self, data: &[u8]) -> MerkleResult<Digest> {
        self.hash_many([data])
    }

    /// Hash several chunks as if concatenated, checking the output width.
    pub fn hash_many<'a, I>(self, parts: I) -> MerkleResult<Digest>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        #[cfg(test)]
        if let Some(kind) = fault::take() {
            return self.check_width(kind.hash_many(parts)?);
        }

        let digest = match self {
            HashFunction::Xxh3_64 => Xxh3_64::hash_many(parts)?,
            HashFunction::Xxh3_128 => Xxh3_128::hash_many(parts)?,
        };
        self.check_width(digest)
    }

    #[inline]
    fn check_width(self, digest: Digest) -> MerkleResult<Digest> {
        if digest.len() != self.output_len() {
            return Err(MerkleError::HashComputationFailed("fingerprint returned unexpected width"));
        }
        Ok(digest)
    }
}


/* ----------------------------------- Tests ----------------------------------- */
