//! Leaf and inner-node hashing rules.
//!
//! - Leaves:  `H(data)` or, with domain separation, `H(0x00 || data)`
//! - Parents: `H(left || right)` or, with domain separation,
//!   `H(0x01 || left || right)`
//!
//! The same two functions are used by the builder, by proof lookup and by the
//! verifier, so a leaf re-derived from raw input always matches the stored one.
//! Left/right order matters.

use crate::config::Config;
use crate::error::MerkleResult;
use crate::hash::Digest;

/// Domain separation tags.
pub const LEAF_TAG: u8 = 0x00;
pub const NODE_TAG: u8 = 0x01;

/// Hash one raw input into a leaf.
#[inline]
pub fn leaf(config: &Config, data: &[u8]) -> MerkleResult<Digest> {
    let hf = config.hash_function();
    if config.domain_separation {
        hf.hash_many([&[LEAF_TAG][..], data])
    } else {
        hf.hash(data)
    }
}

/// Combine two children into their parent.
#[inline]
pub fn parent(config: &Config, left: &Digest, right: &Digest) -> MerkleResult<Digest> {
    let hf = config.hash_function();
    if config.domain_separation {
        hf.hash_many([&[NODE_TAG][..], left.as_bytes(), right.as_bytes()])
    } else {
        hf.hash_many([left.as_bytes(), right.as_bytes()])
    }
}

/* --------------------------------- Tests ----------------------------------- */
