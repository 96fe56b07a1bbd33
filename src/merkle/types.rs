//! Membership proof type.
//!
//! A [`Proof`] carries one sibling per tree level, ordered from the leaf level
//! upwards, plus a `directions` bitfield:
//!
//! - bit `i` = 1: the proven node is the **right** child at level `i`, so its
//!   sibling sits on the left.
//! - bit `i` = 0: the proven node is the **left** child, sibling on the right.
//!
//! Proofs own their sibling bytes and do not borrow from the tree.

use crate::hash::Digest;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    /// Left/right path bits, bit `i` for level `i`.
    pub directions: u64,
    /// Sibling hashes, `siblings[i]` paired with the path node at level `i`.
    pub siblings: Vec<Digest>,
}

impl Proof {
    #[inline]
    pub fn new(directions: u64, siblings: Vec<Digest>) -> Self {
        Self { directions, siblings }
    }

    /// Number of levels the proof climbs (equals the tree depth).
    #[inline]
    pub fn depth(&self) -> usize {
        self.siblings.len()
    }

    /// Whether the path node at `level` is a right child.
    #[inline]
    pub fn is_right_child(&self, level: usize) -> bool {
        level < u64::BITS as usize && (self.directions >> level) & 1 == 1
    }
}

/* --------------------------------- Tests ----------------------------------- */
