//! Reverse lookup from leaf hash to leaf position.
//!
//! Filled once while the tree is built and never mutated afterwards. It is a
//! derived index only; nothing hashes through it.
//!
//! Duplicate inputs hash to the same leaf, so they collapse onto one entry and
//! the **last** position wins. Proofs by input therefore always target the last
//! occurrence; use a proof by index to reach the others.

use std::collections::HashMap;

use crate::hash::Digest;

#[derive(Clone, Debug, Default)]
pub(crate) struct LeafIndex {
    map: HashMap<Digest, usize>,
}

impl LeafIndex {
    /// Index `leaves` by position (input order, last write wins).
    pub(crate) fn from_leaves(leaves: &[Digest]) -> Self {
        let mut map = HashMap::with_capacity(leaves.len());
        for (i, leaf) in leaves.iter().enumerate() {
            map.insert(*leaf, i);
        }
        Self { map }
    }

    #[inline]
    pub(crate) fn get(&self, leaf: &Digest) -> Option<usize> {
        self.map.get(leaf).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(b: u8) -> Digest {
        Digest::from_slice(&[b; 8]).unwrap()
    }

    #[test]
    fn positions_follow_input_order() {
        let idx = LeafIndex::from_leaves(&[d(1), d(2), d(3)]);
        assert_eq!(idx.map.len(), 3);
        assert_eq!(idx.get(&d(1)), Some(0));
        assert_eq!(idx.get(&d(3)), Some(2));
        assert_eq!(idx.get(&d(9)), None);
    }

    #[test]
    fn duplicates_keep_last_position() {
        let idx = LeafIndex::from_leaves(&[d(7), d(1), d(7), d(2)]);
        assert_eq!(idx.map.len(), 3);
        assert_eq!(idx.get(&d(7)), Some(2));
    }
}
