//! Proof generation.
//!
//! Walks the stored levels from a leaf up to (but not including) the root. At
//! each level a node at odd index `i` is a right child and takes `level[i - 1]`
//! as sibling; an even index is a left child and takes `level[i + 1]`. The
//! duplicated tail of odd-width levels guarantees `i + 1` exists; if it does
//! not, the builder is broken and we fail with [`MerkleError::Internal`].

use tracing::{error, instrument, trace};

use super::hashers;
use super::tree::MerkleTree;
use super::types::Proof;
use crate::error::{MerkleError, MerkleResult};

impl MerkleTree {
    /// Proof for the leaf at `index`.
    #[instrument(level = "debug", skip(self), fields(depth = self.depth))]
    pub fn proof_for_index(&self, index: usize) -> MerkleResult<Proof> {
        if index >= self.leaf_count {
            return Err(MerkleError::IndexOutOfRange {
                index,
                leaf_count: self.leaf_count,
            });
        }

        let mut directions = 0u64;
        let mut siblings = Vec::with_capacity(self.depth);
        let mut idx = index;

        for (level, nodes) in self.levels.iter().enumerate() {
            let is_right = idx & 1 == 1;
            let sib_idx = if is_right {
                directions |= 1u64 << level;
                idx - 1
            } else {
                idx + 1
            };

            let Some(sibling) = nodes.get(sib_idx) else {
                error!(level, sib_idx, width = nodes.len(), "sibling index beyond level bounds");
                return Err(MerkleError::Internal("sibling index beyond level bounds"));
            };
            trace!(level, idx, sib_idx, is_right, "proof step");
            siblings.push(*sibling);

            idx >>= 1;
        }

        Ok(Proof::new(directions, siblings))
    }

    /// Proof for the leaf produced by `input`.
    ///
    /// Duplicate inputs resolve to their last position. Fails with
    /// [`MerkleError::LeafNotFound`] if `input` is not a leaf of this tree.
    pub fn proof_for_input(&self, input: &[u8]) -> MerkleResult<Proof> {
        let leaf = hashers::leaf(&self.config, input)?;
        let index = self.index.get(&leaf).ok_or(MerkleError::LeafNotFound)?;
        self.proof_for_index(index)
    }
}

/* --------------------------------- Tests ----------------------------------- */
