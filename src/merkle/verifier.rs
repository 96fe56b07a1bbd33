//! Proof verification.
//!
//! Verification needs no tree: only the raw input, a reference root, the proof
//! and the [`Config`] the tree was built with. It re-derives the leaf, folds
//! the siblings in using the direction bits, and compares the result with the
//! root.
//!
//! A mismatch of any kind (wrong leaf, tampered sibling or direction bits,
//! wrong root, different config) is `Ok(false)`. Only a missing argument or a
//! hash failure is an `Err`.

use tracing::{debug, instrument};

use super::hashers;
use super::tree::MerkleTree;
use super::types::Proof;
use crate::config::Config;
use crate::error::{MerkleError, MerkleResult};
use crate::hash::Digest;
use crate::utils::ct_eq;

/// Fold `proof` over the leaf of `input` and return the candidate root.
pub fn recompute_root(input: &[u8], proof: &Proof, config: &Config) -> MerkleResult<Digest> {
    let mut acc = hashers::leaf(config, input)?;
    for (level, sibling) in proof.siblings.iter().enumerate() {
        acc = if proof.is_right_child(level) {
            hashers::parent(config, sibling, &acc)?
        } else {
            hashers::parent(config, &acc, sibling)?
        };
    }
    Ok(acc)
}

/// Check that `input` is a member of the tree committed to by `root`.
///
/// `None` for `input` or `proof` fails with [`MerkleError::InputMissing`] /
/// [`MerkleError::ProofMissing`] (input is checked first).
#[instrument(level = "debug", skip_all, fields(depth = proof.map_or(0, Proof::depth)))]
pub fn verify(input: Option<&[u8]>, root: &[u8], proof: Option<&Proof>, config: &Config) -> MerkleResult<bool> {
    let input = input.ok_or(MerkleError::InputMissing)?;
    let proof = proof.ok_or(MerkleError::ProofMissing)?;

    let candidate = recompute_root(input, proof, config)?;
    let ok = ct_eq(candidate.as_bytes(), root);
    debug!(ok, "proof checked");
    Ok(ok)
}

impl MerkleTree {
    /// Verify `proof` for `input` against this tree's own root and config.
    pub fn verify(&self, input: &[u8], proof: &Proof) -> MerkleResult<bool> {
        verify(Some(input), self.root.as_bytes(), Some(proof), &self.config)
    }
}

/* --------------------------------- Tests ----------------------------------- */
