//! Binary Merkle tree with single-leaf membership proofs.
//!
//! - [`build`] : hash the inputs into leaves and reduce them to a root
//! - [`MerkleTree::proof_for_index`] / [`MerkleTree::proof_for_input`]: open a leaf
//! - [`verify`]: check a leaf against a root using a proof, no tree needed
//!
//! ### Design
//! * **Digest:** 8 bytes (XXH3-64, little-endian) or 16 bytes (XXH3-128,
//!   big-endian), chosen by [`Config::xxh128`].
//! * **Domain separation** (optional, [`Config::domain_separation`]):
//!   - Leaves:   `H(0x00 || data)`
//!   - Parents:  `H(0x01 || left || right)`
//! * **Padding:** every odd-width level duplicates its last node before
//!   pairing. Duplicated leaves share a proof path; a proof for the tail leaf
//!   is not an independent proof for its copy.
//! * **Depth:** `ceil(log2(n))` for `n >= 2` leaves; proofs hold exactly
//!   `depth` siblings.
//!
//! ### What this is (and isn't)
//! The full leaf set must be known up front; trees are immutable. There are no
//! sparse/indexed trees, appends, or multiproofs, and no wire format for trees
//! or proofs. Callers moving proofs around must carry sibling and root bytes
//! exactly, in order.

pub mod hashers;
mod index;
mod proof;
mod tree;
mod types;
mod verifier;

pub use tree::MerkleTree;
pub use types::Proof;
pub use verifier::{recompute_root, verify};

use crate::config::Config;
use crate::error::MerkleResult;

/// Build an immutable tree over `inputs` with `config`.
///
/// Shorthand for [`MerkleTree::new`].
pub fn build<I>(config: &Config, inputs: &[I]) -> MerkleResult<MerkleTree>
where
    I: AsRef<[u8]> + Sync,
{
    MerkleTree::new(config, inputs)
}

/* --------------------------------- Tests ----------------------------------- */
