//! Iterative, bottom-up tree construction.
//!
//! - **Leaves** are hashed from raw inputs, in parallel for wide inputs when
//!   the `rayon` feature is on.
//! - Levels are reduced pairwise without recursion.
//! - An odd-width level gets its last node **duplicated** before pairing, at
//!   every level. The copy is stored, since proofs read siblings straight out
//!   of the levels.
//! - Only levels `0..depth` are stored. The top stored level always holds two
//!   nodes; their parent is the root and is kept separately.

use tracing::{debug, error, instrument};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use super::hashers;
use super::index::LeafIndex;
use crate::config::Config;
use crate::error::{MerkleError, MerkleResult};
use crate::hash::Digest;
use crate::utils::ceil_log2;

/// Minimum number of items in a level before the parallel path kicks in.
///
/// Advisory only: without the `rayon` feature everything runs serially.
#[cfg_attr(not(feature = "rayon"), allow(dead_code))]
pub(crate) const PAR_THRESHOLD: usize = 1024;

/// An immutable binary Merkle tree.
///
/// Built once by [`MerkleTree::new`] (or [`super::build`]); there is no way to
/// insert or remove leaves afterwards, so a tree can be shared freely between
/// threads.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    pub(super) config: Config,
    /// `levels[0]` are the leaves; every stored level has even width.
    pub(super) levels: Vec<Vec<Digest>>,
    pub(super) root: Digest,
    pub(super) leaf_count: usize,
    pub(super) depth: usize,
    pub(super) index: LeafIndex,
}

impl MerkleTree {
    /// Build a tree over `inputs` (input order is leaf order).
    ///
    /// Fails with [`MerkleError::InvalidLeafCount`] for fewer than two inputs.
    /// Any hashing failure aborts the build; no partial tree is returned.
    #[instrument(
        level = "debug",
        skip_all,
        fields(leaves = inputs.len(), xxh128 = config.xxh128, domain_separation = config.domain_separation)
    )]
    pub fn new<I>(config: &Config, inputs: &[I]) -> MerkleResult<Self>
    where
        I: AsRef<[u8]> + Sync,
    {
        let leaf_count = inputs.len();
        if leaf_count < 2 {
            return Err(MerkleError::InvalidLeafCount(leaf_count));
        }
        let depth = ceil_log2(leaf_count);

        let leaves = hash_leaves(config, inputs)?;
        let (levels, root) = grow(config, leaves, depth)?;
        let index = LeafIndex::from_leaves(&levels[0][..leaf_count]);

        debug!(depth, root = %root, "merkle tree built");
        Ok(Self {
            config: *config,
            levels,
            root,
            leaf_count,
            depth,
            index,
        })
    }

    #[inline]
    pub fn root(&self) -> &Digest {
        &self.root
    }

    /// Leaf hashes in input order, without duplication padding.
    #[inline]
    pub fn leaves(&self) -> &[Digest] {
        &self.levels[0][..self.leaf_count]
    }

    /// Stored levels, leaves first, including duplicated tail nodes.
    #[inline]
    pub fn levels(&self) -> &[Vec<Digest>] {
        &self.levels
    }

    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// `ceil(log2(leaf_count))`; always at least 1.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Position of `input` among the leaves, if present (last occurrence for
    /// duplicated inputs).
    pub fn index_of(&self, input: &[u8]) -> MerkleResult<Option<usize>> {
        let leaf = hashers::leaf(&self.config, input)?;
        Ok(self.index.get(&leaf))
    }
}

/* ----------------------------- Leaf hashing ------------------------------ */

fn hash_leaves<I>(config: &Config, inputs: &[I]) -> MerkleResult<Vec<Digest>>
where
    I: AsRef<[u8]> + Sync,
{
    cfg_if::cfg_if! {
        if #[cfg(feature = "rayon")] {
            if inputs.len() >= PAR_THRESHOLD {
                return inputs
                    .par_iter()
                    .map(|data| hashers::leaf(config, data.as_ref()))
                    .collect();
            }
        }
    }
    inputs
        .iter()
        .map(|data| hashers::leaf(config, data.as_ref()))
        .collect()
}

/* --------------------------- Iterative build ----------------------------- */

/// Duplicate the last node of an odd-width level.
#[inline]
fn pad_if_odd(level: &mut Vec<Digest>) {
    if level.len() % 2 == 1 {
        if let Some(&last) = level.last() {
            level.push(last);
        }
    }
}

/// Hash an even-width level into the next one.
fn next_level(config: &Config, level: &[Digest]) -> MerkleResult<Vec<Digest>> {
    debug_assert!(level.len() % 2 == 0);
    cfg_if::cfg_if! {
        if #[cfg(feature = "rayon")] {
            if level.len() >= PAR_THRESHOLD {
                return level
                    .par_chunks_exact(2)
                    .map(|pair| hashers::parent(config, &pair[0], &pair[1]))
                    .collect();
            }
        }
    }
    level
        .chunks_exact(2)
        .map(|pair| hashers::parent(config, &pair[0], &pair[1]))
        .collect()
}

/// Build levels `0..depth` from the leaves and hash the top pair into the root.
fn grow(config: &Config, leaves: Vec<Digest>, depth: usize) -> MerkleResult<(Vec<Vec<Digest>>, Digest)> {
    let mut levels = Vec::with_capacity(depth);
    let mut curr = leaves;
    for _ in 1..depth {
        pad_if_odd(&mut curr);
        let next = next_level(config, &curr)?;
        levels.push(curr);
        curr = next;
    }
    levels.push(curr);

    let root = match levels.last().map(Vec::as_slice) {
        Some([left, right]) => hashers::parent(config, left, right)?,
        top => {
            error!(width = top.map_or(0, <[Digest]>::len), "top level does not hold a single pair");
            return Err(MerkleError::Internal("top level must hold exactly two nodes"));
        }
    };
    Ok((levels, root))
}

/* --------------------------------- Tests ----------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(n: usize) -> Vec<Vec<u8>> {
        (0..n).map(|i| format!("leaf-{i}").into_bytes()).collect()
    }

    #[test]
    fn rejects_short_inputs() {
        let cfg = Config::default();
        let none: [&[u8]; 0] = [];
        assert_eq!(MerkleTree::new(&cfg, &none).unwrap_err(), MerkleError::InvalidLeafCount(0));
        assert_eq!(MerkleTree::new(&cfg, &inputs(1)).unwrap_err(), MerkleError::InvalidLeafCount(1));
    }

    #[test]
    fn two_leaves_hash_straight_to_root() {
        let cfg = Config::default();
        let t = MerkleTree::new(&cfg, &inputs(2)).unwrap();
        assert_eq!(t.depth(), 1);
        assert_eq!(t.levels().len(), 1);
        assert_eq!(t.levels()[0].len(), 2);
        let want = hashers::parent(&cfg, &t.leaves()[0], &t.leaves()[1]).unwrap();
        assert_eq!(*t.root(), want);
    }

    #[test]
    fn odd_width_duplicates_tail() {
        let t = MerkleTree::new(&Config::default(), &inputs(3)).unwrap();
        assert_eq!(t.depth(), 2);
        assert_eq!(t.levels()[0].len(), 4);
        assert_eq!(t.levels()[0][2], t.levels()[0][3]);
        assert_eq!(t.levels()[1].len(), 2);
        assert_eq!(t.leaves().len(), 3);
    }

    #[test]
    fn intermediate_levels_are_padded_too() {
        // 5 -> 6 | 3 -> 4 | 2
        let t = MerkleTree::new(&Config::default(), &inputs(5)).unwrap();
        let widths: Vec<usize> = t.levels().iter().map(Vec::len).collect();
        assert_eq!(widths, vec![6, 4, 2]);
        assert_eq!(t.levels()[1][2], t.levels()[1][3]);
    }

    #[test]
    fn stored_levels_are_even_and_top_is_a_pair() {
        let cfg = Config::new(true, true);
        for n in 2..=40 {
            let t = MerkleTree::new(&cfg, &inputs(n)).unwrap();
            assert_eq!(t.levels().len(), t.depth());
            assert!(t.levels().iter().all(|l| l.len() % 2 == 0), "n = {n}");
            assert_eq!(t.levels().last().unwrap().len(), 2, "n = {n}");
        }
    }

    #[test]
    fn index_of_finds_inputs() {
        let data = inputs(6);
        let t = MerkleTree::new(&Config::default(), &data).unwrap();
        for (i, d) in data.iter().enumerate() {
            assert_eq!(t.index_of(d).unwrap(), Some(i));
        }
        assert_eq!(t.index_of(b"missing").unwrap(), None);
    }

    #[test]
    fn hash_failure_aborts_build_in_every_phase() {
        use crate::hash::fault::{arm, Kind};

        // 5 leaves: leaf hashes 0..5, then 3 + 2 nodes, then the root.
        let data = inputs(5);
        for (ok, phase) in [(0, "first leaf"), (4, "last leaf"), (5, "first node"), (10, "root")] {
            let _guard = arm(ok, Kind::Error);
            let err = MerkleTree::new(&Config::new(false, true), &data).unwrap_err();
            assert_eq!(err, MerkleError::HashComputationFailed("backend unavailable"), "{phase}");
        }
        assert!(MerkleTree::new(&Config::new(false, true), &data).is_ok());
    }

    #[test]
    fn wrong_width_digest_aborts_build() {
        use crate::hash::fault::{arm, Kind};

        let _guard = arm(3, Kind::Narrow);
        assert!(matches!(
            MerkleTree::new(&Config::new(true, false), &inputs(4)),
            Err(MerkleError::HashComputationFailed(_))
        ));
    }

    #[test]
    fn top_level_that_is_not_a_pair_is_internal() {
        let cfg = Config::default();
        let leaves = hash_leaves(&cfg, &inputs(3)).unwrap();
        // depth 1 leaves three nodes on the top stored level.
        let err = grow(&cfg, leaves, 1).unwrap_err();
        assert!(matches!(err, MerkleError::Internal(_)));
        assert!(!err.is_caller_error());
    }

    #[test]
    fn index_of_reports_hash_failure() {
        let t = MerkleTree::new(&Config::default(), &inputs(4)).unwrap();
        let _guard = crate::hash::fault::arm(0, crate::hash::fault::Kind::Error);
        assert!(matches!(t.index_of(b"leaf-0"), Err(MerkleError::HashComputationFailed(_))));
    }

    #[test]
    fn duplicate_inputs_index_last_occurrence() {
        let data: [&[u8]; 4] = [b"x", b"y", b"x", b"z"];
        let t = MerkleTree::new(&Config::default(), &data).unwrap();
        assert_eq!(t.leaves()[0], t.leaves()[2]);
        assert_eq!(t.index_of(b"x").unwrap(), Some(2));
    }
}
