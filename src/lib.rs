//! xxh_merkle: binary Merkle trees over XXH3 fingerprints.
//!
//! Build a tree once from an ordered list of byte strings, publish its root,
//! then hand out `O(log n)` membership proofs that anyone holding the root and
//! the build [`Config`] can check with [`merkle::verify`].
//!
//! Features:
//! - `rayon`  : parallel leaf hashing / level reduction for wide trees
//! - `python` : expose a PyO3 module with safe error mapping
//! - `serde`  : derive `Serialize`/`Deserialize` on the value types
//!
//! The fingerprints are **non-cryptographic** (XXH3-64 / XXH3-128). Roots are
//! a fast probabilistic integrity check, not a collision-resistant commitment.
//!
//! ```
//! use xxh_merkle::{merkle, Config};
//!
//! let config = Config::default().with_domain_separation(true);
//! let inputs: [&[u8]; 3] = [b"alpha", b"beta", b"gamma"];
//! let tree = merkle::build(&config, &inputs)?;
//!
//! let proof = tree.proof_for_input(b"beta")?;
//! let ok = merkle::verify(Some(&b"beta"[..]), tree.root().as_bytes(), Some(&proof), &config)?;
//! assert!(ok);
//! # Ok::<(), xxh_merkle::MerkleError>(())
//! ```

// pyo3 0.21 macro expansions call unsafe helpers inside unsafe fns.
#![cfg_attr(not(feature = "python"), forbid(unsafe_op_in_unsafe_fn))]
#![deny(rust_2018_idioms, unused_must_use)]

pub mod config;
pub mod error;
pub mod hash;
pub mod merkle;

mod utils;

#[cfg(feature = "python")]
mod py;

pub use config::Config;
pub use error::{MerkleError, MerkleResult};
pub use hash::{Digest, HashFunction};
pub use merkle::{build, verify, MerkleTree, Proof};

/// Return a static list of compile-time feature flags that were enabled.
pub fn enabled_features() -> &'static [&'static str] {
    const FEATS: &[&str] = &[
        #[cfg(feature = "rayon")]
        "rayon",
        #[cfg(feature = "python")]
        "python",
        #[cfg(feature = "serde")]
        "serde",
    ];
    FEATS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_list_matches_cfg() {
        let feats = enabled_features();
        assert_eq!(feats.contains(&"rayon"), cfg!(feature = "rayon"));
        assert_eq!(feats.contains(&"serde"), cfg!(feature = "serde"));
    }

    #[test]
    fn top_level_reexports_work_together() {
        let cfg = Config::new(true, false);
        let data: [&[u8]; 2] = [b"left", b"right"];
        let tree: MerkleTree = build(&cfg, &data).unwrap();
        let proof: Proof = tree.proof_for_index(0).unwrap();
        assert_eq!(cfg.hash_function(), HashFunction::Xxh3_128);
        assert!(verify(Some(data[0]), tree.root().as_bytes(), Some(&proof), &cfg).unwrap());
    }
}
