//! Error types for xxh_merkle.
//!
//! Every fallible operation returns [`MerkleResult`]. Errors are deterministic:
//! nothing in this crate retries, so callers should treat an `Err` as final for
//! that call.
//!
//! A proof that is well formed but does not match the data is **not** an
//! error. [`crate::merkle::verify`] reports that as `Ok(false)` so callers can
//! tell "the data doesn't match" apart from "the call was malformed".
//!
//! With the `python` feature enabled the error maps onto Python exceptions.

/// Canonical error for the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MerkleError {
    /// `build` was given fewer than two inputs.
    #[error("invalid leaf count {0}: a tree needs at least 2 leaves")]
    InvalidLeafCount(usize),
    /// Proof requested for data that was never a leaf of the tree.
    #[error("leaf is not a member of the merkle tree")]
    LeafNotFound,
    /// Proof requested for a position outside `0..leaf_count`.
    #[error("leaf index {index} out of range (leaf count {leaf_count})")]
    IndexOutOfRange { index: usize, leaf_count: usize },
    /// `verify` was called without an input.
    #[error("input is missing")]
    InputMissing,
    /// `verify` was called without a proof.
    #[error("proof is missing")]
    ProofMissing,
    /// The fingerprint backend could not produce a digest.
    #[error("hash computation failed: {0}")]
    HashComputationFailed(&'static str),
    /// A configuration value could not be parsed.
    #[error("invalid config value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
    /// Broken builder invariant. Never expected; report it as a bug.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

impl MerkleError {
    /// `true` for errors caused by the caller's arguments rather than by the
    /// crate or its hash backend.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            MerkleError::InvalidLeafCount(_)
                | MerkleError::LeafNotFound
                | MerkleError::IndexOutOfRange { .. }
                | MerkleError::InputMissing
                | MerkleError::ProofMissing
                | MerkleError::InvalidConfig { .. }
        )
    }
}

/// Convenience alias for results that use `MerkleError`.
pub type MerkleResult<T> = Result<T, MerkleError>;

//
// Python (PyO3) mapping
//

#[cfg(feature = "python")]
mod py {
    use super::MerkleError;
    use pyo3::exceptions::{PyRuntimeError, PyValueError};
    use pyo3::PyErr;

    impl From<MerkleError> for PyErr {
        fn from(e: MerkleError) -> Self {
            if e.is_caller_error() {
                PyValueError::new_err(e.to_string())
            } else {
                PyRuntimeError::new_err(e.to_string())
            }
        }
    }
}
