//! Python bindings via PyO3.
//!
//! Exposes a top-level module `xxh_merkle` with:
//! - `MerkleTree(inputs, xxh128=False, domain_separation=False)`
//! - `Proof(directions, siblings)`
//! - `verify(data, root, proof, xxh128=False, domain_separation=False)`
//!
//! Caller mistakes surface as `ValueError`, everything else as `RuntimeError`
//! (see `crate::error`).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::config::Config;
use crate::hash::Digest;
use crate::merkle::{self, MerkleTree, Proof};

#[pyclass(name = "Proof", module = "xxh_merkle", frozen)]
#[derive(Clone)]
struct PyProof {
    inner: Proof,
}

#[pymethods]
impl PyProof {
    #[new]
    fn new(directions: u64, siblings: Vec<Vec<u8>>) -> PyResult<Self> {
        let siblings = siblings
            .iter()
            .map(|s| Digest::from_slice(s).ok_or_else(|| PyValueError::new_err("sibling longer than 16 bytes")))
            .collect::<PyResult<Vec<_>>>()?;
        Ok(Self {
            inner: Proof::new(directions, siblings),
        })
    }

    #[getter]
    fn directions(&self) -> u64 {
        self.inner.directions
    }

    #[getter]
    fn siblings<'py>(&self, py: Python<'py>) -> Vec<Bound<'py, PyBytes>> {
        self.inner
            .siblings
            .iter()
            .map(|s| PyBytes::new_bound(py, s.as_bytes()))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.depth()
    }

    fn __repr__(&self) -> String {
        format!("Proof(directions={:#b}, depth={})", self.inner.directions, self.inner.depth())
    }
}

#[pyclass(name = "MerkleTree", module = "xxh_merkle", frozen)]
struct PyMerkleTree {
    inner: MerkleTree,
}

#[pymethods]
impl PyMerkleTree {
    #[new]
    #[pyo3(signature = (inputs, xxh128 = false, domain_separation = false))]
    fn new(inputs: Vec<Vec<u8>>, xxh128: bool, domain_separation: bool) -> PyResult<Self> {
        let inner = merkle::build(&Config::new(xxh128, domain_separation), &inputs)?;
        Ok(Self { inner })
    }

    #[getter]
    fn root<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, self.inner.root().as_bytes())
    }

    #[getter]
    fn depth(&self) -> usize {
        self.inner.depth()
    }

    #[getter]
    fn leaf_count(&self) -> usize {
        self.inner.leaf_count()
    }

    fn proof_for_index(&self, index: usize) -> PyResult<PyProof> {
        let inner = self.inner.proof_for_index(index)?;
        Ok(PyProof { inner })
    }

    fn proof_for_input(&self, data: &[u8]) -> PyResult<PyProof> {
        let inner = self.inner.proof_for_input(data)?;
        Ok(PyProof { inner })
    }
}

#[pyfunction]
#[pyo3(signature = (data, root, proof, xxh128 = false, domain_separation = false))]
fn verify(data: &[u8], root: &[u8], proof: PyRef<'_, PyProof>, xxh128: bool, domain_separation: bool) -> PyResult<bool> {
    let cfg = Config::new(xxh128, domain_separation);
    Ok(merkle::verify(Some(data), root, Some(&proof.inner), &cfg)?)
}

/// Python module name must match the library name defined for pyo3/maturin.
#[pymodule]
fn xxh_merkle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMerkleTree>()?;
    m.add_class::<PyProof>()?;
    m.add_function(wrap_pyfunction!(verify, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
