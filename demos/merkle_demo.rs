//! Build a small tree, open one leaf and check the proof.
//!
//! ```text
//! RUST_LOG=xxh_merkle=debug MERKLE_XXH128=1 cargo run --example merkle_demo -- a b c d e
//! ```

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;
use xxh_merkle::{merkle, Config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("reading MERKLE_* environment")?;

    let mut inputs: Vec<Vec<u8>> = std::env::args().skip(1).map(String::into_bytes).collect();
    if inputs.is_empty() {
        inputs = ["alpha", "beta", "gamma", "delta", "epsilon"]
            .iter()
            .map(|s| s.as_bytes().to_vec())
            .collect();
    }

    let tree = merkle::build(&config, &inputs).context("building tree")?;
    println!("features : {:?}", xxh_merkle::enabled_features());
    println!("config   : {config:?}");
    println!("leaves   : {}", tree.leaf_count());
    println!("depth    : {}", tree.depth());
    println!("root     : {}", tree.root());

    let target = &inputs[inputs.len() - 1];
    let proof = tree.proof_for_input(target)?;
    println!("proof    : directions={:#b}", proof.directions);
    for (level, sib) in proof.siblings.iter().enumerate() {
        println!("  [{level}] {sib}");
    }

    if !merkle::verify(Some(target.as_slice()), tree.root().as_bytes(), Some(&proof), &config)? {
        bail!("proof for {:?} did not verify", String::from_utf8_lossy(target));
    }
    println!("verified : {}", String::from_utf8_lossy(target));
    Ok(())
}
