//! Tree configuration.
//!
//! A [`Config`] is a plain value. The same value used to build a tree must be
//! handed to [`crate::merkle::verify`]; a mismatch does not raise an error, it
//! simply fails verification.
//!
//! Values can come from code or from the environment:
//! - `MERKLE_XXH128`           : use XXH3-128 instead of XXH3-64
//! - `MERKLE_DOMAIN_SEPARATION`: prepend `0x00` / `0x01` leaf / node tags
//!
//! Both accept `1/true/yes/on` and `0/false/no/off` (case-insensitive).

use crate::error::{MerkleError, MerkleResult};
use crate::hash::HashFunction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variable selecting the 128-bit fingerprint.
pub const ENV_XXH128: &str = "MERKLE_XXH128";
/// Environment variable enabling leaf/node domain tags.
pub const ENV_DOMAIN_SEPARATION: &str = "MERKLE_DOMAIN_SEPARATION";

/// Build / verify configuration. `Default` has both switches off.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config {
    /// Use XXH3-128 (16-byte nodes) instead of XXH3-64 (8-byte nodes).
    pub xxh128: bool,
    /// Prepend `0x00` before leaf data and `0x01` before child pairs.
    pub domain_separation: bool,
}

impl Config {
    #[inline]
    pub const fn new(xxh128: bool, domain_separation: bool) -> Self {
        Self {
            xxh128,
            domain_separation,
        }
    }

    #[inline]
    pub const fn with_xxh128(self, on: bool) -> Self {
        Self { xxh128: on, ..self }
    }

    #[inline]
    pub const fn with_domain_separation(self, on: bool) -> Self {
        Self {
            domain_separation: on,
            ..self
        }
    }

    /// The fingerprint selected by this configuration.
    #[inline]
    pub const fn hash_function(&self) -> HashFunction {
        if self.xxh128 {
            HashFunction::Xxh3_128
        } else {
            HashFunction::Xxh3_64
        }
    }

    /// Load from `MERKLE_XXH128` / `MERKLE_DOMAIN_SEPARATION`. Unset or empty
    /// variables keep the default.
    pub fn from_env() -> MerkleResult<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Like [`Config::from_env`] but reading through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> MerkleResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup(ENV_XXH128) {
            cfg.xxh128 = parse_flag(ENV_XXH128, &v)?.unwrap_or(cfg.xxh128);
        }
        if let Some(v) = lookup(ENV_DOMAIN_SEPARATION) {
            cfg.domain_separation = parse_flag(ENV_DOMAIN_SEPARATION, &v)?.unwrap_or(cfg.domain_separation);
        }
        Ok(cfg)
    }
}

fn parse_flag(key: &'static str, raw: &str) -> MerkleResult<Option<bool>> {
    let v = raw.trim();
    if v.is_empty() {
        return Ok(None);
    }
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(MerkleError::InvalidConfig {
            key,
            value: raw.to_string(),
        }),
    }
}
