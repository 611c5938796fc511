use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::address::{RegionFallback, RegionPolicy};
use crate::error::{DummyError, Result};
use crate::store::PasswordHashing;

pub const DEFAULT_DATA_FILE: &str = "customers.json";
pub const DEFAULT_BATCH_SIZE: u64 = 1000;
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;
/// Argon2id defaults (19 MiB, two passes).
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19 * 1024;
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;

/// Settings read from a TOML file. Every key is optional.
///
/// ```toml
/// data_file = "var/customers.json"
/// batch_size = 1000
/// password_length = 8
/// hash_memory_kib = 19456
/// hash_iterations = 2
///
/// [region_policy]
/// SK = "suppress"
/// PL = "use_raw"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub data_file: PathBuf,
    pub batch_size: u64,
    pub password_length: usize,
    /// Argon2id memory cost for stored password hashes.
    pub hash_memory_kib: u32,
    pub hash_iterations: u32,
    /// Country code -> fallback, layered over the built-in rules.
    pub region_policy: BTreeMap<String, RegionFallback>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            batch_size: DEFAULT_BATCH_SIZE,
            password_length: DEFAULT_PASSWORD_LENGTH,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            region_policy: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Read `path` if given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                let config = Self::from_toml(&content)?;
                debug!(path = %path.display(), "configuration loaded");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(DummyError::InvalidParameter(
                "batch_size must be at least 1".to_string(),
            ));
        }
        if self.password_length == 0 {
            return Err(DummyError::InvalidParameter(
                "password_length must be at least 1".to_string(),
            ));
        }
        self.password_hashing()?;
        Ok(())
    }

    pub fn password_hashing(&self) -> Result<PasswordHashing> {
        PasswordHashing::new(self.hash_memory_kib, self.hash_iterations)
    }

    pub fn region_policy(&self) -> RegionPolicy {
        RegionPolicy::default().with_overrides(
            self.region_policy
                .iter()
                .map(|(country, fallback)| (country.as_str(), *fallback)),
        )
    }
}
