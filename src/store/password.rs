use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::error::{DummyError, Result};

/// Argon2id cost settings for stored customer passwords.
///
/// The default matches `Argon2::default()`. Bulk fixture runs can lower the
/// cost, since every generated customer pays for one hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordHashing {
    params: Params,
}

impl PasswordHashing {
    /// `memory_kib` must be at least 8; `iterations` at least 1.
    pub fn new(memory_kib: u32, iterations: u32) -> Result<Self> {
        let params = Params::new(memory_kib, iterations, 1, None)
            .map_err(|e| DummyError::InvalidParameter(format!("password hashing: {}", e)))?;
        Ok(Self { params })
    }

    pub fn memory_kib(&self) -> u32 {
        self.params.m_cost()
    }

    pub fn iterations(&self) -> u32 {
        self.params.t_cost()
    }

    /// Hash into a PHC string (`$argon2id$v=19$m=...`).
    pub fn hash(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DummyError::PasswordHash(e.to_string()))
    }
}

/// Check `password` against a stored PHC string. The cost is read from the hash.
pub fn verify_password(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
