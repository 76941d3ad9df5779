//! bcrypt-backed credential hashing.

use pwm_core::config::DEFAULT_HASH_COST;
use pwm_core::credentials::CredentialHasher;
use pwm_core::error::{PwmError, Result};

/// Hashes account passwords with bcrypt.
///
/// Every hash gets a fresh random salt; verification uses the scheme's
/// own constant-time routine. The work factor defaults to 12 and should
/// only be lowered in tests.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    /// Creates a hasher with the default work factor.
    pub fn new() -> Self {
        Self::with_cost(DEFAULT_HASH_COST)
    }

    /// Creates a hasher with a custom work factor.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for BcryptHasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        // BcryptError renders without the input, so the message is safe
        // to surface.
        bcrypt::hash(plaintext, self.cost).map_err(|e| PwmError::security(e.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(plaintext, hash).map_err(|e| PwmError::security(e.to_string()))
    }
}
