//! Credential hashing seam.
//!
//! Defines the interface between the account service and the password
//! hashing backend.

use crate::error::Result;

/// One-way salted hashing of account passwords.
///
/// This trait decouples the account service from the concrete hashing
/// scheme. Implementations must:
/// - salt every hash with a fresh random salt
/// - verify deterministically using the scheme's own comparison routine
/// - keep error messages free of the plaintext and the hash
pub trait CredentialHasher: Send + Sync {
    /// Hashes a plaintext password with a fresh random salt.
    fn hash(&self, plaintext: &str) -> Result<String>;

    /// Verifies a plaintext password against a stored hash.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: The password matches the hash
    /// - `Ok(false)`: The password does not match
    /// - `Err(_)`: The stored hash is malformed or verification failed
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool>;
}
