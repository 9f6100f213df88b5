// Password hashing utilities
// Uses bcrypt for secure password hashing

use bcrypt::{hash, verify};
use std::fmt::Debug;

use crate::domain::error::{DomainError, DomainResult};

/// One-way hash and verify, as consumed by the user service
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a plaintext password
    fn hash(&self, password: &str) -> DomainResult<String>;

    /// Verify a plaintext password against a stored hash
    ///
    /// Malformed hashes verify as `false`.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Bcrypt-backed [`PasswordHasher`] with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        hash_password(password, self.cost)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        verify_password(password, hash).unwrap_or(false)
    }
}

/// Hashes a password using bcrypt
///
/// # Arguments
/// * `password` - The plaintext password to hash
/// * `cost` - The bcrypt work factor (4..=31)
///
/// # Example
/// ```
/// use portfolio_api::auth::password::hash_password;
///
/// let hash = hash_password("my_password", 4).expect("valid hash");
/// assert!(hash.starts_with("$2"));
/// ```
pub fn hash_password(password: &str, cost: u32) -> Result<String, String> {
    hash(password, cost).map_err(|e| e.to_string())
}

/// Verifies a password against a bcrypt hash
///
/// # Returns
/// * `Ok(bool)` - True if password matches, false otherwise
/// * `Err(String)` - If the hash cannot be parsed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    verify(password, hash).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn hash_and_verify_password() {
        let hasher = BcryptHasher::new(TEST_COST);
        let hash = hasher.hash("test_password_123").expect("valid hash");

        assert!(hasher.verify("test_password_123", &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn hash_different_outputs() {
        let hash1 = hash_password("test_password_123", TEST_COST).expect("valid hash");
        let hash2 = hash_password("test_password_123", TEST_COST).expect("valid hash");

        // Hashes should be different due to salt
        assert_ne!(hash1, hash2);

        assert!(verify_password("test_password_123", &hash1).unwrap());
        assert!(verify_password("test_password_123", &hash2).unwrap());
    }

    #[test]
    fn malformed_hash_does_not_verify() {
        let hasher = BcryptHasher::new(TEST_COST);
        assert!(!hasher.verify("password", "not-a-bcrypt-hash"));
        assert!(!hasher.verify("password", ""));
    }

    #[test]
    fn invalid_cost_is_an_error() {
        let hasher = BcryptHasher::new(99);
        assert!(matches!(
            hasher.hash("password"),
            Err(DomainError::Internal { .. })
        ));
    }
}
