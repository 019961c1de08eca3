/**
 * Password Hashing
 *
 * Thin wrappers over bcrypt. Plain passwords only ever live in request
 * bodies; the store keeps the hash.
 */

use bcrypt::{hash, verify, BcryptError};

/// Hash a password with the given bcrypt cost
pub fn hash_password(plain: &str, cost: u32) -> Result<String, BcryptError> {
    hash(plain, cost)
}

/// Check a password against a stored hash
///
/// Returns `Ok(false)` for a wrong password and `Err` only when the stored
/// hash itself is malformed.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(plain, hashed)
}
