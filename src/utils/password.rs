use bcrypt::{DEFAULT_COST, hash, verify};

use crate::utils::errors::AppError;

/// Produces a salted bcrypt digest. The salt is random, so hashing the same
/// input twice yields different digests; compare only via [`verify_password`].
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}
