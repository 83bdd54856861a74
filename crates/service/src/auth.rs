//! Shared-secret password check.

use std::fmt;

use homesense_core::{ConfigError, PASSWORD_HASH_VAR};
use sha2::{Digest, Sha256};

use crate::ServiceError;

/// Lowercase hex SHA-256 digest of `password`.
#[must_use]
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Compares caller-supplied passwords against the configured digest.
#[derive(Clone)]
pub struct PasswordVerifier {
    expected: [u8; 32],
}

impl fmt::Debug for PasswordVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordVerifier").finish_non_exhaustive()
    }
}

impl PasswordVerifier {
    /// Build from a 64-character hex digest.
    pub fn from_hex(hash: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidPasswordHash { var: PASSWORD_HASH_VAR };
        let bytes = hex::decode(hash.trim()).map_err(|_| invalid())?;
        let expected: [u8; 32] = bytes.try_into().map_err(|_| invalid())?;
        Ok(Self { expected })
    }

    /// Accepts only a present password whose digest matches.
    ///
    /// The digest comparison touches every byte regardless of where the
    /// first difference is.
    pub fn authenticate(&self, supplied: Option<&str>) -> Result<(), ServiceError> {
        let Some(supplied) = supplied else {
            return Err(ServiceError::Unauthorized);
        };
        let digest = Sha256::digest(supplied.as_bytes());
        if constant_time_eq(digest.as_slice(), &self.expected) {
            Ok(())
        } else {
            Err(ServiceError::Unauthorized)
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
