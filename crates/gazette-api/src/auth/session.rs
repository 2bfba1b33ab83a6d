//! Session tokens and password hashing for the admin gate.
//!
//! The gate has two states: no valid token (unauthenticated) and a token
//! present in the session store (authenticated). Login verifies the admin
//! password against an argon2 hash and issues an opaque random token; logout
//! revokes it. Tokens carry no expiry.

use std::collections::HashSet;
use std::sync::Arc;

use subtle::ConstantTimeEq;
use tokio::sync::RwLock;

use crate::constants::SESSION_TOKEN_PREFIX;

/// Generate a secure session token
pub fn generate_session_token() -> String {
    use rand::Rng;

    let mut rng = rand::rng();
    let random_bytes: Vec<u8> = (0..20).map(|_| rng.random()).collect();
    let random_part = hex::encode(random_bytes);

    // Format: gz_sess_<40 hex chars>
    format!("{}{}", SESSION_TOKEN_PREFIX, random_part)
}

/// Hash the admin password for storage
pub fn hash_password(password: &str) -> Result<String, gazette_core::AppError> {
    use argon2::{
        password_hash::{PasswordHasher, SaltString},
        Argon2,
    };

    use rand_core::OsRng;
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| gazette_core::AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Verify a candidate password against the stored argon2 hash.
pub fn verify_password(candidate: &str, hash: &str) -> Result<bool, gazette_core::AppError> {
    use argon2::{
        password_hash::{PasswordHash, PasswordVerifier},
        Argon2,
    };

    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| gazette_core::AppError::Internal(format!("Invalid hash format: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(candidate.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Issued session tokens. Insert on login, remove on logout; membership is
/// the authenticated state.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashSet<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, token: String) {
        self.inner.write().await.insert(token);
    }

    /// Remove the token. Returns false when it was not present.
    pub async fn revoke(&self, token: &str) -> bool {
        self.inner.write().await.remove(token)
    }

    /// Constant-time membership check against every stored token.
    pub async fn contains(&self, token: &str) -> bool {
        let guard = self.inner.read().await;
        let mut found = false;
        for stored in guard.iter() {
            if stored.len() == token.len()
                && bool::from(stored.as_bytes().ct_eq(token.as_bytes()))
            {
                found = true;
            }
        }
        found
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
