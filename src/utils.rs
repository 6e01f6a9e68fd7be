//! Helper functions shared by the composition root and the service layer.

use anyhow::anyhow;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::str::FromStr;

pub async fn setup_sqlite_db_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
    Ok(SqlitePool::connect_with(
        SqliteConnectOptions::from_str(db_url)?.pragma("foreign_keys", "ON"),
    )
    .await?)
}

/// Salted one-way hash of a password, PHC string format.
pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| anyhow!("password hash couldn't be created: {}", err))?
        .to_string())
}

/// Constant-time comparison of a candidate password against a stored hash.
/// An unparseable stored hash counts as a mismatch.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_salts_every_hash() {
        let first = hash_password("securePass123").unwrap();
        let second = hash_password("securePass123").unwrap();

        assert_ne!(first, "securePass123");
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_password_matches_only_original() {
        let stored = hash_password("securePass123").unwrap();

        assert!(verify_password("securePass123", &stored));
        assert!(!verify_password("wrongpass", &stored));
        assert!(!verify_password("securePass123", "not-a-phc-string"));
    }
}
