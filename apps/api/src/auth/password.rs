// Password hashing for portal accounts (bcrypt)

use bcrypt::{hash, verify, DEFAULT_COST};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Hashes a password using bcrypt
///
/// # Example
/// ```
/// use league_portal_api::auth::password::hash_password;
///
/// let hash = hash_password("my_password").expect("valid hash");
/// assert!(hash.starts_with("$2"));
/// ```
pub fn hash_password(password: &str) -> Result<String, String> {
    hash(password, DEFAULT_COST).map_err(|e| e.to_string())
}

/// Verifies a password against a bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, String> {
    verify(password, hash).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_password() {
        let password = "pitch_report_123";
        let hash = hash_password(password).expect("valid hash");

        assert!(verify_password(password, &hash).expect("valid verification"));
        assert!(!verify_password("wrong_password", &hash).expect("valid verification"));
    }

    #[test]
    fn hashes_are_salted() {
        let password = "pitch_report_123";
        let hash1 = hash_password(password).expect("valid hash");
        let hash2 = hash_password(password).expect("valid hash");

        assert_ne!(hash1, hash2);
        assert!(verify_password(password, &hash1).unwrap());
        assert!(verify_password(password, &hash2).unwrap());
    }
}
