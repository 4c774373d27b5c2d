// src/crypto.rs
use bcrypt::Version;
use thiserror::Error;

use crate::models::{HashRecord, HashVariant, StrengthLevel, StrengthReport, WORDPRESS_COST};

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Please enter a password")]
    MissingInput,

    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

pub type Result<T> = std::result::Result<T, CryptoError>;

impl From<HashVariant> for Version {
    fn from(variant: HashVariant) -> Self {
        match variant {
            HashVariant::TwoA => Version::TwoA,
            HashVariant::TwoB => Version::TwoB,
            HashVariant::TwoY => Version::TwoY,
        }
    }
}

/// Hash a plaintext the way WordPress stores it in `wp_users.user_pass`.
///
/// A fresh salt is drawn for every call, so hashing the same input twice
/// yields two different strings that both verify.
pub fn generate_wordpress_hash(password: &str) -> Result<HashRecord> {
    generate_wordpress_hash_with_variant(password, HashVariant::default())
}

pub fn generate_wordpress_hash_with_variant(password: &str, variant: HashVariant) -> Result<HashRecord> {
    if password.is_empty() {
        return Err(CryptoError::MissingInput);
    }

    if password.len() > 72 {
        log::warn!("Password is longer than 72 bytes; bcrypt only uses the first 72");
    }

    let parts = bcrypt::hash_with_result(password, WORDPRESS_COST)?;
    let hash = parts.format_for_version(variant.into());
    log::debug!("Generated ${}$ hash with cost {}", variant, WORDPRESS_COST);

    Ok(HashRecord {
        plaintext_input: password.to_string(),
        hash_output: hash,
        cost_factor: WORDPRESS_COST,
    })
}

// Accepts $2a$, $2b$, $2x$ and $2y$ hashes
pub fn verify_wordpress_hash(password: &str, hash: &str) -> Result<bool> {
    if password.is_empty() {
        return Err(CryptoError::MissingInput);
    }
    Ok(bcrypt::verify(password, hash.trim())?)
}

/// Score a password from 0 to 100.
///
/// Length earns up to 40 points (8, 12 and 16 characters), and each of
/// lowercase, uppercase, digits and other characters earns 15. Returns
/// `None` for an empty password.
pub fn check_password_strength(password: &str) -> Option<StrengthReport> {
    if password.is_empty() {
        return None;
    }

    let length = password.chars().count();
    let mut score: u8 = 0;

    if length >= 8 {
        score += 20;
    }
    if length >= 12 {
        score += 10;
    }
    if length >= 16 {
        score += 10;
    }

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 15;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 15;
    }

    let level = match score {
        0..=39 => StrengthLevel::Weak,
        40..=69 => StrengthLevel::Medium,
        _ => StrengthLevel::Strong,
    };

    Some(StrengthReport { score, level })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_bcrypt_shape(hash: &str, prefix: &str) {
        assert_eq!(hash.len(), 60, "unexpected length for {}", hash);
        assert!(hash.starts_with(prefix), "{} does not start with {}", hash, prefix);
        let tail = &hash[7..];
        assert!(tail
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '/'));
    }

    #[test]
    fn hashes_known_password_in_wordpress_format() {
        let record = generate_wordpress_hash("Tr0ub4dor&3").unwrap();
        assert_bcrypt_shape(&record.hash_output, "$2y$10$");
        assert_eq!(record.cost_factor, 10);
        assert!(verify_wordpress_hash("Tr0ub4dor&3", &record.hash_output).unwrap());
        assert!(!verify_wordpress_hash("Tr0ub4dor&4", &record.hash_output).unwrap());
    }

    #[test]
    fn fresh_salt_every_call() {
        let first = generate_wordpress_hash("correct horse").unwrap();
        let second = generate_wordpress_hash("correct horse").unwrap();
        assert_ne!(first.hash_output, second.hash_output);
        assert!(verify_wordpress_hash("correct horse", &first.hash_output).unwrap());
        assert!(verify_wordpress_hash("correct horse", &second.hash_output).unwrap());
    }

    #[test]
    fn variant_only_changes_prefix() {
        for (variant, prefix) in [
            (HashVariant::TwoA, "$2a$10$"),
            (HashVariant::TwoB, "$2b$10$"),
        ] {
            let record = generate_wordpress_hash_with_variant("hunter2", variant).unwrap();
            assert_bcrypt_shape(&record.hash_output, prefix);
            assert!(verify_wordpress_hash("hunter2", &record.hash_output).unwrap());
        }
    }

    #[test]
    fn empty_password_is_rejected_before_hashing() {
        assert!(matches!(generate_wordpress_hash(""), Err(CryptoError::MissingInput)));
        assert!(matches!(verify_wordpress_hash("", "$2y$10$x"), Err(CryptoError::MissingInput)));
    }

    #[test]
    fn malformed_hash_surfaces_bcrypt_error() {
        assert!(matches!(
            verify_wordpress_hash("password", "not-a-hash"),
            Err(CryptoError::Bcrypt(_))
        ));
    }

    #[test]
    fn strength_levels() {
        assert_eq!(check_password_strength(""), None);

        let weak = check_password_strength("abc").unwrap();
        assert_eq!(weak.score, 15);
        assert_eq!(weak.level, StrengthLevel::Weak);

        let medium = check_password_strength("password1").unwrap();
        assert_eq!(medium.score, 50);
        assert_eq!(medium.level, StrengthLevel::Medium);

        let strong = check_password_strength("Tr0ub4dor&3xyz!!").unwrap();
        assert_eq!(strong.score, 100);
        assert_eq!(strong.level, StrengthLevel::Strong);
    }

    proptest! {
        #[test]
        fn strength_score_stays_in_range(password in ".{1,64}") {
            let report = check_password_strength(&password).unwrap();
            prop_assert!(report.score <= 100);
        }
    }
}
