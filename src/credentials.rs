//! Credential codec: salt generation and salted password digests.
//!
//! A stored credential is the pair (`password_hash`, `salt`): the hex
//! SHA-256 digest of the plaintext with the salt appended, plus the salt it
//! was computed with. The two are only ever written together. Verification
//! lives in the server's login path, not here — it recomputes the digest
//! from a candidate password and compares, which is why the digest must be
//! deterministic.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Salt byte length before hex encoding (16 bytes = 32 hex chars).
const SALT_BYTES: usize = 16;

/// Generate a fresh per-user salt (hex-encoded).
///
/// Drawn from the operating system CSPRNG. Salts are rotated on every
/// password change and never reused.
pub fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_BYTES];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compute the salted digest for a plaintext password.
///
/// Single-pass SHA-256 over `plaintext ‖ salt`, no separator — the same
/// digest the chat server computes when checking a login.
pub fn hash_password(plaintext: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_is_32_hex_chars() {
        let salt = generate_salt();
        assert_eq!(salt.len(), 32);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn salts_are_unique() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn digest_is_deterministic() {
        let salt = generate_salt();
        assert_eq!(hash_password("pw1", &salt), hash_password("pw1", &salt));
    }

    #[test]
    fn digest_matches_known_vector() {
        // SHA-256("abc"), split across plaintext and salt with no separator.
        assert_eq!(
            hash_password("ab", "c"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn digest_differs_across_salts() {
        assert_ne!(hash_password("pw1", "salt_a"), hash_password("pw1", "salt_b"));
    }

    #[test]
    fn digest_differs_across_passwords() {
        let salt = generate_salt();
        assert_ne!(hash_password("pw1", &salt), hash_password("pw2", &salt));
    }
}
