use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::{SaltString, rand_core::OsRng},
};

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Cost parameters were rejected by Argon2.
    #[error("invalid argon2 parameters: {0}")]
    Params(String),

    /// The hashing primitive failed to produce a digest.
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Salted Argon2id hashing of account passwords.
///
/// Hashes are PHC strings, so the salt and cost parameters travel with the
/// digest and verification works even if the codec's parameters change later.
#[derive(Clone, Default)]
pub struct PasswordCodec {
    argon2: Argon2<'static>,
}

impl PasswordCodec {
    /// Build a codec with explicit cost parameters (memory in KiB).
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::Params(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| PasswordError::Hash(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Returns `false` for a wrong password and for a hash that does not parse.
    /// Callers cannot tell the two apart.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };

        self.argon2
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_codec() -> PasswordCodec {
        PasswordCodec::with_params(1024, 1, 1).unwrap()
    }

    #[test]
    fn hash_then_verify() {
        let codec = fast_codec();
        let hash = codec.hash("correct horse battery staple").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("correct horse"));
        assert!(codec.verify("correct horse battery staple", &hash));
    }

    #[test]
    fn wrong_password_fails() {
        let codec = fast_codec();
        let hash = codec.hash("04234").unwrap();

        assert!(!codec.verify("04235", &hash));
        assert!(!codec.verify("", &hash));
    }

    #[test]
    fn malformed_hash_is_a_mismatch() {
        let codec = fast_codec();

        assert!(!codec.verify("anything", "not-a-phc-string"));
        assert!(!codec.verify("anything", ""));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let codec = fast_codec();
        let a = codec.hash("hunter2").unwrap();
        let b = codec.hash("hunter2").unwrap();

        assert_ne!(a, b);
        assert!(codec.verify("hunter2", &a));
        assert!(codec.verify("hunter2", &b));
    }

    #[test]
    fn default_codec_verifies_hashes_from_tuned_codec() {
        let hash = fast_codec().hash("pw").unwrap();
        assert!(PasswordCodec::default().verify("pw", &hash));
    }

    #[test]
    fn rejects_bad_params() {
        // Argon2 needs at least 8 KiB per lane.
        assert!(matches!(
            PasswordCodec::with_params(1, 1, 1),
            Err(PasswordError::Params(_))
        ));
    }
}
