use argon2::{
    password_hash::{self, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};

pub struct Argon2Hash {
    argon2: Argon2<'static>,
    salt: SaltString,
}

impl Argon2Hash {
    /// Panics on an unknown algorithm, version or malformed salt. Those come
    /// straight from the configuration file and are unrecoverable at startup.
    pub fn new(algorithm: &str, version: &str, salt: &str) -> Self {
        eb_log::info(Some("⚡"), "Argon2Hash: Initializing component");

        let algorithm = match algorithm {
            "Argon2d" => Algorithm::Argon2d,
            "Argon2i" => Algorithm::Argon2i,
            "Argon2id" => Algorithm::Argon2id,
            _ => panic!("Unknown argon2 algorithm"),
        };

        let version = match version {
            "V0x10" => Version::V0x10,
            "V0x13" => Version::V0x13,
            _ => panic!("Unknown argon2 version"),
        };

        let salt = match SaltString::from_b64(salt) {
            Ok(salt) => salt,
            Err(err) => panic!("Invalid argon2 salt: {err}"),
        };

        Self {
            argon2: Argon2::new(algorithm, version, Params::DEFAULT),
            salt,
        }
    }

    pub fn hash_password(&self, password: &[u8]) -> Result<PasswordHash<'_>, password_hash::Error> {
        self.argon2.hash_password(password, &self.salt)
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> Result<(), password_hash::Error> {
        let hash = PasswordHash::new(hash)?;
        self.argon2.verify_password(password.as_bytes(), &hash)
    }
}

#[cfg(test)]
mod tests {
    use crate::argon2::Argon2Hash;

    fn hasher() -> Argon2Hash {
        Argon2Hash::new("Argon2id", "V0x13", "c2FsdHlzYWx0eXNhbHQ")
    }

    #[test]
    fn verify_accepts_matching_password() {
        let hasher = hasher();
        let hash = hasher.hash_password(b"admin123").unwrap().to_string();
        assert!(hasher.verify_password("admin123", &hash).is_ok());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hasher = hasher();
        let hash = hasher.hash_password(b"admin123").unwrap().to_string();
        assert!(hasher.verify_password("admin124", &hash).is_err());
    }

    #[test]
    #[should_panic(expected = "Unknown argon2 algorithm")]
    fn unknown_algorithm_panics() {
        Argon2Hash::new("Argon3", "V0x13", "c2FsdHlzYWx0eXNhbHQ");
    }
}
