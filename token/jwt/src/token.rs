use std::time::{self, Duration};

use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claim::Claim;

pub struct JwtToken {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_duration: u64,
}

impl JwtToken {
    pub fn new(secret: &str, expiry_duration: &Duration) -> Self {
        eb_log::info(Some("⚡"), "JwtToken: Initializing component");

        let secret = secret.as_bytes();
        Self {
            header: Header::default(),
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            expiry_duration: expiry_duration.as_secs(),
        }
    }

    pub fn encode(&self, id: &Uuid, username: &str, role: &str) -> Result<String> {
        let now = time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)?
            .as_secs();
        let issued_at = match usize::try_from(now) {
            Ok(time) => time,
            Err(err) => return Err(err.into()),
        };
        let expiration_time = match usize::try_from(now + self.expiry_duration) {
            Ok(time) => time,
            Err(err) => return Err(err.into()),
        };

        Ok(encode(
            &self.header,
            &Claim::new(id, username, role, &issued_at, &expiration_time),
            &self.encoding_key,
        )?)
    }

    pub fn decode(&self, token: &str) -> Result<Claim> {
        Ok(decode::<Claim>(token, &self.decoding_key, &Validation::default())?.claims)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{self, Duration};

    use jsonwebtoken::{encode, EncodingKey, Header};
    use uuid::Uuid;

    use crate::{claim::Claim, token::JwtToken};

    #[test]
    fn encode_decode_roundtrip() {
        let jwt = JwtToken::new("supersecretjwtkey", &Duration::from_secs(8 * 60 * 60));
        let id = Uuid::now_v7();

        let token = jwt.encode(&id, "admin", "admin").unwrap();
        let claim = jwt.decode(&token).unwrap();

        assert_eq!(claim.id(), &id);
        assert_eq!(claim.username(), "admin");
        assert_eq!(claim.role(), "admin");
        assert!(claim.exp() > claim.iat());
    }

    #[test]
    fn decode_rejects_other_secret() {
        let jwt = JwtToken::new("supersecretjwtkey", &Duration::from_secs(60));
        let other = JwtToken::new("differentsecret", &Duration::from_secs(60));

        let token = jwt.encode(&Uuid::now_v7(), "admin", "admin").unwrap();

        assert!(other.decode(&token).is_err());
    }

    #[test]
    fn decode_rejects_expired_token() {
        let jwt = JwtToken::new("supersecretjwtkey", &Duration::from_secs(60));
        let now = usize::try_from(
            time::SystemTime::now()
                .duration_since(time::UNIX_EPOCH)
                .unwrap()
                .as_secs(),
        )
        .unwrap();

        let claim = Claim::new(
            &Uuid::now_v7(),
            "admin",
            "admin",
            &(now - 7200),
            &(now - 3600),
        );
        let token = encode(
            &Header::default(),
            &claim,
            &EncodingKey::from_secret(b"supersecretjwtkey"),
        )
        .unwrap();

        assert!(jwt.decode(&token).is_err());
    }
}
