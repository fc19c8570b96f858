use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bearer token payload. `iat` lets the session gate retire tokens issued
/// before the admin's last password change.
#[derive(Deserialize, Serialize)]
pub struct Claim {
    id: Uuid,
    username: String,
    role: String,
    iat: usize,
    exp: usize,
}

impl Claim {
    pub fn new(id: &Uuid, username: &str, role: &str, iat: &usize, exp: &usize) -> Self {
        Self {
            id: *id,
            username: username.to_owned(),
            role: role.to_owned(),
            iat: *iat,
            exp: *exp,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn iat(&self) -> &usize {
        &self.iat
    }

    pub fn exp(&self) -> &usize {
        &self.exp
    }
}
