use serde::Deserialize;

#[derive(Deserialize)]
pub struct AuthConfig {
    admin_username: String,
    admin_password: String,
    admin_email: String,
}

impl AuthConfig {
    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }
}
