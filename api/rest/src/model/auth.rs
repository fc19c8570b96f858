use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct LoginReqJson {
    #[validate(length(min = 1, message = "username must not be empty"))]
    username: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    password: String,
}

impl LoginReqJson {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Deserialize, Validate)]
pub struct ChangePasswordReqJson {
    #[validate(length(min = 1, message = "current_password must not be empty"))]
    current_password: String,
    #[validate(length(min = 8, message = "new_password must be at least 8 characters"))]
    new_password: String,
}

impl ChangePasswordReqJson {
    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Serialize)]
pub struct LoginResJson {
    access_token: String,
    token_type: String,
    user: AdminResJson,
}

impl LoginResJson {
    pub fn new(access_token: &str, token_type: &str, user: AdminResJson) -> Self {
        Self {
            access_token: access_token.to_owned(),
            token_type: token_type.to_owned(),
            user,
        }
    }
}

#[derive(Serialize)]
pub struct AdminResJson {
    username: String,
    email: String,
    role: String,
}

impl AdminResJson {
    pub fn new(username: &str, email: &str, role: &str) -> Self {
        Self {
            username: username.to_owned(),
            email: email.to_owned(),
            role: role.to_owned(),
        }
    }
}

#[derive(Serialize)]
pub struct ChangePasswordResJson {
    message: String,
}

impl ChangePasswordResJson {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}
