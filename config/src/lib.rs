use std::fs::File;

use serde::Deserialize;

use crate::{
    api::ApiConfig, app::AppConfig, auth::AuthConfig, db::DbConfig, hash::HashConfig,
    log::LogConfig, token::TokenConfig, upload::UploadConfig,
};

pub mod api;
pub mod app;
pub mod auth;
pub mod db;
pub mod hash;
pub mod log;
pub mod token;
pub mod upload;

#[derive(Deserialize)]
pub struct Config {
    app: AppConfig,
    log: LogConfig,
    hash: HashConfig,
    token: TokenConfig,
    auth: AuthConfig,
    upload: UploadConfig,
    db: DbConfig,
    api: ApiConfig,
}

impl Config {
    pub fn app(&self) -> &AppConfig {
        &self.app
    }

    pub fn log(&self) -> &LogConfig {
        &self.log
    }

    pub fn hash(&self) -> &HashConfig {
        &self.hash
    }

    pub fn token(&self) -> &TokenConfig {
        &self.token
    }

    pub fn auth(&self) -> &AuthConfig {
        &self.auth
    }

    pub fn upload(&self) -> &UploadConfig {
        &self.upload
    }

    pub fn db(&self) -> &DbConfig {
        &self.db
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }
}

pub fn from_path(path: &str) -> Config {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => panic!("Failed to open configuration file at '{path}': {err}"),
    };
    match serde_yaml::from_reader::<_, Config>(file) {
        Ok(config) => config,
        Err(err) => panic!("Failed to parse configuration file at '{path}': {err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::Config;

    #[test]
    fn parse_full_config() {
        let yaml = r#"
app:
  mode: development
log:
  display_level: true
  level_filter: info
hash:
  argon2:
    algorithm: Argon2id
    version: V0x13
    salt: c2FsdHlzYWx0eXNhbHQ
token:
  jwt:
    secret: supersecretjwtkey
    expiry_duration: 8h
auth:
  admin_username: admin
  admin_password: admin123
  admin_email: admin@estatebase.dev
upload:
  path: ./uploads
  max_size: 5242880
db:
  sqlite:
    path: ./data/estatebase.db
    max_connections: 20
api:
  rest:
    host: 127.0.0.1
    port: "8080"
    allowed_origin: "*"
"#;

        let config = serde_yaml::from_str::<Config>(yaml).unwrap();

        assert_eq!(config.log().level_filter(), "info");
        assert_eq!(config.hash().argon2().algorithm(), "Argon2id");
        assert_eq!(
            *config.token().jwt().expiry_duration(),
            Duration::from_secs(8 * 60 * 60)
        );
        assert_eq!(config.auth().admin_username(), "admin");
        assert_eq!(*config.upload().max_size(), 5242880);
        assert!(config.db().postgres().is_none());
        assert_eq!(
            config.db().sqlite().as_ref().unwrap().path(),
            "./data/estatebase.db"
        );
        assert_eq!(config.api().rest().port(), "8080");
    }

    #[test]
    fn reject_config_without_db_section() {
        let yaml = r#"
app:
  mode: production
log:
  display_level: false
  level_filter: warn
"#;

        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }
}
