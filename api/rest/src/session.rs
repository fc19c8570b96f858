use eb_dao::admin::AdminDao;
use eb_error::Error;
use uuid::Uuid;

use crate::context::ApiRestCtx;

/// Identity behind a validated bearer token. Built once per request at the
/// top of every gated handler; nothing downstream reads auth state from
/// anywhere else.
pub struct AdminSession {
    admin_id: Uuid,
    username: String,
    email: String,
    role: String,
}

impl AdminSession {
    /// Decodes the bearer token and loads the backing admin account. Fails
    /// with Unauthorized when the token is malformed, expired, signed with
    /// another key, references a missing admin, or was issued before the
    /// admin's last password change.
    pub async fn from_bearer(ctx: &ApiRestCtx, token: &str) -> Result<Self, Error> {
        let token_claim = match ctx.token().jwt().decode(token) {
            Ok(claim) => claim,
            Err(_) => {
                return Err(Error::Unauthorized(
                    "Could not validate credentials".to_owned(),
                ))
            }
        };

        let admin_data = match AdminDao::db_select(ctx.dao().db(), token_claim.id()).await {
            Ok(data) => data,
            Err(_) => {
                return Err(Error::Unauthorized(
                    "Could not validate credentials".to_owned(),
                ))
            }
        };

        if !*admin_data.active() {
            return Err(Error::Unauthorized("Account disabled".to_owned()));
        }

        if let Some(password_changed_at) = admin_data.password_changed_at() {
            let issued_at = match i64::try_from(*token_claim.iat()) {
                Ok(issued_at) => issued_at,
                Err(err) => return Err(Error::InternalServerError(err.to_string())),
            };
            if issued_at < password_changed_at.timestamp() {
                return Err(Error::Unauthorized(
                    "Could not validate credentials".to_owned(),
                ));
            }
        }

        Ok(Self {
            admin_id: *admin_data.id(),
            username: admin_data.username().to_owned(),
            email: admin_data.email().to_owned(),
            role: admin_data.role().to_owned(),
        })
    }

    pub fn admin_id(&self) -> &Uuid {
        &self.admin_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use chrono::Utc;
    use eb_dao::{admin::AdminDao, Db};
    use eb_db_sqlite::db::SqliteDb;
    use eb_hash_argon2::argon2::Argon2Hash;
    use eb_token_jwt::token::JwtToken;
    use tempfile::TempDir;

    use crate::{
        context::{ApiRestCtx, ApiRestDaoCtx, ApiRestHashCtx, ApiRestTokenCtx, ApiRestUploadCtx},
        session::AdminSession,
    };

    async fn ctx(dir: &TempDir) -> ApiRestCtx {
        let db_path = dir.path().join("estatebase.db");
        let db = SqliteDb::new(db_path.to_str().unwrap(), &1).await;

        ApiRestCtx::new(
            ApiRestHashCtx::new(Argon2Hash::new("Argon2id", "V0x13", "c2FsdHlzYWx0eXNhbHQ")),
            ApiRestTokenCtx::new(JwtToken::new(
                "supersecretjwtkey",
                &Duration::from_secs(60 * 60),
            )),
            ApiRestDaoCtx::new(Arc::new(Db::SqliteDb(db))),
            ApiRestUploadCtx::new(dir.path().to_str().unwrap(), &1024),
        )
    }

    #[actix_web::test]
    async fn rejects_malformed_token() {
        let dir = TempDir::new().unwrap();
        let ctx = ctx(&dir).await;

        assert!(AdminSession::from_bearer(&ctx, "not-a-jwt").await.is_err());
    }

    #[actix_web::test]
    async fn rejects_token_of_missing_admin() {
        let dir = TempDir::new().unwrap();
        let ctx = ctx(&dir).await;

        let token = ctx
            .token()
            .jwt()
            .encode(&uuid::Uuid::now_v7(), "ghost", "admin")
            .unwrap();

        assert!(AdminSession::from_bearer(&ctx, &token).await.is_err());
    }

    #[actix_web::test]
    async fn rejects_token_issued_before_password_change() {
        let dir = TempDir::new().unwrap();
        let ctx = ctx(&dir).await;

        let admin_data = AdminDao::new("admin", "admin@estatebase.dev", "hash", "admin");
        admin_data.db_insert(ctx.dao().db()).await.unwrap();

        let token = ctx
            .token()
            .jwt()
            .encode(admin_data.id(), admin_data.username(), admin_data.role())
            .unwrap();

        let session = AdminSession::from_bearer(&ctx, &token).await.unwrap();
        assert_eq!(session.admin_id(), admin_data.id());
        assert_eq!(session.username(), "admin");

        let mut admin_data = AdminDao::db_select(ctx.dao().db(), admin_data.id())
            .await
            .unwrap();
        admin_data.set_password_changed_at(&(Utc::now() + chrono::Duration::seconds(5)));
        admin_data.db_update(ctx.dao().db()).await.unwrap();

        assert!(AdminSession::from_bearer(&ctx, &token).await.is_err());
    }
}
