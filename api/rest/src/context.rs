use std::sync::Arc;

use eb_dao::Db;
use eb_hash_argon2::argon2::Argon2Hash;
use eb_token_jwt::token::JwtToken;

pub struct ApiRestCtx {
    hash: ApiRestHashCtx,
    token: ApiRestTokenCtx,
    dao: ApiRestDaoCtx,
    upload: ApiRestUploadCtx,
}

impl ApiRestCtx {
    pub fn new(
        hash: ApiRestHashCtx,
        token: ApiRestTokenCtx,
        dao: ApiRestDaoCtx,
        upload: ApiRestUploadCtx,
    ) -> Self {
        Self {
            hash,
            token,
            dao,
            upload,
        }
    }

    pub fn hash(&self) -> &ApiRestHashCtx {
        &self.hash
    }

    pub fn token(&self) -> &ApiRestTokenCtx {
        &self.token
    }

    pub fn dao(&self) -> &ApiRestDaoCtx {
        &self.dao
    }

    pub fn upload(&self) -> &ApiRestUploadCtx {
        &self.upload
    }
}

pub struct ApiRestHashCtx {
    argon2: Argon2Hash,
}

impl ApiRestHashCtx {
    pub fn new(argon2: Argon2Hash) -> Self {
        Self { argon2 }
    }

    pub fn argon2(&self) -> &Argon2Hash {
        &self.argon2
    }
}

pub struct ApiRestTokenCtx {
    jwt: JwtToken,
}

impl ApiRestTokenCtx {
    pub fn new(jwt: JwtToken) -> Self {
        Self { jwt }
    }

    pub fn jwt(&self) -> &JwtToken {
        &self.jwt
    }
}

pub struct ApiRestDaoCtx {
    db: Arc<Db>,
}

impl ApiRestDaoCtx {
    pub fn new(db: Arc<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Db {
        &self.db
    }
}

pub struct ApiRestUploadCtx {
    path: String,
    max_size: u64,
}

impl ApiRestUploadCtx {
    pub fn new(path: &str, max_size: &u64) -> Self {
        Self {
            path: path.to_owned(),
            max_size: *max_size,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn max_size(&self) -> &u64 {
        &self.max_size
    }
}
