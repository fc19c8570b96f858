use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::admin::AdminModel as AdminPostgresModel;
use eb_db_sqlite::model::admin::AdminModel as AdminSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct AdminDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    username: String,
    email: String,
    password_hash: String,
    role: String,
    password_changed_at: Option<DateTime<Utc>>,
    active: bool,
}

impl AdminDao {
    pub fn new(username: &str, email: &str, password_hash: &str, role: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            username: username.to_owned(),
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            role: role.to_owned(),
            password_changed_at: None,
            active: true,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn password_changed_at(&self) -> &Option<DateTime<Utc>> {
        &self.password_changed_at
    }

    pub fn active(&self) -> &bool {
        &self.active
    }

    pub fn set_password_hash(&mut self, password_hash: &str) {
        self.password_hash = password_hash.to_owned();
    }

    pub fn set_password_changed_at(&mut self, password_changed_at: &DateTime<Utc>) {
        self.password_changed_at = Some(*password_changed_at);
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_admin(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_admin(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(&db.select_admin(id).await?)),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_admin(id).await?)),
        }
    }

    pub async fn db_select_by_username(db: &Db, username: &str) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_admin_by_username(username).await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(
                &db.select_admin_by_username(username).await?,
            )),
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_admin(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_admin(&self.to_sqlitedb_model()).await,
        }
    }

    /// Inserts the default account when the username is not taken yet. Runs
    /// once at startup so a fresh deployment always has a way to sign in.
    pub async fn db_bootstrap(
        db: &Db,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<()> {
        match Self::db_select_by_username(db, username).await {
            Ok(_) => Ok(()),
            Err(err) => {
                if let Some(sqlx::Error::RowNotFound) = err.downcast_ref::<sqlx::Error>() {
                    eb_log::info(Some("🔧"), "AdminDao: Creating default admin account");
                    let admin_data = Self::new(username, email, password_hash, "admin");
                    admin_data.db_insert(db).await
                } else {
                    Err(err)
                }
            }
        }
    }

    fn from_postgresdb_model(model: &AdminPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            username: model.username().to_owned(),
            email: model.email().to_owned(),
            password_hash: model.password_hash().to_owned(),
            role: model.role().to_owned(),
            password_changed_at: *model.password_changed_at(),
            active: *model.active(),
        }
    }

    fn to_postgresdb_model(&self) -> AdminPostgresModel {
        AdminPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.username,
            &self.email,
            &self.password_hash,
            &self.role,
            &self.password_changed_at,
            &self.active,
        )
    }

    fn from_sqlitedb_model(model: &AdminSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            username: model.username().to_owned(),
            email: model.email().to_owned(),
            password_hash: model.password_hash().to_owned(),
            role: model.role().to_owned(),
            password_changed_at: *model.password_changed_at(),
            active: *model.active(),
        }
    }

    fn to_sqlitedb_model(&self) -> AdminSqliteModel {
        AdminSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.username,
            &self.email,
            &self.password_hash,
            &self.role,
            &self.password_changed_at,
            &self.active,
        )
    }
}
