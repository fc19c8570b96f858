use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::admin::AdminModel};

const INSERT: &str = "INSERT INTO \"admins\" (\"id\", \"created_at\", \"updated_at\", \"username\", \"email\", \"password_hash\", \"role\", \"password_changed_at\", \"active\") VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"username\", \"email\", \"password_hash\", \"role\", \"password_changed_at\", \"active\" FROM \"admins\" WHERE \"id\" = ?";
const SELECT_BY_USERNAME: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"username\", \"email\", \"password_hash\", \"role\", \"password_changed_at\", \"active\" FROM \"admins\" WHERE \"username\" = ?";
const UPDATE: &str = "UPDATE \"admins\" SET \"updated_at\" = ?, \"email\" = ?, \"password_hash\" = ?, \"role\" = ?, \"password_changed_at\" = ?, \"active\" = ? WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    eb_log::info(Some("🔧"), "SQLite: Setting up admins table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"admins\" (\"id\" blob, \"created_at\" timestamp, \"updated_at\" timestamp, \"username\" text UNIQUE, \"email\" text, \"password_hash\" text, \"role\" text, \"password_changed_at\" timestamp, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT).await.unwrap();
    pool.prepare(SELECT_BY_USERNAME).await.unwrap();
    pool.prepare(UPDATE).await.unwrap();
}

impl SqliteDb {
    pub async fn insert_admin(&self, value: &AdminModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.username())
                .bind(value.email())
                .bind(value.password_hash())
                .bind(value.role())
                .bind(value.password_changed_at())
                .bind(value.active()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_admin(&self, id: &Uuid) -> Result<AdminModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_admin_by_username(&self, username: &str) -> Result<AdminModel> {
        Ok(self
            .fetch_one(sqlx::query_as(SELECT_BY_USERNAME).bind(username))
            .await?)
    }

    pub async fn update_admin(&self, value: &AdminModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.email())
                .bind(value.password_hash())
                .bind(value.role())
                .bind(value.password_changed_at())
                .bind(value.active())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }
}
