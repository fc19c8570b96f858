use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::admin::AdminModel};

const INSERT: &str = "INSERT INTO \"admins\" (\"id\", \"created_at\", \"updated_at\", \"username\", \"email\", \"password_hash\", \"role\", \"password_changed_at\", \"active\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"username\", \"email\", \"password_hash\", \"role\", \"password_changed_at\", \"active\" FROM \"admins\" WHERE \"id\" = $1";
const SELECT_BY_USERNAME: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"username\", \"email\", \"password_hash\", \"role\", \"password_changed_at\", \"active\" FROM \"admins\" WHERE \"username\" = $1";
const UPDATE: &str = "UPDATE \"admins\" SET \"updated_at\" = $1, \"email\" = $2, \"password_hash\" = $3, \"role\" = $4, \"password_changed_at\" = $5, \"active\" = $6 WHERE \"id\" = $7";

pub async fn init(pool: &Pool<Postgres>) {
    eb_log::info(Some("🔧"), "PostgreSQL: Setting up admins table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"admins\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"username\" text UNIQUE, \"email\" text, \"password_hash\" text, \"role\" text, \"password_changed_at\" timestamptz(6), \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(SELECT_BY_USERNAME),
        pool.prepare(UPDATE),
    )
    .unwrap();
}

impl PostgresDb {
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
