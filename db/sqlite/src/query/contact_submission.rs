use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::contact_submission::ContactSubmissionModel};

const INSERT: &str = "INSERT INTO \"contact_submissions\" (\"id\", \"created_at\", \"updated_at\", \"name\", \"email\", \"phone\", \"property_interest\", \"visit_date\", \"message\", \"status\") VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"email\", \"phone\", \"property_interest\", \"visit_date\", \"message\", \"status\" FROM \"contact_submissions\" WHERE \"id\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"email\", \"phone\", \"property_interest\", \"visit_date\", \"message\", \"status\" FROM \"contact_submissions\" ORDER BY \"created_at\" DESC, \"id\" DESC";
const UPDATE: &str = "UPDATE \"contact_submissions\" SET \"updated_at\" = ?, \"status\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"contact_submissions\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    eb_log::info(Some("🔧"), "SQLite: Setting up contact_submissions table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"contact_submissions\" (\"id\" blob, \"created_at\" timestamp, \"updated_at\" timestamp, \"name\" text, \"email\" text, \"phone\" text, \"property_interest\" text, \"visit_date\" text, \"message\" text, \"status\" text, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT).await.unwrap();
    pool.prepare(SELECT_MANY).await.unwrap();
    pool.prepare(UPDATE).await.unwrap();
    pool.prepare(DELETE).await.unwrap();
}

impl SqliteDb {
    pub async fn insert_contact_submission(&self, value: &ContactSubmissionModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.name())
                .bind(value.email())
                .bind(value.phone())
                .bind(value.property_interest())
                .bind(value.visit_date())
                .bind(value.message())
                .bind(value.status()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_contact_submission(&self, id: &Uuid) -> Result<ContactSubmissionModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_contact_submissions(&self) -> Result<Vec<ContactSubmissionModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn update_contact_submission(&self, value: &ContactSubmissionModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.status())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_contact_submission(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
