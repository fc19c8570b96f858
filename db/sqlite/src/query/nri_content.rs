use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::nri_content::NriContentModel};

const INSERT: &str = "INSERT INTO \"nri_contents\" (\"id\", \"created_at\", \"updated_at\", \"section_name\", \"title\", \"content\", \"icon_name\", \"image_url\", \"featured\", \"display_order\", \"active\") VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"section_name\", \"title\", \"content\", \"icon_name\", \"image_url\", \"featured\", \"display_order\", \"active\" FROM \"nri_contents\" WHERE \"id\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"section_name\", \"title\", \"content\", \"icon_name\", \"image_url\", \"featured\", \"display_order\", \"active\" FROM \"nri_contents\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"section_name\", \"title\", \"content\", \"icon_name\", \"image_url\", \"featured\", \"display_order\", \"active\" FROM \"nri_contents\" WHERE \"active\" = true AND (?1 IS NULL OR \"section_name\" = ?1) ORDER BY \"display_order\" ASC, \"id\" ASC";
const UPDATE: &str = "UPDATE \"nri_contents\" SET \"updated_at\" = ?, \"section_name\" = ?, \"title\" = ?, \"content\" = ?, \"icon_name\" = ?, \"image_url\" = ?, \"featured\" = ?, \"display_order\" = ?, \"active\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"nri_contents\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    eb_log::info(Some("🔧"), "SQLite: Setting up nri_contents table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"nri_contents\" (\"id\" blob, \"created_at\" timestamp, \"updated_at\" timestamp, \"section_name\" text, \"title\" text, \"content\" text, \"icon_name\" text, \"image_url\" text, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT).await.unwrap();
    pool.prepare(SELECT_MANY).await.unwrap();
    pool.prepare(SELECT_MANY_PUBLIC).await.unwrap();
    pool.prepare(UPDATE).await.unwrap();
    pool.prepare(DELETE).await.unwrap();
}

impl SqliteDb {
    pub async fn insert_nri_content(&self, value: &NriContentModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.section_name())
                .bind(value.title())
                .bind(value.content())
                .bind(value.icon_name())
                .bind(value.image_url())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_nri_content(&self, id: &Uuid) -> Result<NriContentModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_nri_contents(&self) -> Result<Vec<NriContentModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_many_nri_contents_public(
        &self,
        section_name: &Option<String>,
    ) -> Result<Vec<NriContentModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_PUBLIC).bind(section_name))
            .await?)
    }

    pub async fn update_nri_content(&self, value: &NriContentModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.section_name())
                .bind(value.title())
                .bind(value.content())
                .bind(value.icon_name())
                .bind(value.image_url())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_nri_content(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
