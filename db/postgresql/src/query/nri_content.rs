use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::nri_content::NriContentModel};

const INSERT: &str = "INSERT INTO \"nri_contents\" (\"id\", \"created_at\", \"updated_at\", \"section_name\", \"title\", \"content\", \"icon_name\", \"image_url\", \"featured\", \"display_order\", \"active\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"section_name\", \"title\", \"content\", \"icon_name\", \"image_url\", \"featured\", \"display_order\", \"active\" FROM \"nri_contents\" WHERE \"id\" = $1";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"section_name\", \"title\", \"content\", \"icon_name\", \"image_url\", \"featured\", \"display_order\", \"active\" FROM \"nri_contents\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"section_name\", \"title\", \"content\", \"icon_name\", \"image_url\", \"featured\", \"display_order\", \"active\" FROM \"nri_contents\" WHERE \"active\" = true AND ($1::text IS NULL OR \"section_name\" = $1) ORDER BY \"display_order\" ASC, \"id\" ASC";
const UPDATE: &str = "UPDATE \"nri_contents\" SET \"updated_at\" = $1, \"section_name\" = $2, \"title\" = $3, \"content\" = $4, \"icon_name\" = $5, \"image_url\" = $6, \"featured\" = $7, \"display_order\" = $8, \"active\" = $9 WHERE \"id\" = $10";
const DELETE: &str = "DELETE FROM \"nri_contents\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    eb_log::info(Some("🔧"), "PostgreSQL: Setting up nri_contents table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"nri_contents\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"section_name\" text, \"title\" text, \"content\" text, \"icon_name\" text, \"image_url\" text, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(SELECT_MANY),
        pool.prepare(SELECT_MANY_PUBLIC),
        pool.prepare(UPDATE),
        pool.prepare(DELETE),
    )
    .unwrap();
}

impl PostgresDb {
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
