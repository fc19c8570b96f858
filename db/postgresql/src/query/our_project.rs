use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::our_project::OurProjectModel};

const INSERT: &str = "INSERT INTO \"our_projects\" (\"id\", \"created_at\", \"updated_at\", \"project_name\", \"location\", \"price_range\", \"property_type\", \"short_description\", \"thumbnail_image\", \"youtube_link\", \"featured\", \"display_order\", \"active\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"project_name\", \"location\", \"price_range\", \"property_type\", \"short_description\", \"thumbnail_image\", \"youtube_link\", \"featured\", \"display_order\", \"active\" FROM \"our_projects\" WHERE \"id\" = $1";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"project_name\", \"location\", \"price_range\", \"property_type\", \"short_description\", \"thumbnail_image\", \"youtube_link\", \"featured\", \"display_order\", \"active\" FROM \"our_projects\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"project_name\", \"location\", \"price_range\", \"property_type\", \"short_description\", \"thumbnail_image\", \"youtube_link\", \"featured\", \"display_order\", \"active\" FROM \"our_projects\" WHERE \"active\" = true AND ($1::bool IS NULL OR \"featured\" = $1) ORDER BY \"display_order\" ASC, \"id\" ASC";
const UPDATE: &str = "UPDATE \"our_projects\" SET \"updated_at\" = $1, \"project_name\" = $2, \"location\" = $3, \"price_range\" = $4, \"property_type\" = $5, \"short_description\" = $6, \"thumbnail_image\" = $7, \"youtube_link\" = $8, \"featured\" = $9, \"display_order\" = $10, \"active\" = $11 WHERE \"id\" = $12";
const DELETE: &str = "DELETE FROM \"our_projects\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    eb_log::info(Some("🔧"), "PostgreSQL: Setting up our_projects table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"our_projects\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"project_name\" text, \"location\" text, \"price_range\" text, \"property_type\" text, \"short_description\" text, \"thumbnail_image\" text, \"youtube_link\" text, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

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
    pub async fn insert_our_project(&self, value: &OurProjectModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.project_name())
                .bind(value.location())
                .bind(value.price_range())
                .bind(value.property_type())
                .bind(value.short_description())
                .bind(value.thumbnail_image())
                .bind(value.youtube_link())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_our_project(&self, id: &Uuid) -> Result<OurProjectModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_our_projects(&self) -> Result<Vec<OurProjectModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_many_our_projects_public(
        &self,
        featured: &Option<bool>,
    ) -> Result<Vec<OurProjectModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_PUBLIC).bind(featured))
            .await?)
    }

    pub async fn update_our_project(&self, value: &OurProjectModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.project_name())
                .bind(value.location())
                .bind(value.price_range())
                .bind(value.property_type())
                .bind(value.short_description())
                .bind(value.thumbnail_image())
                .bind(value.youtube_link())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_our_project(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
