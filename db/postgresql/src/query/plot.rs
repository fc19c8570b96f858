use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::plot::PlotModel};

const INSERT: &str = "INSERT INTO \"plots\" (\"id\", \"created_at\", \"updated_at\", \"plot_name\", \"location\", \"plot_area\", \"price_range\", \"property_type\", \"description\", \"main_image\", \"gallery_images\", \"youtube_link\", \"status\", \"featured\", \"display_order\", \"active\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"plot_name\", \"location\", \"plot_area\", \"price_range\", \"property_type\", \"description\", \"main_image\", \"gallery_images\", \"youtube_link\", \"status\", \"featured\", \"display_order\", \"active\" FROM \"plots\" WHERE \"id\" = $1";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"plot_name\", \"location\", \"plot_area\", \"price_range\", \"property_type\", \"description\", \"main_image\", \"gallery_images\", \"youtube_link\", \"status\", \"featured\", \"display_order\", \"active\" FROM \"plots\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"plot_name\", \"location\", \"plot_area\", \"price_range\", \"property_type\", \"description\", \"main_image\", \"gallery_images\", \"youtube_link\", \"status\", \"featured\", \"display_order\", \"active\" FROM \"plots\" WHERE \"active\" = true AND ($1::text IS NULL OR \"status\" = $1) ORDER BY \"display_order\" ASC, \"id\" ASC";
const UPDATE: &str = "UPDATE \"plots\" SET \"updated_at\" = $1, \"plot_name\" = $2, \"location\" = $3, \"plot_area\" = $4, \"price_range\" = $5, \"property_type\" = $6, \"description\" = $7, \"main_image\" = $8, \"gallery_images\" = $9, \"youtube_link\" = $10, \"status\" = $11, \"featured\" = $12, \"display_order\" = $13, \"active\" = $14 WHERE \"id\" = $15";
const DELETE: &str = "DELETE FROM \"plots\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    eb_log::info(Some("🔧"), "PostgreSQL: Setting up plots table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"plots\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"plot_name\" text, \"location\" text, \"plot_area\" text, \"price_range\" text, \"property_type\" text, \"description\" text, \"main_image\" text, \"gallery_images\" jsonb, \"youtube_link\" text, \"status\" text, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

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
    pub async fn insert_plot(&self, value: &PlotModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.plot_name())
                .bind(value.location())
                .bind(value.plot_area())
                .bind(value.price_range())
                .bind(value.property_type())
                .bind(value.description())
                .bind(value.main_image())
                .bind(value.gallery_images())
                .bind(value.youtube_link())
                .bind(value.status())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_plot(&self, id: &Uuid) -> Result<PlotModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_plots(&self) -> Result<Vec<PlotModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_many_plots_public(&self, status: &Option<String>) -> Result<Vec<PlotModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_PUBLIC).bind(status))
            .await?)
    }

    pub async fn update_plot(&self, value: &PlotModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.plot_name())
                .bind(value.location())
                .bind(value.plot_area())
                .bind(value.price_range())
                .bind(value.property_type())
                .bind(value.description())
                .bind(value.main_image())
                .bind(value.gallery_images())
                .bind(value.youtube_link())
                .bind(value.status())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_plot(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
