use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::plot::PlotModel};

const INSERT: &str = "INSERT INTO \"plots\" (\"id\", \"created_at\", \"updated_at\", \"plot_name\", \"location\", \"plot_area\", \"price_range\", \"property_type\", \"description\", \"main_image\", \"gallery_images\", \"youtube_link\", \"status\", \"featured\", \"display_order\", \"active\") VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"plot_name\", \"location\", \"plot_area\", \"price_range\", \"property_type\", \"description\", \"main_image\", \"gallery_images\", \"youtube_link\", \"status\", \"featured\", \"display_order\", \"active\" FROM \"plots\" WHERE \"id\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"plot_name\", \"location\", \"plot_area\", \"price_range\", \"property_type\", \"description\", \"main_image\", \"gallery_images\", \"youtube_link\", \"status\", \"featured\", \"display_order\", \"active\" FROM \"plots\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"plot_name\", \"location\", \"plot_area\", \"price_range\", \"property_type\", \"description\", \"main_image\", \"gallery_images\", \"youtube_link\", \"status\", \"featured\", \"display_order\", \"active\" FROM \"plots\" WHERE \"active\" = true AND (?1 IS NULL OR \"status\" = ?1) ORDER BY \"display_order\" ASC, \"id\" ASC";
const UPDATE: &str = "UPDATE \"plots\" SET \"updated_at\" = ?, \"plot_name\" = ?, \"location\" = ?, \"plot_area\" = ?, \"price_range\" = ?, \"property_type\" = ?, \"description\" = ?, \"main_image\" = ?, \"gallery_images\" = ?, \"youtube_link\" = ?, \"status\" = ?, \"featured\" = ?, \"display_order\" = ?, \"active\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"plots\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    eb_log::info(Some("🔧"), "SQLite: Setting up plots table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"plots\" (\"id\" blob, \"created_at\" timestamp, \"updated_at\" timestamp, \"plot_name\" text, \"location\" text, \"plot_area\" text, \"price_range\" text, \"property_type\" text, \"description\" text, \"main_image\" text, \"gallery_images\" text, \"youtube_link\" text, \"status\" text, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT).await.unwrap();
    pool.prepare(SELECT_MANY).await.unwrap();
    pool.prepare(SELECT_MANY_PUBLIC).await.unwrap();
    pool.prepare(UPDATE).await.unwrap();
    pool.prepare(DELETE).await.unwrap();
}

impl SqliteDb {
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
