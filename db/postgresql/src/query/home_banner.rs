use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::home_banner::HomeBannerModel};

const INSERT: &str = "INSERT INTO \"home_banners\" (\"id\", \"created_at\", \"updated_at\", \"title\", \"subtitle\", \"image_url\", \"cta_text\", \"cta_link\", \"featured\", \"display_order\", \"active\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"subtitle\", \"image_url\", \"cta_text\", \"cta_link\", \"featured\", \"display_order\", \"active\" FROM \"home_banners\" WHERE \"id\" = $1";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"subtitle\", \"image_url\", \"cta_text\", \"cta_link\", \"featured\", \"display_order\", \"active\" FROM \"home_banners\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"subtitle\", \"image_url\", \"cta_text\", \"cta_link\", \"featured\", \"display_order\", \"active\" FROM \"home_banners\" WHERE \"active\" = true ORDER BY \"display_order\" ASC, \"id\" ASC";
const UPDATE: &str = "UPDATE \"home_banners\" SET \"updated_at\" = $1, \"title\" = $2, \"subtitle\" = $3, \"image_url\" = $4, \"cta_text\" = $5, \"cta_link\" = $6, \"featured\" = $7, \"display_order\" = $8, \"active\" = $9 WHERE \"id\" = $10";
const DELETE: &str = "DELETE FROM \"home_banners\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    eb_log::info(Some("🔧"), "PostgreSQL: Setting up home_banners table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"home_banners\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"title\" text, \"subtitle\" text, \"image_url\" text, \"cta_text\" text, \"cta_link\" text, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

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
    pub async fn insert_home_banner(&self, value: &HomeBannerModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.title())
                .bind(value.subtitle())
                .bind(value.image_url())
                .bind(value.cta_text())
                .bind(value.cta_link())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_home_banner(&self, id: &Uuid) -> Result<HomeBannerModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_home_banners(&self) -> Result<Vec<HomeBannerModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_many_home_banners_public(&self) -> Result<Vec<HomeBannerModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY_PUBLIC)).await?)
    }

    pub async fn update_home_banner(&self, value: &HomeBannerModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.title())
                .bind(value.subtitle())
                .bind(value.image_url())
                .bind(value.cta_text())
                .bind(value.cta_link())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_home_banner(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
