use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::amenity::AmenityModel};

const INSERT: &str = "INSERT INTO \"amenities\" (\"id\", \"created_at\", \"updated_at\", \"title\", \"description\", \"icon_name\", \"image_url\", \"featured\", \"display_order\", \"active\") VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"description\", \"icon_name\", \"image_url\", \"featured\", \"display_order\", \"active\" FROM \"amenities\" WHERE \"id\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"description\", \"icon_name\", \"image_url\", \"featured\", \"display_order\", \"active\" FROM \"amenities\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"description\", \"icon_name\", \"image_url\", \"featured\", \"display_order\", \"active\" FROM \"amenities\" WHERE \"active\" = true ORDER BY \"display_order\" ASC, \"id\" ASC";
const UPDATE: &str = "UPDATE \"amenities\" SET \"updated_at\" = ?, \"title\" = ?, \"description\" = ?, \"icon_name\" = ?, \"image_url\" = ?, \"featured\" = ?, \"display_order\" = ?, \"active\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"amenities\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    eb_log::info(Some("🔧"), "SQLite: Setting up amenities table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"amenities\" (\"id\" blob, \"created_at\" timestamp, \"updated_at\" timestamp, \"title\" text, \"description\" text, \"icon_name\" text, \"image_url\" text, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT).await.unwrap();
    pool.prepare(SELECT_MANY).await.unwrap();
    pool.prepare(SELECT_MANY_PUBLIC).await.unwrap();
    pool.prepare(UPDATE).await.unwrap();
    pool.prepare(DELETE).await.unwrap();
}

impl SqliteDb {
    pub async fn insert_amenity(&self, value: &AmenityModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.title())
                .bind(value.description())
                .bind(value.icon_name())
                .bind(value.image_url())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_amenity(&self, id: &Uuid) -> Result<AmenityModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_amenities(&self) -> Result<Vec<AmenityModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_many_amenities_public(&self) -> Result<Vec<AmenityModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY_PUBLIC)).await?)
    }

    pub async fn update_amenity(&self, value: &AmenityModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.title())
                .bind(value.description())
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

    pub async fn delete_amenity(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
