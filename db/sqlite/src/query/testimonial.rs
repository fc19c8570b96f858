use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::testimonial::TestimonialModel};

const INSERT: &str = "INSERT INTO \"testimonials\" (\"id\", \"created_at\", \"updated_at\", \"name\", \"location\", \"testimonial\", \"image_url\", \"rating\", \"featured\", \"display_order\", \"active\") VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"location\", \"testimonial\", \"image_url\", \"rating\", \"featured\", \"display_order\", \"active\" FROM \"testimonials\" WHERE \"id\" = ?";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"location\", \"testimonial\", \"image_url\", \"rating\", \"featured\", \"display_order\", \"active\" FROM \"testimonials\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"location\", \"testimonial\", \"image_url\", \"rating\", \"featured\", \"display_order\", \"active\" FROM \"testimonials\" WHERE \"active\" = true AND (?1 IS NULL OR \"featured\" = ?1) ORDER BY \"display_order\" ASC, \"id\" ASC";
const UPDATE: &str = "UPDATE \"testimonials\" SET \"updated_at\" = ?, \"name\" = ?, \"location\" = ?, \"testimonial\" = ?, \"image_url\" = ?, \"rating\" = ?, \"featured\" = ?, \"display_order\" = ?, \"active\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"testimonials\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    eb_log::info(Some("🔧"), "SQLite: Setting up testimonials table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"testimonials\" (\"id\" blob, \"created_at\" timestamp, \"updated_at\" timestamp, \"name\" text, \"location\" text, \"testimonial\" text, \"image_url\" text, \"rating\" integer, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT).await.unwrap();
    pool.prepare(SELECT_MANY).await.unwrap();
    pool.prepare(SELECT_MANY_PUBLIC).await.unwrap();
    pool.prepare(UPDATE).await.unwrap();
    pool.prepare(DELETE).await.unwrap();
}

impl SqliteDb {
    pub async fn insert_testimonial(&self, value: &TestimonialModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.name())
                .bind(value.location())
                .bind(value.testimonial())
                .bind(value.image_url())
                .bind(value.rating())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_testimonial(&self, id: &Uuid) -> Result<TestimonialModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_testimonials(&self) -> Result<Vec<TestimonialModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_many_testimonials_public(
        &self,
        featured: &Option<bool>,
    ) -> Result<Vec<TestimonialModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_PUBLIC).bind(featured))
            .await?)
    }

    pub async fn update_testimonial(&self, value: &TestimonialModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.name())
                .bind(value.location())
                .bind(value.testimonial())
                .bind(value.image_url())
                .bind(value.rating())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_testimonial(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
