use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::testimonial::TestimonialModel};

const INSERT: &str = "INSERT INTO \"testimonials\" (\"id\", \"created_at\", \"updated_at\", \"name\", \"location\", \"testimonial\", \"image_url\", \"rating\", \"featured\", \"display_order\", \"active\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"location\", \"testimonial\", \"image_url\", \"rating\", \"featured\", \"display_order\", \"active\" FROM \"testimonials\" WHERE \"id\" = $1";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"location\", \"testimonial\", \"image_url\", \"rating\", \"featured\", \"display_order\", \"active\" FROM \"testimonials\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"location\", \"testimonial\", \"image_url\", \"rating\", \"featured\", \"display_order\", \"active\" FROM \"testimonials\" WHERE \"active\" = true AND ($1::bool IS NULL OR \"featured\" = $1) ORDER BY \"display_order\" ASC, \"id\" ASC";
const UPDATE: &str = "UPDATE \"testimonials\" SET \"updated_at\" = $1, \"name\" = $2, \"location\" = $3, \"testimonial\" = $4, \"image_url\" = $5, \"rating\" = $6, \"featured\" = $7, \"display_order\" = $8, \"active\" = $9 WHERE \"id\" = $10";
const DELETE: &str = "DELETE FROM \"testimonials\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    eb_log::info(Some("🔧"), "PostgreSQL: Setting up testimonials table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"testimonials\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"name\" text, \"location\" text, \"testimonial\" text, \"image_url\" text, \"rating\" integer, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

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
