use anyhow::Result;
use sqlx::{Executor, Pool, Postgres, Row};
use uuid::Uuid;

use crate::{db::PostgresDb, model::blog::BlogModel};

const INSERT: &str = "INSERT INTO \"blogs\" (\"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"excerpt\", \"content\", \"featured_image\", \"category\", \"author\", \"tags\", \"meta_title\", \"meta_description\", \"meta_keywords\", \"featured\", \"display_order\", \"active\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"excerpt\", \"content\", \"featured_image\", \"category\", \"author\", \"tags\", \"meta_title\", \"meta_description\", \"meta_keywords\", \"featured\", \"display_order\", \"active\" FROM \"blogs\" WHERE \"id\" = $1";
const SELECT_BY_SLUG: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"excerpt\", \"content\", \"featured_image\", \"category\", \"author\", \"tags\", \"meta_title\", \"meta_description\", \"meta_keywords\", \"featured\", \"display_order\", \"active\" FROM \"blogs\" WHERE \"slug\" = $1 AND \"active\" = true";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"excerpt\", \"content\", \"featured_image\", \"category\", \"author\", \"tags\", \"meta_title\", \"meta_description\", \"meta_keywords\", \"featured\", \"display_order\", \"active\" FROM \"blogs\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"excerpt\", \"content\", \"featured_image\", \"category\", \"author\", \"tags\", \"meta_title\", \"meta_description\", \"meta_keywords\", \"featured\", \"display_order\", \"active\" FROM \"blogs\" WHERE \"active\" = true AND ($1::text IS NULL OR \"category\" = $1) AND ($2::bool IS NULL OR \"featured\" = $2) ORDER BY \"display_order\" ASC, \"id\" ASC LIMIT $3::int8 OFFSET COALESCE($4::int8, 0)";
const SELECT_CATEGORIES: &str = "SELECT DISTINCT \"category\" FROM \"blogs\" WHERE \"active\" = true ORDER BY \"category\" ASC";
const COUNT_PUBLIC: &str = "SELECT COUNT(1) FROM \"blogs\" WHERE \"active\" = true AND ($1::text IS NULL OR \"category\" = $1) AND ($2::bool IS NULL OR \"featured\" = $2)";
const UPDATE: &str = "UPDATE \"blogs\" SET \"updated_at\" = $1, \"title\" = $2, \"slug\" = $3, \"excerpt\" = $4, \"content\" = $5, \"featured_image\" = $6, \"category\" = $7, \"author\" = $8, \"tags\" = $9, \"meta_title\" = $10, \"meta_description\" = $11, \"meta_keywords\" = $12, \"featured\" = $13, \"display_order\" = $14, \"active\" = $15 WHERE \"id\" = $16";
const DELETE: &str = "DELETE FROM \"blogs\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    eb_log::info(Some("🔧"), "PostgreSQL: Setting up blogs table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"blogs\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"title\" text, \"slug\" text, \"excerpt\" text, \"content\" text, \"featured_image\" text, \"category\" text, \"author\" text, \"tags\" jsonb, \"meta_title\" text, \"meta_description\" text, \"meta_keywords\" text, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(SELECT_BY_SLUG),
        pool.prepare(SELECT_MANY),
        pool.prepare(SELECT_MANY_PUBLIC),
        pool.prepare(SELECT_CATEGORIES),
        pool.prepare(COUNT_PUBLIC),
        pool.prepare(UPDATE),
        pool.prepare(DELETE),
    )
    .unwrap();
}

impl PostgresDb {
    pub async fn insert_blog(&self, value: &BlogModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.title())
                .bind(value.slug())
                .bind(value.excerpt())
                .bind(value.content())
                .bind(value.featured_image())
                .bind(value.category())
                .bind(value.author())
                .bind(value.tags())
                .bind(value.meta_title())
                .bind(value.meta_description())
                .bind(value.meta_keywords())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_blog(&self, id: &Uuid) -> Result<BlogModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_blog_by_slug(&self, slug: &str) -> Result<BlogModel> {
        Ok(self
            .fetch_one(sqlx::query_as(SELECT_BY_SLUG).bind(slug))
            .await?)
    }

    pub async fn select_many_blogs(&self) -> Result<Vec<BlogModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_many_blogs_public(
        &self,
        category: &Option<String>,
        featured: &Option<bool>,
        limit: &Option<i64>,
        skip: &Option<i64>,
    ) -> Result<Vec<BlogModel>> {
        Ok(self
            .fetch_all(
                sqlx::query_as(SELECT_MANY_PUBLIC)
                    .bind(category)
                    .bind(featured)
                    .bind(limit)
                    .bind(skip),
            )
            .await?)
    }

    pub async fn select_blog_categories(&self) -> Result<Vec<String>> {
        let rows = self.fetch_all_rows(sqlx::query(SELECT_CATEGORIES)).await?;
        let mut categories = Vec::with_capacity(rows.len());
        for row in &rows {
            categories.push(row.try_get(0)?);
        }
        Ok(categories)
    }

    pub async fn count_blogs_public(
        &self,
        category: &Option<String>,
        featured: &Option<bool>,
    ) -> Result<i64> {
        let row = self
            .fetch_one_row(sqlx::query(COUNT_PUBLIC).bind(category).bind(featured))
            .await?;
        Ok(row.try_get(0)?)
    }

    pub async fn update_blog(&self, value: &BlogModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.title())
                .bind(value.slug())
                .bind(value.excerpt())
                .bind(value.content())
                .bind(value.featured_image())
                .bind(value.category())
                .bind(value.author())
                .bind(value.tags())
                .bind(value.meta_title())
                .bind(value.meta_description())
                .bind(value.meta_keywords())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_blog(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
