use anyhow::Result;
use sqlx::{Executor, Pool, Row, Sqlite};
use uuid::Uuid;

use crate::{db::SqliteDb, model::blog::BlogModel};

const INSERT: &str = "INSERT INTO \"blogs\" (\"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"excerpt\", \"content\", \"featured_image\", \"category\", \"author\", \"tags\", \"meta_title\", \"meta_description\", \"meta_keywords\", \"featured\", \"display_order\", \"active\") VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"excerpt\", \"content\", \"featured_image\", \"category\", \"author\", \"tags\", \"meta_title\", \"meta_description\", \"meta_keywords\", \"featured\", \"display_order\", \"active\" FROM \"blogs\" WHERE \"id\" = ?";
const SELECT_BY_SLUG: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"excerpt\", \"content\", \"featured_image\", \"category\", \"author\", \"tags\", \"meta_title\", \"meta_description\", \"meta_keywords\", \"featured\", \"display_order\", \"active\" FROM \"blogs\" WHERE \"slug\" = ? AND \"active\" = true";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"excerpt\", \"content\", \"featured_image\", \"category\", \"author\", \"tags\", \"meta_title\", \"meta_description\", \"meta_keywords\", \"featured\", \"display_order\", \"active\" FROM \"blogs\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"slug\", \"excerpt\", \"content\", \"featured_image\", \"category\", \"author\", \"tags\", \"meta_title\", \"meta_description\", \"meta_keywords\", \"featured\", \"display_order\", \"active\" FROM \"blogs\" WHERE \"active\" = true AND (?1 IS NULL OR \"category\" = ?1) AND (?2 IS NULL OR \"featured\" = ?2) ORDER BY \"display_order\" ASC, \"id\" ASC LIMIT COALESCE(?3, -1) OFFSET COALESCE(?4, 0)";
const SELECT_CATEGORIES: &str = "SELECT DISTINCT \"category\" FROM \"blogs\" WHERE \"active\" = true ORDER BY \"category\" ASC";
const COUNT_PUBLIC: &str = "SELECT COUNT(1) FROM \"blogs\" WHERE \"active\" = true AND (?1 IS NULL OR \"category\" = ?1) AND (?2 IS NULL OR \"featured\" = ?2)";
const UPDATE: &str = "UPDATE \"blogs\" SET \"updated_at\" = ?, \"title\" = ?, \"slug\" = ?, \"excerpt\" = ?, \"content\" = ?, \"featured_image\" = ?, \"category\" = ?, \"author\" = ?, \"tags\" = ?, \"meta_title\" = ?, \"meta_description\" = ?, \"meta_keywords\" = ?, \"featured\" = ?, \"display_order\" = ?, \"active\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"blogs\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) {
    eb_log::info(Some("🔧"), "SQLite: Setting up blogs table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"blogs\" (\"id\" blob, \"created_at\" timestamp, \"updated_at\" timestamp, \"title\" text, \"slug\" text, \"excerpt\" text, \"content\" text, \"featured_image\" text, \"category\" text, \"author\" text, \"tags\" text, \"meta_title\" text, \"meta_description\" text, \"meta_keywords\" text, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

    pool.prepare(INSERT).await.unwrap();
    pool.prepare(SELECT).await.unwrap();
    pool.prepare(SELECT_BY_SLUG).await.unwrap();
    pool.prepare(SELECT_MANY).await.unwrap();
    pool.prepare(SELECT_MANY_PUBLIC).await.unwrap();
    pool.prepare(SELECT_CATEGORIES).await.unwrap();
    pool.prepare(COUNT_PUBLIC).await.unwrap();
    pool.prepare(UPDATE).await.unwrap();
    pool.prepare(DELETE).await.unwrap();
}

impl SqliteDb {
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
