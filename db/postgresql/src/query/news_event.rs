use anyhow::Result;
use sqlx::{Executor, Pool, Postgres, Row};
use uuid::Uuid;

use crate::{db::PostgresDb, model::news_event::NewsEventModel};

const INSERT: &str = "INSERT INTO \"news_events\" (\"id\", \"created_at\", \"updated_at\", \"title\", \"excerpt\", \"content\", \"image_url\", \"category\", \"author\", \"publish_date\", \"event_date\", \"featured\", \"display_order\", \"active\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"excerpt\", \"content\", \"image_url\", \"category\", \"author\", \"publish_date\", \"event_date\", \"featured\", \"display_order\", \"active\" FROM \"news_events\" WHERE \"id\" = $1";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"excerpt\", \"content\", \"image_url\", \"category\", \"author\", \"publish_date\", \"event_date\", \"featured\", \"display_order\", \"active\" FROM \"news_events\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"title\", \"excerpt\", \"content\", \"image_url\", \"category\", \"author\", \"publish_date\", \"event_date\", \"featured\", \"display_order\", \"active\" FROM \"news_events\" WHERE \"active\" = true AND ($1::text IS NULL OR \"category\" = $1) AND ($2::bool IS NULL OR \"featured\" = $2) ORDER BY \"display_order\" ASC, \"id\" ASC LIMIT $3::int8 OFFSET COALESCE($4::int8, 0)";
const COUNT_PUBLIC: &str = "SELECT COUNT(1) FROM \"news_events\" WHERE \"active\" = true AND ($1::text IS NULL OR \"category\" = $1) AND ($2::bool IS NULL OR \"featured\" = $2)";
const UPDATE: &str = "UPDATE \"news_events\" SET \"updated_at\" = $1, \"title\" = $2, \"excerpt\" = $3, \"content\" = $4, \"image_url\" = $5, \"category\" = $6, \"author\" = $7, \"publish_date\" = $8, \"event_date\" = $9, \"featured\" = $10, \"display_order\" = $11, \"active\" = $12 WHERE \"id\" = $13";
const DELETE: &str = "DELETE FROM \"news_events\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    eb_log::info(Some("🔧"), "PostgreSQL: Setting up news_events table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"news_events\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"title\" text, \"excerpt\" text, \"content\" text, \"image_url\" text, \"category\" text, \"author\" text, \"publish_date\" timestamptz(6), \"event_date\" timestamptz(6), \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT),
        pool.prepare(SELECT_MANY),
        pool.prepare(SELECT_MANY_PUBLIC),
        pool.prepare(COUNT_PUBLIC),
        pool.prepare(UPDATE),
        pool.prepare(DELETE),
    )
    .unwrap();
}

impl PostgresDb {
    pub async fn insert_news_event(&self, value: &NewsEventModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.title())
                .bind(value.excerpt())
                .bind(value.content())
                .bind(value.image_url())
                .bind(value.category())
                .bind(value.author())
                .bind(value.publish_date())
                .bind(value.event_date())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_news_event(&self, id: &Uuid) -> Result<NewsEventModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_news_events(&self) -> Result<Vec<NewsEventModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_many_news_events_public(
        &self,
        category: &Option<String>,
        featured: &Option<bool>,
        limit: &Option<i64>,
        skip: &Option<i64>,
    ) -> Result<Vec<NewsEventModel>> {
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

    pub async fn count_news_events_public(
        &self,
        category: &Option<String>,
        featured: &Option<bool>,
    ) -> Result<i64> {
        let row = self
            .fetch_one_row(sqlx::query(COUNT_PUBLIC).bind(category).bind(featured))
            .await?;
        Ok(row.try_get(0)?)
    }

    pub async fn update_news_event(&self, value: &NewsEventModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.title())
                .bind(value.excerpt())
                .bind(value.content())
                .bind(value.image_url())
                .bind(value.category())
                .bind(value.author())
                .bind(value.publish_date())
                .bind(value.event_date())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_news_event(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
