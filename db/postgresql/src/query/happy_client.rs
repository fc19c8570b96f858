use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};
use uuid::Uuid;

use crate::{db::PostgresDb, model::happy_client::HappyClientModel};

const INSERT: &str = "INSERT INTO \"happy_clients\" (\"id\", \"created_at\", \"updated_at\", \"name\", \"location\", \"story\", \"image_url\", \"rating\", \"purchase_date\", \"villa_number\", \"featured\", \"display_order\", \"active\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"location\", \"story\", \"image_url\", \"rating\", \"purchase_date\", \"villa_number\", \"featured\", \"display_order\", \"active\" FROM \"happy_clients\" WHERE \"id\" = $1";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"location\", \"story\", \"image_url\", \"rating\", \"purchase_date\", \"villa_number\", \"featured\", \"display_order\", \"active\" FROM \"happy_clients\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"name\", \"location\", \"story\", \"image_url\", \"rating\", \"purchase_date\", \"villa_number\", \"featured\", \"display_order\", \"active\" FROM \"happy_clients\" WHERE \"active\" = true AND ($1::bool IS NULL OR \"featured\" = $1) ORDER BY \"display_order\" ASC, \"id\" ASC";
const UPDATE: &str = "UPDATE \"happy_clients\" SET \"updated_at\" = $1, \"name\" = $2, \"location\" = $3, \"story\" = $4, \"image_url\" = $5, \"rating\" = $6, \"purchase_date\" = $7, \"villa_number\" = $8, \"featured\" = $9, \"display_order\" = $10, \"active\" = $11 WHERE \"id\" = $12";
const DELETE: &str = "DELETE FROM \"happy_clients\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    eb_log::info(Some("🔧"), "PostgreSQL: Setting up happy_clients table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"happy_clients\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"name\" text, \"location\" text, \"story\" text, \"image_url\" text, \"rating\" integer, \"purchase_date\" text, \"villa_number\" text, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

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
    pub async fn insert_happy_client(&self, value: &HappyClientModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.name())
                .bind(value.location())
                .bind(value.story())
                .bind(value.image_url())
                .bind(value.rating())
                .bind(value.purchase_date())
                .bind(value.villa_number())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_happy_client(&self, id: &Uuid) -> Result<HappyClientModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_happy_clients(&self) -> Result<Vec<HappyClientModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_many_happy_clients_public(
        &self,
        featured: &Option<bool>,
    ) -> Result<Vec<HappyClientModel>> {
        Ok(self
            .fetch_all(sqlx::query_as(SELECT_MANY_PUBLIC).bind(featured))
            .await?)
    }

    pub async fn update_happy_client(&self, value: &HappyClientModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.name())
                .bind(value.location())
                .bind(value.story())
                .bind(value.image_url())
                .bind(value.rating())
                .bind(value.purchase_date())
                .bind(value.villa_number())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_happy_client(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
