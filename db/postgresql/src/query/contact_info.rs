use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};

use crate::{db::PostgresDb, model::contact_info::ContactInfoModel};

const INSERT: &str = "INSERT INTO \"contact_infos\" (\"id\", \"created_at\", \"updated_at\", \"company_name\", \"phone\", \"email\", \"whatsapp\", \"address\", \"map_embed_url\", \"business_hours\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)";
const SELECT_ONE: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"company_name\", \"phone\", \"email\", \"whatsapp\", \"address\", \"map_embed_url\", \"business_hours\" FROM \"contact_infos\" ORDER BY \"created_at\" ASC LIMIT 1";
const UPDATE: &str = "UPDATE \"contact_infos\" SET \"updated_at\" = $1, \"company_name\" = $2, \"phone\" = $3, \"email\" = $4, \"whatsapp\" = $5, \"address\" = $6, \"map_embed_url\" = $7, \"business_hours\" = $8 WHERE \"id\" = $9";

pub async fn init(pool: &Pool<Postgres>) {
    eb_log::info(Some("🔧"), "PostgreSQL: Setting up contact_infos table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"contact_infos\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"company_name\" text, \"phone\" text, \"email\" text, \"whatsapp\" text, \"address\" text, \"map_embed_url\" text, \"business_hours\" text, PRIMARY KEY (\"id\"))").await.unwrap();

    tokio::try_join!(
        pool.prepare(INSERT),
        pool.prepare(SELECT_ONE),
        pool.prepare(UPDATE),
    )
    .unwrap();
}

impl PostgresDb {
    pub async fn insert_contact_info(&self, value: &ContactInfoModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.company_name())
                .bind(value.phone())
                .bind(value.email())
                .bind(value.whatsapp())
                .bind(value.address())
                .bind(value.map_embed_url())
                .bind(value.business_hours()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_contact_info(&self) -> Result<ContactInfoModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT_ONE)).await?)
    }

    pub async fn update_contact_info(&self, value: &ContactInfoModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.company_name())
                .bind(value.phone())
                .bind(value.email())
                .bind(value.whatsapp())
                .bind(value.address())
                .bind(value.map_embed_url())
                .bind(value.business_hours())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }
}
