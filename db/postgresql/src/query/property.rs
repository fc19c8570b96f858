use anyhow::Result;
use sqlx::{Executor, Pool, Postgres, Row};
use uuid::Uuid;

use crate::{db::PostgresDb, model::property::PropertyModel};

const INSERT: &str = "INSERT INTO \"properties\" (\"id\", \"created_at\", \"updated_at\", \"villa_number\", \"status\", \"plot_size\", \"built_up_area\", \"facing\", \"location\", \"price_range\", \"gallery_images\", \"description\", \"amenities\", \"enquiry_link\", \"map_link\", \"featured\", \"display_order\", \"active\") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)";
const SELECT: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"villa_number\", \"status\", \"plot_size\", \"built_up_area\", \"facing\", \"location\", \"price_range\", \"gallery_images\", \"description\", \"amenities\", \"enquiry_link\", \"map_link\", \"featured\", \"display_order\", \"active\" FROM \"properties\" WHERE \"id\" = $1";
const SELECT_MANY: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"villa_number\", \"status\", \"plot_size\", \"built_up_area\", \"facing\", \"location\", \"price_range\", \"gallery_images\", \"description\", \"amenities\", \"enquiry_link\", \"map_link\", \"featured\", \"display_order\", \"active\" FROM \"properties\" ORDER BY \"display_order\" ASC, \"id\" ASC";
const SELECT_MANY_PUBLIC: &str = "SELECT \"id\", \"created_at\", \"updated_at\", \"villa_number\", \"status\", \"plot_size\", \"built_up_area\", \"facing\", \"location\", \"price_range\", \"gallery_images\", \"description\", \"amenities\", \"enquiry_link\", \"map_link\", \"featured\", \"display_order\", \"active\" FROM \"properties\" WHERE \"active\" = true AND ($1::text IS NULL OR \"status\" = $1) AND ($2::text IS NULL OR \"facing\" = $2) AND ($3::text IS NULL OR \"location\" ILIKE '%' || $3 || '%') AND ($4::bool IS NULL OR \"featured\" = $4) ORDER BY \"display_order\" ASC, \"id\" ASC LIMIT $5::int8 OFFSET COALESCE($6::int8, 0)";
const COUNT_PUBLIC: &str = "SELECT COUNT(1) FROM \"properties\" WHERE \"active\" = true AND ($1::text IS NULL OR \"status\" = $1) AND ($2::text IS NULL OR \"facing\" = $2) AND ($3::text IS NULL OR \"location\" ILIKE '%' || $3 || '%') AND ($4::bool IS NULL OR \"featured\" = $4)";
const UPDATE: &str = "UPDATE \"properties\" SET \"updated_at\" = $1, \"villa_number\" = $2, \"status\" = $3, \"plot_size\" = $4, \"built_up_area\" = $5, \"facing\" = $6, \"location\" = $7, \"price_range\" = $8, \"gallery_images\" = $9, \"description\" = $10, \"amenities\" = $11, \"enquiry_link\" = $12, \"map_link\" = $13, \"featured\" = $14, \"display_order\" = $15, \"active\" = $16 WHERE \"id\" = $17";
const DELETE: &str = "DELETE FROM \"properties\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) {
    eb_log::info(Some("🔧"), "PostgreSQL: Setting up properties table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"properties\" (\"id\" uuid, \"created_at\" timestamptz(6), \"updated_at\" timestamptz(6), \"villa_number\" text, \"status\" text, \"plot_size\" integer, \"built_up_area\" integer, \"facing\" text, \"location\" text, \"price_range\" text, \"gallery_images\" jsonb, \"description\" text, \"amenities\" jsonb, \"enquiry_link\" text, \"map_link\" text, \"featured\" boolean, \"display_order\" integer, \"active\" boolean, PRIMARY KEY (\"id\"))").await.unwrap();

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
    pub async fn insert_property(&self, value: &PropertyModel) -> Result<()> {
        self.execute(
            sqlx::query(INSERT)
                .bind(value.id())
                .bind(value.created_at())
                .bind(value.updated_at())
                .bind(value.villa_number())
                .bind(value.status())
                .bind(value.plot_size())
                .bind(value.built_up_area())
                .bind(value.facing())
                .bind(value.location())
                .bind(value.price_range())
                .bind(value.gallery_images())
                .bind(value.description())
                .bind(value.amenities())
                .bind(value.enquiry_link())
                .bind(value.map_link())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active()),
        )
        .await?;
        Ok(())
    }

    pub async fn select_property(&self, id: &Uuid) -> Result<PropertyModel> {
        Ok(self.fetch_one(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_properties(&self) -> Result<Vec<PropertyModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_MANY)).await?)
    }

    pub async fn select_many_properties_public(
        &self,
        status: &Option<String>,
        facing: &Option<String>,
        location: &Option<String>,
        featured: &Option<bool>,
        limit: &Option<i64>,
        skip: &Option<i64>,
    ) -> Result<Vec<PropertyModel>> {
        Ok(self
            .fetch_all(
                sqlx::query_as(SELECT_MANY_PUBLIC)
                    .bind(status)
                    .bind(facing)
                    .bind(location)
                    .bind(featured)
                    .bind(limit)
                    .bind(skip),
            )
            .await?)
    }

    pub async fn count_properties_public(
        &self,
        status: &Option<String>,
        facing: &Option<String>,
        location: &Option<String>,
        featured: &Option<bool>,
    ) -> Result<i64> {
        let row = self
            .fetch_one_row(
                sqlx::query(COUNT_PUBLIC)
                    .bind(status)
                    .bind(facing)
                    .bind(location)
                    .bind(featured),
            )
            .await?;
        Ok(row.try_get(0)?)
    }

    pub async fn update_property(&self, value: &PropertyModel) -> Result<()> {
        self.execute(
            sqlx::query(UPDATE)
                .bind(value.updated_at())
                .bind(value.villa_number())
                .bind(value.status())
                .bind(value.plot_size())
                .bind(value.built_up_area())
                .bind(value.facing())
                .bind(value.location())
                .bind(value.price_range())
                .bind(value.gallery_images())
                .bind(value.description())
                .bind(value.amenities())
                .bind(value.enquiry_link())
                .bind(value.map_link())
                .bind(value.featured())
                .bind(value.display_order())
                .bind(value.active())
                .bind(value.id()),
        )
        .await?;
        Ok(())
    }

    pub async fn delete_property(&self, id: &Uuid) -> Result<()> {
        self.execute(sqlx::query(DELETE).bind(id)).await?;
        Ok(())
    }
}
