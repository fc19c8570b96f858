use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::testimonial::TestimonialModel as TestimonialPostgresModel;
use eb_db_sqlite::model::testimonial::TestimonialModel as TestimonialSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct TestimonialDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: String,
    location: String,
    testimonial: String,
    image_url: String,
    rating: i32,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl TestimonialDao {
    pub fn new(
        name: &str,
        location: &str,
        testimonial: &str,
        image_url: &str,
        rating: &i32,
        featured: &bool,
        display_order: &i32,
        active: &bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            name: name.to_owned(),
            location: location.to_owned(),
            testimonial: testimonial.to_owned(),
            image_url: image_url.to_owned(),
            rating: *rating,
            featured: *featured,
            display_order: *display_order,
            active: *active,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn testimonial(&self) -> &str {
        &self.testimonial
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn rating(&self) -> &i32 {
        &self.rating
    }

    pub fn featured(&self) -> &bool {
        &self.featured
    }

    pub fn display_order(&self) -> &i32 {
        &self.display_order
    }

    pub fn active(&self) -> &bool {
        &self.active
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_owned();
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_owned();
    }

    pub fn set_testimonial(&mut self, testimonial: &str) {
        self.testimonial = testimonial.to_owned();
    }

    pub fn set_image_url(&mut self, image_url: &str) {
        self.image_url = image_url.to_owned();
    }

    pub fn set_rating(&mut self, rating: &i32) {
        self.rating = *rating;
    }

    pub fn set_featured(&mut self, featured: &bool) {
        self.featured = *featured;
    }

    pub fn set_display_order(&mut self, display_order: &i32) {
        self.display_order = *display_order;
    }

    pub fn set_active(&mut self, active: &bool) {
        self.active = *active;
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_testimonial(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_testimonial(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_testimonial(id).await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_testimonial(id).await?)),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let testimonials = db.select_many_testimonials().await?;
                let mut testimonials_data = Vec::with_capacity(testimonials.len());
                for testimonial in &testimonials {
                    testimonials_data.push(Self::from_postgresdb_model(testimonial));
                }
                Ok(testimonials_data)
            }
            Db::SqliteDb(db) => {
                let testimonials = db.select_many_testimonials().await?;
                let mut testimonials_data = Vec::with_capacity(testimonials.len());
                for testimonial in &testimonials {
                    testimonials_data.push(Self::from_sqlitedb_model(testimonial));
                }
                Ok(testimonials_data)
            }
        }
    }

    pub async fn db_select_many_public(db: &Db, featured: &Option<bool>) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let testimonials = db.select_many_testimonials_public(featured).await?;
                let mut testimonials_data = Vec::with_capacity(testimonials.len());
                for testimonial in &testimonials {
                    testimonials_data.push(Self::from_postgresdb_model(testimonial));
                }
                Ok(testimonials_data)
            }
            Db::SqliteDb(db) => {
                let testimonials = db.select_many_testimonials_public(featured).await?;
                let mut testimonials_data = Vec::with_capacity(testimonials.len());
                for testimonial in &testimonials {
                    testimonials_data.push(Self::from_sqlitedb_model(testimonial));
                }
                Ok(testimonials_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_testimonial(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_testimonial(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_testimonial(id).await,
            Db::SqliteDb(db) => db.delete_testimonial(id).await,
        }
    }

    fn from_postgresdb_model(model: &TestimonialPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            name: model.name().to_owned(),
            location: model.location().to_owned(),
            testimonial: model.testimonial().to_owned(),
            image_url: model.image_url().to_owned(),
            rating: *model.rating(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_postgresdb_model(&self) -> TestimonialPostgresModel {
        TestimonialPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.name,
            &self.location,
            &self.testimonial,
            &self.image_url,
            &self.rating,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }

    fn from_sqlitedb_model(model: &TestimonialSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            name: model.name().to_owned(),
            location: model.location().to_owned(),
            testimonial: model.testimonial().to_owned(),
            image_url: model.image_url().to_owned(),
            rating: *model.rating(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_sqlitedb_model(&self) -> TestimonialSqliteModel {
        TestimonialSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.name,
            &self.location,
            &self.testimonial,
            &self.image_url,
            &self.rating,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }
}
