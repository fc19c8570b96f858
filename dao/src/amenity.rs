use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::amenity::AmenityModel as AmenityPostgresModel;
use eb_db_sqlite::model::amenity::AmenityModel as AmenitySqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct AmenityDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    description: String,
    icon_name: String,
    image_url: Option<String>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl AmenityDao {
    pub fn new(
        title: &str,
        description: &str,
        icon_name: &str,
        image_url: &Option<String>,
        featured: &bool,
        display_order: &i32,
        active: &bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            title: title.to_owned(),
            description: description.to_owned(),
            icon_name: icon_name.to_owned(),
            image_url: image_url.to_owned(),
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

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    pub fn image_url(&self) -> &Option<String> {
        &self.image_url
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

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_owned();
    }

    pub fn set_icon_name(&mut self, icon_name: &str) {
        self.icon_name = icon_name.to_owned();
    }

    pub fn set_image_url(&mut self, image_url: &Option<String>) {
        self.image_url = image_url.to_owned();
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
            Db::PostgresqlDb(db) => db.insert_amenity(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_amenity(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(&db.select_amenity(id).await?)),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_amenity(id).await?)),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let amenities = db.select_many_amenities().await?;
                let mut amenities_data = Vec::with_capacity(amenities.len());
                for amenity in &amenities {
                    amenities_data.push(Self::from_postgresdb_model(amenity));
                }
                Ok(amenities_data)
            }
            Db::SqliteDb(db) => {
                let amenities = db.select_many_amenities().await?;
                let mut amenities_data = Vec::with_capacity(amenities.len());
                for amenity in &amenities {
                    amenities_data.push(Self::from_sqlitedb_model(amenity));
                }
                Ok(amenities_data)
            }
        }
    }

    pub async fn db_select_many_public(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let amenities = db.select_many_amenities_public().await?;
                let mut amenities_data = Vec::with_capacity(amenities.len());
                for amenity in &amenities {
                    amenities_data.push(Self::from_postgresdb_model(amenity));
                }
                Ok(amenities_data)
            }
            Db::SqliteDb(db) => {
                let amenities = db.select_many_amenities_public().await?;
                let mut amenities_data = Vec::with_capacity(amenities.len());
                for amenity in &amenities {
                    amenities_data.push(Self::from_sqlitedb_model(amenity));
                }
                Ok(amenities_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_amenity(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_amenity(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_amenity(id).await,
            Db::SqliteDb(db) => db.delete_amenity(id).await,
        }
    }

    fn from_postgresdb_model(model: &AmenityPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            title: model.title().to_owned(),
            description: model.description().to_owned(),
            icon_name: model.icon_name().to_owned(),
            image_url: model.image_url().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_postgresdb_model(&self) -> AmenityPostgresModel {
        AmenityPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.title,
            &self.description,
            &self.icon_name,
            &self.image_url,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }

    fn from_sqlitedb_model(model: &AmenitySqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            title: model.title().to_owned(),
            description: model.description().to_owned(),
            icon_name: model.icon_name().to_owned(),
            image_url: model.image_url().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_sqlitedb_model(&self) -> AmenitySqliteModel {
        AmenitySqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.title,
            &self.description,
            &self.icon_name,
            &self.image_url,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }
}
