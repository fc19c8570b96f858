use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::property::PropertyModel as PropertyPostgresModel;
use eb_db_sqlite::model::property::PropertyModel as PropertySqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct PropertyDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    villa_number: String,
    status: String,
    plot_size: i32,
    built_up_area: i32,
    facing: String,
    location: String,
    price_range: String,
    gallery_images: Vec<String>,
    description: String,
    amenities: Vec<String>,
    enquiry_link: String,
    map_link: String,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl PropertyDao {
    pub fn new(
        villa_number: &str,
        status: &str,
        plot_size: &i32,
        built_up_area: &i32,
        facing: &str,
        location: &str,
        price_range: &str,
        gallery_images: &[String],
        description: &str,
        amenities: &[String],
        enquiry_link: &str,
        map_link: &str,
        featured: &bool,
        display_order: &i32,
        active: &bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            villa_number: villa_number.to_owned(),
            status: status.to_owned(),
            plot_size: *plot_size,
            built_up_area: *built_up_area,
            facing: facing.to_owned(),
            location: location.to_owned(),
            price_range: price_range.to_owned(),
            gallery_images: gallery_images.to_vec(),
            description: description.to_owned(),
            amenities: amenities.to_vec(),
            enquiry_link: enquiry_link.to_owned(),
            map_link: map_link.to_owned(),
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

    pub fn villa_number(&self) -> &str {
        &self.villa_number
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn plot_size(&self) -> &i32 {
        &self.plot_size
    }

    pub fn built_up_area(&self) -> &i32 {
        &self.built_up_area
    }

    pub fn facing(&self) -> &str {
        &self.facing
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn price_range(&self) -> &str {
        &self.price_range
    }

    pub fn gallery_images(&self) -> &Vec<String> {
        &self.gallery_images
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amenities(&self) -> &Vec<String> {
        &self.amenities
    }

    pub fn enquiry_link(&self) -> &str {
        &self.enquiry_link
    }

    pub fn map_link(&self) -> &str {
        &self.map_link
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

    pub fn set_villa_number(&mut self, villa_number: &str) {
        self.villa_number = villa_number.to_owned();
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_owned();
    }

    pub fn set_plot_size(&mut self, plot_size: &i32) {
        self.plot_size = *plot_size;
    }

    pub fn set_built_up_area(&mut self, built_up_area: &i32) {
        self.built_up_area = *built_up_area;
    }

    pub fn set_facing(&mut self, facing: &str) {
        self.facing = facing.to_owned();
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_owned();
    }

    pub fn set_price_range(&mut self, price_range: &str) {
        self.price_range = price_range.to_owned();
    }

    pub fn set_gallery_images(&mut self, gallery_images: &[String]) {
        self.gallery_images = gallery_images.to_vec();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_owned();
    }

    pub fn set_amenities(&mut self, amenities: &[String]) {
        self.amenities = amenities.to_vec();
    }

    pub fn set_enquiry_link(&mut self, enquiry_link: &str) {
        self.enquiry_link = enquiry_link.to_owned();
    }

    pub fn set_map_link(&mut self, map_link: &str) {
        self.map_link = map_link.to_owned();
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
            Db::PostgresqlDb(db) => db.insert_property(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_property(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(&db.select_property(id).await?)),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_property(id).await?)),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let properties = db.select_many_properties().await?;
                let mut properties_data = Vec::with_capacity(properties.len());
                for property in &properties {
                    properties_data.push(Self::from_postgresdb_model(property));
                }
                Ok(properties_data)
            }
            Db::SqliteDb(db) => {
                let properties = db.select_many_properties().await?;
                let mut properties_data = Vec::with_capacity(properties.len());
                for property in &properties {
                    properties_data.push(Self::from_sqlitedb_model(property));
                }
                Ok(properties_data)
            }
        }
    }

    pub async fn db_select_many_public(
        db: &Db,
        status: &Option<String>,
        facing: &Option<String>,
        location: &Option<String>,
        featured: &Option<bool>,
        limit: &Option<i64>,
        skip: &Option<i64>,
    ) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let properties = db
                    .select_many_properties_public(status, facing, location, featured, limit, skip)
                    .await?;
                let mut properties_data = Vec::with_capacity(properties.len());
                for property in &properties {
                    properties_data.push(Self::from_postgresdb_model(property));
                }
                Ok(properties_data)
            }
            Db::SqliteDb(db) => {
                let properties = db
                    .select_many_properties_public(status, facing, location, featured, limit, skip)
                    .await?;
                let mut properties_data = Vec::with_capacity(properties.len());
                for property in &properties {
                    properties_data.push(Self::from_sqlitedb_model(property));
                }
                Ok(properties_data)
            }
        }
    }

    pub async fn db_count_public(
        db: &Db,
        status: &Option<String>,
        facing: &Option<String>,
        location: &Option<String>,
        featured: &Option<bool>,
    ) -> Result<i64> {
        match db {
            Db::PostgresqlDb(db) => {
                db.count_properties_public(status, facing, location, featured)
                    .await
            }
            Db::SqliteDb(db) => {
                db.count_properties_public(status, facing, location, featured)
                    .await
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_property(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_property(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_property(id).await,
            Db::SqliteDb(db) => db.delete_property(id).await,
        }
    }

    fn from_postgresdb_model(model: &PropertyPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            villa_number: model.villa_number().to_owned(),
            status: model.status().to_owned(),
            plot_size: *model.plot_size(),
            built_up_area: *model.built_up_area(),
            facing: model.facing().to_owned(),
            location: model.location().to_owned(),
            price_range: model.price_range().to_owned(),
            gallery_images: model.gallery_images().to_vec(),
            description: model.description().to_owned(),
            amenities: model.amenities().to_vec(),
            enquiry_link: model.enquiry_link().to_owned(),
            map_link: model.map_link().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_postgresdb_model(&self) -> PropertyPostgresModel {
        PropertyPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.villa_number,
            &self.status,
            &self.plot_size,
            &self.built_up_area,
            &self.facing,
            &self.location,
            &self.price_range,
            &self.gallery_images,
            &self.description,
            &self.amenities,
            &self.enquiry_link,
            &self.map_link,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }

    fn from_sqlitedb_model(model: &PropertySqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            villa_number: model.villa_number().to_owned(),
            status: model.status().to_owned(),
            plot_size: *model.plot_size(),
            built_up_area: *model.built_up_area(),
            facing: model.facing().to_owned(),
            location: model.location().to_owned(),
            price_range: model.price_range().to_owned(),
            gallery_images: model.gallery_images().to_vec(),
            description: model.description().to_owned(),
            amenities: model.amenities().to_vec(),
            enquiry_link: model.enquiry_link().to_owned(),
            map_link: model.map_link().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_sqlitedb_model(&self) -> PropertySqliteModel {
        PropertySqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.villa_number,
            &self.status,
            &self.plot_size,
            &self.built_up_area,
            &self.facing,
            &self.location,
            &self.price_range,
            &self.gallery_images,
            &self.description,
            &self.amenities,
            &self.enquiry_link,
            &self.map_link,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }
}
