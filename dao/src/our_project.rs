use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::our_project::OurProjectModel as OurProjectPostgresModel;
use eb_db_sqlite::model::our_project::OurProjectModel as OurProjectSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct OurProjectDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    project_name: String,
    location: String,
    price_range: String,
    property_type: String,
    short_description: String,
    thumbnail_image: String,
    youtube_link: Option<String>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl OurProjectDao {
    pub fn new(
        project_name: &str,
        location: &str,
        price_range: &str,
        property_type: &str,
        short_description: &str,
        thumbnail_image: &str,
        youtube_link: &Option<String>,
        featured: &bool,
        display_order: &i32,
        active: &bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            project_name: project_name.to_owned(),
            location: location.to_owned(),
            price_range: price_range.to_owned(),
            property_type: property_type.to_owned(),
            short_description: short_description.to_owned(),
            thumbnail_image: thumbnail_image.to_owned(),
            youtube_link: youtube_link.to_owned(),
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

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn price_range(&self) -> &str {
        &self.price_range
    }

    pub fn property_type(&self) -> &str {
        &self.property_type
    }

    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn thumbnail_image(&self) -> &str {
        &self.thumbnail_image
    }

    pub fn youtube_link(&self) -> &Option<String> {
        &self.youtube_link
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

    pub fn set_project_name(&mut self, project_name: &str) {
        self.project_name = project_name.to_owned();
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_owned();
    }

    pub fn set_price_range(&mut self, price_range: &str) {
        self.price_range = price_range.to_owned();
    }

    pub fn set_property_type(&mut self, property_type: &str) {
        self.property_type = property_type.to_owned();
    }

    pub fn set_short_description(&mut self, short_description: &str) {
        self.short_description = short_description.to_owned();
    }

    pub fn set_thumbnail_image(&mut self, thumbnail_image: &str) {
        self.thumbnail_image = thumbnail_image.to_owned();
    }

    pub fn set_youtube_link(&mut self, youtube_link: &Option<String>) {
        self.youtube_link = youtube_link.to_owned();
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
            Db::PostgresqlDb(db) => db.insert_our_project(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_our_project(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_our_project(id).await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_our_project(id).await?)),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let projects = db.select_many_our_projects().await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_postgresdb_model(project));
                }
                Ok(projects_data)
            }
            Db::SqliteDb(db) => {
                let projects = db.select_many_our_projects().await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_sqlitedb_model(project));
                }
                Ok(projects_data)
            }
        }
    }

    pub async fn db_select_many_public(db: &Db, featured: &Option<bool>) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let projects = db.select_many_our_projects_public(featured).await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_postgresdb_model(project));
                }
                Ok(projects_data)
            }
            Db::SqliteDb(db) => {
                let projects = db.select_many_our_projects_public(featured).await?;
                let mut projects_data = Vec::with_capacity(projects.len());
                for project in &projects {
                    projects_data.push(Self::from_sqlitedb_model(project));
                }
                Ok(projects_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_our_project(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_our_project(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_our_project(id).await,
            Db::SqliteDb(db) => db.delete_our_project(id).await,
        }
    }

    fn from_postgresdb_model(model: &OurProjectPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            project_name: model.project_name().to_owned(),
            location: model.location().to_owned(),
            price_range: model.price_range().to_owned(),
            property_type: model.property_type().to_owned(),
            short_description: model.short_description().to_owned(),
            thumbnail_image: model.thumbnail_image().to_owned(),
            youtube_link: model.youtube_link().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_postgresdb_model(&self) -> OurProjectPostgresModel {
        OurProjectPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.project_name,
            &self.location,
            &self.price_range,
            &self.property_type,
            &self.short_description,
            &self.thumbnail_image,
            &self.youtube_link,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }

    fn from_sqlitedb_model(model: &OurProjectSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            project_name: model.project_name().to_owned(),
            location: model.location().to_owned(),
            price_range: model.price_range().to_owned(),
            property_type: model.property_type().to_owned(),
            short_description: model.short_description().to_owned(),
            thumbnail_image: model.thumbnail_image().to_owned(),
            youtube_link: model.youtube_link().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_sqlitedb_model(&self) -> OurProjectSqliteModel {
        OurProjectSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.project_name,
            &self.location,
            &self.price_range,
            &self.property_type,
            &self.short_description,
            &self.thumbnail_image,
            &self.youtube_link,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }
}
