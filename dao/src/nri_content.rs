use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::nri_content::NriContentModel as NriContentPostgresModel;
use eb_db_sqlite::model::nri_content::NriContentModel as NriContentSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct NriContentDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    section_name: String,
    title: String,
    content: String,
    icon_name: Option<String>,
    image_url: Option<String>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl NriContentDao {
    pub fn new(
        section_name: &str,
        title: &str,
        content: &str,
        icon_name: &Option<String>,
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
            section_name: section_name.to_owned(),
            title: title.to_owned(),
            content: content.to_owned(),
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

    pub fn section_name(&self) -> &str {
        &self.section_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn icon_name(&self) -> &Option<String> {
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

    pub fn set_section_name(&mut self, section_name: &str) {
        self.section_name = section_name.to_owned();
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_owned();
    }

    pub fn set_icon_name(&mut self, icon_name: &Option<String>) {
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
            Db::PostgresqlDb(db) => db.insert_nri_content(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_nri_content(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_nri_content(id).await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_nri_content(id).await?)),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let contents = db.select_many_nri_contents().await?;
                let mut contents_data = Vec::with_capacity(contents.len());
                for content in &contents {
                    contents_data.push(Self::from_postgresdb_model(content));
                }
                Ok(contents_data)
            }
            Db::SqliteDb(db) => {
                let contents = db.select_many_nri_contents().await?;
                let mut contents_data = Vec::with_capacity(contents.len());
                for content in &contents {
                    contents_data.push(Self::from_sqlitedb_model(content));
                }
                Ok(contents_data)
            }
        }
    }

    pub async fn db_select_many_public(
        db: &Db,
        section_name: &Option<String>,
    ) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let contents = db.select_many_nri_contents_public(section_name).await?;
                let mut contents_data = Vec::with_capacity(contents.len());
                for content in &contents {
                    contents_data.push(Self::from_postgresdb_model(content));
                }
                Ok(contents_data)
            }
            Db::SqliteDb(db) => {
                let contents = db.select_many_nri_contents_public(section_name).await?;
                let mut contents_data = Vec::with_capacity(contents.len());
                for content in &contents {
                    contents_data.push(Self::from_sqlitedb_model(content));
                }
                Ok(contents_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_nri_content(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_nri_content(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_nri_content(id).await,
            Db::SqliteDb(db) => db.delete_nri_content(id).await,
        }
    }

    fn from_postgresdb_model(model: &NriContentPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            section_name: model.section_name().to_owned(),
            title: model.title().to_owned(),
            content: model.content().to_owned(),
            icon_name: model.icon_name().to_owned(),
            image_url: model.image_url().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_postgresdb_model(&self) -> NriContentPostgresModel {
        NriContentPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.section_name,
            &self.title,
            &self.content,
            &self.icon_name,
            &self.image_url,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }

    fn from_sqlitedb_model(model: &NriContentSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            section_name: model.section_name().to_owned(),
            title: model.title().to_owned(),
            content: model.content().to_owned(),
            icon_name: model.icon_name().to_owned(),
            image_url: model.image_url().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_sqlitedb_model(&self) -> NriContentSqliteModel {
        NriContentSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.section_name,
            &self.title,
            &self.content,
            &self.icon_name,
            &self.image_url,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }
}
