use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::home_banner::HomeBannerModel as HomeBannerPostgresModel;
use eb_db_sqlite::model::home_banner::HomeBannerModel as HomeBannerSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct HomeBannerDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    subtitle: Option<String>,
    image_url: String,
    cta_text: Option<String>,
    cta_link: Option<String>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl HomeBannerDao {
    pub fn new(
        title: &str,
        subtitle: &Option<String>,
        image_url: &str,
        cta_text: &Option<String>,
        cta_link: &Option<String>,
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
            subtitle: subtitle.to_owned(),
            image_url: image_url.to_owned(),
            cta_text: cta_text.to_owned(),
            cta_link: cta_link.to_owned(),
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

    pub fn subtitle(&self) -> &Option<String> {
        &self.subtitle
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn cta_text(&self) -> &Option<String> {
        &self.cta_text
    }

    pub fn cta_link(&self) -> &Option<String> {
        &self.cta_link
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

    pub fn set_subtitle(&mut self, subtitle: &Option<String>) {
        self.subtitle = subtitle.to_owned();
    }

    pub fn set_image_url(&mut self, image_url: &str) {
        self.image_url = image_url.to_owned();
    }

    pub fn set_cta_text(&mut self, cta_text: &Option<String>) {
        self.cta_text = cta_text.to_owned();
    }

    pub fn set_cta_link(&mut self, cta_link: &Option<String>) {
        self.cta_link = cta_link.to_owned();
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
            Db::PostgresqlDb(db) => db.insert_home_banner(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_home_banner(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_home_banner(id).await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_home_banner(id).await?)),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let banners = db.select_many_home_banners().await?;
                let mut banners_data = Vec::with_capacity(banners.len());
                for banner in &banners {
                    banners_data.push(Self::from_postgresdb_model(banner));
                }
                Ok(banners_data)
            }
            Db::SqliteDb(db) => {
                let banners = db.select_many_home_banners().await?;
                let mut banners_data = Vec::with_capacity(banners.len());
                for banner in &banners {
                    banners_data.push(Self::from_sqlitedb_model(banner));
                }
                Ok(banners_data)
            }
        }
    }

    pub async fn db_select_many_public(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let banners = db.select_many_home_banners_public().await?;
                let mut banners_data = Vec::with_capacity(banners.len());
                for banner in &banners {
                    banners_data.push(Self::from_postgresdb_model(banner));
                }
                Ok(banners_data)
            }
            Db::SqliteDb(db) => {
                let banners = db.select_many_home_banners_public().await?;
                let mut banners_data = Vec::with_capacity(banners.len());
                for banner in &banners {
                    banners_data.push(Self::from_sqlitedb_model(banner));
                }
                Ok(banners_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_home_banner(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_home_banner(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_home_banner(id).await,
            Db::SqliteDb(db) => db.delete_home_banner(id).await,
        }
    }

    fn from_postgresdb_model(model: &HomeBannerPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            title: model.title().to_owned(),
            subtitle: model.subtitle().to_owned(),
            image_url: model.image_url().to_owned(),
            cta_text: model.cta_text().to_owned(),
            cta_link: model.cta_link().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_postgresdb_model(&self) -> HomeBannerPostgresModel {
        HomeBannerPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.title,
            &self.subtitle,
            &self.image_url,
            &self.cta_text,
            &self.cta_link,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }

    fn from_sqlitedb_model(model: &HomeBannerSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            title: model.title().to_owned(),
            subtitle: model.subtitle().to_owned(),
            image_url: model.image_url().to_owned(),
            cta_text: model.cta_text().to_owned(),
            cta_link: model.cta_link().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_sqlitedb_model(&self) -> HomeBannerSqliteModel {
        HomeBannerSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.title,
            &self.subtitle,
            &self.image_url,
            &self.cta_text,
            &self.cta_link,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }
}
