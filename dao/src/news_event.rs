use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::news_event::NewsEventModel as NewsEventPostgresModel;
use eb_db_sqlite::model::news_event::NewsEventModel as NewsEventSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct NewsEventDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    excerpt: String,
    content: String,
    image_url: String,
    category: String,
    author: String,
    publish_date: DateTime<Utc>,
    event_date: Option<DateTime<Utc>>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl NewsEventDao {
    pub fn new(
        title: &str,
        excerpt: &str,
        content: &str,
        image_url: &str,
        category: &str,
        author: &str,
        publish_date: &DateTime<Utc>,
        event_date: &Option<DateTime<Utc>>,
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
            excerpt: excerpt.to_owned(),
            content: content.to_owned(),
            image_url: image_url.to_owned(),
            category: category.to_owned(),
            author: author.to_owned(),
            publish_date: *publish_date,
            event_date: *event_date,
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

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publish_date(&self) -> &DateTime<Utc> {
        &self.publish_date
    }

    pub fn event_date(&self) -> &Option<DateTime<Utc>> {
        &self.event_date
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

    pub fn set_excerpt(&mut self, excerpt: &str) {
        self.excerpt = excerpt.to_owned();
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_owned();
    }

    pub fn set_image_url(&mut self, image_url: &str) {
        self.image_url = image_url.to_owned();
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_owned();
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = author.to_owned();
    }

    pub fn set_publish_date(&mut self, publish_date: &DateTime<Utc>) {
        self.publish_date = *publish_date;
    }

    pub fn set_event_date(&mut self, event_date: &Option<DateTime<Utc>>) {
        self.event_date = *event_date;
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
            Db::PostgresqlDb(db) => db.insert_news_event(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_news_event(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_news_event(id).await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_news_event(id).await?)),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let news_events = db.select_many_news_events().await?;
                let mut news_events_data = Vec::with_capacity(news_events.len());
                for news_event in &news_events {
                    news_events_data.push(Self::from_postgresdb_model(news_event));
                }
                Ok(news_events_data)
            }
            Db::SqliteDb(db) => {
                let news_events = db.select_many_news_events().await?;
                let mut news_events_data = Vec::with_capacity(news_events.len());
                for news_event in &news_events {
                    news_events_data.push(Self::from_sqlitedb_model(news_event));
                }
                Ok(news_events_data)
            }
        }
    }

    pub async fn db_select_many_public(
        db: &Db,
        category: &Option<String>,
        featured: &Option<bool>,
        limit: &Option<i64>,
        skip: &Option<i64>,
    ) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let news_events = db
                    .select_many_news_events_public(category, featured, limit, skip)
                    .await?;
                let mut news_events_data = Vec::with_capacity(news_events.len());
                for news_event in &news_events {
                    news_events_data.push(Self::from_postgresdb_model(news_event));
                }
                Ok(news_events_data)
            }
            Db::SqliteDb(db) => {
                let news_events = db
                    .select_many_news_events_public(category, featured, limit, skip)
                    .await?;
                let mut news_events_data = Vec::with_capacity(news_events.len());
                for news_event in &news_events {
                    news_events_data.push(Self::from_sqlitedb_model(news_event));
                }
                Ok(news_events_data)
            }
        }
    }

    pub async fn db_count_public(
        db: &Db,
        category: &Option<String>,
        featured: &Option<bool>,
    ) -> Result<i64> {
        match db {
            Db::PostgresqlDb(db) => db.count_news_events_public(category, featured).await,
            Db::SqliteDb(db) => db.count_news_events_public(category, featured).await,
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_news_event(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_news_event(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_news_event(id).await,
            Db::SqliteDb(db) => db.delete_news_event(id).await,
        }
    }

    fn from_postgresdb_model(model: &NewsEventPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            title: model.title().to_owned(),
            excerpt: model.excerpt().to_owned(),
            content: model.content().to_owned(),
            image_url: model.image_url().to_owned(),
            category: model.category().to_owned(),
            author: model.author().to_owned(),
            publish_date: *model.publish_date(),
            event_date: *model.event_date(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_postgresdb_model(&self) -> NewsEventPostgresModel {
        NewsEventPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.title,
            &self.excerpt,
            &self.content,
            &self.image_url,
            &self.category,
            &self.author,
            &self.publish_date,
            &self.event_date,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }

    fn from_sqlitedb_model(model: &NewsEventSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            title: model.title().to_owned(),
            excerpt: model.excerpt().to_owned(),
            content: model.content().to_owned(),
            image_url: model.image_url().to_owned(),
            category: model.category().to_owned(),
            author: model.author().to_owned(),
            publish_date: *model.publish_date(),
            event_date: *model.event_date(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_sqlitedb_model(&self) -> NewsEventSqliteModel {
        NewsEventSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.title,
            &self.excerpt,
            &self.content,
            &self.image_url,
            &self.category,
            &self.author,
            &self.publish_date,
            &self.event_date,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }
}
