use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::happy_client::HappyClientModel as HappyClientPostgresModel;
use eb_db_sqlite::model::happy_client::HappyClientModel as HappyClientSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct HappyClientDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: String,
    location: String,
    story: String,
    image_url: String,
    rating: i32,
    purchase_date: Option<String>,
    villa_number: Option<String>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl HappyClientDao {
    pub fn new(
        name: &str,
        location: &str,
        story: &str,
        image_url: &str,
        rating: &i32,
        purchase_date: &Option<String>,
        villa_number: &Option<String>,
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
            story: story.to_owned(),
            image_url: image_url.to_owned(),
            rating: *rating,
            purchase_date: purchase_date.to_owned(),
            villa_number: villa_number.to_owned(),
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

    pub fn story(&self) -> &str {
        &self.story
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn rating(&self) -> &i32 {
        &self.rating
    }

    pub fn purchase_date(&self) -> &Option<String> {
        &self.purchase_date
    }

    pub fn villa_number(&self) -> &Option<String> {
        &self.villa_number
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

    pub fn set_story(&mut self, story: &str) {
        self.story = story.to_owned();
    }

    pub fn set_image_url(&mut self, image_url: &str) {
        self.image_url = image_url.to_owned();
    }

    pub fn set_rating(&mut self, rating: &i32) {
        self.rating = *rating;
    }

    pub fn set_purchase_date(&mut self, purchase_date: &Option<String>) {
        self.purchase_date = purchase_date.to_owned();
    }

    pub fn set_villa_number(&mut self, villa_number: &Option<String>) {
        self.villa_number = villa_number.to_owned();
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
            Db::PostgresqlDb(db) => db.insert_happy_client(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_happy_client(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_happy_client(id).await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_happy_client(id).await?)),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let clients = db.select_many_happy_clients().await?;
                let mut clients_data = Vec::with_capacity(clients.len());
                for client in &clients {
                    clients_data.push(Self::from_postgresdb_model(client));
                }
                Ok(clients_data)
            }
            Db::SqliteDb(db) => {
                let clients = db.select_many_happy_clients().await?;
                let mut clients_data = Vec::with_capacity(clients.len());
                for client in &clients {
                    clients_data.push(Self::from_sqlitedb_model(client));
                }
                Ok(clients_data)
            }
        }
    }

    pub async fn db_select_many_public(db: &Db, featured: &Option<bool>) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let clients = db.select_many_happy_clients_public(featured).await?;
                let mut clients_data = Vec::with_capacity(clients.len());
                for client in &clients {
                    clients_data.push(Self::from_postgresdb_model(client));
                }
                Ok(clients_data)
            }
            Db::SqliteDb(db) => {
                let clients = db.select_many_happy_clients_public(featured).await?;
                let mut clients_data = Vec::with_capacity(clients.len());
                for client in &clients {
                    clients_data.push(Self::from_sqlitedb_model(client));
                }
                Ok(clients_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_happy_client(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_happy_client(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_happy_client(id).await,
            Db::SqliteDb(db) => db.delete_happy_client(id).await,
        }
    }

    fn from_postgresdb_model(model: &HappyClientPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            name: model.name().to_owned(),
            location: model.location().to_owned(),
            story: model.story().to_owned(),
            image_url: model.image_url().to_owned(),
            rating: *model.rating(),
            purchase_date: model.purchase_date().to_owned(),
            villa_number: model.villa_number().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_postgresdb_model(&self) -> HappyClientPostgresModel {
        HappyClientPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.name,
            &self.location,
            &self.story,
            &self.image_url,
            &self.rating,
            &self.purchase_date,
            &self.villa_number,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }

    fn from_sqlitedb_model(model: &HappyClientSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            name: model.name().to_owned(),
            location: model.location().to_owned(),
            story: model.story().to_owned(),
            image_url: model.image_url().to_owned(),
            rating: *model.rating(),
            purchase_date: model.purchase_date().to_owned(),
            villa_number: model.villa_number().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_sqlitedb_model(&self) -> HappyClientSqliteModel {
        HappyClientSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.name,
            &self.location,
            &self.story,
            &self.image_url,
            &self.rating,
            &self.purchase_date,
            &self.villa_number,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }
}
