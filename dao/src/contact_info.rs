use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::contact_info::ContactInfoModel as ContactInfoPostgresModel;
use eb_db_sqlite::model::contact_info::ContactInfoModel as ContactInfoSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct ContactInfoDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    company_name: String,
    phone: String,
    email: String,
    whatsapp: String,
    address: String,
    map_embed_url: String,
    business_hours: String,
}

impl ContactInfoDao {
    pub fn new(
        company_name: &str,
        phone: &str,
        email: &str,
        whatsapp: &str,
        address: &str,
        map_embed_url: &str,
        business_hours: &str,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            company_name: company_name.to_owned(),
            phone: phone.to_owned(),
            email: email.to_owned(),
            whatsapp: whatsapp.to_owned(),
            address: address.to_owned(),
            map_embed_url: map_embed_url.to_owned(),
            business_hours: business_hours.to_owned(),
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

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn whatsapp(&self) -> &str {
        &self.whatsapp
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn map_embed_url(&self) -> &str {
        &self.map_embed_url
    }

    pub fn business_hours(&self) -> &str {
        &self.business_hours
    }

    pub fn set_company_name(&mut self, company_name: &str) {
        self.company_name = company_name.to_owned();
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = phone.to_owned();
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_owned();
    }

    pub fn set_whatsapp(&mut self, whatsapp: &str) {
        self.whatsapp = whatsapp.to_owned();
    }

    pub fn set_address(&mut self, address: &str) {
        self.address = address.to_owned();
    }

    pub fn set_map_embed_url(&mut self, map_embed_url: &str) {
        self.map_embed_url = map_embed_url.to_owned();
    }

    pub fn set_business_hours(&mut self, business_hours: &str) {
        self.business_hours = business_hours.to_owned();
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_contact_info(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_contact_info(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select_one(db: &Db) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_contact_info().await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_contact_info().await?)),
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_contact_info(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_contact_info(&self.to_sqlitedb_model()).await,
        }
    }

    fn from_postgresdb_model(model: &ContactInfoPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            company_name: model.company_name().to_owned(),
            phone: model.phone().to_owned(),
            email: model.email().to_owned(),
            whatsapp: model.whatsapp().to_owned(),
            address: model.address().to_owned(),
            map_embed_url: model.map_embed_url().to_owned(),
            business_hours: model.business_hours().to_owned(),
        }
    }

    fn to_postgresdb_model(&self) -> ContactInfoPostgresModel {
        ContactInfoPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.company_name,
            &self.phone,
            &self.email,
            &self.whatsapp,
            &self.address,
            &self.map_embed_url,
            &self.business_hours,
        )
    }

    fn from_sqlitedb_model(model: &ContactInfoSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            company_name: model.company_name().to_owned(),
            phone: model.phone().to_owned(),
            email: model.email().to_owned(),
            whatsapp: model.whatsapp().to_owned(),
            address: model.address().to_owned(),
            map_embed_url: model.map_embed_url().to_owned(),
            business_hours: model.business_hours().to_owned(),
        }
    }

    fn to_sqlitedb_model(&self) -> ContactInfoSqliteModel {
        ContactInfoSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.company_name,
            &self.phone,
            &self.email,
            &self.whatsapp,
            &self.address,
            &self.map_embed_url,
            &self.business_hours,
        )
    }
}
