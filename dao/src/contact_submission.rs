use std::str::FromStr;

use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::contact_submission::ContactSubmissionModel as ContactSubmissionPostgresModel;
use eb_db_sqlite::model::contact_submission::ContactSubmissionModel as ContactSubmissionSqliteModel;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

use crate::Db;

pub struct ContactSubmissionDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: String,
    email: String,
    phone: String,
    property_interest: Option<String>,
    visit_date: Option<String>,
    message: String,
    status: SubmissionStatus,
}

impl ContactSubmissionDao {
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        property_interest: &Option<String>,
        visit_date: &Option<String>,
        message: &str,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            property_interest: property_interest.to_owned(),
            visit_date: visit_date.to_owned(),
            message: message.to_owned(),
            status: SubmissionStatus::New,
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

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn property_interest(&self) -> &Option<String> {
        &self.property_interest
    }

    pub fn visit_date(&self) -> &Option<String> {
        &self.visit_date
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn set_status(&mut self, status: &SubmissionStatus) {
        self.status = *status;
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => {
                db.insert_contact_submission(&self.to_postgresdb_model())
                    .await
            }
            Db::SqliteDb(db) => db.insert_contact_submission(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => {
                Self::from_postgresdb_model(&db.select_contact_submission(id).await?)
            }
            Db::SqliteDb(db) => Self::from_sqlitedb_model(&db.select_contact_submission(id).await?),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let submissions = db.select_many_contact_submissions().await?;
                let mut submissions_data = Vec::with_capacity(submissions.len());
                for submission in &submissions {
                    submissions_data.push(Self::from_postgresdb_model(submission)?);
                }
                Ok(submissions_data)
            }
            Db::SqliteDb(db) => {
                let submissions = db.select_many_contact_submissions().await?;
                let mut submissions_data = Vec::with_capacity(submissions.len());
                for submission in &submissions {
                    submissions_data.push(Self::from_sqlitedb_model(submission)?);
                }
                Ok(submissions_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => {
                db.update_contact_submission(&self.to_postgresdb_model())
                    .await
            }
            Db::SqliteDb(db) => db.update_contact_submission(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_contact_submission(id).await,
            Db::SqliteDb(db) => db.delete_contact_submission(id).await,
        }
    }

    fn from_postgresdb_model(model: &ContactSubmissionPostgresModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            name: model.name().to_owned(),
            email: model.email().to_owned(),
            phone: model.phone().to_owned(),
            property_interest: model.property_interest().to_owned(),
            visit_date: model.visit_date().to_owned(),
            message: model.message().to_owned(),
            status: SubmissionStatus::from_str(model.status())?,
        })
    }

    fn to_postgresdb_model(&self) -> ContactSubmissionPostgresModel {
        ContactSubmissionPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.name,
            &self.email,
            &self.phone,
            &self.property_interest,
            &self.visit_date,
            &self.message,
            &self.status.to_string(),
        )
    }

    fn from_sqlitedb_model(model: &ContactSubmissionSqliteModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            name: model.name().to_owned(),
            email: model.email().to_owned(),
            phone: model.phone().to_owned(),
            property_interest: model.property_interest().to_owned(),
            visit_date: model.visit_date().to_owned(),
            message: model.message().to_owned(),
            status: SubmissionStatus::from_str(model.status())?,
        })
    }

    fn to_sqlitedb_model(&self) -> ContactSubmissionSqliteModel {
        ContactSubmissionSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.name,
            &self.email,
            &self.phone,
            &self.property_interest,
            &self.visit_date,
            &self.message,
            &self.status.to_string(),
        )
    }
}

#[derive(Deserialize, Serialize, EnumString, Display, PartialEq, Eq, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionStatus {
    New,
    Contacted,
    Closed,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::SubmissionStatus;

    #[test]
    fn parse_known_statuses() {
        assert_eq!(
            SubmissionStatus::from_str("new").unwrap(),
            SubmissionStatus::New
        );
        assert_eq!(
            SubmissionStatus::from_str("contacted").unwrap(),
            SubmissionStatus::Contacted
        );
        assert_eq!(
            SubmissionStatus::from_str("closed").unwrap(),
            SubmissionStatus::Closed
        );
    }

    #[test]
    fn reject_unknown_status() {
        assert!(SubmissionStatus::from_str("archived").is_err());
        assert!(SubmissionStatus::from_str("").is_err());
    }

    #[test]
    fn display_lowercase() {
        assert_eq!(SubmissionStatus::New.to_string(), "new");
        assert_eq!(SubmissionStatus::Contacted.to_string(), "contacted");
        assert_eq!(SubmissionStatus::Closed.to_string(), "closed");
    }
}
