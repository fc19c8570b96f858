use sqlx::{
    types::chrono::{DateTime, Utc},
    FromRow,
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct ContactSubmissionModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: String,
    email: String,
    phone: String,
    property_interest: Option<String>,
    visit_date: Option<String>,
    message: String,
    status: String,
}

impl ContactSubmissionModel {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        name: &str,
        email: &str,
        phone: &str,
        property_interest: &Option<String>,
        visit_date: &Option<String>,
        message: &str,
        status: &str,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            name: name.to_owned(),
            email: email.to_owned(),
            phone: phone.to_owned(),
            property_interest: property_interest.to_owned(),
            visit_date: visit_date.to_owned(),
            message: message.to_owned(),
            status: status.to_owned(),
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

    pub fn status(&self) -> &str {
        &self.status
    }
}
