use chrono::{DateTime, Utc};
use eb_dao::contact_submission::SubmissionStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct InsertOneContactSubmissionReqJson {
    #[validate(length(min = 1, message = "name must not be empty"))]
    name: String,
    #[validate(email(message = "email must be a valid email address"))]
    email: String,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    phone: String,
    property_interest: Option<String>,
    visit_date: Option<String>,
    #[validate(length(min = 1, message = "message must not be empty"))]
    message: String,
}

impl InsertOneContactSubmissionReqJson {
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
}

#[derive(Deserialize)]
pub struct UpdateOneContactSubmissionReqPath {
    submission_id: Uuid,
}

impl UpdateOneContactSubmissionReqPath {
    pub fn submission_id(&self) -> &Uuid {
        &self.submission_id
    }
}

#[derive(Deserialize)]
pub struct UpdateOneContactSubmissionReqJson {
    status: SubmissionStatus,
}

impl UpdateOneContactSubmissionReqJson {
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }
}

#[derive(Deserialize)]
pub struct DeleteOneContactSubmissionReqPath {
    submission_id: Uuid,
}

impl DeleteOneContactSubmissionReqPath {
    pub fn submission_id(&self) -> &Uuid {
        &self.submission_id
    }
}

#[derive(Serialize)]
pub struct ContactFormResJson {
    success: bool,
    message: String,
    id: Uuid,
}

impl ContactFormResJson {
    pub fn new(success: &bool, message: &str, id: &Uuid) -> Self {
        Self {
            success: *success,
            message: message.to_owned(),
            id: *id,
        }
    }
}

#[derive(Serialize)]
pub struct ContactSubmissionResJson {
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

impl ContactSubmissionResJson {
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
        status: &SubmissionStatus,
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
            status: *status,
        }
    }
}

#[derive(Serialize)]
pub struct DeleteContactSubmissionResJson {
    id: Uuid,
}

impl DeleteContactSubmissionResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}
