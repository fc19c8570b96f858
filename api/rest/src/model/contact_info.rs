use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct UpdateContactInfoReqJson {
    #[validate(length(min = 1, message = "company_name must not be empty"))]
    company_name: String,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    phone: String,
    #[validate(email(message = "email must be a valid email address"))]
    email: String,
    whatsapp: String,
    address: String,
    map_embed_url: String,
    business_hours: String,
}

impl UpdateContactInfoReqJson {
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
}

#[derive(Serialize)]
pub struct ContactInfoResJson {
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

impl ContactInfoResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        company_name: &str,
        phone: &str,
        email: &str,
        whatsapp: &str,
        address: &str,
        map_embed_url: &str,
        business_hours: &str,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            company_name: company_name.to_owned(),
            phone: phone.to_owned(),
            email: email.to_owned(),
            whatsapp: whatsapp.to_owned(),
            address: address.to_owned(),
            map_embed_url: map_embed_url.to_owned(),
            business_hours: business_hours.to_owned(),
        }
    }
}
