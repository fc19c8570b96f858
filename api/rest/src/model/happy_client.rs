use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize)]
pub struct FindManyHappyClientReqQuery {
    featured: Option<bool>,
}

impl FindManyHappyClientReqQuery {
    pub fn featured(&self) -> &Option<bool> {
        &self.featured
    }
}

#[derive(Deserialize, Validate)]
pub struct InsertOneHappyClientReqJson {
    #[validate(length(min = 1, message = "name must not be empty"))]
    name: String,
    location: String,
    #[validate(length(min = 1, message = "story must not be empty"))]
    story: String,
    image_url: String,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    rating: i32,
    purchase_date: Option<String>,
    villa_number: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default = "default_display_order")]
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: i32,
    #[serde(default = "default_active")]
    active: bool,
}

impl InsertOneHappyClientReqJson {
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
}

#[derive(Deserialize)]
pub struct UpdateOneHappyClientReqPath {
    happy_client_id: Uuid,
}

impl UpdateOneHappyClientReqPath {
    pub fn happy_client_id(&self) -> &Uuid {
        &self.happy_client_id
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOneHappyClientReqJson {
    name: Option<String>,
    location: Option<String>,
    story: Option<String>,
    image_url: Option<String>,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    rating: Option<i32>,
    purchase_date: Option<String>,
    villa_number: Option<String>,
    featured: Option<bool>,
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: Option<i32>,
    active: Option<bool>,
}

impl UpdateOneHappyClientReqJson {
    pub fn name(&self) -> &Option<String> {
        &self.name
    }

    pub fn location(&self) -> &Option<String> {
        &self.location
    }

    pub fn story(&self) -> &Option<String> {
        &self.story
    }

    pub fn image_url(&self) -> &Option<String> {
        &self.image_url
    }

    pub fn rating(&self) -> &Option<i32> {
        &self.rating
    }

    pub fn purchase_date(&self) -> &Option<String> {
        &self.purchase_date
    }

    pub fn villa_number(&self) -> &Option<String> {
        &self.villa_number
    }

    pub fn featured(&self) -> &Option<bool> {
        &self.featured
    }

    pub fn display_order(&self) -> &Option<i32> {
        &self.display_order
    }

    pub fn active(&self) -> &Option<bool> {
        &self.active
    }

    pub fn is_all_none(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.story.is_none()
            && self.image_url.is_none()
            && self.rating.is_none()
            && self.purchase_date.is_none()
            && self.villa_number.is_none()
            && self.featured.is_none()
            && self.display_order.is_none()
            && self.active.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOneHappyClientReqPath {
    happy_client_id: Uuid,
}

impl DeleteOneHappyClientReqPath {
    pub fn happy_client_id(&self) -> &Uuid {
        &self.happy_client_id
    }
}

#[derive(Serialize)]
pub struct HappyClientResJson {
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

impl HappyClientResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
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
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
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
}

#[derive(Serialize)]
pub struct DeleteHappyClientResJson {
    id: Uuid,
}

impl DeleteHappyClientResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}

fn default_rating() -> i32 {
    5
}

fn default_active() -> bool {
    true
}

fn default_display_order() -> i32 {
    1
}
