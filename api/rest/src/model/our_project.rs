use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize)]
pub struct FindManyOurProjectReqQuery {
    featured: Option<bool>,
}

impl FindManyOurProjectReqQuery {
    pub fn featured(&self) -> &Option<bool> {
        &self.featured
    }
}

#[derive(Deserialize, Validate)]
pub struct InsertOneOurProjectReqJson {
    #[validate(length(min = 1, message = "project_name must not be empty"))]
    project_name: String,
    location: String,
    price_range: String,
    property_type: String,
    short_description: String,
    #[validate(length(min = 1, message = "thumbnail_image must not be empty"))]
    thumbnail_image: String,
    youtube_link: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default = "default_display_order")]
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: i32,
    #[serde(default = "default_active")]
    active: bool,
}

impl InsertOneOurProjectReqJson {
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn price_range(&self) -> &str {
        &self.price_range
    }

    pub fn property_type(&self) -> &str {
        &self.property_type
    }

    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    pub fn thumbnail_image(&self) -> &str {
        &self.thumbnail_image
    }

    pub fn youtube_link(&self) -> &Option<String> {
        &self.youtube_link
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
pub struct UpdateOneOurProjectReqPath {
    our_project_id: Uuid,
}

impl UpdateOneOurProjectReqPath {
    pub fn our_project_id(&self) -> &Uuid {
        &self.our_project_id
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOneOurProjectReqJson {
    project_name: Option<String>,
    location: Option<String>,
    price_range: Option<String>,
    property_type: Option<String>,
    short_description: Option<String>,
    thumbnail_image: Option<String>,
    youtube_link: Option<String>,
    featured: Option<bool>,
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: Option<i32>,
    active: Option<bool>,
}

impl UpdateOneOurProjectReqJson {
    pub fn project_name(&self) -> &Option<String> {
        &self.project_name
    }

    pub fn location(&self) -> &Option<String> {
        &self.location
    }

    pub fn price_range(&self) -> &Option<String> {
        &self.price_range
    }

    pub fn property_type(&self) -> &Option<String> {
        &self.property_type
    }

    pub fn short_description(&self) -> &Option<String> {
        &self.short_description
    }

    pub fn thumbnail_image(&self) -> &Option<String> {
        &self.thumbnail_image
    }

    pub fn youtube_link(&self) -> &Option<String> {
        &self.youtube_link
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
        self.project_name.is_none()
            && self.location.is_none()
            && self.price_range.is_none()
            && self.property_type.is_none()
            && self.short_description.is_none()
            && self.thumbnail_image.is_none()
            && self.youtube_link.is_none()
            && self.featured.is_none()
            && self.display_order.is_none()
            && self.active.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOneOurProjectReqPath {
    our_project_id: Uuid,
}

impl DeleteOneOurProjectReqPath {
    pub fn our_project_id(&self) -> &Uuid {
        &self.our_project_id
    }
}

#[derive(Serialize)]
pub struct OurProjectResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    project_name: String,
    location: String,
    price_range: String,
    property_type: String,
    short_description: String,
    thumbnail_image: String,
    youtube_link: Option<String>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl OurProjectResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        project_name: &str,
        location: &str,
        price_range: &str,
        property_type: &str,
        short_description: &str,
        thumbnail_image: &str,
        youtube_link: &Option<String>,
        featured: &bool,
        display_order: &i32,
        active: &bool,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            project_name: project_name.to_owned(),
            location: location.to_owned(),
            price_range: price_range.to_owned(),
            property_type: property_type.to_owned(),
            short_description: short_description.to_owned(),
            thumbnail_image: thumbnail_image.to_owned(),
            youtube_link: youtube_link.to_owned(),
            featured: *featured,
            display_order: *display_order,
            active: *active,
        }
    }
}

#[derive(Serialize)]
pub struct DeleteOurProjectResJson {
    id: Uuid,
}

impl DeleteOurProjectResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}

fn default_active() -> bool {
    true
}

fn default_display_order() -> i32 {
    1
}
