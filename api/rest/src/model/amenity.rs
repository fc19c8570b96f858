use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct InsertOneAmenityReqJson {
    #[validate(length(min = 1, message = "title must not be empty"))]
    title: String,
    description: String,
    #[validate(length(min = 1, message = "icon_name must not be empty"))]
    icon_name: String,
    image_url: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default = "default_display_order")]
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: i32,
    #[serde(default = "default_active")]
    active: bool,
}

impl InsertOneAmenityReqJson {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon_name(&self) -> &str {
        &self.icon_name
    }

    pub fn image_url(&self) -> &Option<String> {
        &self.image_url
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
pub struct UpdateOneAmenityReqPath {
    amenity_id: Uuid,
}

impl UpdateOneAmenityReqPath {
    pub fn amenity_id(&self) -> &Uuid {
        &self.amenity_id
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOneAmenityReqJson {
    title: Option<String>,
    description: Option<String>,
    icon_name: Option<String>,
    image_url: Option<String>,
    featured: Option<bool>,
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: Option<i32>,
    active: Option<bool>,
}

impl UpdateOneAmenityReqJson {
    pub fn title(&self) -> &Option<String> {
        &self.title
    }

    pub fn description(&self) -> &Option<String> {
        &self.description
    }

    pub fn icon_name(&self) -> &Option<String> {
        &self.icon_name
    }

    pub fn image_url(&self) -> &Option<String> {
        &self.image_url
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
        self.title.is_none()
            && self.description.is_none()
            && self.icon_name.is_none()
            && self.image_url.is_none()
            && self.featured.is_none()
            && self.display_order.is_none()
            && self.active.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOneAmenityReqPath {
    amenity_id: Uuid,
}

impl DeleteOneAmenityReqPath {
    pub fn amenity_id(&self) -> &Uuid {
        &self.amenity_id
    }
}

#[derive(Serialize)]
pub struct AmenityResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    description: String,
    icon_name: String,
    image_url: Option<String>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl AmenityResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        title: &str,
        description: &str,
        icon_name: &str,
        image_url: &Option<String>,
        featured: &bool,
        display_order: &i32,
        active: &bool,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            title: title.to_owned(),
            description: description.to_owned(),
            icon_name: icon_name.to_owned(),
            image_url: image_url.to_owned(),
            featured: *featured,
            display_order: *display_order,
            active: *active,
        }
    }
}

#[derive(Serialize)]
pub struct DeleteAmenityResJson {
    id: Uuid,
}

impl DeleteAmenityResJson {
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
