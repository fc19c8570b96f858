use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize)]
pub struct FindManyNriContentReqQuery {
    section: Option<String>,
}

impl FindManyNriContentReqQuery {
    pub fn section(&self) -> &Option<String> {
        &self.section
    }
}

#[derive(Deserialize, Validate)]
pub struct InsertOneNriContentReqJson {
    #[validate(length(min = 1, message = "section_name must not be empty"))]
    section_name: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    title: String,
    content: String,
    icon_name: Option<String>,
    image_url: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default = "default_display_order")]
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: i32,
    #[serde(default = "default_active")]
    active: bool,
}

impl InsertOneNriContentReqJson {
    pub fn section_name(&self) -> &str {
        &self.section_name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn icon_name(&self) -> &Option<String> {
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
pub struct UpdateOneNriContentReqPath {
    nri_content_id: Uuid,
}

impl UpdateOneNriContentReqPath {
    pub fn nri_content_id(&self) -> &Uuid {
        &self.nri_content_id
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOneNriContentReqJson {
    section_name: Option<String>,
    title: Option<String>,
    content: Option<String>,
    icon_name: Option<String>,
    image_url: Option<String>,
    featured: Option<bool>,
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: Option<i32>,
    active: Option<bool>,
}

impl UpdateOneNriContentReqJson {
    pub fn section_name(&self) -> &Option<String> {
        &self.section_name
    }

    pub fn title(&self) -> &Option<String> {
        &self.title
    }

    pub fn content(&self) -> &Option<String> {
        &self.content
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
        self.section_name.is_none()
            && self.title.is_none()
            && self.content.is_none()
            && self.icon_name.is_none()
            && self.image_url.is_none()
            && self.featured.is_none()
            && self.display_order.is_none()
            && self.active.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOneNriContentReqPath {
    nri_content_id: Uuid,
}

impl DeleteOneNriContentReqPath {
    pub fn nri_content_id(&self) -> &Uuid {
        &self.nri_content_id
    }
}

#[derive(Serialize)]
pub struct NriContentResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    section_name: String,
    title: String,
    content: String,
    icon_name: Option<String>,
    image_url: Option<String>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl NriContentResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        section_name: &str,
        title: &str,
        content: &str,
        icon_name: &Option<String>,
        image_url: &Option<String>,
        featured: &bool,
        display_order: &i32,
        active: &bool,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            section_name: section_name.to_owned(),
            title: title.to_owned(),
            content: content.to_owned(),
            icon_name: icon_name.to_owned(),
            image_url: image_url.to_owned(),
            featured: *featured,
            display_order: *display_order,
            active: *active,
        }
    }
}

#[derive(Serialize)]
pub struct DeleteNriContentResJson {
    id: Uuid,
}

impl DeleteNriContentResJson {
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
