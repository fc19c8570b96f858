use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct InsertOneHomeBannerReqJson {
    #[validate(length(min = 1, message = "title must not be empty"))]
    title: String,
    subtitle: Option<String>,
    #[validate(length(min = 1, message = "image_url must not be empty"))]
    image_url: String,
    cta_text: Option<String>,
    cta_link: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default = "default_display_order")]
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: i32,
    #[serde(default = "default_active")]
    active: bool,
}

impl InsertOneHomeBannerReqJson {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &Option<String> {
        &self.subtitle
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn cta_text(&self) -> &Option<String> {
        &self.cta_text
    }

    pub fn cta_link(&self) -> &Option<String> {
        &self.cta_link
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
pub struct UpdateOneHomeBannerReqPath {
    home_banner_id: Uuid,
}

impl UpdateOneHomeBannerReqPath {
    pub fn home_banner_id(&self) -> &Uuid {
        &self.home_banner_id
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOneHomeBannerReqJson {
    title: Option<String>,
    subtitle: Option<String>,
    image_url: Option<String>,
    cta_text: Option<String>,
    cta_link: Option<String>,
    featured: Option<bool>,
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: Option<i32>,
    active: Option<bool>,
}

impl UpdateOneHomeBannerReqJson {
    pub fn title(&self) -> &Option<String> {
        &self.title
    }

    pub fn subtitle(&self) -> &Option<String> {
        &self.subtitle
    }

    pub fn image_url(&self) -> &Option<String> {
        &self.image_url
    }

    pub fn cta_text(&self) -> &Option<String> {
        &self.cta_text
    }

    pub fn cta_link(&self) -> &Option<String> {
        &self.cta_link
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
            && self.subtitle.is_none()
            && self.image_url.is_none()
            && self.cta_text.is_none()
            && self.cta_link.is_none()
            && self.featured.is_none()
            && self.display_order.is_none()
            && self.active.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOneHomeBannerReqPath {
    home_banner_id: Uuid,
}

impl DeleteOneHomeBannerReqPath {
    pub fn home_banner_id(&self) -> &Uuid {
        &self.home_banner_id
    }
}

#[derive(Serialize)]
pub struct HomeBannerResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    subtitle: Option<String>,
    image_url: String,
    cta_text: Option<String>,
    cta_link: Option<String>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl HomeBannerResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        title: &str,
        subtitle: &Option<String>,
        image_url: &str,
        cta_text: &Option<String>,
        cta_link: &Option<String>,
        featured: &bool,
        display_order: &i32,
        active: &bool,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
            image_url: image_url.to_owned(),
            cta_text: cta_text.to_owned(),
            cta_link: cta_link.to_owned(),
            featured: *featured,
            display_order: *display_order,
            active: *active,
        }
    }
}

#[derive(Serialize)]
pub struct DeleteHomeBannerResJson {
    id: Uuid,
}

impl DeleteHomeBannerResJson {
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
