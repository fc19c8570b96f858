use sqlx::{
    types::chrono::{DateTime, Utc},
    FromRow,
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct HomeBannerModel {
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

impl HomeBannerModel {
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

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

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
