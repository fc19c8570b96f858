use sqlx::{
    types::chrono::{DateTime, Utc},
    FromRow,
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct NriContentModel {
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

impl NriContentModel {
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

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

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
