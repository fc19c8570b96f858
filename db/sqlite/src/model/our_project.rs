use sqlx::{
    types::chrono::{DateTime, Utc},
    FromRow,
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct OurProjectModel {
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

impl OurProjectModel {
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

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

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
