use sqlx::{
    types::chrono::{DateTime, Utc},
    FromRow,
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct HappyClientModel {
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

impl HappyClientModel {
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

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

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
