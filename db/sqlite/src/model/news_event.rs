use sqlx::{
    types::chrono::{DateTime, Utc},
    FromRow,
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct NewsEventModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    excerpt: String,
    content: String,
    image_url: String,
    category: String,
    author: String,
    publish_date: DateTime<Utc>,
    event_date: Option<DateTime<Utc>>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl NewsEventModel {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        title: &str,
        excerpt: &str,
        content: &str,
        image_url: &str,
        category: &str,
        author: &str,
        publish_date: &DateTime<Utc>,
        event_date: &Option<DateTime<Utc>>,
        featured: &bool,
        display_order: &i32,
        active: &bool,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            title: title.to_owned(),
            excerpt: excerpt.to_owned(),
            content: content.to_owned(),
            image_url: image_url.to_owned(),
            category: category.to_owned(),
            author: author.to_owned(),
            publish_date: *publish_date,
            event_date: *event_date,
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

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publish_date(&self) -> &DateTime<Utc> {
        &self.publish_date
    }

    pub fn event_date(&self) -> &Option<DateTime<Utc>> {
        &self.event_date
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
