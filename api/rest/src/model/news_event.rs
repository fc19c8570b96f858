use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize)]
pub struct FindManyNewsEventReqQuery {
    category: Option<String>,
    featured: Option<bool>,
    limit: Option<i64>,
    skip: Option<i64>,
}

impl FindManyNewsEventReqQuery {
    pub fn category(&self) -> &Option<String> {
        &self.category
    }

    pub fn featured(&self) -> &Option<bool> {
        &self.featured
    }

    pub fn limit(&self) -> &Option<i64> {
        &self.limit
    }

    pub fn skip(&self) -> &Option<i64> {
        &self.skip
    }
}

#[derive(Deserialize, Validate)]
pub struct InsertOneNewsEventReqJson {
    #[validate(length(min = 1, message = "title must not be empty"))]
    title: String,
    excerpt: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    content: String,
    image_url: String,
    #[validate(length(min = 1, message = "category must not be empty"))]
    category: String,
    author: String,
    publish_date: Option<DateTime<Utc>>,
    event_date: Option<DateTime<Utc>>,
    #[serde(default)]
    featured: bool,
    #[serde(default = "default_display_order")]
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: i32,
    #[serde(default = "default_active")]
    active: bool,
}

impl InsertOneNewsEventReqJson {
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

    pub fn publish_date(&self) -> &Option<DateTime<Utc>> {
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

#[derive(Deserialize)]
pub struct UpdateOneNewsEventReqPath {
    news_event_id: Uuid,
}

impl UpdateOneNewsEventReqPath {
    pub fn news_event_id(&self) -> &Uuid {
        &self.news_event_id
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOneNewsEventReqJson {
    title: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    image_url: Option<String>,
    category: Option<String>,
    author: Option<String>,
    publish_date: Option<DateTime<Utc>>,
    event_date: Option<DateTime<Utc>>,
    featured: Option<bool>,
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: Option<i32>,
    active: Option<bool>,
}

impl UpdateOneNewsEventReqJson {
    pub fn title(&self) -> &Option<String> {
        &self.title
    }

    pub fn excerpt(&self) -> &Option<String> {
        &self.excerpt
    }

    pub fn content(&self) -> &Option<String> {
        &self.content
    }

    pub fn image_url(&self) -> &Option<String> {
        &self.image_url
    }

    pub fn category(&self) -> &Option<String> {
        &self.category
    }

    pub fn author(&self) -> &Option<String> {
        &self.author
    }

    pub fn publish_date(&self) -> &Option<DateTime<Utc>> {
        &self.publish_date
    }

    pub fn event_date(&self) -> &Option<DateTime<Utc>> {
        &self.event_date
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
            && self.excerpt.is_none()
            && self.content.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
            && self.author.is_none()
            && self.publish_date.is_none()
            && self.event_date.is_none()
            && self.featured.is_none()
            && self.display_order.is_none()
            && self.active.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOneNewsEventReqPath {
    news_event_id: Uuid,
}

impl DeleteOneNewsEventReqPath {
    pub fn news_event_id(&self) -> &Uuid {
        &self.news_event_id
    }
}

#[derive(Serialize)]
pub struct NewsEventResJson {
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

impl NewsEventResJson {
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
}

#[derive(Serialize)]
pub struct DeleteNewsEventResJson {
    id: Uuid,
}

impl DeleteNewsEventResJson {
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
