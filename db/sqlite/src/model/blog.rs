use sqlx::{
    types::{
        chrono::{DateTime, Utc},
        Json,
    },
    FromRow,
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct BlogModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    slug: String,
    excerpt: String,
    content: String,
    featured_image: String,
    category: String,
    author: String,
    tags: Json<Vec<String>>,
    meta_title: Option<String>,
    meta_description: Option<String>,
    meta_keywords: Option<String>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl BlogModel {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        title: &str,
        slug: &str,
        excerpt: &str,
        content: &str,
        featured_image: &str,
        category: &str,
        author: &str,
        tags: &[String],
        meta_title: &Option<String>,
        meta_description: &Option<String>,
        meta_keywords: &Option<String>,
        featured: &bool,
        display_order: &i32,
        active: &bool,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            title: title.to_owned(),
            slug: slug.to_owned(),
            excerpt: excerpt.to_owned(),
            content: content.to_owned(),
            featured_image: featured_image.to_owned(),
            category: category.to_owned(),
            author: author.to_owned(),
            tags: Json(tags.to_vec()),
            meta_title: meta_title.to_owned(),
            meta_description: meta_description.to_owned(),
            meta_keywords: meta_keywords.to_owned(),
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

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn featured_image(&self) -> &str {
        &self.featured_image
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn tags(&self) -> &Json<Vec<String>> {
        &self.tags
    }

    pub fn meta_title(&self) -> &Option<String> {
        &self.meta_title
    }

    pub fn meta_description(&self) -> &Option<String> {
        &self.meta_description
    }

    pub fn meta_keywords(&self) -> &Option<String> {
        &self.meta_keywords
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
