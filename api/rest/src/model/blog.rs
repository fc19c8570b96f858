use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize)]
pub struct FindManyBlogReqQuery {
    category: Option<String>,
    featured: Option<bool>,
    limit: Option<i64>,
    skip: Option<i64>,
}

impl FindManyBlogReqQuery {
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

#[derive(Deserialize)]
pub struct FindOneBlogReqPath {
    blog_id: Uuid,
}

impl FindOneBlogReqPath {
    pub fn blog_id(&self) -> &Uuid {
        &self.blog_id
    }
}

#[derive(Deserialize)]
pub struct FindOneBlogBySlugReqPath {
    slug: String,
}

impl FindOneBlogBySlugReqPath {
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

#[derive(Deserialize, Validate)]
pub struct InsertOneBlogReqJson {
    #[validate(length(min = 1, message = "title must not be empty"))]
    title: String,
    #[validate(length(min = 1, message = "slug must not be empty"))]
    slug: String,
    excerpt: String,
    #[validate(length(min = 1, message = "content must not be empty"))]
    content: String,
    featured_image: String,
    #[validate(length(min = 1, message = "category must not be empty"))]
    category: String,
    author: String,
    #[serde(default)]
    tags: Vec<String>,
    meta_title: Option<String>,
    meta_description: Option<String>,
    meta_keywords: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default = "default_display_order")]
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: i32,
    #[serde(default = "default_active")]
    active: bool,
}

impl InsertOneBlogReqJson {
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

    pub fn tags(&self) -> &Vec<String> {
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

#[derive(Deserialize)]
pub struct UpdateOneBlogReqPath {
    blog_id: Uuid,
}

impl UpdateOneBlogReqPath {
    pub fn blog_id(&self) -> &Uuid {
        &self.blog_id
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOneBlogReqJson {
    title: Option<String>,
    slug: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    featured_image: Option<String>,
    category: Option<String>,
    author: Option<String>,
    tags: Option<Vec<String>>,
    meta_title: Option<String>,
    meta_description: Option<String>,
    meta_keywords: Option<String>,
    featured: Option<bool>,
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: Option<i32>,
    active: Option<bool>,
}

impl UpdateOneBlogReqJson {
    pub fn title(&self) -> &Option<String> {
        &self.title
    }

    pub fn slug(&self) -> &Option<String> {
        &self.slug
    }

    pub fn excerpt(&self) -> &Option<String> {
        &self.excerpt
    }

    pub fn content(&self) -> &Option<String> {
        &self.content
    }

    pub fn featured_image(&self) -> &Option<String> {
        &self.featured_image
    }

    pub fn category(&self) -> &Option<String> {
        &self.category
    }

    pub fn author(&self) -> &Option<String> {
        &self.author
    }

    pub fn tags(&self) -> &Option<Vec<String>> {
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
            && self.slug.is_none()
            && self.excerpt.is_none()
            && self.content.is_none()
            && self.featured_image.is_none()
            && self.category.is_none()
            && self.author.is_none()
            && self.tags.is_none()
            && self.meta_title.is_none()
            && self.meta_description.is_none()
            && self.meta_keywords.is_none()
            && self.featured.is_none()
            && self.display_order.is_none()
            && self.active.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOneBlogReqPath {
    blog_id: Uuid,
}

impl DeleteOneBlogReqPath {
    pub fn blog_id(&self) -> &Uuid {
        &self.blog_id
    }
}

#[derive(Serialize)]
pub struct BlogResJson {
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
    tags: Vec<String>,
    meta_title: Option<String>,
    meta_description: Option<String>,
    meta_keywords: Option<String>,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl BlogResJson {
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
            tags: tags.to_vec(),
            meta_title: meta_title.to_owned(),
            meta_description: meta_description.to_owned(),
            meta_keywords: meta_keywords.to_owned(),
            featured: *featured,
            display_order: *display_order,
            active: *active,
        }
    }
}

#[derive(Serialize)]
pub struct DeleteBlogResJson {
    id: Uuid,
}

impl DeleteBlogResJson {
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
