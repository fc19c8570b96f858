use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize)]
pub struct FindManyTestimonialReqQuery {
    featured: Option<bool>,
}

impl FindManyTestimonialReqQuery {
    pub fn featured(&self) -> &Option<bool> {
        &self.featured
    }
}

#[derive(Deserialize, Validate)]
pub struct InsertOneTestimonialReqJson {
    #[validate(length(min = 1, message = "name must not be empty"))]
    name: String,
    location: String,
    #[validate(length(min = 1, message = "testimonial must not be empty"))]
    testimonial: String,
    image_url: String,
    #[serde(default = "default_rating")]
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    rating: i32,
    #[serde(default)]
    featured: bool,
    #[serde(default = "default_display_order")]
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: i32,
    #[serde(default = "default_active")]
    active: bool,
}

impl InsertOneTestimonialReqJson {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn testimonial(&self) -> &str {
        &self.testimonial
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn rating(&self) -> &i32 {
        &self.rating
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
pub struct UpdateOneTestimonialReqPath {
    testimonial_id: Uuid,
}

impl UpdateOneTestimonialReqPath {
    pub fn testimonial_id(&self) -> &Uuid {
        &self.testimonial_id
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOneTestimonialReqJson {
    name: Option<String>,
    location: Option<String>,
    testimonial: Option<String>,
    image_url: Option<String>,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    rating: Option<i32>,
    featured: Option<bool>,
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: Option<i32>,
    active: Option<bool>,
}

impl UpdateOneTestimonialReqJson {
    pub fn name(&self) -> &Option<String> {
        &self.name
    }

    pub fn location(&self) -> &Option<String> {
        &self.location
    }

    pub fn testimonial(&self) -> &Option<String> {
        &self.testimonial
    }

    pub fn image_url(&self) -> &Option<String> {
        &self.image_url
    }

    pub fn rating(&self) -> &Option<i32> {
        &self.rating
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
        self.name.is_none()
            && self.location.is_none()
            && self.testimonial.is_none()
            && self.image_url.is_none()
            && self.rating.is_none()
            && self.featured.is_none()
            && self.display_order.is_none()
            && self.active.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOneTestimonialReqPath {
    testimonial_id: Uuid,
}

impl DeleteOneTestimonialReqPath {
    pub fn testimonial_id(&self) -> &Uuid {
        &self.testimonial_id
    }
}

#[derive(Serialize)]
pub struct TestimonialResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    name: String,
    location: String,
    testimonial: String,
    image_url: String,
    rating: i32,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl TestimonialResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        name: &str,
        location: &str,
        testimonial: &str,
        image_url: &str,
        rating: &i32,
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
            testimonial: testimonial.to_owned(),
            image_url: image_url.to_owned(),
            rating: *rating,
            featured: *featured,
            display_order: *display_order,
            active: *active,
        }
    }
}

#[derive(Serialize)]
pub struct DeleteTestimonialResJson {
    id: Uuid,
}

impl DeleteTestimonialResJson {
    pub fn new(id: &Uuid) -> Self {
        Self { id: *id }
    }
}

fn default_rating() -> i32 {
    5
}

fn default_active() -> bool {
    true
}

fn default_display_order() -> i32 {
    1
}
