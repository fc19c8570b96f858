use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize)]
pub struct FindManyPropertyReqQuery {
    status: Option<String>,
    facing: Option<String>,
    location: Option<String>,
    featured: Option<bool>,
    limit: Option<i64>,
    skip: Option<i64>,
}

impl FindManyPropertyReqQuery {
    pub fn status(&self) -> &Option<String> {
        &self.status
    }

    pub fn facing(&self) -> &Option<String> {
        &self.facing
    }

    pub fn location(&self) -> &Option<String> {
        &self.location
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
pub struct FindOnePropertyReqPath {
    property_id: Uuid,
}

impl FindOnePropertyReqPath {
    pub fn property_id(&self) -> &Uuid {
        &self.property_id
    }
}

#[derive(Deserialize, Validate)]
pub struct InsertOnePropertyReqJson {
    #[validate(length(min = 1, message = "villa_number must not be empty"))]
    villa_number: String,
    #[validate(length(min = 1, message = "status must not be empty"))]
    status: String,
    plot_size: i32,
    built_up_area: i32,
    facing: String,
    location: String,
    price_range: String,
    #[serde(default)]
    gallery_images: Vec<String>,
    description: String,
    #[serde(default)]
    amenities: Vec<String>,
    enquiry_link: String,
    map_link: String,
    #[serde(default)]
    featured: bool,
    #[serde(default = "default_display_order")]
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: i32,
    #[serde(default = "default_active")]
    active: bool,
}

impl InsertOnePropertyReqJson {
    pub fn villa_number(&self) -> &str {
        &self.villa_number
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn plot_size(&self) -> &i32 {
        &self.plot_size
    }

    pub fn built_up_area(&self) -> &i32 {
        &self.built_up_area
    }

    pub fn facing(&self) -> &str {
        &self.facing
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn price_range(&self) -> &str {
        &self.price_range
    }

    pub fn gallery_images(&self) -> &Vec<String> {
        &self.gallery_images
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amenities(&self) -> &Vec<String> {
        &self.amenities
    }

    pub fn enquiry_link(&self) -> &str {
        &self.enquiry_link
    }

    pub fn map_link(&self) -> &str {
        &self.map_link
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
pub struct UpdateOnePropertyReqPath {
    property_id: Uuid,
}

impl UpdateOnePropertyReqPath {
    pub fn property_id(&self) -> &Uuid {
        &self.property_id
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOnePropertyReqJson {
    villa_number: Option<String>,
    status: Option<String>,
    plot_size: Option<i32>,
    built_up_area: Option<i32>,
    facing: Option<String>,
    location: Option<String>,
    price_range: Option<String>,
    gallery_images: Option<Vec<String>>,
    description: Option<String>,
    amenities: Option<Vec<String>>,
    enquiry_link: Option<String>,
    map_link: Option<String>,
    featured: Option<bool>,
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: Option<i32>,
    active: Option<bool>,
}

impl UpdateOnePropertyReqJson {
    pub fn villa_number(&self) -> &Option<String> {
        &self.villa_number
    }

    pub fn status(&self) -> &Option<String> {
        &self.status
    }

    pub fn plot_size(&self) -> &Option<i32> {
        &self.plot_size
    }

    pub fn built_up_area(&self) -> &Option<i32> {
        &self.built_up_area
    }

    pub fn facing(&self) -> &Option<String> {
        &self.facing
    }

    pub fn location(&self) -> &Option<String> {
        &self.location
    }

    pub fn price_range(&self) -> &Option<String> {
        &self.price_range
    }

    pub fn gallery_images(&self) -> &Option<Vec<String>> {
        &self.gallery_images
    }

    pub fn description(&self) -> &Option<String> {
        &self.description
    }

    pub fn amenities(&self) -> &Option<Vec<String>> {
        &self.amenities
    }

    pub fn enquiry_link(&self) -> &Option<String> {
        &self.enquiry_link
    }

    pub fn map_link(&self) -> &Option<String> {
        &self.map_link
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
        self.villa_number.is_none()
            && self.status.is_none()
            && self.plot_size.is_none()
            && self.built_up_area.is_none()
            && self.facing.is_none()
            && self.location.is_none()
            && self.price_range.is_none()
            && self.gallery_images.is_none()
            && self.description.is_none()
            && self.amenities.is_none()
            && self.enquiry_link.is_none()
            && self.map_link.is_none()
            && self.featured.is_none()
            && self.display_order.is_none()
            && self.active.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOnePropertyReqPath {
    property_id: Uuid,
}

impl DeleteOnePropertyReqPath {
    pub fn property_id(&self) -> &Uuid {
        &self.property_id
    }
}

#[derive(Serialize)]
pub struct PropertyResJson {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    villa_number: String,
    status: String,
    plot_size: i32,
    built_up_area: i32,
    facing: String,
    location: String,
    price_range: String,
    gallery_images: Vec<String>,
    description: String,
    amenities: Vec<String>,
    enquiry_link: String,
    map_link: String,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl PropertyResJson {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        villa_number: &str,
        status: &str,
        plot_size: &i32,
        built_up_area: &i32,
        facing: &str,
        location: &str,
        price_range: &str,
        gallery_images: &[String],
        description: &str,
        amenities: &[String],
        enquiry_link: &str,
        map_link: &str,
        featured: &bool,
        display_order: &i32,
        active: &bool,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            villa_number: villa_number.to_owned(),
            status: status.to_owned(),
            plot_size: *plot_size,
            built_up_area: *built_up_area,
            facing: facing.to_owned(),
            location: location.to_owned(),
            price_range: price_range.to_owned(),
            gallery_images: gallery_images.to_vec(),
            description: description.to_owned(),
            amenities: amenities.to_vec(),
            enquiry_link: enquiry_link.to_owned(),
            map_link: map_link.to_owned(),
            featured: *featured,
            display_order: *display_order,
            active: *active,
        }
    }
}

#[derive(Serialize)]
pub struct DeletePropertyResJson {
    id: Uuid,
}

impl DeletePropertyResJson {
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
