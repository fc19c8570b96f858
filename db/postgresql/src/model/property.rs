use sqlx::{
    types::{
        chrono::{DateTime, Utc},
        Json,
    },
    FromRow,
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct PropertyModel {
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
    gallery_images: Json<Vec<String>>,
    description: String,
    amenities: Json<Vec<String>>,
    enquiry_link: String,
    map_link: String,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl PropertyModel {
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
            gallery_images: Json(gallery_images.to_vec()),
            description: description.to_owned(),
            amenities: Json(amenities.to_vec()),
            enquiry_link: enquiry_link.to_owned(),
            map_link: map_link.to_owned(),
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

    pub fn gallery_images(&self) -> &Json<Vec<String>> {
        &self.gallery_images
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amenities(&self) -> &Json<Vec<String>> {
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
