use sqlx::{
    types::{
        chrono::{DateTime, Utc},
        Json,
    },
    FromRow,
};
use uuid::Uuid;

#[derive(FromRow)]
pub struct PlotModel {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    plot_name: String,
    location: String,
    plot_area: String,
    price_range: String,
    property_type: String,
    description: String,
    main_image: String,
    gallery_images: Json<Vec<String>>,
    youtube_link: Option<String>,
    status: String,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl PlotModel {
    pub fn new(
        id: &Uuid,
        created_at: &DateTime<Utc>,
        updated_at: &DateTime<Utc>,
        plot_name: &str,
        location: &str,
        plot_area: &str,
        price_range: &str,
        property_type: &str,
        description: &str,
        main_image: &str,
        gallery_images: &[String],
        youtube_link: &Option<String>,
        status: &str,
        featured: &bool,
        display_order: &i32,
        active: &bool,
    ) -> Self {
        Self {
            id: *id,
            created_at: *created_at,
            updated_at: *updated_at,
            plot_name: plot_name.to_owned(),
            location: location.to_owned(),
            plot_area: plot_area.to_owned(),
            price_range: price_range.to_owned(),
            property_type: property_type.to_owned(),
            description: description.to_owned(),
            main_image: main_image.to_owned(),
            gallery_images: Json(gallery_images.to_vec()),
            youtube_link: youtube_link.to_owned(),
            status: status.to_owned(),
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

    pub fn plot_name(&self) -> &str {
        &self.plot_name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn plot_area(&self) -> &str {
        &self.plot_area
    }

    pub fn price_range(&self) -> &str {
        &self.price_range
    }

    pub fn property_type(&self) -> &str {
        &self.property_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn main_image(&self) -> &str {
        &self.main_image
    }

    pub fn gallery_images(&self) -> &Json<Vec<String>> {
        &self.gallery_images
    }

    pub fn youtube_link(&self) -> &Option<String> {
        &self.youtube_link
    }

    pub fn status(&self) -> &str {
        &self.status
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
