use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize)]
pub struct FindManyPlotReqQuery {
    status: Option<String>,
}

impl FindManyPlotReqQuery {
    pub fn status(&self) -> &Option<String> {
        &self.status
    }
}

#[derive(Deserialize)]
pub struct FindOnePlotReqPath {
    plot_id: Uuid,
}

impl FindOnePlotReqPath {
    pub fn plot_id(&self) -> &Uuid {
        &self.plot_id
    }
}

#[derive(Deserialize, Validate)]
pub struct InsertOnePlotReqJson {
    #[validate(length(min = 1, message = "plot_name must not be empty"))]
    plot_name: String,
    location: String,
    plot_area: String,
    price_range: String,
    property_type: String,
    description: String,
    #[validate(length(min = 1, message = "main_image must not be empty"))]
    main_image: String,
    #[serde(default)]
    gallery_images: Vec<String>,
    youtube_link: Option<String>,
    #[validate(length(min = 1, message = "status must not be empty"))]
    status: String,
    #[serde(default)]
    featured: bool,
    #[serde(default = "default_display_order")]
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: i32,
    #[serde(default = "default_active")]
    active: bool,
}

impl InsertOnePlotReqJson {
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

    pub fn gallery_images(&self) -> &Vec<String> {
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

#[derive(Deserialize)]
pub struct UpdateOnePlotReqPath {
    plot_id: Uuid,
}

impl UpdateOnePlotReqPath {
    pub fn plot_id(&self) -> &Uuid {
        &self.plot_id
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateOnePlotReqJson {
    plot_name: Option<String>,
    location: Option<String>,
    plot_area: Option<String>,
    price_range: Option<String>,
    property_type: Option<String>,
    description: Option<String>,
    main_image: Option<String>,
    gallery_images: Option<Vec<String>>,
    youtube_link: Option<String>,
    status: Option<String>,
    featured: Option<bool>,
    #[validate(range(min = 1, message = "display_order must be positive"))]
    display_order: Option<i32>,
    active: Option<bool>,
}

impl UpdateOnePlotReqJson {
    pub fn plot_name(&self) -> &Option<String> {
        &self.plot_name
    }

    pub fn location(&self) -> &Option<String> {
        &self.location
    }

    pub fn plot_area(&self) -> &Option<String> {
        &self.plot_area
    }

    pub fn price_range(&self) -> &Option<String> {
        &self.price_range
    }

    pub fn property_type(&self) -> &Option<String> {
        &self.property_type
    }

    pub fn description(&self) -> &Option<String> {
        &self.description
    }

    pub fn main_image(&self) -> &Option<String> {
        &self.main_image
    }

    pub fn gallery_images(&self) -> &Option<Vec<String>> {
        &self.gallery_images
    }

    pub fn youtube_link(&self) -> &Option<String> {
        &self.youtube_link
    }

    pub fn status(&self) -> &Option<String> {
        &self.status
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
        self.plot_name.is_none()
            && self.location.is_none()
            && self.plot_area.is_none()
            && self.price_range.is_none()
            && self.property_type.is_none()
            && self.description.is_none()
            && self.main_image.is_none()
            && self.gallery_images.is_none()
            && self.youtube_link.is_none()
            && self.status.is_none()
            && self.featured.is_none()
            && self.display_order.is_none()
            && self.active.is_none()
    }
}

#[derive(Deserialize)]
pub struct DeleteOnePlotReqPath {
    plot_id: Uuid,
}

impl DeleteOnePlotReqPath {
    pub fn plot_id(&self) -> &Uuid {
        &self.plot_id
    }
}

#[derive(Serialize)]
pub struct PlotResJson {
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
    gallery_images: Vec<String>,
    youtube_link: Option<String>,
    status: String,
    featured: bool,
    display_order: i32,
    active: bool,
}

impl PlotResJson {
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
            gallery_images: gallery_images.to_vec(),
            youtube_link: youtube_link.to_owned(),
            status: status.to_owned(),
            featured: *featured,
            display_order: *display_order,
            active: *active,
        }
    }
}

#[derive(Serialize)]
pub struct DeletePlotResJson {
    id: Uuid,
}

impl DeletePlotResJson {
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
