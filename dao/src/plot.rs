use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::plot::PlotModel as PlotPostgresModel;
use eb_db_sqlite::model::plot::PlotModel as PlotSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct PlotDao {
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

impl PlotDao {
    pub fn new(
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
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
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

    pub fn set_plot_name(&mut self, plot_name: &str) {
        self.plot_name = plot_name.to_owned();
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_owned();
    }

    pub fn set_plot_area(&mut self, plot_area: &str) {
        self.plot_area = plot_area.to_owned();
    }

    pub fn set_price_range(&mut self, price_range: &str) {
        self.price_range = price_range.to_owned();
    }

    pub fn set_property_type(&mut self, property_type: &str) {
        self.property_type = property_type.to_owned();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_owned();
    }

    pub fn set_main_image(&mut self, main_image: &str) {
        self.main_image = main_image.to_owned();
    }

    pub fn set_gallery_images(&mut self, gallery_images: &[String]) {
        self.gallery_images = gallery_images.to_vec();
    }

    pub fn set_youtube_link(&mut self, youtube_link: &Option<String>) {
        self.youtube_link = youtube_link.to_owned();
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_owned();
    }

    pub fn set_featured(&mut self, featured: &bool) {
        self.featured = *featured;
    }

    pub fn set_display_order(&mut self, display_order: &i32) {
        self.display_order = *display_order;
    }

    pub fn set_active(&mut self, active: &bool) {
        self.active = *active;
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_plot(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_plot(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(&db.select_plot(id).await?)),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_plot(id).await?)),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let plots = db.select_many_plots().await?;
                let mut plots_data = Vec::with_capacity(plots.len());
                for plot in &plots {
                    plots_data.push(Self::from_postgresdb_model(plot));
                }
                Ok(plots_data)
            }
            Db::SqliteDb(db) => {
                let plots = db.select_many_plots().await?;
                let mut plots_data = Vec::with_capacity(plots.len());
                for plot in &plots {
                    plots_data.push(Self::from_sqlitedb_model(plot));
                }
                Ok(plots_data)
            }
        }
    }

    pub async fn db_select_many_public(db: &Db, status: &Option<String>) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let plots = db.select_many_plots_public(status).await?;
                let mut plots_data = Vec::with_capacity(plots.len());
                for plot in &plots {
                    plots_data.push(Self::from_postgresdb_model(plot));
                }
                Ok(plots_data)
            }
            Db::SqliteDb(db) => {
                let plots = db.select_many_plots_public(status).await?;
                let mut plots_data = Vec::with_capacity(plots.len());
                for plot in &plots {
                    plots_data.push(Self::from_sqlitedb_model(plot));
                }
                Ok(plots_data)
            }
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_plot(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_plot(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_plot(id).await,
            Db::SqliteDb(db) => db.delete_plot(id).await,
        }
    }

    fn from_postgresdb_model(model: &PlotPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            plot_name: model.plot_name().to_owned(),
            location: model.location().to_owned(),
            plot_area: model.plot_area().to_owned(),
            price_range: model.price_range().to_owned(),
            property_type: model.property_type().to_owned(),
            description: model.description().to_owned(),
            main_image: model.main_image().to_owned(),
            gallery_images: model.gallery_images().to_vec(),
            youtube_link: model.youtube_link().to_owned(),
            status: model.status().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_postgresdb_model(&self) -> PlotPostgresModel {
        PlotPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.plot_name,
            &self.location,
            &self.plot_area,
            &self.price_range,
            &self.property_type,
            &self.description,
            &self.main_image,
            &self.gallery_images,
            &self.youtube_link,
            &self.status,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }

    fn from_sqlitedb_model(model: &PlotSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            plot_name: model.plot_name().to_owned(),
            location: model.location().to_owned(),
            plot_area: model.plot_area().to_owned(),
            price_range: model.price_range().to_owned(),
            property_type: model.property_type().to_owned(),
            description: model.description().to_owned(),
            main_image: model.main_image().to_owned(),
            gallery_images: model.gallery_images().to_vec(),
            youtube_link: model.youtube_link().to_owned(),
            status: model.status().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_sqlitedb_model(&self) -> PlotSqliteModel {
        PlotSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.plot_name,
            &self.location,
            &self.plot_area,
            &self.price_range,
            &self.property_type,
            &self.description,
            &self.main_image,
            &self.gallery_images,
            &self.youtube_link,
            &self.status,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }
}
