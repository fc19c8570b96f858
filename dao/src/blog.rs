use anyhow::Result;
use chrono::{DateTime, Utc};
use eb_db_postgresql::model::blog::BlogModel as BlogPostgresModel;
use eb_db_sqlite::model::blog::BlogModel as BlogSqliteModel;
use uuid::Uuid;

use crate::Db;

pub struct BlogDao {
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

impl BlogDao {
    pub fn new(
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
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
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

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    pub fn set_slug(&mut self, slug: &str) {
        self.slug = slug.to_owned();
    }

    pub fn set_excerpt(&mut self, excerpt: &str) {
        self.excerpt = excerpt.to_owned();
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_owned();
    }

    pub fn set_featured_image(&mut self, featured_image: &str) {
        self.featured_image = featured_image.to_owned();
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_owned();
    }

    pub fn set_author(&mut self, author: &str) {
        self.author = author.to_owned();
    }

    pub fn set_tags(&mut self, tags: &[String]) {
        self.tags = tags.to_vec();
    }

    pub fn set_meta_title(&mut self, meta_title: &Option<String>) {
        self.meta_title = meta_title.to_owned();
    }

    pub fn set_meta_description(&mut self, meta_description: &Option<String>) {
        self.meta_description = meta_description.to_owned();
    }

    pub fn set_meta_keywords(&mut self, meta_keywords: &Option<String>) {
        self.meta_keywords = meta_keywords.to_owned();
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
            Db::PostgresqlDb(db) => db.insert_blog(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_blog(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(&db.select_blog(id).await?)),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(&db.select_blog(id).await?)),
        }
    }

    pub async fn db_select_by_slug(db: &Db, slug: &str) -> Result<Self> {
        match db {
            Db::PostgresqlDb(db) => Ok(Self::from_postgresdb_model(
                &db.select_blog_by_slug(slug).await?,
            )),
            Db::SqliteDb(db) => Ok(Self::from_sqlitedb_model(
                &db.select_blog_by_slug(slug).await?,
            )),
        }
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let blogs = db.select_many_blogs().await?;
                let mut blogs_data = Vec::with_capacity(blogs.len());
                for blog in &blogs {
                    blogs_data.push(Self::from_postgresdb_model(blog));
                }
                Ok(blogs_data)
            }
            Db::SqliteDb(db) => {
                let blogs = db.select_many_blogs().await?;
                let mut blogs_data = Vec::with_capacity(blogs.len());
                for blog in &blogs {
                    blogs_data.push(Self::from_sqlitedb_model(blog));
                }
                Ok(blogs_data)
            }
        }
    }

    pub async fn db_select_many_public(
        db: &Db,
        category: &Option<String>,
        featured: &Option<bool>,
        limit: &Option<i64>,
        skip: &Option<i64>,
    ) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let blogs = db
                    .select_many_blogs_public(category, featured, limit, skip)
                    .await?;
                let mut blogs_data = Vec::with_capacity(blogs.len());
                for blog in &blogs {
                    blogs_data.push(Self::from_postgresdb_model(blog));
                }
                Ok(blogs_data)
            }
            Db::SqliteDb(db) => {
                let blogs = db
                    .select_many_blogs_public(category, featured, limit, skip)
                    .await?;
                let mut blogs_data = Vec::with_capacity(blogs.len());
                for blog in &blogs {
                    blogs_data.push(Self::from_sqlitedb_model(blog));
                }
                Ok(blogs_data)
            }
        }
    }

    pub async fn db_select_categories(db: &Db) -> Result<Vec<String>> {
        match db {
            Db::PostgresqlDb(db) => db.select_blog_categories().await,
            Db::SqliteDb(db) => db.select_blog_categories().await,
        }
    }

    pub async fn db_count_public(
        db: &Db,
        category: &Option<String>,
        featured: &Option<bool>,
    ) -> Result<i64> {
        match db {
            Db::PostgresqlDb(db) => db.count_blogs_public(category, featured).await,
            Db::SqliteDb(db) => db.count_blogs_public(category, featured).await,
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_blog(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_blog(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_delete(db: &Db, id: &Uuid) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.delete_blog(id).await,
            Db::SqliteDb(db) => db.delete_blog(id).await,
        }
    }

    fn from_postgresdb_model(model: &BlogPostgresModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            title: model.title().to_owned(),
            slug: model.slug().to_owned(),
            excerpt: model.excerpt().to_owned(),
            content: model.content().to_owned(),
            featured_image: model.featured_image().to_owned(),
            category: model.category().to_owned(),
            author: model.author().to_owned(),
            tags: model.tags().to_vec(),
            meta_title: model.meta_title().to_owned(),
            meta_description: model.meta_description().to_owned(),
            meta_keywords: model.meta_keywords().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_postgresdb_model(&self) -> BlogPostgresModel {
        BlogPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.title,
            &self.slug,
            &self.excerpt,
            &self.content,
            &self.featured_image,
            &self.category,
            &self.author,
            &self.tags,
            &self.meta_title,
            &self.meta_description,
            &self.meta_keywords,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }

    fn from_sqlitedb_model(model: &BlogSqliteModel) -> Self {
        Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            title: model.title().to_owned(),
            slug: model.slug().to_owned(),
            excerpt: model.excerpt().to_owned(),
            content: model.content().to_owned(),
            featured_image: model.featured_image().to_owned(),
            category: model.category().to_owned(),
            author: model.author().to_owned(),
            tags: model.tags().to_vec(),
            meta_title: model.meta_title().to_owned(),
            meta_description: model.meta_description().to_owned(),
            meta_keywords: model.meta_keywords().to_owned(),
            featured: *model.featured(),
            display_order: *model.display_order(),
            active: *model.active(),
        }
    }

    fn to_sqlitedb_model(&self) -> BlogSqliteModel {
        BlogSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.title,
            &self.slug,
            &self.excerpt,
            &self.content,
            &self.featured_image,
            &self.category,
            &self.author,
            &self.tags,
            &self.meta_title,
            &self.meta_description,
            &self.meta_keywords,
            &self.featured,
            &self.display_order,
            &self.active,
        )
    }
}
