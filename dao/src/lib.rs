use eb_db_postgresql::db::PostgresDb;
use eb_db_sqlite::db::SqliteDb;

pub mod admin;
pub mod amenity;
pub mod blog;
pub mod contact_info;
pub mod contact_submission;
pub mod happy_client;
pub mod home_banner;
pub mod news_event;
pub mod nri_content;
pub mod our_project;
pub mod plot;
pub mod property;
pub mod testimonial;

pub enum Db {
    PostgresqlDb(PostgresDb),
    SqliteDb(SqliteDb),
}
