pub mod amenity;
pub mod auth;
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
pub mod root;
pub mod testimonial;
pub mod upload;
