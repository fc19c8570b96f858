use actix_web::web;

use crate::service::{
    amenity::amenity_api, auth::auth_api, blog::blog_api, contact_info::contact_info_api,
    contact_submission::contact_submission_api, happy_client::happy_client_api,
    home_banner::home_banner_api, news_event::news_event_api, nri_content::nri_content_api,
    our_project::our_project_api, plot::plot_api, property::property_api, root::root_api,
    testimonial::testimonial_api,
    upload::{upload_api, uploads_api},
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api).configure(uploads_api).service(
        web::scope("/api")
            .configure(auth_api)
            .configure(property_api)
            .configure(home_banner_api)
            .configure(amenity_api)
            .configure(testimonial_api)
            .configure(happy_client_api)
            .configure(news_event_api)
            .configure(nri_content_api)
            .configure(our_project_api)
            .configure(plot_api)
            .configure(blog_api)
            .configure(contact_info_api)
            .configure(contact_submission_api)
            .configure(upload_api),
    );
}
