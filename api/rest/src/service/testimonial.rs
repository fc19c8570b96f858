use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use eb_dao::testimonial::TestimonialDao;
use validator::Validate;

use crate::{
    context::ApiRestCtx,
    model::{
        testimonial::{
            DeleteOneTestimonialReqPath, DeleteTestimonialResJson, FindManyTestimonialReqQuery,
            InsertOneTestimonialReqJson, TestimonialResJson, UpdateOneTestimonialReqJson,
            UpdateOneTestimonialReqPath,
        },
        PaginationRes, Response,
    },
    session::AdminSession,
};

pub fn testimonial_api(cfg: &mut web::ServiceConfig) {
    cfg.route("/testimonials", web::get().to(find_many_public))
        .route("/admin/testimonials", web::get().to(find_many))
        .route("/admin/testimonials", web::post().to(insert_one))
        .route(
            "/admin/testimonials/{testimonial_id}",
            web::put().to(update_one),
        )
        .route(
            "/admin/testimonials/{testimonial_id}",
            web::delete().to(delete_one),
        );
}

async fn find_many_public(
    ctx: web::Data<ApiRestCtx>,
    query: web::Query<FindManyTestimonialReqQuery>,
) -> HttpResponse {
    let testimonials_data =
        match TestimonialDao::db_select_many_public(ctx.dao().db(), query.featured()).await {
            Ok(data) => data,
            Err(err) => {
                return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
            }
        };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &testimonials_data.len(),
            &testimonials_data.len(),
        )),
        &testimonials_data
            .iter()
            .map(|data| {
                TestimonialResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.name(),
                    data.location(),
                    data.testimonial(),
                    data.image_url(),
                    data.rating(),
                    data.featured(),
                    data.display_order(),
                    data.active(),
                )
            })
            .collect::<Vec<_>>(),
    )
}

async fn find_many(ctx: web::Data<ApiRestCtx>, auth: BearerAuth) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let testimonials_data = match TestimonialDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => {
            return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    };

    Response::data(
        &StatusCode::OK,
        &Some(PaginationRes::new(
            &testimonials_data.len(),
            &testimonials_data.len(),
        )),
        &testimonials_data
            .iter()
            .map(|data| {
                TestimonialResJson::new(
                    data.id(),
                    data.created_at(),
                    data.updated_at(),
                    data.name(),
                    data.location(),
                    data.testimonial(),
                    data.image_url(),
                    data.rating(),
                    data.featured(),
                    data.display_order(),
                    data.active(),
                )
            })
            .collect::<Vec<_>>(),
    )
}

async fn insert_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    data: web::Json<InsertOneTestimonialReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    let testimonial_data = TestimonialDao::new(
        data.name(),
        data.location(),
        data.testimonial(),
        data.image_url(),
        data.rating(),
        data.featured(),
        data.display_order(),
        data.active(),
    );

    if let Err(err) = testimonial_data.db_insert(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::CREATED,
        &None,
        &TestimonialResJson::new(
            testimonial_data.id(),
            testimonial_data.created_at(),
            testimonial_data.updated_at(),
            testimonial_data.name(),
            testimonial_data.location(),
            testimonial_data.testimonial(),
            testimonial_data.image_url(),
            testimonial_data.rating(),
            testimonial_data.featured(),
            testimonial_data.display_order(),
            testimonial_data.active(),
        ),
    )
}

async fn update_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<UpdateOneTestimonialReqPath>,
    data: web::Json<UpdateOneTestimonialReqJson>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    if let Err(err) = data.validate() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, &err.to_string());
    }

    if data.is_all_none() {
        return Response::error_raw(&StatusCode::BAD_REQUEST, "No request fields to be updated");
    }

    let mut testimonial_data =
        match TestimonialDao::db_select(ctx.dao().db(), path.testimonial_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("Testimonial", &err),
        };

    if let Some(name) = data.name() {
        testimonial_data.set_name(name);
    }

    if let Some(location) = data.location() {
        testimonial_data.set_location(location);
    }

    if let Some(testimonial) = data.testimonial() {
        testimonial_data.set_testimonial(testimonial);
    }

    if let Some(image_url) = data.image_url() {
        testimonial_data.set_image_url(image_url);
    }

    if let Some(rating) = data.rating() {
        testimonial_data.set_rating(rating);
    }

    if let Some(featured) = data.featured() {
        testimonial_data.set_featured(featured);
    }

    if let Some(display_order) = data.display_order() {
        testimonial_data.set_display_order(display_order);
    }

    if let Some(active) = data.active() {
        testimonial_data.set_active(active);
    }

    if let Err(err) = testimonial_data.db_update(ctx.dao().db()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &TestimonialResJson::new(
            testimonial_data.id(),
            testimonial_data.created_at(),
            testimonial_data.updated_at(),
            testimonial_data.name(),
            testimonial_data.location(),
            testimonial_data.testimonial(),
            testimonial_data.image_url(),
            testimonial_data.rating(),
            testimonial_data.featured(),
            testimonial_data.display_order(),
            testimonial_data.active(),
        ),
    )
}

async fn delete_one(
    ctx: web::Data<ApiRestCtx>,
    auth: BearerAuth,
    path: web::Path<DeleteOneTestimonialReqPath>,
) -> HttpResponse {
    let token = auth.token();

    if let Err(err) = AdminSession::from_bearer(&ctx, token).await {
        return Response::error(&err);
    }

    let testimonial_data =
        match TestimonialDao::db_select(ctx.dao().db(), path.testimonial_id()).await {
            Ok(data) => data,
            Err(err) => return Response::error_dao("Testimonial", &err),
        };

    if let Err(err) = TestimonialDao::db_delete(ctx.dao().db(), path.testimonial_id()).await {
        return Response::error_raw(&StatusCode::INTERNAL_SERVER_ERROR, &err.to_string());
    }

    Response::data(
        &StatusCode::OK,
        &None,
        &DeleteTestimonialResJson::new(testimonial_data.id()),
    )
}
